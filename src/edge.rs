//! Dense numbering of the edges of the complete graph
//! on `n` vertices and the adjacency between these edges.
//!
//! Edges are ordered by their smaller endpoint first and by
//! their larger endpoint second, i.e. for n = 4:
//! `0-1, 0-2, 0-3, 1-2, 1-3, 2-3`.
use custom_debug_derive::Debug;

use crate::graph::{EdgeIndex, EdgeSet, VertexIndex};

/// Number of edges of the complete graph on `vertices` vertices.
pub const fn number_of_edges(vertices: usize) -> usize {
    vertices * vertices.saturating_sub(1) / 2
}

fn triangular(k: usize) -> usize {
    k * (k + 1) / 2
}

fn isqrt(x: usize) -> usize {
    let mut root = (x as f64).sqrt() as usize;
    while root * root > x {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= x {
        root += 1;
    }
    root
}

/// Index of the edge `u -- v` among the edges of the complete graph on `n` vertices.
pub fn index(n: usize, u: VertexIndex, v: VertexIndex) -> EdgeIndex {
    debug_assert!(u != v, "Self loops have no index");
    let (min, max) = if u < v {
        (u as usize, v as usize)
    } else {
        (v as usize, u as usize)
    };
    (min * n - triangular(min) + max - min - 1) as EdgeIndex
}

/// Endpoints (smaller one first) of the edge with the given index.
pub fn pair(n: usize, index: EdgeIndex) -> (VertexIndex, VertexIndex) {
    debug_assert!((index as usize) < number_of_edges(n));
    // Count from the last edge backwards: the rows then have
    // the lengths 1, 2, 3, ... and start at triangular numbers.
    let reversed = number_of_edges(n) - 1 - index as usize;
    let row = (isqrt(8 * reversed + 1) - 1) / 2;
    let u = n - 2 - row;
    let v = n - 1 - (reversed - triangular(row));
    (u as VertexIndex, v as VertexIndex)
}

pub fn are_adjacent(first: (VertexIndex, VertexIndex), second: (VertexIndex, VertexIndex)) -> bool {
    first.0 == second.0 || first.0 == second.1 || first.1 == second.0 || first.1 == second.1
}

/// The edge numbering for a fixed number of vertices
/// together with the precomputed adjacency of edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeIndexer {
    vertices: usize,
    #[debug(skip)]
    pairs: Vec<(VertexIndex, VertexIndex)>,
    #[debug(skip)]
    adjacent: Vec<EdgeSet>,
}

impl EdgeIndexer {
    pub fn new(vertices: usize) -> Self {
        let number_of_edges = number_of_edges(vertices);
        let pairs = (0..number_of_edges)
            .map(|edge| pair(vertices, edge as EdgeIndex))
            .collect::<Vec<_>>();

        let adjacent = pairs
            .iter()
            .enumerate()
            .map(|(edge, endpoints)| {
                pairs
                    .iter()
                    .enumerate()
                    .filter(|(other, other_endpoints)| {
                        *other != edge && are_adjacent(*endpoints, **other_endpoints)
                    })
                    .fold(0, |set, (other, _)| set | (1 << other))
            })
            .collect();

        EdgeIndexer {
            vertices,
            pairs,
            adjacent,
        }
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn number_of_edges(&self) -> usize {
        self.pairs.len()
    }

    pub fn index(&self, u: VertexIndex, v: VertexIndex) -> EdgeIndex {
        index(self.vertices, u, v)
    }

    /// Table lookup of `pair`.
    pub fn pair(&self, edge: EdgeIndex) -> (VertexIndex, VertexIndex) {
        self.pairs[edge as usize]
    }

    /// Edges sharing an endpoint with `edge`, without `edge` itself.
    pub fn adjacent(&self, edge: EdgeIndex) -> EdgeSet {
        self.adjacent[edge as usize]
    }

    /// Image of every edge index under the vertex relabeling `vertex -> permutation[vertex]`.
    pub fn edge_action(&self, permutation: &[VertexIndex]) -> Vec<EdgeIndex> {
        debug_assert_eq!(permutation.len(), self.vertices);
        self.pairs
            .iter()
            .map(|(u, v)| self.index(permutation[*u as usize], permutation[*v as usize]))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::MAX_VERTICES;

    #[test]
    fn test_index_order() {
        let expected = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        for (edge, (u, v)) in expected.iter().enumerate() {
            assert_eq!(index(4, *u, *v), edge as EdgeIndex);
            assert_eq!(index(4, *v, *u), edge as EdgeIndex);
            assert_eq!(pair(4, edge as EdgeIndex), (*u, *v));
        }
    }

    #[test]
    fn test_index_bijection() {
        for n in 2..=MAX_VERTICES {
            for edge in 0..number_of_edges(n) {
                let (u, v) = pair(n, edge as EdgeIndex);
                assert!(u < v);
                assert!((v as usize) < n);
                assert_eq!(index(n, u, v) as usize, edge);
            }
            for u in 0..n as VertexIndex {
                for v in 0..n as VertexIndex {
                    if u != v {
                        let endpoints = pair(n, index(n, u, v));
                        assert!(endpoints == (u, v) || endpoints == (v, u));
                    }
                }
            }
        }
    }

    #[test]
    fn test_adjacency() {
        let indexer = EdgeIndexer::new(4);
        assert_eq!(indexer.number_of_edges(), 6);
        // 0-1 touches 0-2, 0-3, 1-2, 1-3 but not 2-3.
        assert_eq!(indexer.adjacent(0), 0b011110);
        assert_eq!(indexer.adjacent(5), 0b011110);

        for n in 2..=MAX_VERTICES {
            let indexer = EdgeIndexer::new(n);
            for edge in 0..indexer.number_of_edges() {
                let adjacent = indexer.adjacent(edge as EdgeIndex);
                assert_eq!(adjacent & (1 << edge), 0);
                // Both endpoints have n-2 further edges.
                assert_eq!(adjacent.count_ones() as usize, 2 * (n - 2));
                for other in 0..indexer.number_of_edges() {
                    let forward = adjacent & (1 << other) != 0;
                    let backward = indexer.adjacent(other as EdgeIndex) & (1 << edge) != 0;
                    assert_eq!(forward, backward);
                }
            }
        }
    }

    #[test]
    fn test_edge_action() {
        let indexer = EdgeIndexer::new(3);
        // Swap 0 and 2: 0-1 <-> 1-2 while 0-2 stays.
        assert_eq!(indexer.edge_action(&[2, 1, 0]), vec![2, 1, 0]);
        assert_eq!(indexer.edge_action(&[0, 1, 2]), vec![0, 1, 2]);
    }
}
