use custom_debug_derive::Debug;

use super::{full_edge_set, full_vertex_set, EdgeIndex, EdgeSet, TEdge, VertexSet};
use crate::{
    combinatoric::set_bits,
    debug::{edge_set_fmt, tedges_fmt},
    edge::number_of_edges,
    tables::Tables,
};

/// Temporal graph built from one matching per round.
///
/// Successors are created from a copy of their parent,
/// edges are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TGraph {
    vertices: usize,
    #[debug(with = "edge_set_fmt")]
    edges: EdgeSet,
    /// The matching added last round (every edge for the empty graph).
    #[debug(with = "edge_set_fmt")]
    max_edges: EdgeSet,
    lifetime: u8,
    /// All edges in the order they were added.
    #[debug(with = "tedges_fmt")]
    tedges: Vec<TEdge>,
}

impl TGraph {
    pub fn new(tables: &Tables) -> Self {
        TGraph {
            vertices: tables.vertices(),
            edges: 0,
            max_edges: tables.all_edges(),
            lifetime: 0,
            tedges: Vec::with_capacity(tables.number_of_edges()),
        }
    }

    /// Copy of this graph with `matching` added as the next round.
    pub fn extend(&self, matching: EdgeSet, tables: &Tables) -> Self {
        debug_assert_eq!(self.edges & matching, 0, "Edges can only be added once");
        debug_assert!(crate::matching::is_matching(matching, &tables.indexer));

        let lifetime = self.lifetime + 1;
        let mut tedges = Vec::with_capacity(tables.number_of_edges());
        tedges.extend_from_slice(&self.tedges);
        tedges.extend(set_bits(matching).map(|edge| {
            let (u, v) = tables.indexer.pair(edge as EdgeIndex);
            TEdge { u, v, t: lifetime }
        }));

        TGraph {
            vertices: self.vertices,
            edges: self.edges | matching,
            max_edges: matching,
            lifetime,
            tedges,
        }
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn edges(&self) -> EdgeSet {
        self.edges
    }

    pub fn last_matching(&self) -> EdgeSet {
        self.max_edges
    }

    pub fn lifetime(&self) -> u8 {
        self.lifetime
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.count_ones() as usize
    }

    pub fn tedges(&self) -> &[TEdge] {
        &self.tedges
    }

    /// Whether every possible edge is present.
    pub fn is_complete(&self) -> bool {
        self.edges == full_edge_set(number_of_edges(self.vertices))
    }

    /// For each vertex the set of vertices that reach it
    /// over paths with non-decreasing time stamps.
    pub fn predecessors(&self) -> Vec<VertexSet> {
        let mut predecessors = (0..self.vertices)
            .map(|vertex| 1 << vertex)
            .collect::<Vec<VertexSet>>();

        for tedge in self.tedges.iter() {
            let (u, v) = (tedge.u as usize, tedge.v as usize);
            predecessors[u] |= predecessors[v];
            predecessors[v] = predecessors[u];
        }

        predecessors
    }

    /// Whether every vertex reaches every other vertex
    /// over a time respecting path.
    pub fn is_happy(&self) -> bool {
        let all_vertices = full_vertex_set(self.vertices);
        self.predecessors()
            .into_iter()
            .all(|predecessors| predecessors == all_vertices)
    }
}

/// Edges that may be added in the next round together with the
/// maximal size of the next matching. `None` if there is no such edge.
///
/// The candidates are the missing edges adjacent to the last matching,
/// the size is bounded by twice the size of the last matching.
pub fn candidate_edges(graph: &TGraph, tables: &Tables) -> Option<(EdgeSet, usize)> {
    let reachable = if graph.lifetime == 0 {
        tables.all_edges()
    } else {
        set_bits(graph.max_edges).fold(0, |candidates, edge| {
            candidates | tables.indexer.adjacent(edge as EdgeIndex)
        })
    };
    let candidates = reachable & !graph.edges;

    if candidates == 0 {
        return None;
    }

    let max_new = (2 * graph.max_edges.count_ones() as usize)
        .min(candidates.count_ones() as usize)
        .min(graph.vertices / 2);

    Some((candidates, max_new))
}
