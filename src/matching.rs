//! Matchings, i.e. sets of pairwise vertex disjoint
//! edges, and the precomputed catalog of all of them
//! grouped by size.
use custom_debug_derive::Debug;

use crate::{
    combinatoric::{combinations, set_bits},
    edge::EdgeIndexer,
    graph::{full_edge_set, EdgeIndex, EdgeSet, VertexSet},
};

pub fn is_matching(edges: EdgeSet, indexer: &EdgeIndexer) -> bool {
    let mut covered: VertexSet = 0;
    for edge in set_bits(edges) {
        let (u, v) = indexer.pair(edge as EdgeIndex);
        let endpoints = (1 << u) | (1 << v);
        if covered & endpoints != 0 {
            return false;
        }
        covered |= endpoints;
    }
    true
}

/// Whether `automorphism` maps every edge of `matching` into `matching`.
pub fn is_stable_under_automorphism(matching: EdgeSet, automorphism: &[EdgeIndex]) -> bool {
    are_equivalent_matchings(matching, matching, automorphism)
}

/// Whether `automorphism` maps every edge of `first` into `second`.
pub fn are_equivalent_matchings(first: EdgeSet, second: EdgeSet, automorphism: &[EdgeIndex]) -> bool {
    set_bits(first).all(|edge| second & (1 << automorphism[edge]) != 0)
}

/// All matchings of size 1 to n/2, stored consecutively by size.
///
/// Of the matchings that contain edge 0, only the first one
/// of each size is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingCatalog {
    #[debug(skip)]
    matchings: Vec<EdgeSet>,
    /// `delimiters[k]` is the number of matchings with less than `k+1` edges.
    delimiters: Vec<usize>,
}

impl MatchingCatalog {
    pub fn new(indexer: &EdgeIndexer) -> Self {
        let max_size = indexer.vertices() / 2;
        let all_edges = full_edge_set(indexer.number_of_edges());

        let mut matchings = Vec::new();
        let mut delimiters = Vec::with_capacity(max_size + 1);
        delimiters.push(0);

        for size in 1..=max_size {
            let mut first_edge_hit = false;
            for matching in combinations(all_edges, size) {
                if !is_matching(matching, indexer) {
                    continue;
                }
                if matching & 1 != 0 {
                    if first_edge_hit {
                        continue;
                    }
                    first_edge_hit = true;
                }
                matchings.push(matching);
            }
            delimiters.push(matchings.len());
        }

        MatchingCatalog {
            matchings,
            delimiters,
        }
    }

    pub fn max_size(&self) -> usize {
        self.delimiters.len() - 1
    }

    pub fn len(&self) -> usize {
        self.matchings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchings.is_empty()
    }

    pub fn delimiters(&self) -> &[usize] {
        &self.delimiters
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeSet> {
        self.matchings.iter()
    }

    /// The contiguous run of matchings with exactly `size` edges.
    pub fn of_size(&self, size: usize) -> &[EdgeSet] {
        if size == 0 || size > self.max_size() {
            return &[];
        }
        &self.matchings[self.delimiters[size - 1]..self.delimiters[size]]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::MAX_VERTICES;

    #[test]
    fn test_is_matching() {
        let indexer = EdgeIndexer::new(4);
        // 0-1 and 2-3
        assert!(is_matching(0b100001, &indexer));
        // 0-1 and 0-2
        assert!(!is_matching(0b000011, &indexer));
        assert!(is_matching(0, &indexer));
        assert!(is_matching(0b001000, &indexer));
    }

    #[test]
    fn test_catalog_small() {
        let catalog = MatchingCatalog::new(&EdgeIndexer::new(2));
        assert_eq!(catalog.iter().copied().collect::<Vec<_>>(), vec![0b1]);
        assert_eq!(catalog.delimiters(), &[0, 1]);

        let catalog = MatchingCatalog::new(&EdgeIndexer::new(4));
        // Singles: 0-1 first, the others do not contain edge 0.
        assert_eq!(
            catalog.of_size(1),
            &[0b000001, 0b000010, 0b000100, 0b001000, 0b010000, 0b100000]
        );
        // Perfect matchings: {0-1, 2-3} {0-2, 1-3} {0-3, 1-2}
        assert_eq!(catalog.of_size(2), &[0b100001, 0b010010, 0b001100]);
        assert!(catalog.of_size(3).is_empty());
        assert!(catalog.of_size(0).is_empty());
    }

    #[test]
    fn test_catalog_edge_zero_rule() {
        let catalog = MatchingCatalog::new(&EdgeIndexer::new(6));
        for size in 1..=3 {
            let with_edge_zero = catalog
                .of_size(size)
                .iter()
                .filter(|matching| **matching & 1 != 0)
                .count();
            assert_eq!(with_edge_zero, 1);
        }
        // 15 single edges, 45 pairs of disjoint edges (6 contain edge 0)
        // and 15 perfect matchings (3 contain edge 0).
        assert_eq!(catalog.of_size(1).len(), 15);
        assert_eq!(catalog.of_size(2).len(), 45 - 6 + 1);
        assert_eq!(catalog.of_size(3).len(), 15 - 3 + 1);
    }

    #[test]
    fn test_catalog_validity_and_boundaries() {
        for n in 2..=8 {
            let indexer = EdgeIndexer::new(n);
            let catalog = MatchingCatalog::new(&indexer);
            assert_eq!(catalog.max_size(), n / 2);
            assert_eq!(catalog.delimiters()[0], 0);
            assert_eq!(*catalog.delimiters().last().unwrap(), catalog.len());

            for size in 1..=n / 2 {
                let matchings = catalog.of_size(size);
                assert!(!matchings.is_empty());
                for matching in matchings {
                    assert!(is_matching(*matching, &indexer));
                    assert_eq!(matching.count_ones() as usize, size);
                }
            }

            let delimiters = catalog.delimiters();
            for (position, matching) in catalog.iter().enumerate() {
                let size = matching.count_ones() as usize;
                assert!(delimiters[size - 1] <= position && position < delimiters[size]);
            }
        }
    }

    #[test]
    fn test_idempotent_rebuild() {
        for n in 2..=MAX_VERTICES.min(8) {
            let indexer = EdgeIndexer::new(n);
            assert_eq!(indexer, EdgeIndexer::new(n));
            assert_eq!(MatchingCatalog::new(&indexer), MatchingCatalog::new(&indexer));
        }
    }

    #[test]
    fn test_equivalent_matchings() {
        let indexer = EdgeIndexer::new(4);
        // Swap 0 and 2 (maps 0-1 to 1-2 and 0-3 to 2-3).
        let automorphism = indexer.edge_action(&[2, 1, 0, 3]);
        assert!(are_equivalent_matchings(0b000001, 0b001000, &automorphism));
        assert!(!are_equivalent_matchings(0b000001, 0b000001, &automorphism));
        assert!(is_stable_under_automorphism(0b000010, &automorphism));
        assert!(is_stable_under_automorphism(0b001001, &automorphism));
        assert!(!is_stable_under_automorphism(0b000001, &automorphism));
    }
}
