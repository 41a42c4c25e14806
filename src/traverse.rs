//! Depth first enumeration of the successors of a temporal graph.
//!
//! Each round adds a non-empty matching whose edges touch the
//! matching of the previous round. As long as a graph still has
//! automorphisms, at most one matching per orbit is explored;
//! below the first rigid graph every matching is.
use custom_debug_derive::Debug;

use crate::{
    combinatoric::combinations,
    graph::{candidate_edges, EdgeSet, SymmetricTGraph, TGraph},
    matching::is_matching,
    tables::Tables,
    visitor::Visitor,
    Count,
};

#[derive(Debug)]
pub struct Traversal<'a, V> {
    #[debug(skip)]
    tables: &'a Tables,
    #[debug(skip)]
    visitor: &'a V,
}

impl<'a, V: Visitor> Traversal<'a, V> {
    pub fn new(tables: &'a Tables, visitor: &'a V) -> Self {
        Traversal { tables, visitor }
    }

    /// Visits `graph` and all of its descendants
    /// and returns the sum of their contributions.
    /// Every labeled successor is explored, including those of the empty graph.
    pub fn traverse(&self, graph: &TGraph) -> Count {
        let mut count = 0;
        if !self.visitor.visit(graph, &mut count) || graph.is_complete() {
            return count;
        }

        for matching in self.successors(graph) {
            count += self.traverse(&graph.extend(matching, self.tables));
        }
        count
    }

    /// Like `traverse`, but explores only one successor per orbit
    /// until a rigid graph is reached.
    pub fn traverse_symmetric(&self, graph: &SymmetricTGraph) -> Count {
        let mut count = 0;
        if !self.visitor.visit_symmetric(graph, &mut count) || graph.graph().is_complete() {
            return count;
        }

        if graph.is_rigid() {
            for matching in self.successors(graph.graph()) {
                count += self.traverse(&graph.graph().extend(matching, self.tables));
            }
        } else {
            for matching in self.symmetric_successors(graph) {
                count += self.traverse_symmetric(&graph.extend(matching, self.tables));
            }
        }
        count
    }

    /// Every matching that may be added to `graph` next.
    pub fn successors(&self, graph: &TGraph) -> Vec<EdgeSet> {
        let (candidates, max_new) = match candidate_edges(graph, self.tables) {
            Some(candidates) => candidates,
            None => return Vec::new(),
        };
        let number_of_candidates = candidates.count_ones() as usize;

        if max_new == 1 && number_of_candidates == 1 {
            vec![candidates]
        } else if graph.lifetime() == 0 || number_of_candidates < self.tables.vertices() / 2 {
            // The catalog keeps a single matching with edge 0 per size,
            // so the empty graph needs every combination. Few candidates
            // are cheaper than a catalog scan as well.
            (1..=max_new)
                .flat_map(|size| combinations(candidates, size))
                .filter(|matching| is_matching(*matching, &self.tables.indexer))
                .collect()
        } else {
            (1..=max_new)
                .flat_map(|size| self.tables.catalog.of_size(size).iter().copied())
                .filter(|matching| candidates | matching == candidates)
                .collect()
        }
    }

    /// One matching per orbit of the possible next matchings of `graph`,
    /// ordered by size. Stops at the first size without any matching.
    pub fn symmetric_successors(&self, graph: &SymmetricTGraph) -> Vec<EdgeSet> {
        let (candidates, max_new) = match candidate_edges(graph.graph(), self.tables) {
            Some(candidates) => candidates,
            None => return Vec::new(),
        };

        let mut successors = Vec::new();
        for size in 1..=max_new {
            let matchings = graph.successors_as_matchings(candidates, size, self.tables);
            if matchings.is_empty() {
                break;
            }
            successors.extend(matchings);
        }
        successors
    }
}
