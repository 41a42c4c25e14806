//! Callbacks invoked for every graph the traversal reaches.
use crate::{
    graph::{SymmetricTGraph, TGraph},
    properties::optimal_spanner_size,
    Count,
};

/// Random orders tried before a prefix counts as having no sparse spanner.
const PRUNING_TRIES: usize = 2;
/// Random orders tried on a complete graph before it is reported.
const CHECK_TRIES: usize = 1000;

/// Decides for each reached graph whether its successors are explored
/// and adds the graph's contribution to the accumulator.
pub trait Visitor {
    /// Returning `false` prunes the subtree below `graph`.
    fn visit(&self, graph: &TGraph, count: &mut Count) -> bool;

    /// Called instead of `visit` while the automorphisms are still tracked.
    fn visit_symmetric(&self, graph: &SymmetricTGraph, count: &mut Count) -> bool {
        self.visit(graph.graph(), count)
    }
}

impl<F> Visitor for F
where
    F: Fn(&TGraph, &mut Count) -> bool,
{
    fn visit(&self, graph: &TGraph, count: &mut Count) -> bool {
        self(graph, count)
    }
}

/// Counts every reached graph.
pub fn count_all(_graph: &TGraph, count: &mut Count) -> bool {
    *count += 1;
    true
}

/// Counts the complete graphs in which every vertex reaches every other one.
pub fn count_happy(graph: &TGraph, count: &mut Count) -> bool {
    if graph.is_complete() && graph.is_happy() {
        *count += 1;
    }
    true
}

fn count_complete_unless(pruned: bool, graph: &TGraph, count: &mut Count) -> bool {
    if pruned {
        return false;
    }
    if graph.is_complete() {
        *count += 1;
    }
    true
}

/// Counts the complete graphs none of whose prefixes is dismountable.
pub fn count_non_dismountable(graph: &TGraph, count: &mut Count) -> bool {
    count_complete_unless(graph.is_dismountable(), graph, count)
}

/// Counts the complete graphs none of whose prefixes has a pivot vertex.
pub fn count_non_pivotable(graph: &TGraph, count: &mut Count) -> bool {
    count_complete_unless(graph.has_pivot_vertex(), graph, count)
}

/// Counts the complete graphs none of whose prefixes is dismountable
/// or has a pivot vertex.
pub fn count_non_both(graph: &TGraph, count: &mut Count) -> bool {
    count_complete_unless(
        graph.is_dismountable() || graph.has_pivot_vertex(),
        graph,
        count,
    )
}

/// Counts the complete graphs none of whose prefixes is dismountable,
/// has a pivot vertex or a quickly found spanner with 2n-3 edges.
/// Complete graphs without such a spanner after many tries are logged.
pub fn count_spanner_candidates(graph: &TGraph, count: &mut Count) -> bool {
    let mut rng = rand::thread_rng();
    if graph.is_dismountable()
        || graph.has_pivot_vertex()
        || graph.has_optimal_spanner(PRUNING_TRIES, &mut rng)
    {
        return false;
    }

    if graph.is_complete() {
        *count += 1;
        if !graph.has_optimal_spanner(CHECK_TRIES, &mut rng) {
            log::warn!(
                "No spanner with {} edges found for {:?}",
                optimal_spanner_size(graph.vertices()),
                graph
            );
        }
    }
    true
}
