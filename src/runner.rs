//! Strategies that drive a traversal from the empty graph.
//!
//! The sequential runner traverses everything on the calling thread.
//! The parallel runner stops at the first rigid graph of each branch
//! and traverses these graphs with rayon afterwards. The batch runner
//! splits the work into batches that can be run independently, e.g. in
//! separate processes, and traverses each batch in parallel.
use custom_debug_derive::Debug;
use rayon::prelude::*;
use std::{cell::RefCell, time::Duration};

use crate::{
    debug::Error,
    graph::{SymmetricTGraph, TGraph},
    misc::{do_if_some, Strategy},
    statistics::{PassStatistics, Statistics},
    tables::Tables,
    time,
    traverse::Traversal,
    visitor::Visitor,
    Count,
};

/// Traverses `frontier` in plain mode in parallel and sums up the results.
fn traverse_in_parallel<V>(tables: &Tables, visitor: &V, frontier: Vec<TGraph>) -> Count
where
    V: Visitor + Sync,
{
    frontier
        .into_par_iter()
        .map(|graph| Traversal::new(tables, visitor).traverse(&graph))
        .sum()
}

/// Visits symmetric graphs and defers rigid ones.
struct RigidFrontier<'v, V> {
    visitor: &'v V,
    frontier: RefCell<Vec<TGraph>>,
}

impl<'v, V> RigidFrontier<'v, V> {
    fn new(visitor: &'v V) -> Self {
        RigidFrontier {
            visitor,
            frontier: RefCell::new(Vec::new()),
        }
    }

    fn into_frontier(self) -> Vec<TGraph> {
        self.frontier.into_inner()
    }
}

impl<V: Visitor> Visitor for RigidFrontier<'_, V> {
    fn visit(&self, graph: &TGraph, count: &mut Count) -> bool {
        self.visitor.visit(graph, count)
    }

    fn visit_symmetric(&self, graph: &SymmetricTGraph, count: &mut Count) -> bool {
        if graph.is_rigid() {
            self.frontier.borrow_mut().push(graph.graph().clone());
            return false;
        }
        self.visitor.visit_symmetric(graph, count)
    }
}

/// Visits graphs with less than `threshold` edges and defers the others.
struct EdgeFrontier<'a, V> {
    tables: &'a Tables,
    visitor: &'a V,
    threshold: usize,
    frontier: RefCell<Vec<SymmetricTGraph>>,
}

impl<'a, V> EdgeFrontier<'a, V> {
    fn new(tables: &'a Tables, visitor: &'a V, threshold: usize) -> Self {
        EdgeFrontier {
            tables,
            visitor,
            threshold,
            frontier: RefCell::new(Vec::new()),
        }
    }

    fn into_frontier(self) -> Vec<SymmetricTGraph> {
        self.frontier.into_inner()
    }
}

impl<V: Visitor> Visitor for EdgeFrontier<'_, V> {
    fn visit(&self, graph: &TGraph, count: &mut Count) -> bool {
        if graph.number_of_edges() < self.threshold {
            return self.visitor.visit(graph, count);
        }
        self.frontier
            .borrow_mut()
            .push(SymmetricTGraph::rigid(graph.clone(), self.tables));
        false
    }

    fn visit_symmetric(&self, graph: &SymmetricTGraph, count: &mut Count) -> bool {
        if graph.graph().number_of_edges() < self.threshold {
            return self.visitor.visit_symmetric(graph, count);
        }
        self.frontier.borrow_mut().push(graph.clone());
        false
    }
}

/// Visits graphs with less than `threshold` edges or non-trivial
/// automorphisms and defers the others.
struct RigidEdgeFrontier<'v, V> {
    visitor: &'v V,
    threshold: usize,
    frontier: RefCell<Vec<TGraph>>,
}

impl<'v, V> RigidEdgeFrontier<'v, V> {
    fn new(visitor: &'v V, threshold: usize) -> Self {
        RigidEdgeFrontier {
            visitor,
            threshold,
            frontier: RefCell::new(Vec::new()),
        }
    }

    fn into_frontier(self) -> Vec<TGraph> {
        self.frontier.into_inner()
    }
}

impl<V: Visitor> Visitor for RigidEdgeFrontier<'_, V> {
    fn visit(&self, graph: &TGraph, count: &mut Count) -> bool {
        if graph.number_of_edges() < self.threshold {
            return self.visitor.visit(graph, count);
        }
        self.frontier.borrow_mut().push(graph.clone());
        false
    }

    fn visit_symmetric(&self, graph: &SymmetricTGraph, count: &mut Count) -> bool {
        if !graph.is_rigid() || graph.graph().number_of_edges() < self.threshold {
            return self.visitor.visit_symmetric(graph, count);
        }
        self.frontier.borrow_mut().push(graph.graph().clone());
        false
    }
}

#[derive(Debug)]
pub struct SequentialRunner<'a, V> {
    #[debug(skip)]
    tables: &'a Tables,
    #[debug(skip)]
    visitor: V,
    statistics: Option<Statistics>,
}

impl<'a, V: Visitor> SequentialRunner<'a, V> {
    pub fn new(tables: &'a Tables, visitor: V) -> Self {
        SequentialRunner {
            tables,
            visitor,
            statistics: None,
        }
    }

    pub fn collect_statistics(mut self) -> Self {
        self.statistics = Some(Statistics::new(Strategy::Sequential));
        self
    }

    pub fn into_statistics(self) -> Option<Statistics> {
        self.statistics
    }

    pub fn run(&mut self) -> Count {
        let root = SymmetricTGraph::new(self.tables);
        time!(
            traversal_time,
            count,
            Traversal::new(self.tables, &self.visitor).traverse_symmetric(&root)
        );
        log::info!("Traversal done after {:?}", traversal_time);

        do_if_some(&mut self.statistics, |statistics| {
            statistics.log_pass(PassStatistics {
                batch: None,
                count,
                deferred: 0,
                time: traversal_time,
            });
            statistics.log_end();
        });
        count
    }
}

#[derive(Debug)]
pub struct ParallelRunner<'a, V> {
    #[debug(skip)]
    tables: &'a Tables,
    #[debug(skip)]
    visitor: V,
    statistics: Option<Statistics>,
}

impl<'a, V: Visitor + Sync> ParallelRunner<'a, V> {
    pub fn new(tables: &'a Tables, visitor: V) -> Self {
        ParallelRunner {
            tables,
            visitor,
            statistics: None,
        }
    }

    pub fn collect_statistics(mut self) -> Self {
        self.statistics = Some(Statistics::new(Strategy::Parallel));
        self
    }

    pub fn into_statistics(self) -> Option<Statistics> {
        self.statistics
    }

    pub fn run(&mut self) -> Count {
        let root = SymmetricTGraph::new(self.tables);
        let root_pass = RigidFrontier::new(&self.visitor);
        time!(
            root_time,
            top,
            Traversal::new(self.tables, &root_pass).traverse_symmetric(&root)
        );
        let frontier = root_pass.into_frontier();
        let deferred = frontier.len();
        log::info!(
            "Symmetric pass done after {:?}, {} rigid graphs deferred",
            root_time,
            deferred
        );

        time!(
            frontier_time,
            rest,
            traverse_in_parallel(self.tables, &self.visitor, frontier)
        );
        log::info!("Rigid graphs done after {:?}", frontier_time);

        do_if_some(&mut self.statistics, |statistics| {
            statistics.log_pass(PassStatistics {
                batch: None,
                count: top,
                deferred,
                time: root_time + frontier_time,
            });
            statistics.log_end();
        });
        top + rest
    }
}

/// Splits the traversal into batches.
///
/// The first phase, done on construction, visits every graph
/// with less than `first_threshold` edges and collects the others
/// as batches. A batch visits the graphs below its entry that have
/// automorphisms or less than `second_threshold` edges, and the
/// subtrees of the others in parallel.
#[derive(Debug)]
pub struct BatchRunner<'a, V> {
    #[debug(skip)]
    tables: &'a Tables,
    #[debug(skip)]
    visitor: V,
    second_threshold: usize,
    /// Contribution of the first phase.
    top: Count,
    first_phase_time: Duration,
    #[debug(skip)]
    batches: Vec<SymmetricTGraph>,
    statistics: Option<Statistics>,
}

impl<'a, V: Visitor + Sync> BatchRunner<'a, V> {
    /// Batches start at `n` edges, their parallel
    /// parts at `n + 4` edges.
    pub fn new(tables: &'a Tables, visitor: V) -> Self {
        let vertices = tables.vertices();
        Self::with_thresholds(tables, visitor, vertices, vertices + 4)
    }

    pub fn with_thresholds(
        tables: &'a Tables,
        visitor: V,
        first_threshold: usize,
        second_threshold: usize,
    ) -> Self {
        let root = SymmetricTGraph::new(tables);
        let phase_one = EdgeFrontier::new(tables, &visitor, first_threshold);
        time!(
            first_phase_time,
            top,
            Traversal::new(tables, &phase_one).traverse_symmetric(&root)
        );
        let batches = phase_one.into_frontier();
        log::info!(
            "{} batches after {:?}, first phase counted {}",
            batches.len(),
            first_phase_time,
            top
        );

        BatchRunner {
            tables,
            visitor,
            second_threshold,
            top,
            first_phase_time,
            batches,
            statistics: None,
        }
    }

    pub fn collect_statistics(mut self) -> Self {
        let mut statistics = Statistics::new(Strategy::Batch);
        statistics.log_pass(PassStatistics {
            batch: None,
            count: self.top,
            deferred: self.batches.len(),
            time: self.first_phase_time,
        });
        self.statistics = Some(statistics);
        self
    }

    pub fn into_statistics(self) -> Option<Statistics> {
        self.statistics
    }

    pub fn number_of_batches(&self) -> usize {
        self.batches.len()
    }

    /// Contribution of the graphs visited while building the batches.
    pub fn top_count(&self) -> Count {
        self.top
    }

    /// The contribution of the given batch. Batch 0 also
    /// carries the contribution of the first phase.
    pub fn run(&mut self, batch: usize) -> Result<Count, Error> {
        if batch >= self.batches.len() {
            return Err(Error::BatchIndexError {
                index: batch,
                batches: self.batches.len(),
            });
        }

        let count = self.run_batch(batch);
        do_if_some(&mut self.statistics, Statistics::log_end);
        if batch == 0 {
            Ok(self.top + count)
        } else {
            Ok(count)
        }
    }

    /// Runs every batch, also correct if there is none.
    pub fn run_all(&mut self) -> Count {
        let mut count = self.top;
        for batch in 0..self.batches.len() {
            count += self.run_batch(batch);
        }
        do_if_some(&mut self.statistics, Statistics::log_end);
        count
    }

    fn run_batch(&mut self, batch: usize) -> Count {
        let phase_two = RigidEdgeFrontier::new(&self.visitor, self.second_threshold);
        time!(
            batch_time,
            top,
            Traversal::new(self.tables, &phase_two).traverse_symmetric(&self.batches[batch])
        );
        let frontier = phase_two.into_frontier();
        let deferred = frontier.len();

        time!(
            frontier_time,
            rest,
            traverse_in_parallel(self.tables, &self.visitor, frontier)
        );
        log::debug!(
            "Batch {}: {} graphs deferred, done after {:?}",
            batch,
            deferred,
            batch_time + frontier_time
        );

        do_if_some(&mut self.statistics, |statistics| {
            statistics.log_pass(PassStatistics {
                batch: Some(batch),
                count: top + rest,
                deferred,
                time: batch_time + frontier_time,
            })
        });
        top + rest
    }
}
