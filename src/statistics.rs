//! Statistics about the traversal passes of a run.

use custom_debug_derive::Debug;
use std::time::{Duration, Instant};

use crate::debug::opt_fmt;
use crate::{misc::Strategy, Count};

/// One traversal pass, i.e. the pass starting at the empty
/// graph or the processing of one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassStatistics {
    /// `None` for the pass starting at the empty graph.
    #[debug(with = "opt_fmt")]
    pub batch: Option<usize>,
    /// Contribution counted during this pass itself.
    pub count: Count,
    /// Graphs handed over to a later (parallel) pass.
    pub deferred: usize,
    pub time: Duration,
}

#[derive(Debug)]
pub struct Statistics {
    strategy: Strategy,
    #[debug(skip)]
    start_time: Instant,
    #[debug(with = "opt_fmt")]
    end_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    max_pass_time: Option<Duration>,
    total_deferred: usize,
    passes: Vec<PassStatistics>,
}

impl Statistics {
    pub fn new(strategy: Strategy) -> Self {
        Statistics {
            strategy,
            start_time: Instant::now(),
            end_time: None,
            max_pass_time: None,
            total_deferred: 0,
            passes: Vec::new(),
        }
    }

    pub fn log_pass(&mut self, pass: PassStatistics) {
        self.max_pass_time = Some(match self.max_pass_time {
            Some(max_time) => max_time.max(pass.time),
            None => pass.time,
        });
        self.total_deferred += pass.deferred;
        self.passes.push(pass);
    }

    pub fn log_end(&mut self) {
        self.end_time = Some(self.start_time.elapsed());
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn passes(&self) -> &[PassStatistics] {
        &self.passes
    }

    pub fn total_deferred(&self) -> usize {
        self.total_deferred
    }

    pub fn max_pass_time(&self) -> Option<Duration> {
        self.max_pass_time
    }
}
