//! Debug facilities.
use std::{
    fmt::{self, Display},
    num::ParseIntError,
};

use crate::graph::{EdgeSet, TEdge, MAX_VERTICES};

// Error types and From<...> implementations

#[derive(Debug, PartialEq, Eq)]
pub struct SettingError(pub String);

impl Display for SettingError {
    #[cfg(not(tarpaulin_include))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unsupported number of vertices {0} (expected 2 to {})", MAX_VERTICES)]
    VertexCountError(usize),
    #[error("Batch {index} does not exist ({batches} batches available)")]
    BatchIndexError { index: usize, batches: usize },
    #[error("Error while parsing the command line: {0}")]
    CLIParseError(String),
    #[error("Unknown setting used: {0}")]
    SettingError(SettingError),
    #[error("Error while setting up the worker threads")]
    ThreadPoolError(rayon::ThreadPoolBuildError),
}

impl From<SettingError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(se: SettingError) -> Self {
        Self::SettingError(se)
    }
}

impl From<ParseIntError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(pe: ParseIntError) -> Self {
        Self::CLIParseError(pe.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(te: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPoolError(te)
    }
}

// Custom formatter for debug printing

/// Prints an edge set as the list of its edge indices.
#[cfg(not(tarpaulin_include))]
pub fn edge_set_fmt(set: &EdgeSet, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set()
        .entries(crate::combinatoric::set_bits(*set))
        .finish()
}

#[allow(clippy::ptr_arg)]
#[cfg(not(tarpaulin_include))]
pub fn tedges_fmt(tedges: &Vec<TEdge>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[")?;
    for (position, tedge) in tedges.iter().enumerate() {
        if position > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}-{}@{}", tedge.u, tedge.v, tedge.t)?;
    }
    write!(f, "]")
}

#[cfg(not(tarpaulin_include))]
pub fn opt_fmt<T: fmt::Debug>(option: &Option<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match option {
        Some(val) => val.fmt(f),
        None => write!(f, "None"),
    }
}

// Debug macro that allows to time single expressions

#[macro_export]
macro_rules! time {
    ($i:ident, $ret:ident, $exp:expr) => {
        let before = std::time::Instant::now();
        let $ret = $exp;
        let $i = before.elapsed();
    };
}
