use std::str::FromStr;

use crate::{
    debug::SettingError,
    graph::TGraph,
    visitor::{
        count_all, count_happy, count_non_both, count_non_dismountable, count_non_pivotable,
        count_spanner_candidates,
    },
    Count,
};

#[cfg(not(tarpaulin_include))]
pub fn do_if_some<F, T>(optional: &mut Option<T>, f: F)
where
    F: FnOnce(&mut T),
{
    if let Some(val) = optional {
        f(val);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One traversal on the current thread.
    Sequential,
    /// Rigid graphs are traversed in parallel
    /// after the symmetric part is done.
    Parallel,
    /// Work split into independent batches.
    Batch,
}

impl FromStr for Strategy {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            "batch" => Ok(Self::Batch),
            _ => Err(SettingError(s.to_string())),
        }
    }
}

impl Default for Strategy {
    #[cfg(not(tarpaulin_include))]
    fn default() -> Self {
        Self::Sequential
    }
}

/// Which graphs contribute to the final count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMode {
    All,
    Happy,
    NonDismountable,
    NonPivotable,
    NonBoth,
    SpannerCandidates,
}

impl CountMode {
    pub fn visitor(&self) -> fn(&TGraph, &mut Count) -> bool {
        match self {
            Self::All => count_all,
            Self::Happy => count_happy,
            Self::NonDismountable => count_non_dismountable,
            Self::NonPivotable => count_non_pivotable,
            Self::NonBoth => count_non_both,
            Self::SpannerCandidates => count_spanner_candidates,
        }
    }
}

impl FromStr for CountMode {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "happy" => Ok(Self::Happy),
            "non-dismountable" => Ok(Self::NonDismountable),
            "non-pivotable" => Ok(Self::NonPivotable),
            "non-both" => Ok(Self::NonBoth),
            "spanner-candidates" => Ok(Self::SpannerCandidates),
            _ => Err(SettingError(s.to_string())),
        }
    }
}

impl Default for CountMode {
    #[cfg(not(tarpaulin_include))]
    fn default() -> Self {
        Self::Happy
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Number of vertices of the generated graphs.
    pub vertices: usize,
    pub strategy: Strategy,
    /// Run only this batch instead of all of them.
    pub batch: Option<usize>,
    pub count: CountMode,
    /// Size of the global worker pool,
    /// rayon's default if not set.
    pub threads: Option<usize>,
    /// Print statistics after the run.
    pub statistics: bool,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_settings() {
        assert_eq!("parallel".parse(), Ok(Strategy::Parallel));
        assert_eq!("batch".parse(), Ok(Strategy::Batch));
        assert_eq!(
            "depth_first".parse::<Strategy>(),
            Err(SettingError("depth_first".to_string()))
        );
        assert_eq!("non-both".parse(), Ok(CountMode::NonBoth));
        assert_eq!("happy".parse(), Ok(CountMode::Happy));
        assert_eq!(
            "spanner-candidates".parse(),
            Ok(CountMode::SpannerCandidates)
        );
        assert!("Happy".parse::<CountMode>().is_err());
    }

    #[test]
    fn test_do_if_some() {
        let mut some = Some(1);
        do_if_some(&mut some, |val| *val += 1);
        assert_eq!(some, Some(2));

        let mut none: Option<usize> = None;
        do_if_some(&mut none, |val| *val += 1);
        assert_eq!(none, None);
    }
}
