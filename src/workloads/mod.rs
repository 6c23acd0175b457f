//! Example workloads and suite registration

mod arrays;
mod time_value;

pub use arrays::{boxed_array, primitive_array};
pub use time_value::{time_value_alloc, time_value_reuse, TimeValue};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Workload;

/// Default number of elements each workload allocates
pub const DEFAULT_ELEMENT_COUNT: usize = 1_000_000;

/// A group of workloads that are meant to be compared side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuiteKind {
    /// `boxed-array` then `primitive-array`
    Arrays,
    /// `time-value-alloc` then `time-value-reuse`
    TimeValues,
}

impl SuiteKind {
    pub fn workloads(self, count: usize) -> Vec<Workload> {
        match self {
            SuiteKind::Arrays => vec![boxed_array(count), primitive_array(count)],
            SuiteKind::TimeValues => vec![time_value_alloc(count), time_value_reuse(count)],
        }
    }
}

impl fmt::Display for SuiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuiteKind::Arrays => write!(f, "arrays"),
            SuiteKind::TimeValues => write!(f, "time-values"),
        }
    }
}

/// Flatten `suites` into one ordered workload list
pub fn register(suites: &[SuiteKind], count: usize) -> Vec<Workload> {
    suites
        .iter()
        .flat_map(|suite| suite.workloads(count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(workloads: &[Workload]) -> Vec<&str> {
        workloads.iter().map(Workload::name).collect()
    }

    #[test]
    fn test_register_order() {
        let workloads = register(&[SuiteKind::Arrays, SuiteKind::TimeValues], 10);
        assert_eq!(
            names(&workloads),
            [
                "boxed-array",
                "primitive-array",
                "time-value-alloc",
                "time-value-reuse"
            ]
        );
    }

    #[test]
    fn test_register_empty() {
        assert!(register(&[], 10).is_empty());
    }

    #[test]
    fn test_suite_serde_names() {
        let json = serde_json::to_string(&SuiteKind::TimeValues).unwrap();
        assert_eq!(json, "\"time-values\"");
        let parsed: SuiteKind = serde_json::from_str("\"arrays\"").unwrap();
        assert_eq!(parsed, SuiteKind::Arrays);
        assert_eq!(parsed.to_string(), "arrays");
    }
}
