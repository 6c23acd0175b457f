//! Core types for the benchmark harness

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bench::OutputBuffer;

type Body = Box<dyn Fn() -> anyhow::Result<()>>;

/// A named unit of work whose execution time is measured
pub struct Workload {
    name: String,
    body: Body,
}

impl Workload {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    /// Wrap a body that cannot fail
    pub fn infallible<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self::new(name, move || {
            body();
            Ok(())
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub(crate) fn invoke(&self) -> anyhow::Result<()> {
        (self.body)()
    }
}

impl fmt::Debug for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workload").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Timing result for one workload execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    pub workload_name: String,
    pub elapsed_ns: u64,
}

impl Measurement {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_ns as f64 * 1e-9
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}ns ({}s)", self.workload_name, self.elapsed_ns, self.elapsed_seconds())
    }
}

/// Everything a completed run hands back: the measurements in input order
/// and the buffer holding the formatted report
#[derive(Debug)]
pub struct RunReport {
    pub measurements: Vec<Measurement>,
    pub output: OutputBuffer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_seconds() {
        let m = Measurement {
            workload_name: "primitive-array".to_string(),
            elapsed_ns: 1_500_000_000,
        };
        assert!((m.elapsed_seconds() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_seconds_not_truncated() {
        let m = Measurement {
            workload_name: "tiny".to_string(),
            elapsed_ns: 1234,
        };
        assert!(m.elapsed_seconds() > 0.0);
        assert!((m.elapsed_seconds() - 1.234e-6).abs() < 1e-15);
    }

    #[test]
    fn test_workload_invoke() {
        let ok = Workload::infallible("noop", || {});
        assert_eq!(ok.name(), "noop");
        assert!(ok.invoke().is_ok());

        let failing = Workload::new("broken", || anyhow::bail!("nope"));
        assert!(failing.invoke().is_err());
    }
}
