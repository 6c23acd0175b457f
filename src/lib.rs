//! Alloc Bench
//!
//! Wall-clock timing of allocation patterns with deferred reporting.
//!
//! ## Architecture
//! - Clock: injected monotonic timestamp source
//! - Bench: sequential runner plus the output buffer it reports into
//! - Workloads: example allocation payloads grouped into suites
//! - Config: suite selection, element count, logging

pub mod bench;
pub mod clock;
pub mod config;
pub mod error;
pub mod types;
pub mod workloads;

pub use bench::{run_bench, BenchRunner, OutputBuffer};
pub use clock::{MonotonicClock, ScriptedClock, SystemClock};
pub use config::{BenchConfig, LoggingConfig};
pub use error::{BenchError, Result};
pub use types::{Measurement, RunReport, Workload};
pub use workloads::SuiteKind;

use std::io::Write;
use tracing::info;

/// Run the configured suites and flush the whole report to `sink` once.
///
/// Nothing is written to `sink` unless every workload succeeds.
pub fn run_suites<C, W>(
    config: &BenchConfig,
    runner: &BenchRunner<C>,
    sink: &mut W,
) -> Result<Vec<Measurement>>
where
    C: MonotonicClock,
    W: Write,
{
    config.validate()?;
    let workloads = config.workloads();
    info!(
        workloads = workloads.len(),
        element_count = config.element_count,
        "workloads registered"
    );

    let mut output = OutputBuffer::new();
    output.push(bench::BANNER);

    let RunReport {
        measurements,
        mut output,
    } = runner.run(&workloads, output)?;

    output.push(bench::COMPLETION);
    output.flush(sink)?;
    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_suites_writes_full_report() {
        let config = BenchConfig {
            element_count: 100,
            suites: vec![SuiteKind::Arrays],
            ..BenchConfig::default()
        };
        let runner = BenchRunner::with_clock(ScriptedClock::new([10, 20, 30, 50]));
        let mut sink = Vec::new();

        let measurements = run_suites(&config, &runner, &mut sink).unwrap();

        assert_eq!(measurements.len(), 2);
        let text = String::from_utf8(sink).unwrap();
        let expected = "\
Beginning performance enhancement tests...

New Test: boxed-array
Start time: 10

Time taken for test [boxed-array]: 10 nanoseconds
Time in seconds: 0.00000001 seconds

New Test: primitive-array
Start time: 30

Time taken for test [primitive-array]: 20 nanoseconds
Time in seconds: 0.00000002 seconds
Performance enhancement tests finished.
";
        assert_eq!(text, expected);
    }
}
