//! Error types for the benchmark harness

use thiserror::Error;

/// Every failure the harness can report. All of them are fatal to a run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The clock reported an end timestamp earlier than the start
    #[error("clock went backwards during `{workload}`: start={start_ns}ns end={end_ns}ns")]
    NonMonotonicClock {
        workload: String,
        start_ns: u64,
        end_ns: u64,
    },

    /// The timed body returned an error
    #[error("workload `{name}` failed")]
    WorkloadFailed {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// Writing the flushed report to its sink failed
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
