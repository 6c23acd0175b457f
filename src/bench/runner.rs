//! Sequential benchmark runner
//! One timed pass per workload, reporting deferred to the output buffer

use std::hint::black_box;
use tracing::debug;

use crate::bench::output::OutputBuffer;
use crate::clock::{MonotonicClock, SystemClock};
use crate::error::{BenchError, Result};
use crate::types::{Measurement, RunReport, Workload};

/// Runs workloads one after another against an injected clock
#[derive(Debug, Clone)]
pub struct BenchRunner<C = SystemClock> {
    clock: C,
}

impl BenchRunner<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for BenchRunner<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: MonotonicClock> BenchRunner<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Time every workload in order, appending its report block to `output`.
    ///
    /// The buffer is only handed back inside the [`RunReport`] once the last
    /// workload has finished. The first failure aborts the run: later
    /// workloads are never invoked and the buffer is dropped.
    pub fn run(&self, workloads: &[Workload], mut output: OutputBuffer) -> Result<RunReport> {
        let mut measurements = Vec::with_capacity(workloads.len());

        for workload in workloads {
            output.push_test_header(workload.name());
            let (start_ns, measurement) = self.time(workload)?;
            output.push_result(start_ns, &measurement);
            measurements.push(measurement);
        }

        debug!(workloads = measurements.len(), "benchmark run complete");
        Ok(RunReport {
            measurements,
            output,
        })
    }

    /// Single timed invocation; nothing but the body sits between the two
    /// clock reads
    fn time(&self, workload: &Workload) -> Result<(u64, Measurement)> {
        let start_ns = self.clock.now_ns();
        let outcome = black_box(workload.invoke());
        let end_ns = self.clock.now_ns();

        outcome.map_err(|source| BenchError::WorkloadFailed {
            name: workload.name().to_string(),
            source,
        })?;

        let elapsed_ns = end_ns
            .checked_sub(start_ns)
            .ok_or_else(|| BenchError::NonMonotonicClock {
                workload: workload.name().to_string(),
                start_ns,
                end_ns,
            })?;

        Ok((
            start_ns,
            Measurement {
                workload_name: workload.name().to_string(),
                elapsed_ns,
            },
        ))
    }
}

/// Run `workloads` on the system clock and return the filled buffer
pub fn run_bench(workloads: &[Workload], output: OutputBuffer) -> Result<RunReport> {
    BenchRunner::new().run(workloads, output)
}
