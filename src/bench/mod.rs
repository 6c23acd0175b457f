//! Benchmark module
//! Timed workload execution with deferred reporting

pub mod output;
pub mod runner;

pub use output::{OutputBuffer, BANNER, COMPLETION};
pub use runner::{run_bench, BenchRunner};
