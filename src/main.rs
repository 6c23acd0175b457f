//! Alloc Bench CLI
//! Runs the default suites and prints the report once at the end

use alloc_bench::{run_suites, BenchConfig, BenchRunner};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    let config = BenchConfig::default();

    // Initialize logging; stdout is reserved for the report
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(&config.logging.level))
        .with_target(config.logging.with_target)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let runner = BenchRunner::new();
    let stdout = std::io::stdout();
    let mut sink = stdout.lock();

    match run_suites(&config, &runner, &mut sink) {
        Ok(measurements) => {
            for m in &measurements {
                info!(workload = %m.workload_name, elapsed_ns = m.elapsed_ns, "measured");
            }
            Ok(())
        }
        Err(e) => {
            error!("benchmark run aborted: {}", e);
            Err(e.into())
        }
    }
}
