//! Monte Carlo estimation of pi.
//!
//! Points are drawn uniformly in a square of side 2 centered at the origin.
//! The share falling inside the inscribed unit circle approaches
//! circle_area / square_area = pi / 4.

pub mod config;
pub mod error;
pub mod estimator;
pub mod monte_carlo;
pub mod report;
pub mod workers;

use std::time::Instant;

pub use config::RunConfig;
pub use error::{Error, Result};
pub use estimator::{estimate, Estimate};
pub use monte_carlo::{is_inside, run_trials, sample_trial, TrialBatch};
pub use report::{write_report, RunResult};
pub use workers::{available_workers, worker_count};

/// Validates `config`, runs every trial on `num_workers` threads and reduces
/// the outcomes. The elapsed time covers sampling and reduction.
pub fn run(config: &RunConfig, num_workers: usize) -> Result<RunResult> {
    config.validate()?;

    let start = Instant::now();
    let batch = run_trials(config, num_workers)?;
    let est = estimate(batch, config)?;
    let elapsed = start.elapsed();

    Ok(RunResult {
        num_workers,
        elapsed,
        pi: est.pi,
    })
}
