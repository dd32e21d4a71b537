use std::thread;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::workers::partition;

/// Outcomes of every trial of a run, in worker order.
pub type TrialBatch = Vec<bool>;

/// Inclusive membership test; squared distance, no square root.
pub fn is_inside(x: f64, y: f64, radius: f64) -> bool {
    x * x + y * y <= radius * radius
}

/// One trial: a uniform point in the square, classified against the circle.
pub fn sample_trial<R: Rng + ?Sized>(rng: &mut R, config: &RunConfig) -> bool {
    let half = config.half_side();
    let x = rng.gen_range(-half..=half);
    let y = rng.gen_range(-half..=half);
    is_inside(x, y, config.radius)
}

/// Runs `config.total_num_trials` trials on `workers` threads and blocks
/// until every worker has finished.
pub fn run_trials(config: &RunConfig, workers: usize) -> Result<TrialBatch> {
    run_trials_with(config, workers, sample_trial::<ThreadRng>)
}

fn run_trials_with(
    config: &RunConfig,
    workers: usize,
    sampler: fn(&mut ThreadRng, &RunConfig) -> bool,
) -> Result<TrialBatch> {
    if workers == 0 {
        return Err(Error::NoWorkers);
    }
    if config.total_num_trials == 0 {
        return Err(Error::NoTrials);
    }

    let shares = partition(config.total_num_trials, workers);
    log::debug!(
        "running {} trials on {} workers, shares {:?}",
        config.total_num_trials,
        workers,
        shares
    );

    let mut handles = vec![];

    for (worker_id, samples) in shares.into_iter().enumerate() {
        let config = *config;
        let handle = thread::spawn(move || {
            // thread_rng is thread-local and seeded per thread
            let mut rng = rand::thread_rng();
            let outcomes: Vec<bool> = (0..samples).map(|_| sampler(&mut rng, &config)).collect();
            log::trace!("worker {} finished {} trials", worker_id, samples);
            outcomes
        });

        handles.push(handle);
    }

    // every handle is joined, even after a failure
    let mut batch = Vec::with_capacity(config.total_num_trials);
    let mut failed = None;
    for (worker_id, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(outcomes) => batch.extend(outcomes),
            Err(_) => {
                failed.get_or_insert(worker_id);
            }
        }
    }

    match failed {
        Some(worker) => Err(Error::WorkerPanicked { worker }),
        None => Ok(batch),
    }
}
