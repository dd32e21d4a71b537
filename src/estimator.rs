use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::monte_carlo::TrialBatch;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub hits: usize,
    pub trials: usize,
    /// hits / trials, always within [0, 1]
    pub probability: f64,
    pub pi: f64,
}

/// Reduces a batch to a pi estimate.
///
/// P(inside) = circle_area / square_area = pi * radius² / side_length², so
/// pi = P * side_length² / radius².
pub fn estimate(batch: TrialBatch, config: &RunConfig) -> Result<Estimate> {
    let trials = batch.len();
    if trials == 0 {
        return Err(Error::NoTrials);
    }

    let hits = batch.into_iter().filter(|&inside| inside).count();
    let probability = hits as f64 / trials as f64;
    let pi = probability * config.area_ratio();

    log::debug!(
        "{} of {} trials inside, probability {}, pi {}",
        hits,
        trials,
        probability,
        pi
    );

    Ok(Estimate {
        hits,
        trials,
        probability,
        pi,
    })
}
