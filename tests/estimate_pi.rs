use std::f64::consts::PI;

use mc_pi::{available_workers, estimate, run, run_trials, Error, RunConfig};

const ATTEMPTS: usize = 5;

fn converges(trials: usize, workers: usize, tolerance: f64) -> bool {
    let config = RunConfig::with_trials(trials);
    (0..ATTEMPTS).any(|_| {
        let result = run(&config, workers).unwrap();
        (result.pi - PI).abs() < tolerance
    })
}

#[test]
fn million_trials_land_near_pi() {
    assert!(converges(1_000_000, available_workers(), 0.01));
}

#[test]
fn single_worker_converges_too() {
    assert!(converges(1_000_000, 1, 0.01));
}

#[test]
fn probability_stays_in_unit_interval() {
    for trials in [1, 2, 17, 10_000] {
        let config = RunConfig::with_trials(trials);
        let batch = run_trials(&config, 3).unwrap();
        let est = estimate(batch, &config).unwrap();

        assert_eq!(est.trials, trials);
        assert!((0.0..=1.0).contains(&est.probability));
        assert_eq!(est.pi, 4.0 * (est.hits as f64 / trials as f64));
    }
}

#[test]
fn runs_are_independent_samples() {
    let config = RunConfig::with_trials(10_000);
    let first = run_trials(&config, 2).unwrap();
    let second = run_trials(&config, 2).unwrap();

    assert_eq!(first.len(), second.len());
    // 10_000 independent draws matching exactly is practically impossible
    assert_ne!(first, second);
}

#[test]
fn run_reports_worker_count() {
    let config = RunConfig::with_trials(1_000);
    let result = run(&config, 3).unwrap();
    assert_eq!(result.num_workers, 3);
    assert!(result.pi >= 0.0 && result.pi <= 4.0);
}

#[test]
fn zero_trials_rejected_before_workers_start() {
    let config = RunConfig::with_trials(0);
    assert!(matches!(run(&config, 2), Err(Error::NoTrials)));
}
