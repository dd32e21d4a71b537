//! Error types for mc_pi

use thiserror::Error;

/// Result type for estimation runs
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a run.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry constants that cannot describe a circle inscribed in a square
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The probability is undefined without at least one trial
    #[error("Total number of trials must be greater than zero")]
    NoTrials,

    /// The driver needs at least one worker thread
    #[error("Worker count must be greater than zero")]
    NoWorkers,

    /// A worker thread panicked; the whole batch is discarded
    #[error("Worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
