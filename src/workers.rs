use std::io;
use std::num::NonZeroUsize;
use std::thread;

/// Number of workers for a machine reporting `query()` processing units.
///
/// One unit is left to the coordinating thread; single-core machines and
/// machines where the query fails still get one worker.
pub fn worker_count<F>(query: F) -> usize
where
    F: FnOnce() -> io::Result<NonZeroUsize>,
{
    match query() {
        Ok(units) => (units.get() - 1).max(1),
        Err(err) => {
            log::warn!("could not query available parallelism ({}), using 1 worker", err);
            1
        }
    }
}

pub fn available_workers() -> usize {
    worker_count(thread::available_parallelism)
}

/// Splits `total` trials into `workers` shares, remainder on the last one.
pub fn partition(total: usize, workers: usize) -> Vec<usize> {
    if workers == 0 {
        return Vec::new();
    }
    let per_worker = total / workers;
    let remainder = total % workers;

    (0..workers)
        .map(|worker_id| {
            if worker_id == workers - 1 {
                per_worker + remainder
            } else {
                per_worker
            }
        })
        .collect()
}
