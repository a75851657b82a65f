//! Parallel chunk execution
//!
//! Spawns one worker thread per chunk, waits for all of them at a join
//! barrier, and returns the per-chunk results in chunk order. Workers share
//! nothing: each produces its own value, collected by joining handles in
//! spawn order. There is no work queue and no thread reuse.

use std::panic;
use std::thread;

/// Run `job` once per chunk, each call on its own thread, and collect the
/// results in chunk order.
///
/// Returns only after every worker has finished. If a worker panics the
/// panic is re-raised here after the join barrier, so the run aborts instead
/// of continuing with partial results.
pub fn run_workers<T, F>(chunks: &[&str], job: F) -> Vec<T>
where
    T: Send,
    F: Fn(&str) -> T + Sync,
{
    let job = &job;
    thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .iter()
            .map(|&chunk| scope.spawn(move || job(chunk)))
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(payload) => panic::resume_unwind(payload),
            })
            .collect()
    })
}
