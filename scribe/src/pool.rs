//! Parallel recognition worker pool.
//!
//! A fixed-size pool of OS threads, each owning its own recognition engine.
//! Engines are not shareable across concurrent callers, so every worker
//! builds one lazily from a factory on its first task. Work items are
//! `(segment_index, path)` pairs drawn from a shared queue; results are
//! collected unordered and keyed by segment index - callers must
//! reconstruct global order from the index, not from arrival order.
//!
//! Failure handling is all-or-nothing: if any worker fails, the run fails
//! with that worker's error and no partial results are returned.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::mpsc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::recognize::{RecognizedSpan, Recognizer};

/// Number of workers for a given job count: bounded by configuration,
/// hardware parallelism, and the amount of work.
pub fn worker_count(max_workers: usize, jobs: usize) -> usize {
    let hardware = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    max_workers.max(1).min(hardware).min(jobs)
}

/// Recognize every `(segment_index, path)` job using a pool of workers.
///
/// `factory` is called at most once per worker, on the worker's thread, the
/// first time it picks up a task. Blocks until all results are collected;
/// there is no cancellation or timeout.
pub fn run_pool<R, F>(
    jobs: Vec<(usize, PathBuf)>,
    max_workers: usize,
    factory: F,
) -> Result<Vec<(usize, Vec<RecognizedSpan>)>>
where
    R: Recognizer,
    F: Fn() -> Result<R> + Send + Sync,
{
    if jobs.is_empty() {
        return Ok(Vec::new());
    }

    let total = jobs.len();
    let workers = worker_count(max_workers, total);
    info!(jobs = total, workers = workers, "Starting recognition pool");

    let queue = Mutex::new(jobs.into_iter().collect::<VecDeque<_>>());
    let (result_tx, result_rx) = mpsc::channel::<Result<(usize, Vec<RecognizedSpan>)>>();

    std::thread::scope(|scope| {
        for worker_id in 0..workers {
            let queue = &queue;
            let factory = &factory;
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                let mut engine: Option<R> = None;
                loop {
                    let job = {
                        let mut queue = queue.lock().unwrap_or_else(|e| e.into_inner());
                        queue.pop_front()
                    };
                    let Some((index, path)) = job else { break };

                    if engine.is_none() {
                        match factory() {
                            Ok(e) => {
                                debug!(worker = worker_id, "Worker engine initialized");
                                engine = Some(e);
                            }
                            Err(e) => {
                                let _ = result_tx.send(Err(
                                    e.context(format!("Worker {worker_id} failed to initialize"))
                                ));
                                break;
                            }
                        }
                    }
                    let Some(engine) = engine.as_mut() else { break };

                    let result = engine
                        .recognize(&path)
                        .map(|recognition| (index, recognition.spans))
                        .with_context(|| {
                            format!("Recognition failed for segment {index} ({})", path.display())
                        });
                    let failed = result.is_err();
                    let _ = result_tx.send(result);
                    if failed {
                        break;
                    }
                }
            });
        }
        drop(result_tx);
    });

    // All workers have joined; drain whatever they produced.
    let mut results = Vec::with_capacity(total);
    for result in result_rx {
        results.push(result?);
    }
    if results.len() != total {
        anyhow::bail!(
            "Recognition pool finished incomplete: {} of {} segments processed",
            results.len(),
            total
        );
    }
    Ok(results)
}

#[cfg(test)]
#[path = "pool_test.rs"]
mod tests;
