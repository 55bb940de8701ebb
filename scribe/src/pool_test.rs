use super::*;
use crate::recognize::Recognition;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Recognizer that fabricates one span per file without touching the audio.
struct StubRecognizer {
    delay: Duration,
}

impl Recognizer for StubRecognizer {
    fn recognize(&mut self, path: &Path) -> anyhow::Result<Recognition> {
        std::thread::sleep(self.delay);
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        Ok(Recognition {
            text: name.clone(),
            spans: vec![RecognizedSpan {
                start: 1.0,
                end: 2.0,
                text: name,
            }],
        })
    }
}

struct FailingRecognizer;

impl Recognizer for FailingRecognizer {
    fn recognize(&mut self, _path: &Path) -> anyhow::Result<Recognition> {
        anyhow::bail!("engine exploded")
    }
}

fn jobs(n: usize) -> Vec<(usize, PathBuf)> {
    (0..n)
        .map(|i| (i, PathBuf::from(format!("/tmp/chunk_{i:03}.wav"))))
        .collect()
}

#[test]
fn test_empty_job_list_yields_empty_results() {
    let results =
        run_pool(Vec::new(), 4, || Ok(StubRecognizer { delay: Duration::ZERO })).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_all_jobs_processed_exactly_once() {
    let results = run_pool(jobs(9), 3, || Ok(StubRecognizer { delay: Duration::ZERO })).unwrap();

    assert_eq!(results.len(), 9);
    let mut indices: Vec<_> = results.iter().map(|(i, _)| *i).collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..9).collect::<Vec<_>>());
}

#[test]
fn test_engines_initialized_lazily_at_most_one_per_worker() {
    let instances = AtomicUsize::new(0);
    let results = run_pool(jobs(8), 4, || {
        instances.fetch_add(1, Ordering::SeqCst);
        Ok(StubRecognizer {
            delay: Duration::from_millis(5),
        })
    })
    .unwrap();

    assert_eq!(results.len(), 8);
    let created = instances.load(Ordering::SeqCst);
    assert!(created >= 1);
    assert!(created <= worker_count(4, 8));
}

#[test]
fn test_single_worker_failure_fails_the_run() {
    let result = run_pool(jobs(5), 2, || Ok(FailingRecognizer));
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("engine exploded"));
}

#[test]
fn test_factory_failure_fails_the_run() {
    let result = run_pool(jobs(3), 2, || -> anyhow::Result<StubRecognizer> {
        anyhow::bail!("no model on disk")
    });
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("no model on disk"));
}

#[test]
fn test_worker_count_caps() {
    assert_eq!(worker_count(4, 2), 2); // capped by job count
    assert_eq!(worker_count(0, 10), 1); // degenerate config still gets one worker
    let hardware = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    assert!(worker_count(64, 64) <= hardware.min(64));
}
