use super::*;
use crate::recognize::Recognition;
use std::time::Duration;

/// Fake engine emitting one fixed span per file, optionally stalling so
/// parallel completion order differs from segment order.
struct FakeRecognizer {
    delay_per_call: Duration,
}

impl Recognizer for FakeRecognizer {
    fn recognize(&mut self, path: &Path) -> Result<Recognition> {
        // Later segments finish first when delays are staggered by the
        // pool's pickup order; content is independent of the file.
        std::thread::sleep(self.delay_per_call);
        let _ = path;
        Ok(Recognition {
            text: "hello".to_string(),
            spans: vec![RecognizedSpan {
                start: 1.0,
                end: 2.0,
                text: "hello".to_string(),
            }],
        })
    }
}

fn fake_segments(n: usize) -> Vec<PathBuf> {
    (0..n)
        .map(|i| PathBuf::from(format!("/tmp/fake/chunk_{i:03}.wav")))
        .collect()
}

fn fake_factory(delay_ms: u64) -> impl Fn() -> Result<FakeRecognizer> + Send + Sync + 'static {
    move || {
        Ok(FakeRecognizer {
            delay_per_call: Duration::from_millis(delay_ms),
        })
    }
}

#[tokio::test]
async fn test_sequential_dispatch_end_to_end_offsets() {
    // 250s of audio cut into three 100s segments, each recognizing a
    // single 1.0-2.0s "hello" span.
    let profile = RouteProfile {
        segment_len: 100,
        reencode: false,
        workers: 1,
    };

    let merged = dispatch(fake_segments(3), profile, fake_factory(0)).await.unwrap();

    let starts: Vec<f64> = merged.chunks.iter().map(|c| c.start).collect();
    let ends: Vec<f64> = merged.chunks.iter().map(|c| c.end).collect();
    assert_eq!(starts, vec![1.0, 101.0, 201.0]);
    assert_eq!(ends, vec![2.0, 102.0, 202.0]);
    assert_eq!(merged.text, "hello hello hello ");
}

#[tokio::test]
async fn test_parallel_dispatch_is_chronological_regardless_of_completion() {
    let profile = RouteProfile {
        segment_len: 100,
        reencode: true,
        workers: 4,
    };

    let merged = dispatch(fake_segments(3), profile, fake_factory(10)).await.unwrap();

    let starts: Vec<f64> = merged.chunks.iter().map(|c| c.start).collect();
    assert_eq!(starts, vec![1.0, 101.0, 201.0]);
}

#[tokio::test]
async fn test_dispatch_no_segments_yields_empty_transcript() {
    let profile = RouteProfile {
        segment_len: 300,
        reencode: false,
        workers: 1,
    };

    let merged = dispatch(Vec::new(), profile, fake_factory(0)).await.unwrap();
    assert!(merged.is_empty());
}

#[tokio::test]
async fn test_sequential_factory_failure_aborts_run() {
    let profile = RouteProfile {
        segment_len: 100,
        reencode: false,
        workers: 1,
    };

    let result = dispatch(fake_segments(2), profile, || -> Result<FakeRecognizer> {
        anyhow::bail!("model missing")
    })
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_parallel_factory_failure_aborts_run() {
    let profile = RouteProfile {
        segment_len: 30,
        reencode: true,
        workers: 4,
    };

    let result = dispatch(fake_segments(4), profile, || -> Result<FakeRecognizer> {
        anyhow::bail!("model missing")
    })
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_fast_route_recognizes_whole_file_without_splitting() {
    // A fast-route transcript comes straight from one recognition call; the
    // input path never needs to exist on disk for the fake engine.
    let routing = RoutingConfig::default();

    let merged = transcribe_with(
        Path::new("/tmp/fake/whole.mp3"),
        Route::Fast,
        &routing,
        fake_factory(0),
    )
    .await
    .unwrap();

    assert_eq!(merged.chunks.len(), 1);
    assert_eq!(merged.chunks[0].start, 1.0);
    assert_eq!(merged.text, "hello");
}
