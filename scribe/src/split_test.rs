use super::*;

#[test]
fn test_workspace_is_unique_and_removed_on_drop() {
    let ws1 = SplitWorkspace::create().unwrap();
    let ws2 = SplitWorkspace::create().unwrap();
    assert_ne!(ws1.path(), ws2.path());

    let path = ws1.path().to_path_buf();
    assert!(path.is_dir());
    drop(ws1);
    assert!(!path.exists());
}

#[test]
fn test_workspace_removed_even_when_populated() {
    let ws = SplitWorkspace::create().unwrap();
    let path = ws.path().to_path_buf();
    std::fs::write(path.join("chunk_000.wav"), b"leftover").unwrap();
    drop(ws);
    assert!(!path.exists());
}

#[test]
fn test_collect_segments_sorts_lexically() {
    let ws = SplitWorkspace::create().unwrap();
    // Created deliberately out of order
    for name in ["chunk_002.wav", "chunk_000.wav", "chunk_010.wav", "chunk_001.wav"] {
        std::fs::write(ws.path().join(name), b"").unwrap();
    }

    let segments = collect_segments(ws.path()).unwrap();
    let names: Vec<_> = segments
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();

    assert_eq!(
        names,
        ["chunk_000.wav", "chunk_001.wav", "chunk_002.wav", "chunk_010.wav"]
    );
}

#[test]
fn test_collect_segments_ignores_unrelated_files() {
    let ws = SplitWorkspace::create().unwrap();
    std::fs::write(ws.path().join("chunk_000.wav"), b"").unwrap();
    std::fs::write(ws.path().join("notes.txt"), b"").unwrap();
    std::fs::write(ws.path().join("other_000.wav"), b"").unwrap();

    let segments = collect_segments(ws.path()).unwrap();
    assert_eq!(segments.len(), 1);
    assert!(segments[0].ends_with("chunk_000.wav"));
}

#[tokio::test]
async fn test_split_missing_input_is_error() {
    let ws = SplitWorkspace::create().unwrap();
    let profile = RouteProfile {
        segment_len: 300,
        reencode: false,
        workers: 1,
    };

    let result =
        split_into_segments(Path::new("/nonexistent/audio.mp3"), &profile, ws.path()).await;
    assert!(result.is_err());
}
