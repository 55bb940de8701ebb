use super::*;

#[test]
fn test_parse_well_formed_duration() {
    let json = br#"{"format": {"duration": "250.333000"}}"#;
    assert!((parse_duration(json).unwrap() - 250.333).abs() < 1e-9);
}

#[test]
fn test_parse_missing_duration_field_defaults_to_zero() {
    let json = br#"{"format": {}}"#;
    assert!((parse_duration(json).unwrap() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_parse_missing_format_block_defaults_to_zero() {
    let json = br#"{}"#;
    assert!((parse_duration(json).unwrap() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_parse_non_numeric_duration_defaults_to_zero() {
    let json = br#"{"format": {"duration": "N/A"}}"#;
    assert!((parse_duration(json).unwrap() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_parse_non_json_output_is_error() {
    // Field-level leniency does not extend to output that is not JSON at
    // all; that means ffprobe misbehaved and the run must abort.
    assert!(parse_duration(b"not json at all").is_err());
    assert!(parse_duration(b"").is_err());
}

#[tokio::test]
async fn test_probe_nonexistent_tool_input_is_error() {
    // ffprobe may not exist in the test environment; either way this must
    // not succeed for a path that does not exist.
    let result = duration_secs(Path::new("/nonexistent/audio.mp3")).await;
    assert!(result.is_err());
}
