//! Media duration probe.
//!
//! Asks ffprobe for the total duration of a recording. The result is used
//! only for route selection, so a missing or non-numeric duration field is
//! treated as `0.0` rather than an error; a failed ffprobe invocation or
//! output that is not JSON at all is still fatal.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, warn};

#[derive(Debug, Deserialize, Default)]
struct ProbeOutput {
    #[serde(default)]
    format: ProbeFormat,
}

#[derive(Debug, Deserialize, Default)]
struct ProbeFormat {
    duration: Option<String>,
}

/// Return the duration of the media file at `path`, in seconds.
///
/// Invokes `ffprobe` once; no retries. A non-zero exit aborts the run.
pub async fn duration_secs(path: &Path) -> Result<f64> {
    let output = Command::new("ffprobe")
        .args(["-v", "error", "-show_entries", "format=duration", "-of", "json"])
        .arg(path)
        .output()
        .await
        .with_context(|| format!("Failed to run ffprobe on {}", path.display()))?;

    if !output.status.success() {
        anyhow::bail!(
            "ffprobe exited with {} for {}: {}",
            output.status,
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let duration = parse_duration(&output.stdout)
        .with_context(|| format!("Unparsable ffprobe output for {}", path.display()))?;
    debug!(path = %path.display(), duration_secs = duration, "Probed media duration");
    Ok(duration)
}

/// Extract the duration from ffprobe's JSON output.
///
/// Output that is not valid JSON is an error; a missing or non-numeric
/// duration field inside valid JSON defaults to 0.0.
fn parse_duration(stdout: &[u8]) -> Result<f64> {
    let probed: ProbeOutput = serde_json::from_slice(stdout)?;

    let duration = probed
        .format
        .duration
        .and_then(|d| {
            let parsed = d.parse::<f64>().ok();
            if parsed.is_none() {
                warn!(duration = %d, "Non-numeric duration field, assuming 0.0s");
            }
            parsed
        })
        .unwrap_or(0.0);
    Ok(duration)
}

#[cfg(test)]
#[path = "probe_test.rs"]
mod tests;
