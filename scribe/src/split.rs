//! Audio segmentation.
//!
//! Cuts a recording into fixed-length on-disk segments with ffmpeg. Segment
//! files are named `chunk_%03d.wav` so lexical sort order equals
//! chronological order. Each run gets its own uniquely named workspace
//! directory, removed when the [`SplitWorkspace`] guard drops - on both the
//! success and failure paths the orchestrator reaches.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;
use tokio::process::Command;
use tracing::{debug, info};

use crate::route::RouteProfile;

/// Sample rate the re-encode profile normalizes to.
const REENCODE_SAMPLE_RATE: &str = "16000";

/// Owns the temporary directory holding one run's segment files.
#[derive(Debug)]
pub struct SplitWorkspace {
    dir: TempDir,
}

impl SplitWorkspace {
    /// Create a fresh, uniquely named workspace directory.
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("scribe-split-")
            .tempdir()
            .context("Failed to create split workspace")?;
        debug!(path = %dir.path().display(), "Created split workspace");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Split `input` into fixed-length segments inside `workdir`.
///
/// Returns the segment paths in chronological order. The codec-copy profile
/// is a fast lossless cut; the re-encode profile additionally downmixes to
/// mono at 16kHz, trading fidelity for smaller recognition-friendly inputs.
pub async fn split_into_segments(
    input: &Path,
    profile: &RouteProfile,
    workdir: &Path,
) -> Result<Vec<PathBuf>> {
    let segment_time = profile.segment_len.to_string();
    let pattern = workdir.join("chunk_%03d.wav");

    let mut cmd = Command::new("ffmpeg");
    cmd.args(["-hide_banner", "-loglevel", "error", "-i"]).arg(input);
    if profile.reencode {
        cmd.args(["-ac", "1", "-ar", REENCODE_SAMPLE_RATE]);
    }
    cmd.args(["-f", "segment", "-segment_time", &segment_time]);
    if profile.reencode {
        cmd.args(["-c:a", "pcm_s16le"]);
    } else {
        cmd.args(["-c", "copy"]);
    }
    cmd.arg(&pattern);

    let output = cmd
        .output()
        .await
        .with_context(|| format!("Failed to run ffmpeg on {}", input.display()))?;

    if !output.status.success() {
        anyhow::bail!(
            "ffmpeg segmentation exited with {} for {}: {}",
            output.status,
            input.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let segments = collect_segments(workdir)?;
    info!(
        input = %input.display(),
        segments = segments.len(),
        segment_len_secs = profile.segment_len,
        reencode = profile.reencode,
        "Split audio into segments"
    );
    Ok(segments)
}

/// List the `chunk_*.wav` files in `workdir`, lexically sorted.
fn collect_segments(workdir: &Path) -> Result<Vec<PathBuf>> {
    let mut segments: Vec<PathBuf> = std::fs::read_dir(workdir)
        .with_context(|| format!("Failed to read workspace {}", workdir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("chunk_") && n.ends_with(".wav"))
        })
        .collect();
    segments.sort();
    Ok(segments)
}

#[cfg(test)]
#[path = "split_test.rs"]
mod tests;
