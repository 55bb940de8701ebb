//! Artifact generation.
//!
//! Renders a merged transcript into two files: an annotated text transcript
//! meant for manual speaker labeling (keyword highlights, silence gaps,
//! per-chunk sentiment) and a standard SRT subtitle file. Both renderings
//! are deterministic; re-running overwrites the previous output
//! byte-for-byte.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use interview_scribe_common::{Chunk, MergedTranscript};
use regex::Regex;
use tracing::{debug, info};

use crate::config::OutputConfig;
use crate::lexicon::Lexicon;
use crate::sentiment::SentimentScorer;

/// Paths of the written artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub transcript: PathBuf,
    pub subtitles: PathBuf,
}

/// Write both artifacts for `transcript` into `output.dir`.
///
/// The output base name is the source file's stem with spaces replaced by
/// underscores.
pub fn write_artifacts(
    input: &Path,
    transcript: &MergedTranscript,
    lexicon: &Lexicon,
    scorer: &dyn SentimentScorer,
    output: &OutputConfig,
) -> Result<ArtifactPaths> {
    std::fs::create_dir_all(&output.dir)
        .with_context(|| format!("Failed to create output directory {}", output.dir.display()))?;

    let base = artifact_base_name(input);
    let paths = ArtifactPaths {
        transcript: output.dir.join(format!("{base}.txt")),
        subtitles: output.dir.join(format!("{base}.srt")),
    };

    let gaps = silence_gaps(&transcript.chunks);
    let notable = gaps.iter().filter(|g| **g > output.silence_threshold_secs).count();
    debug!(
        chunks = transcript.chunks.len(),
        notable_gaps = notable,
        threshold_secs = output.silence_threshold_secs,
        "Computed silence gaps"
    );

    let txt = render_annotated(transcript, &gaps, lexicon, scorer);
    std::fs::write(&paths.transcript, txt)
        .with_context(|| format!("Failed to write {}", paths.transcript.display()))?;

    let srt = render_subtitles(transcript);
    std::fs::write(&paths.subtitles, srt)
        .with_context(|| format!("Failed to write {}", paths.subtitles.display()))?;

    info!(
        transcript = %paths.transcript.display(),
        subtitles = %paths.subtitles.display(),
        "Wrote artifacts"
    );
    Ok(paths)
}

/// Source file stem with spaces replaced by underscores.
fn artifact_base_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().replace(' ', "_"))
        .unwrap_or_else(|| "transcript".to_string())
}

/// Gap in seconds before each chunk; the first chunk's gap is measured
/// from 0.0.
fn silence_gaps(chunks: &[Chunk]) -> Vec<f64> {
    let mut gaps = Vec::with_capacity(chunks.len());
    let mut prev_end = 0.0;
    for chunk in chunks {
        gaps.push(chunk.start - prev_end);
        prev_end = chunk.end;
    }
    gaps
}

/// Render the annotated text transcript: debug header plus one line per
/// chunk with a manual speaker slot.
fn render_annotated(
    transcript: &MergedTranscript,
    gaps: &[f64],
    lexicon: &Lexicon,
    scorer: &dyn SentimentScorer,
) -> String {
    let highlighter = Highlighter::new();
    let mut out = String::new();

    out.push_str("## ---- DEBUG INFO (chunk gaps) ----\n");
    let mut prev_end = 0.0;
    for (idx, chunk) in transcript.chunks.iter().enumerate() {
        let _ = writeln!(
            out,
            "## Chunk {idx}: start={:.2}s, prev_end={prev_end:.2}s, gap={:.2}s",
            chunk.start, gaps[idx]
        );
        prev_end = chunk.end;
    }
    out.push_str("\n## ---- TRANSCRIPT (fill in speakers) ----\n\n");

    for (idx, chunk) in transcript.chunks.iter().enumerate() {
        let compound = scorer.score(&chunk.text).compound;
        let highlighted = highlighter.highlight(&chunk.text, lexicon);
        let _ = writeln!(
            out,
            "[{} - {}] [SPEAKER?] [SILENCE: {:.2}s] [SENT: {compound:+.2}] {highlighted}",
            fmt_clock(chunk.start),
            fmt_clock(chunk.end),
            gaps[idx]
        );
    }
    out
}

/// Render the SRT subtitle file: raw chunk text, no highlighting.
fn render_subtitles(transcript: &MergedTranscript) -> String {
    let mut out = String::new();
    for (idx, chunk) in transcript.chunks.iter().enumerate() {
        let _ = write!(
            out,
            "{}\n{} --> {}\n{}\n\n",
            idx + 1,
            fmt_srt_timestamp(chunk.start),
            fmt_srt_timestamp(chunk.end),
            chunk.text
        );
    }
    out
}

/// `MM:SS` from whole seconds (floor).
fn fmt_clock(t: f64) -> String {
    let total = t.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// `HH:MM:SS,mmm` for SRT timestamps.
///
/// Works from total rounded milliseconds so sub-millisecond rounding
/// carries into the seconds field instead of producing `,1000`.
fn fmt_srt_timestamp(t: f64) -> String {
    let total_ms = (t.max(0.0) * 1000.0).round() as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02},{ms:03}")
}

/// Wraps lexicon tokens in `**` markers.
///
/// Tokens are word runs (including apostrophes); matching is
/// case-insensitive and ignores surrounding punctuation.
struct Highlighter {
    word_re: Regex,
}

impl Highlighter {
    fn new() -> Self {
        Self {
            word_re: Regex::new(r"[\w'’]+").expect("valid word regex"),
        }
    }

    fn highlight(&self, text: &str, lexicon: &Lexicon) -> String {
        self.word_re
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let word = &caps[0];
                if lexicon.contains(word) {
                    format!("**{word}**")
                } else {
                    word.to_string()
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
#[path = "artifact_test.rs"]
mod tests;
