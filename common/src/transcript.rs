//! Transcript data model.
//!
//! A [`Chunk`] is one globally-timed utterance; a [`MergedTranscript`] is the
//! full-run result handed to the artifact writer and to downstream analysis.

use serde::{Deserialize, Serialize};

/// One recognized utterance on the global timeline of the source recording.
///
/// `start`/`end` are seconds from the beginning of the original audio file,
/// with `end >= start`. Chunks produced by a merge are ordered by `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Chunk {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Duration of the chunk in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// The merged result of one transcription run.
///
/// `chunks` is ordered chronologically; `text` is the concatenation of all
/// chunk texts. Immutable once returned by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedTranscript {
    pub text: String,
    pub chunks: Vec<Chunk>,
}

impl MergedTranscript {
    /// Total duration covered by the transcript (end of the last chunk).
    pub fn duration(&self) -> f64 {
        self.chunks.last().map_or(0.0, |c| c.end)
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
