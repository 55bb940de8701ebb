//! Speech recognition.
//!
//! This module provides a trait abstraction for recognition backends and an
//! implementation on whisper.cpp. The pipeline only depends on the trait;
//! backends are treated as opaque engines that turn an audio file into
//! timed text spans.

use std::path::Path;

use anyhow::Result;

mod whisper;

pub use whisper::WhisperRecognizer;

/// One utterance returned by the engine, timed relative to the recognized
/// file (not the global recording timeline).
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedSpan {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Engine output for one audio file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recognition {
    /// Full recognized text.
    pub text: String,
    /// Per-utterance spans in chronological order.
    pub spans: Vec<RecognizedSpan>,
}

/// Speech-to-text engine.
///
/// Instances are not shareable across concurrent callers; each worker owns
/// its own. Loading is expected to be expensive, so callers reuse one
/// instance across many files where possible.
pub trait Recognizer: Send {
    /// Recognize the audio file at `path`.
    fn recognize(&mut self, path: &Path) -> Result<Recognition>;
}
