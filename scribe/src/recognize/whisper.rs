//! Whisper recognition backend.
//!
//! Uses whisper.cpp via whisper-rs for speech-to-text. Input files are
//! decoded to 16kHz mono f32 through an ffmpeg pipe, so any container or
//! codec ffmpeg understands can be recognized directly.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, WhisperState};

use super::{Recognition, RecognizedSpan, Recognizer};

/// Sample rate whisper.cpp expects.
const WHISPER_SAMPLE_RATE: &str = "16000";

/// Whisper speech-to-text recognizer.
///
/// The underlying WhisperContext is leaked intentionally - the model stays
/// loaded for the lifetime of the owning worker. This avoids complex
/// self-referential struct patterns while allowing the state to be reused
/// across recognitions.
pub struct WhisperRecognizer {
    state: WhisperState,
    language: Option<String>,
}

impl WhisperRecognizer {
    /// Create a new Whisper recognizer.
    ///
    /// # Arguments
    /// * `model_path` - Path to the Whisper GGML model file
    /// * `language` - Language code (e.g. "en", "de") or None for auto-detect
    pub fn new(model_path: impl AsRef<Path>, language: Option<String>) -> Result<Self> {
        debug!(
            path = %model_path.as_ref().display(),
            language = ?language,
            "Loading Whisper model"
        );

        let ctx = WhisperContext::new_with_params(
            model_path.as_ref().to_str().context("Invalid model path")?,
            WhisperContextParameters::default(),
        )
        .context("Failed to load Whisper model")?;

        // Box and leak the context to get a 'static reference; the model
        // stays loaded until the worker exits.
        let ctx_box = Box::new(ctx);
        let ctx_ref: &'static WhisperContext = Box::leak(ctx_box);

        let state = ctx_ref
            .create_state()
            .context("Failed to create Whisper state")?;

        debug!("Whisper model and state loaded");

        Ok(Self { state, language })
    }
}

impl Recognizer for WhisperRecognizer {
    fn recognize(&mut self, path: &Path) -> Result<Recognition> {
        let audio = decode_to_mono_f32(path)?;
        debug!(
            path = %path.display(),
            samples = audio.len(),
            duration_secs = audio.len() as f64 / 16000.0,
            "Recognizing audio with Whisper"
        );

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });

        if let Some(ref lang) = self.language {
            params.set_language(Some(lang));
        } else {
            params.set_language(None); // Auto-detect
        }

        // Keep engine chatter off stdout; diagnostics go through the
        // tracing hooks when enabled.
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        self.state
            .full(params, &audio)
            .context("Whisper inference failed")?;

        let num_segments = self.state.full_n_segments();
        let mut recognition = Recognition::default();

        for i in 0..num_segments {
            if let Some(segment) = self.state.get_segment(i) {
                if let Ok(text) = segment.to_str_lossy() {
                    // Engine timestamps are centiseconds relative to the file.
                    recognition.spans.push(RecognizedSpan {
                        start: segment.start_timestamp() as f64 / 100.0,
                        end: segment.end_timestamp() as f64 / 100.0,
                        text: text.to_string(),
                    });
                    recognition.text.push_str(&text);
                }
            }
        }

        debug!(
            spans = recognition.spans.len(),
            text_len = recognition.text.len(),
            "Recognition complete"
        );

        Ok(recognition)
    }
}

/// Decode any audio file to 16kHz mono f32 samples via an ffmpeg pipe.
fn decode_to_mono_f32(path: &Path) -> Result<Vec<f32>> {
    let output = Command::new("ffmpeg")
        .args(["-hide_banner", "-loglevel", "error", "-i"])
        .arg(path)
        .args(["-f", "f32le", "-ac", "1", "-ar", WHISPER_SAMPLE_RATE, "pipe:1"])
        .output()
        .with_context(|| format!("Failed to run ffmpeg decode on {}", path.display()))?;

    if !output.status.success() {
        anyhow::bail!(
            "ffmpeg decode exited with {} for {}: {}",
            output.status,
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let samples = output
        .stdout
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    Ok(samples)
}
