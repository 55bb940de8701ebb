//! Configuration management for the transcription pipeline.
//!
//! Handles loading, saving, and providing defaults for the pipeline
//! configuration. Defaults mirror the tuning the pipeline was built around:
//! recordings up to two minutes go through the fast route, longer ones are
//! cut into five-minute segments, and the parallel route uses 30-second
//! chunks across up to four workers.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration struct for the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub recognition: RecognitionConfig,
    pub routing: RoutingConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Configuration for the speech recognition engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Speech recognition model to use.
    pub model: SpeechModel,
    /// Language to recognize, e.g. "en". Use "auto" for automatic detection.
    pub language: String,
    /// Route engine-internal diagnostics through tracing instead of stderr.
    pub suppress_diagnostics: bool,
}

/// Duration thresholds and segment lengths for route selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Durations up to this many seconds take the fast (whole-file) route.
    pub fast_threshold_secs: f64,
    /// Segment length for the segmented route, in seconds.
    pub segment_len_secs: u32,
    /// Chunk length for the parallel route, in seconds.
    pub parallel_chunk_secs: u32,
    /// Upper bound on parallel workers (further capped by hardware and job count).
    pub max_workers: usize,
}

/// Output artifact configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the transcript and subtitle files are written to.
    pub dir: PathBuf,
    /// Gap length considered notable silence, in seconds. Debug info only.
    pub silence_threshold_secs: f64,
}

/// Supported speech recognition models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SpeechModel {
    WhisperTiny,
    WhisperTinyEn,
    WhisperBase,
    WhisperBaseEn,
    #[default]
    WhisperSmall,
    WhisperSmallEn,
    WhisperMedium,
    WhisperMediumEn,
    WhisperLargeV3,
    WhisperLargeV3Turbo,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: LogLevel,
}

/// Log verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to a tracing filter directive string for this crate.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "interview_scribe=error",
            LogLevel::Warn => "interview_scribe=warn",
            LogLevel::Info => "interview_scribe=info",
            LogLevel::Debug => "interview_scribe=debug",
            LogLevel::Trace => "interview_scribe=trace",
        }
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            model: SpeechModel::default(),
            language: "en".to_string(),
            suppress_diagnostics: true,
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            fast_threshold_secs: 120.0,
            segment_len_secs: 300,
            parallel_chunk_secs: 30,
            max_workers: 4,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("transcripts"),
            silence_threshold_secs: 0.4,
        }
    }
}

impl Config {
    /// Returns the default config file path.
    /// `~/.config/interview-scribe/config.toml`
    pub fn config_path() -> Result<PathBuf> {
        interview_scribe_common::dirs::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from the default path.
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file as TOML")
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
