//! Model download and management.
//!
//! Handles automatic downloading of Whisper GGML models on first run.

use anyhow::{Context, Result};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::config::SpeechModel;

const WHISPER_BASE_URL: &str = "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";

/// Metadata for a downloadable model.
struct ModelInfo {
    /// Filename to save as.
    filename: &'static str,
    /// Expected file size for validation.
    size_bytes: u64,
}

impl ModelInfo {
    fn url(&self) -> String {
        format!("{}/{}", WHISPER_BASE_URL, self.filename)
    }
}

fn model_info(model: SpeechModel) -> ModelInfo {
    let (filename, size_bytes) = match model {
        SpeechModel::WhisperTiny => ("ggml-tiny.bin", 77_691_713),
        SpeechModel::WhisperTinyEn => ("ggml-tiny.en.bin", 77_704_715),
        SpeechModel::WhisperBase => ("ggml-base.bin", 147_951_465),
        SpeechModel::WhisperBaseEn => ("ggml-base.en.bin", 147_964_211),
        SpeechModel::WhisperSmall => ("ggml-small.bin", 487_601_967),
        SpeechModel::WhisperSmallEn => ("ggml-small.en.bin", 487_614_201),
        SpeechModel::WhisperMedium => ("ggml-medium.bin", 1_533_774_781),
        SpeechModel::WhisperMediumEn => ("ggml-medium.en.bin", 1_533_774_781),
        SpeechModel::WhisperLargeV3 => ("ggml-large-v3.bin", 3_094_623_691),
        SpeechModel::WhisperLargeV3Turbo => ("ggml-large-v3-turbo.bin", 1_624_592_891),
    };
    ModelInfo {
        filename,
        size_bytes,
    }
}

/// Manages model downloads and storage.
pub struct ModelManager {
    models_dir: PathBuf,
}

impl ModelManager {
    /// Create a new ModelManager using the default models directory.
    ///
    /// Default: `~/.local/share/interview-scribe/models/`
    pub fn new() -> Result<Self> {
        Ok(Self {
            models_dir: interview_scribe_common::dirs::models_dir()?,
        })
    }

    /// Create a ModelManager with a custom models directory.
    pub fn with_dir(models_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: models_dir.into(),
        }
    }

    /// Get the models directory path.
    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    /// Ensure the model is available, downloading if necessary.
    ///
    /// Returns the path to the model file.
    pub async fn ensure_model(&self, model: SpeechModel) -> Result<PathBuf> {
        let info = model_info(model);
        let model_path = self.models_dir.join(info.filename);

        if model_path.exists() {
            let metadata = fs::metadata(&model_path)
                .await
                .context("Failed to read model metadata")?;
            if metadata.len() == info.size_bytes {
                debug!(path = %model_path.display(), "Model already exists");
                return Ok(model_path);
            }
            warn!(
                model = ?model,
                expected = info.size_bytes,
                actual = metadata.len(),
                "Model size mismatch, re-downloading"
            );
            fs::remove_file(&model_path)
                .await
                .context("Failed to remove corrupted model")?;
        }

        self.download_model(&info, &model_path).await?;
        Ok(model_path)
    }

    /// Download a model from its URL, streaming to a temporary file that is
    /// renamed into place once complete.
    async fn download_model(&self, info: &ModelInfo, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create models directory")?;
        }

        let url = info.url();
        info!(url = %url, dest = %dest.display(), "Downloading model");

        let response = reqwest::get(&url)
            .await
            .with_context(|| format!("Failed to download model from {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to download model: HTTP {}", response.status());
        }

        let progress = ProgressBar::new(info.size_bytes);
        progress.set_style(
            ProgressStyle::with_template("{msg} [{bar:40}] {bytes}/{total_bytes} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        progress.set_message(info.filename);

        let temp_path = dest.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)
            .await
            .context("Failed to create temporary model file")?;

        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.context("Failed to read download stream")?;
            file.write_all(&chunk)
                .await
                .context("Failed to write model file")?;
            downloaded += chunk.len() as u64;
            progress.set_position(downloaded);
        }
        file.sync_all().await.context("Failed to sync model file")?;
        progress.finish_and_clear();

        if downloaded != info.size_bytes {
            let _ = fs::remove_file(&temp_path).await;
            anyhow::bail!(
                "Downloaded model size mismatch: expected {}, got {}",
                info.size_bytes,
                downloaded
            );
        }

        fs::rename(&temp_path, dest)
            .await
            .context("Failed to finalize model file")?;

        info!(path = %dest.display(), size = downloaded, "Model downloaded");
        Ok(())
    }
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
