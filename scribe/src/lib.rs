pub mod artifact;
pub mod config;
pub mod lexicon;
pub mod models;
pub mod pipeline;
pub mod pool;
pub mod probe;
pub mod recognize;
pub mod route;
pub mod sentiment;
pub mod split;
pub mod timeline;

use std::path::Path;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;
use crate::route::Route;

/// Application-specific environment variable for log filtering (overrides config).
const LOG_ENV_VAR: &str = "SCRIBE_LOG";

/// Entry point for the `scribe` binary: configures logging and runs the
/// pipeline on one recording.
pub async fn run(
    input: &Path,
    config_path: Option<&Path>,
    route_override: Option<Route>,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().unwrap_or_default(),
    };

    // SCRIBE_LOG env var overrides config file level
    let filter = EnvFilter::builder()
        .with_env_var(LOG_ENV_VAR)
        .with_default_directive(config.logging.level.as_directive().parse()?)
        .from_env()?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Route whisper.cpp and GGML logs through tracing instead of stderr
    if config.recognition.suppress_diagnostics {
        whisper_rs::install_logging_hooks();
    }

    anyhow::ensure!(input.is_file(), "File not found: {}", input.display());

    let outcome = pipeline::run(input, &config, route_override).await?;

    println!("Transcript: {}", outcome.artifacts.transcript.display());
    println!("Subtitles:  {}", outcome.artifacts.subtitles.display());
    Ok(())
}
