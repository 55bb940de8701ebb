//! Transcription pipeline orchestration.
//!
//! Wires the run together: probe the duration, select a route, split long
//! recordings into segments, dispatch segments to one or more recognition
//! workers, merge the per-segment results onto the global timeline, and
//! write the output artifacts.
//!
//! All three routes share one split/dispatch/merge path; they differ only
//! in the [`RouteProfile`] the selector resolves. Failure is
//! all-or-nothing: a run either produces a complete transcript plus both
//! artifacts, or nothing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use interview_scribe_common::MergedTranscript;
use tokio::task;
use tracing::{debug, info};

use crate::artifact::{self, ArtifactPaths};
use crate::config::{Config, RoutingConfig};
use crate::lexicon::Lexicon;
use crate::models::ModelManager;
use crate::pool;
use crate::probe;
use crate::recognize::{RecognizedSpan, Recognizer, WhisperRecognizer};
use crate::route::{Route, RouteProfile, select_route};
use crate::sentiment::VaderScorer;
use crate::split::{self, SplitWorkspace};
use crate::timeline;

/// Result of one pipeline run.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// The merged transcript handed to downstream analysis.
    pub transcript: MergedTranscript,
    /// Where the artifacts were written.
    pub artifacts: ArtifactPaths,
}

/// Run the full pipeline on one recording.
///
/// The route is chosen from the probed duration unless `route_override`
/// forces one (the parallel route is only reachable this way).
pub async fn run(
    input: &Path,
    config: &Config,
    route_override: Option<Route>,
) -> Result<PipelineOutcome> {
    let duration = probe::duration_secs(input).await?;
    let selected = route_override
        .unwrap_or_else(|| select_route(duration, config.routing.fast_threshold_secs));
    info!(
        input = %input.display(),
        duration_secs = duration,
        route = ?selected,
        "Starting transcription run"
    );

    let model_path = ModelManager::new()?
        .ensure_model(config.recognition.model)
        .await?;
    let language = match config.recognition.language.as_str() {
        "auto" => None,
        lang => Some(lang.to_string()),
    };
    let factory = move || WhisperRecognizer::new(&model_path, language.clone());

    let transcript = transcribe_with(input, selected, &config.routing, factory).await?;

    let artifacts = artifact::write_artifacts(
        input,
        &transcript,
        &Lexicon::builtin(),
        &VaderScorer::new(),
        &config.output,
    )?;

    info!(chunks = transcript.chunks.len(), "Transcription run complete");
    Ok(PipelineOutcome {
        transcript,
        artifacts,
    })
}

/// Transcribe one recording along `selected`, building engines from
/// `factory`. Generic over the recognizer so tests can inject fakes.
pub async fn transcribe_with<R, F>(
    input: &Path,
    selected: Route,
    routing: &RoutingConfig,
    factory: F,
) -> Result<MergedTranscript>
where
    R: Recognizer + 'static,
    F: Fn() -> Result<R> + Send + Sync + 'static,
{
    match selected.profile(routing) {
        // Fast route: one whole-file recognition call, no splitting.
        None => {
            let path = input.to_path_buf();
            let recognition = task::spawn_blocking(move || {
                let mut engine = factory()?;
                engine.recognize(&path)
            })
            .await
            .context("Recognition task panicked")??;
            Ok(timeline::from_whole_file(recognition))
        }
        Some(profile) => {
            // The workspace guard deletes the segment files once results
            // are collected, on success and on error alike.
            let workspace = SplitWorkspace::create()?;
            let segments = split::split_into_segments(input, &profile, workspace.path()).await?;
            dispatch(segments, profile, factory).await
        }
    }
}

/// Recognize the segment files and merge the results onto the global
/// timeline. Sequential for single-worker profiles, pooled otherwise.
pub(crate) async fn dispatch<R, F>(
    segments: Vec<PathBuf>,
    profile: RouteProfile,
    factory: F,
) -> Result<MergedTranscript>
where
    R: Recognizer + 'static,
    F: Fn() -> Result<R> + Send + Sync + 'static,
{
    let jobs: Vec<(usize, PathBuf)> = segments.into_iter().enumerate().collect();
    let results = task::spawn_blocking(move || {
        if profile.workers > 1 {
            pool::run_pool(jobs, profile.workers, factory)
        } else {
            recognize_sequential(jobs, &factory)
        }
    })
    .await
    .context("Recognition task panicked")??;

    Ok(timeline::merge(results, profile.segment_len))
}

/// Drive all segments through one engine, in index order, with progress
/// feedback after each segment. Engine load cost is paid once per run.
fn recognize_sequential<R, F>(
    jobs: Vec<(usize, PathBuf)>,
    factory: &F,
) -> Result<Vec<(usize, Vec<RecognizedSpan>)>>
where
    R: Recognizer,
    F: Fn() -> Result<R>,
{
    let mut engine = factory()?;

    let progress = ProgressBar::new(jobs.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("Transcribing segments [{bar:40}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut results = Vec::with_capacity(jobs.len());
    for (index, path) in jobs {
        debug!(segment = index, path = %path.display(), "Recognizing segment");
        let recognition = engine
            .recognize(&path)
            .with_context(|| format!("Recognition failed for segment {index} ({})", path.display()))?;
        results.push((index, recognition.spans));
        progress.inc(1);
    }
    progress.finish_and_clear();
    Ok(results)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
