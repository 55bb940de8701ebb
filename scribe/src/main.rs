use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use interview_scribe::route::Route;

/// Transcribe an interview recording into an annotated transcript and
/// subtitle file.
#[derive(Parser)]
#[command(name = "scribe", version, about)]
struct Cli {
    /// Path to the audio file, e.g. audio_files/anxiety_1min.mp3
    audio_path: PathBuf,

    /// Alternate config file (default: ~/.config/interview-scribe/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Force a transcription route instead of duration-based selection
    #[arg(long, value_enum)]
    route: Option<RouteArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RouteArg {
    Fast,
    Segmented,
    Parallel,
}

impl From<RouteArg> for Route {
    fn from(route: RouteArg) -> Self {
        match route {
            RouteArg::Fast => Route::Fast,
            RouteArg::Segmented => Route::Segmented,
            RouteArg::Parallel => Route::Parallel,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    interview_scribe::run(
        &cli.audio_path,
        cli.config.as_deref(),
        cli.route.map(Into::into),
    )
    .await
}
