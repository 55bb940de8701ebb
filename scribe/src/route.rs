//! Route selection.
//!
//! Maps a recording's duration onto one of the fixed transcription
//! strategies. The routes differ only in segment length, re-encode profile,
//! and worker count, so each resolves to a [`RouteProfile`] consumed by one
//! generic split/dispatch/merge routine in the pipeline.

use crate::config::RoutingConfig;

/// Transcription strategy for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Single whole-file recognition call, no splitting.
    Fast,
    /// Fixed-length codec-copy segments, recognized sequentially.
    Segmented,
    /// Short mono/16kHz chunks recognized by a worker pool.
    ///
    /// Not selected by the duration dispatcher; callers opt in explicitly.
    Parallel,
}

/// Splitter and dispatch parameters for a selected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteProfile {
    /// Nominal segment length in seconds.
    pub segment_len: u32,
    /// Downmix to mono and resample to 16kHz while cutting.
    pub reencode: bool,
    /// Upper bound on concurrent recognition workers.
    pub workers: usize,
}

/// Select a route from the probed duration. Boundary inclusive: a duration
/// exactly at the threshold still takes the fast route.
pub fn select_route(duration_secs: f64, threshold_secs: f64) -> Route {
    if duration_secs <= threshold_secs {
        Route::Fast
    } else {
        Route::Segmented
    }
}

impl Route {
    /// Resolve this route to splitter/dispatch parameters.
    ///
    /// `Fast` has no profile - it never splits.
    pub fn profile(self, routing: &RoutingConfig) -> Option<RouteProfile> {
        match self {
            Route::Fast => None,
            Route::Segmented => Some(RouteProfile {
                segment_len: routing.segment_len_secs,
                reencode: false,
                workers: 1,
            }),
            Route::Parallel => Some(RouteProfile {
                segment_len: routing.parallel_chunk_secs,
                reencode: true,
                workers: routing.max_workers,
            }),
        }
    }
}

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;
