//! Shared types and utilities for interview-scribe.
//!
//! Downstream analysis stages depend on the `{start, end, text}` record
//! shape defined in [`transcript`]; keep it stable.

pub mod dirs;
pub mod transcript;

pub use transcript::{Chunk, MergedTranscript};
