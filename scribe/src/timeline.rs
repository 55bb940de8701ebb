//! Timeline merging.
//!
//! Corrects per-segment recognition timestamps back onto the global
//! timeline of the source recording and folds them into one
//! [`MergedTranscript`]. A span from segment `i` is shifted by
//! `i * segment_len` seconds.
//!
//! This is purely a fold over ordered input: no cross-segment smoothing,
//! deduplication, or boundary merging happens here. An utterance that
//! straddles a segment boundary stays two distinct chunks - a known
//! fidelity limitation, accepted rather than silently corrected.

use interview_scribe_common::{Chunk, MergedTranscript};

use crate::recognize::{Recognition, RecognizedSpan};

/// Merge per-segment recognition results into one global transcript.
///
/// `results` may arrive in any order (parallel workers complete
/// non-deterministically); global order is reconstructed from the segment
/// index, never from arrival order.
pub fn merge(
    mut results: Vec<(usize, Vec<RecognizedSpan>)>,
    segment_len_secs: u32,
) -> MergedTranscript {
    results.sort_by_key(|(index, _)| *index);

    let mut merged = MergedTranscript::default();
    for (index, spans) in results {
        let offset = index as f64 * f64::from(segment_len_secs);
        for span in spans {
            let text = span.text.trim();
            merged.chunks.push(Chunk::new(span.start + offset, span.end + offset, text));
            merged.text.push_str(text);
            merged.text.push(' ');
        }
    }
    merged
}

/// Build a transcript from a single whole-file recognition (fast route).
///
/// No offsets apply; the engine's own full text is kept verbatim.
pub fn from_whole_file(recognition: Recognition) -> MergedTranscript {
    MergedTranscript {
        text: recognition.text.trim().to_string(),
        chunks: recognition
            .spans
            .into_iter()
            .map(|span| {
                let text = span.text.trim().to_string();
                Chunk::new(span.start, span.end, text)
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "timeline_test.rs"]
mod tests;
