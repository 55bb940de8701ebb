//! Keyword lexicons.
//!
//! Symptom/theme keyword sets used for transcript highlighting. The
//! pipeline treats a [`Lexicon`] as an opaque set of lowercase terms;
//! analysis collaborators can supply their own in place of the built-ins.

use std::collections::HashSet;

const DEPRESSION_TERMS: &[&str] = &[
    "depressed", "depressing", "hopeless", "sad", "down", "unhappy", "low", "numb", "empty",
    "worthless", "tired", "fatigued", "exhausted", "drained", "sluggish", "alone", "lonely",
    "ignored", "abandoned", "unloved", "invisible", "cry", "crying", "tears", "tearful",
    "overwhelmed", "burned out",
];

const HOPELESSNESS_TERMS: &[&str] = &[
    "hopeless", "helpless", "stuck", "trapped", "powerless", "despair", "desperate", "guilty",
    "useless", "broken", "failed", "failure", "pointless", "foggy", "giving up", "gave up",
    "rock bottom", "why bother",
];

const ANXIETY_TERMS: &[&str] = &[
    "anxious", "anxiety", "nervous", "worried", "panic", "afraid", "scared", "tense", "stressed",
    "worry", "concerned", "jitters", "restless", "jumpy", "lightheaded", "dizzy", "spiraling",
    "paranoid", "unsafe", "dreading",
];

const ADHD_TERMS: &[&str] = &[
    "distracted", "forgetful", "scattered", "restless", "fidgety", "impulsive", "procrastinate",
    "procrastinating", "unfocused", "zoning", "hyperfocus", "sidetracked", "disorganized",
];

const FILLER_TERMS: &[&str] = &[
    "um", "uh", "like", "literally", "basically", "actually", "whatever", "stuff", "things",
    "kinda", "sorta", "honestly",
];

/// An opaque set of lowercase keywords and phrases.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    terms: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from arbitrary terms; everything is lowercased.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The built-in union of all symptom/theme sets.
    ///
    /// Some entries are multi-word phrases ("burned out", "rock bottom",
    /// "giving up", "why bother"). The transcript highlighter matches one
    /// token at a time, so those phrases only match through
    /// [`Lexicon::contains`], never as highlights.
    pub fn builtin() -> Self {
        Self::from_terms(
            DEPRESSION_TERMS
                .iter()
                .chain(HOPELESSNESS_TERMS)
                .chain(ANXIETY_TERMS)
                .chain(ADHD_TERMS)
                .chain(FILLER_TERMS),
        )
    }

    /// Case-insensitive membership test for a single token or phrase.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(&term.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
#[path = "lexicon_test.rs"]
mod tests;
