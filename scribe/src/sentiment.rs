//! Sentiment scoring.
//!
//! The pipeline consumes sentiment as an opaque capability; only the
//! compound score surfaces in the text artifact. The default implementation
//! wraps the VADER lexicon analyzer.

/// Polarity scores for one span of text.
///
/// `compound` is a single scalar in [-1, 1] summarizing polarity; the
/// others are the proportions of negative/neutral/positive content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Text polarity scorer.
pub trait SentimentScorer {
    /// Score one span of text. Infallible: unscorable text is neutral.
    fn score(&self, text: &str) -> SentimentScores;
}

/// VADER lexicon-based scorer.
pub struct VaderScorer {
    analyzer: vader_sentiment::SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: vader_sentiment::SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> SentimentScores {
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        SentimentScores {
            neg: get("neg"),
            neu: get("neu"),
            pos: get("pos"),
            compound: get("compound"),
        }
    }
}

#[cfg(test)]
#[path = "sentiment_test.rs"]
mod tests;
