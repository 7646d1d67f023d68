//! Sentiment scoring
//!
//! [`VaderScorer`] wraps the VADER lexicon scorer. Its `compound` score is
//! used as polarity; subjectivity is the share of sentiment-bearing mass
//! (`pos + neg`), so purely factual text scores zero on both.

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::types::Sentiment;

/// Text to `(polarity, subjectivity)` scoring capability
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Sentiment;
}

pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl std::fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaderScorer").finish_non_exhaustive()
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> Sentiment {
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        Sentiment::new(get("compound"), get("pos") + get("neg"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let s = VaderScorer::new().score("I love this wonderful, amazing product!");
        assert!(s.polarity > 0.5);
        assert!(s.subjectivity > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let s = VaderScorer::new().score("This is a terrible, awful experience.");
        assert!(s.polarity < -0.5);
    }

    #[test]
    fn test_factual_text() {
        let s = VaderScorer::new().score("The table is made of wood.");
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 0.0);
    }

    #[test]
    fn test_ranges() {
        let scorer = VaderScorer::new();
        for text in ["", "Great great great!!!", "No. Never. Horrible."] {
            let s = scorer.score(text);
            assert!((-1.0..=1.0).contains(&s.polarity));
            assert!((0.0..=1.0).contains(&s.subjectivity));
        }
    }
}
