//! Local offline sentiment analyzer
//!
//! Stands in for an on-device sentiment model when no sentiment backend is
//! configured. Lexicon-based: counts finance-flavored positive and negative
//! terms over a truncated prefix of the text and produces a label plus a
//! confidence score. Deterministic and allocation-light.

use crate::error::{Result, ServiceError};
use crate::models::{Sentiment, SentimentLabel};

/// Only this many leading characters are classified, matching the input
/// window of the model this replaces.
pub const CLASSIFY_PREFIX_CHARS: usize = 512;

/// Static keyword lists — zero allocation
const POSITIVE_TERMS: &[&str] = &[
    "save", "saving", "savings", "surplus", "growth", "improve", "improving",
    "on track", "excellent", "good", "healthy", "profit", "gain", "reduced",
    "under budget", "paid off",
];

const NEGATIVE_TERMS: &[&str] = &[
    "debt", "overdraft", "overdue", "late fee", "missed", "deficit",
    "overspending", "over budget", "loss", "struggling", "arrears",
    "declined", "penalty",
];

/// Lexicon-backed classifier used for the middle tier of document analysis.
pub struct LocalSentimentAnalyzer;

impl LocalSentimentAnalyzer {
    /// Load the analyzer. Kept fallible to mirror the backend model's load
    /// path; callers treat failure as "tier unavailable", not an error.
    pub fn load() -> Result<Self> {
        if POSITIVE_TERMS.is_empty() || NEGATIVE_TERMS.is_empty() {
            return Err(ServiceError::LocalModelUnavailable(
                "sentiment lexicon is empty".to_string(),
            ));
        }
        Ok(Self)
    }

    /// Classify a piece of text. Only the first [`CLASSIFY_PREFIX_CHARS`]
    /// characters are considered.
    pub fn classify(&self, text: &str) -> Sentiment {
        let prefix: String = text.chars().take(CLASSIFY_PREFIX_CHARS).collect();
        let lowered = prefix.to_lowercase();

        let positive = POSITIVE_TERMS
            .iter()
            .filter(|term| lowered.contains(**term))
            .count();
        let negative = NEGATIVE_TERMS
            .iter()
            .filter(|term| lowered.contains(**term))
            .count();

        let (label, strength) = if positive > negative {
            (SentimentLabel::Positive, positive - negative)
        } else if negative > positive {
            (SentimentLabel::Negative, negative - positive)
        } else {
            (SentimentLabel::Neutral, 0)
        };

        // Score climbs with the margin between term counts, capped below 1.
        let score = (0.6 + 0.08 * strength as f32).min(0.95);

        Sentiment { label, score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_document() {
        let analyzer = LocalSentimentAnalyzer::load().unwrap();
        let sentiment =
            analyzer.classify("Savings are growing and spending stayed under budget this month.");
        assert_eq!(sentiment.label, SentimentLabel::Positive);
        assert!(sentiment.score > 0.6);
    }

    #[test]
    fn test_negative_document() {
        let analyzer = LocalSentimentAnalyzer::load().unwrap();
        let sentiment =
            analyzer.classify("Two late fees and an overdraft pushed the account into deficit.");
        assert_eq!(sentiment.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_neutral_when_no_signal() {
        let analyzer = LocalSentimentAnalyzer::load().unwrap();
        let sentiment = analyzer.classify("Statement period: October 1 through October 31.");
        assert_eq!(sentiment.label, SentimentLabel::Neutral);
        assert!((sentiment.score - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_only_prefix_is_classified() {
        let analyzer = LocalSentimentAnalyzer::load().unwrap();

        // Positive terms buried past the prefix window must not count.
        let mut text = "x".repeat(CLASSIFY_PREFIX_CHARS);
        text.push_str(" excellent savings growth");
        let sentiment = analyzer.classify(&text);
        assert_eq!(sentiment.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_score_stays_below_one() {
        let analyzer = LocalSentimentAnalyzer::load().unwrap();
        let text = POSITIVE_TERMS.join(" ");
        let sentiment = analyzer.classify(&text);
        assert!(sentiment.score <= 0.95);
    }
}
