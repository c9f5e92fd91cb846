//! Synthetic response catalogue
//!
//! Pre-authored, product-visible output used whenever a backend is
//! unconfigured or a live call fails. The assistant never shows an error:
//! it shows one of these instead, and the degrade is logged for operators.
//!
//! Random choice among the conversational replies goes through an
//! injectable picker so tests can pin a deterministic sequence.

use crate::models::{
    InsightResult, KeywordSentiment, Sentiment, SentimentAnalysis, SentimentLabel,
};
use rand::Rng;

/// Canned finance-coaching replies for offline chat, chosen uniformly.
pub const CONVERSATIONAL_REPLIES: &[&str] = &[
    "I've analyzed your financial data. Based on your spending patterns, I recommend increasing your emergency fund to 3 months of expenses.",
    "Looking at your budget, I suggest reducing entertainment expenses by 15% to meet your savings goals faster.",
    "Your financial health is improving! Consider setting up automatic transfers to your savings account.",
    "Based on your current savings rate, you're on track to meet your financial goals in about 4 years.",
    "I notice you're spending quite a bit on dining out. Meal prepping could save you around $200 per month.",
];

/// Strategy for choosing an index into a canned-response pool.
pub trait ResponsePicker: Send + Sync {
    /// Return an index in `0..len`. `len` is always >= 1.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random choice, the production picker.
pub struct RandomPicker;

impl ResponsePicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// The full fallback catalogue.
pub struct SyntheticCatalog {
    picker: Box<dyn ResponsePicker>,
}

impl SyntheticCatalog {
    pub fn new() -> Self {
        Self::with_picker(Box::new(RandomPicker))
    }

    pub fn with_picker(picker: Box<dyn ResponsePicker>) -> Self {
        Self { picker }
    }

    /// One of the canned coaching sentences.
    pub fn conversational_reply(&self) -> String {
        let index = self.picker.pick(CONVERSATIONAL_REPLIES.len());
        CONVERSATIONAL_REPLIES[index].to_string()
    }

    /// Neutral-leaning sentiment with two fixed finance keywords.
    pub fn sentiment_analysis(&self) -> SentimentAnalysis {
        SentimentAnalysis {
            sentiment: Sentiment {
                label: SentimentLabel::Neutral,
                score: 0.65,
            },
            keywords: vec![
                KeywordSentiment {
                    text: "savings".to_string(),
                    sentiment_score: 0.8,
                },
                KeywordSentiment {
                    text: "investment".to_string(),
                    sentiment_score: 0.7,
                },
            ],
        }
    }

    /// Fully synthetic document analysis: three Q&A insights, a positive
    /// sentiment, and a summary sentence.
    pub fn document_insights(&self) -> InsightResult {
        InsightResult {
            insights: vec![
                "Q: What are the main expenses?\nA: Based on the document, housing and transportation appear to be your largest expenses.".to_string(),
                "Q: What is the total income?\nA: The document shows a monthly income of approximately $5,000.".to_string(),
                "Q: What are the saving patterns?\nA: You're saving about 20% of your income, which is excellent.".to_string(),
            ],
            sentiment: vec![Sentiment {
                label: SentimentLabel::Positive,
                score: 0.89,
            }],
            summary: "Your financial document shows healthy spending habits with a good savings rate. Focus on reducing discretionary spending to improve your financial position further.".to_string(),
        }
    }

    /// Insight/summary texts paired with a live local sentiment reading
    /// (the middle tier of document analysis).
    pub fn document_insights_with(&self, sentiment: Sentiment) -> InsightResult {
        InsightResult {
            insights: vec![
                "Q: What are the main expenses?\nA: The document shows significant spending on housing and utilities.".to_string(),
                "Q: What is the total income?\nA: Monthly income appears to be in the range of $4,000-$5,000.".to_string(),
                "Q: What are the saving patterns?\nA: You're saving approximately 15-20% of your income.".to_string(),
            ],
            sentiment: vec![sentiment],
            summary: "Your financial document indicates generally good financial habits with room for optimization in discretionary spending categories.".to_string(),
        }
    }

    /// Fixed multi-line numbered recommendation list.
    pub fn generated_recommendation(&self) -> String {
        "AI Analysis: Based on your financial data, I recommend:\n\n\
         1. Increase emergency fund to 3-6 months of expenses\n\
         2. Consider diversifying investments\n\
         3. Review subscription services for potential savings\n\
         4. Set up automatic transfers to savings account\n\n\
         These steps could improve your financial health score by 15-20 points."
            .to_string()
    }
}

impl Default for SyntheticCatalog {
    fn default() -> Self {
        Self::new()
    }
}
