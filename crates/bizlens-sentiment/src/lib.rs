//! Review sentiment classification and per-label aggregation.
//!
//! Scores review text with a lexicon polarity scorer, maps the score onto a
//! [`SentimentLabel`], and groups classified reviews into a
//! [`SentimentBreakdown`] of per-label statistics and keywords.

pub mod aggregate;
pub mod classifier;
pub mod pipeline;
pub mod scorer;
pub mod tokens;
pub mod types;

pub use aggregate::{summarize, top_keywords};
pub use classifier::{classify, ClassifiedReview};
pub use pipeline::{analyze_reviews, classify_reviews, ReviewAnalysis};
pub use scorer::polarity;
pub use types::{SentimentBreakdown, SentimentLabel, SentimentSummary};
