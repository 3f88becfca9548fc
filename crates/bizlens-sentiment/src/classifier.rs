//! Threshold classification of polarity scores.

use bizlens_core::Review;
use serde::Serialize;

use crate::scorer::polarity;
use crate::types::SentimentLabel;

/// Polarity above this is Positive.
pub const POSITIVE_THRESHOLD: f32 = 0.1;
/// Polarity below this is Negative.
pub const NEGATIVE_THRESHOLD: f32 = -0.1;

/// Map review text onto a sentiment label.
///
/// Total over all inputs: empty or non-linguistic text scores `0.0` and is
/// Neutral.
#[must_use]
pub fn classify(text: &str) -> SentimentLabel {
    label_for(polarity(text))
}

/// Apply the fixed thresholds to a polarity score.
#[must_use]
pub fn label_for(score: f32) -> SentimentLabel {
    if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// A review paired with the label derived from its text.
///
/// The label is computed on construction and recomputed by
/// [`set_text`](Self::set_text); it cannot be assigned directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedReview {
    review: Review,
    sentiment: SentimentLabel,
}

impl ClassifiedReview {
    #[must_use]
    pub fn new(review: Review) -> Self {
        let sentiment = classify(&review.text);
        Self { review, sentiment }
    }

    #[must_use]
    pub fn review(&self) -> &Review {
        &self.review
    }

    #[must_use]
    pub fn sentiment(&self) -> SentimentLabel {
        self.sentiment
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.review.text
    }

    #[must_use]
    pub fn rating(&self) -> u8 {
        self.review.rating
    }

    /// Replace the review text and reclassify.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.review.text = text.into();
        self.sentiment = classify(&self.review.text);
    }

    #[must_use]
    pub fn into_review(self) -> Review {
        self.review
    }
}

impl From<Review> for ClassifiedReview {
    fn from(review: Review) -> Self {
        Self::new(review)
    }
}
