//! Review sentiment pipeline orchestration.

use bizlens_core::Review;

use crate::aggregate::summarize;
use crate::classifier::ClassifiedReview;
use crate::types::SentimentBreakdown;

/// Classified reviews together with their per-label breakdown.
#[derive(Debug, Clone, Default)]
pub struct ReviewAnalysis {
    /// Reviews in their original order, each with its derived label.
    pub reviews: Vec<ClassifiedReview>,
    pub breakdown: SentimentBreakdown,
}

/// Classify every review, preserving input order.
#[must_use]
pub fn classify_reviews(reviews: Vec<Review>) -> Vec<ClassifiedReview> {
    reviews.into_iter().map(ClassifiedReview::new).collect()
}

/// Run the full review pipeline for one batch.
///
/// 1. Classify each review from its text.
/// 2. Group by label and summarize (see [`summarize`]).
///
/// An empty batch yields an empty breakdown.
#[must_use]
pub fn analyze_reviews(reviews: Vec<Review>) -> ReviewAnalysis {
    let classified = classify_reviews(reviews);
    let breakdown = summarize(&classified);

    tracing::debug!(
        reviews = classified.len(),
        labels = breakdown.len(),
        "classified review batch"
    );

    ReviewAnalysis {
        reviews: classified,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::types::SentimentLabel;

    fn review(id: i64, rating: u8, text: &str) -> Review {
        Review {
            id,
            author: "A".to_string(),
            rating,
            text: text.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            location_name: None,
            brand: None,
        }
    }

    #[test]
    fn analyze_preserves_order_and_counts() {
        let analysis = analyze_reviews(vec![
            review(1, 1, "Awful"),
            review(2, 5, "Wonderful"),
            review(3, 3, ""),
        ]);
        let ids: Vec<i64> = analysis.reviews.iter().map(|r| r.review().id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(analysis.breakdown.total_count(), 3);
        assert_eq!(analysis.reviews[2].sentiment(), SentimentLabel::Neutral);
    }

    #[test]
    fn analyze_empty_batch() {
        let analysis = analyze_reviews(Vec::new());
        assert!(analysis.reviews.is_empty());
        assert!(analysis.breakdown.is_empty());
    }
}
