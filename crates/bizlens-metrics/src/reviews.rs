//! Review statistics shown alongside the sentiment breakdown.

use std::collections::BTreeMap;

use bizlens_core::Review;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReviewStats {
    pub total: usize,
    /// Mean star rating, `None` without reviews.
    pub average_rating: Option<f64>,
    /// Reviews dated on or after the start of the selected window.
    pub recent: usize,
    pub latest: Option<NaiveDate>,
}

impl ReviewStats {
    #[must_use]
    pub fn compute<'a>(reviews: impl IntoIterator<Item = &'a Review>, since: NaiveDate) -> Self {
        let mut total = 0_usize;
        let mut rating_sum = 0_u64;
        let mut recent = 0_usize;
        let mut latest: Option<NaiveDate> = None;

        for review in reviews {
            total += 1;
            rating_sum += u64::from(review.rating);
            if review.date >= since {
                recent += 1;
            }
            latest = latest.max(Some(review.date));
        }

        #[allow(clippy::cast_precision_loss)]
        let average_rating = (total > 0).then(|| rating_sum as f64 / total as f64);

        Self {
            total,
            average_rating,
            recent,
            latest,
        }
    }
}

/// Review count per star rating, ascending; ratings with no reviews are absent.
#[must_use]
pub fn rating_distribution<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> BTreeMap<u8, usize> {
    let mut dist = BTreeMap::new();
    for review in reviews {
        *dist.entry(review.rating).or_default() += 1;
    }
    dist
}

/// The `limit` newest reviews, newest first; equal dates keep input order.
#[must_use]
pub fn most_recent<T, F>(items: &[T], limit: usize, date_of: F) -> Vec<&T>
where
    F: Fn(&T) -> NaiveDate,
{
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| date_of(b).cmp(&date_of(a)));
    sorted.truncate(limit);
    sorted
}
