//! The headline metrics exported with every report.

use bizlens_core::{InsightRow, Review, SummaryMetrics};

use crate::insights::InsightTotals;
use crate::reviews::ReviewStats;

/// Build the report's summary metrics.
///
/// Keys, in order: `total_search_impressions`, `total_map_impressions`,
/// `total_website_clicks`, `total_phone_calls`, `average_rating` (the
/// unrounded mean, `0` when there are no reviews), `total_reviews`.
#[must_use]
pub fn summary_metrics<'a>(
    insights: &[InsightRow],
    reviews: impl IntoIterator<Item = &'a Review>,
) -> SummaryMetrics {
    let totals = InsightTotals::from_rows(insights);
    // The recency cutoff is irrelevant here; only totals and the mean are used.
    let stats = ReviewStats::compute(reviews, chrono::NaiveDate::MIN);

    let mut metrics = SummaryMetrics::new()
        .with("total_search_impressions", totals.search_impressions)
        .with("total_map_impressions", totals.map_impressions)
        .with("total_website_clicks", totals.website_clicks)
        .with("total_phone_calls", totals.phone_calls);

    match stats.average_rating {
        Some(avg) => metrics.insert("average_rating", avg),
        None => metrics.insert("average_rating", 0_i64),
    }
    metrics.insert("total_reviews", stats.total);
    metrics
}

#[cfg(test)]
mod tests {
    use bizlens_core::MetricValue;
    use chrono::NaiveDate;

    use super::*;

    fn insight(search: u64) -> InsightRow {
        InsightRow {
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            search_impressions: search,
            map_impressions: 10,
            website_clicks: 3,
            direction_requests: 4,
            phone_calls: 5,
            photo_views: 6,
            location_id: "loc_1".to_string(),
            location_name: "Downtown Store".to_string(),
            brand: "Brand A".to_string(),
        }
    }

    fn review(rating: u8) -> Review {
        Review {
            id: 1,
            author: "A".to_string(),
            rating,
            text: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            location_name: None,
            brand: None,
        }
    }

    #[test]
    fn keys_are_in_report_order() {
        let metrics = summary_metrics(&[insight(100)], &[review(5)]);
        let keys: Vec<&str> = metrics.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "total_search_impressions",
                "total_map_impressions",
                "total_website_clicks",
                "total_phone_calls",
                "average_rating",
                "total_reviews",
            ]
        );
    }

    #[test]
    fn values_sum_rows_and_average_ratings() {
        let reviews = [review(5), review(4), review(1)];
        let metrics = summary_metrics(&[insight(100), insight(50)], &reviews);
        assert_eq!(
            metrics.get("total_search_impressions"),
            Some(MetricValue::Integer(150))
        );
        assert_eq!(metrics.get("total_phone_calls"), Some(MetricValue::Integer(10)));
        let avg = metrics.get("average_rating").unwrap().as_f64();
        assert!((avg - 10.0 / 3.0).abs() < 1e-12, "got {avg}");
        assert_eq!(metrics.get("total_reviews"), Some(MetricValue::Integer(3)));
    }

    #[test]
    fn no_data_gives_zeroes() {
        let metrics = summary_metrics(&[], &[]);
        assert_eq!(metrics.len(), 6);
        assert!(metrics.iter().all(|(_, v)| v.as_f64() == 0.0));
    }
}
