//! Raw insight and review tables in source field order.

use bizlens_core::InsightRow;
use bizlens_sentiment::ClassifiedReview;

use crate::payload::Table;

pub const INSIGHT_COLUMNS: [&str; 10] = [
    "date",
    "search_impressions",
    "map_impressions",
    "website_clicks",
    "direction_requests",
    "phone_calls",
    "photo_views",
    "location_id",
    "location_name",
    "brand",
];

pub const REVIEW_COLUMNS: [&str; 8] = [
    "id",
    "author",
    "rating",
    "text",
    "date",
    "location_name",
    "brand",
    "sentiment",
];

impl Table {
    /// One row per location-day.
    #[must_use]
    pub fn from_insights(rows: &[InsightRow]) -> Self {
        let mut table = Table::new(INSIGHT_COLUMNS);
        for row in rows {
            table.push_row(vec![
                row.date.into(),
                row.search_impressions.into(),
                row.map_impressions.into(),
                row.website_clicks.into(),
                row.direction_requests.into(),
                row.phone_calls.into(),
                row.photo_views.into(),
                row.location_id.clone().into(),
                row.location_name.clone().into(),
                row.brand.clone().into(),
            ]);
        }
        table
    }

    /// One row per review, with its derived sentiment last.
    #[must_use]
    pub fn from_reviews(reviews: &[ClassifiedReview]) -> Self {
        let mut table = Table::new(REVIEW_COLUMNS);
        for classified in reviews {
            let review = classified.review();
            table.push_row(vec![
                review.id.into(),
                review.author.clone().into(),
                review.rating.into(),
                review.text.clone().into(),
                review.date.into(),
                review.location_name.clone().into(),
                review.brand.clone().into(),
                classified.sentiment().as_str().into(),
            ]);
        }
        table
    }
}
