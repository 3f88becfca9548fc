//! Business Profile API response types.
//!
//! Only the fields bizlens reads are modelled; everything else in the
//! responses is ignored.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Business Information API: accounts.locations.list
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationsPage {
    #[serde(default)]
    pub locations: Vec<ApiLocation>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLocation {
    /// Resource name, `locations/{id}`.
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub storefront_address: Option<PostalAddress>,
    #[serde(default)]
    pub phone_numbers: Option<PhoneNumbers>,
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(default)]
    pub address_lines: Vec<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub administrative_area: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumbers {
    #[serde(default)]
    pub primary_phone: Option<String>,
}

// ---------------------------------------------------------------------------
// Performance API: locations.fetchMultiDailyMetricsTimeSeries
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiDailyMetricsResponse {
    #[serde(default)]
    pub multi_daily_metric_time_series: Vec<MultiDailyMetricTimeSeries>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiDailyMetricTimeSeries {
    #[serde(default)]
    pub daily_metric_time_series: Vec<DailyMetricTimeSeries>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetricTimeSeries {
    pub daily_metric: String,
    #[serde(default)]
    pub time_series: TimeSeries,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    #[serde(default)]
    pub dated_values: Vec<DatedValue>,
}

#[derive(Debug, Deserialize)]
pub struct DatedValue {
    pub date: ApiDate,
    /// int64 encoded as a JSON string; absent means zero.
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ApiDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

// ---------------------------------------------------------------------------
// My Business v4: accounts.locations.reviews.list
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsPage {
    #[serde(default)]
    pub reviews: Vec<ApiReview>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReview {
    #[serde(default)]
    pub review_id: Option<String>,
    #[serde(default)]
    pub reviewer: Option<Reviewer>,
    /// `ONE` .. `FIVE`, or `STAR_RATING_UNSPECIFIED`.
    pub star_rating: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub create_time: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reviews_page_ignores_aggregate_fields() {
        let json = r#"{
            "reviews": [{"reviewId": "r1", "starRating": "FOUR", "createTime": "2024-07-01T10:00:00Z"}],
            "averageRating": 4.2,
            "totalReviewCount": 17,
            "nextPageToken": "p2"
        }"#;
        let page: ReviewsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.reviews.len(), 1);
        assert_eq!(page.next_page_token.as_deref(), Some("p2"));
    }
}
