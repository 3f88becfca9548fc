//! Conversion from Business Profile wire types into bizlens records.

use std::collections::BTreeMap;

use bizlens_core::{DateRange, InsightRow, Location, Review};
use chrono::{DateTime, NaiveDate};

use crate::types::{ApiLocation, ApiReview, MultiDailyMetricsResponse, PostalAddress};

pub const UNBRANDED: &str = "Unbranded";
pub const ANONYMOUS: &str = "Anonymous";

/// Daily metrics requested from the Performance API.
pub const DAILY_METRICS: [&str; 7] = [
    "BUSINESS_IMPRESSIONS_DESKTOP_SEARCH",
    "BUSINESS_IMPRESSIONS_MOBILE_SEARCH",
    "BUSINESS_IMPRESSIONS_DESKTOP_MAPS",
    "BUSINESS_IMPRESSIONS_MOBILE_MAPS",
    "WEBSITE_CLICKS",
    "BUSINESS_DIRECTION_REQUESTS",
    "CALL_CLICKS",
];

/// Strip a resource prefix: `locations/123` -> `123`, `accounts/9` -> `9`.
#[must_use]
pub fn resource_id<'a>(name: &'a str, collection: &str) -> &'a str {
    name.strip_prefix(collection)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(name)
}

fn format_address(address: &PostalAddress) -> Option<String> {
    let parts: Vec<&str> = address
        .address_lines
        .iter()
        .map(String::as_str)
        .chain(address.locality.as_deref())
        .chain(address.administrative_area.as_deref())
        .chain(address.postal_code.as_deref())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

/// Brand is the first label; unlabelled locations are grouped as
/// [`UNBRANDED`]. A missing title falls back to the location id.
#[must_use]
pub fn location_from_api(api: ApiLocation) -> Location {
    let id = resource_id(&api.name, "locations").to_string();
    let brand = api
        .labels
        .into_iter()
        .map(|l| l.trim().to_string())
        .find(|l| !l.is_empty())
        .unwrap_or_else(|| UNBRANDED.to_string());
    let name = api
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| id.clone());

    Location {
        address: api.storefront_address.as_ref().and_then(format_address),
        phone: api.phone_numbers.and_then(|p| p.primary_phone),
        id,
        name,
        brand,
    }
}

/// `ONE`..`FIVE` -> 1..5.
#[must_use]
pub fn star_rating(value: &str) -> Option<u8> {
    match value {
        "ONE" => Some(1),
        "TWO" => Some(2),
        "THREE" => Some(3),
        "FOUR" => Some(4),
        "FIVE" => Some(5),
        _ => None,
    }
}

/// Calendar date of an RFC 3339 timestamp, as written (no zone shift).
#[must_use]
pub fn create_date(value: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Convert one API review. Reviews with an unknown rating or an unparseable
/// timestamp are skipped with a warning.
#[must_use]
pub fn review_from_api(api: ApiReview, id: i64, location: &Location) -> Option<Review> {
    let Some(rating) = star_rating(&api.star_rating) else {
        tracing::warn!(
            location = %location.id,
            review_id = api.review_id.as_deref().unwrap_or_default(),
            star_rating = %api.star_rating,
            "skipping review with unknown star rating"
        );
        return None;
    };
    let Some(date) = create_date(&api.create_time) else {
        tracing::warn!(
            location = %location.id,
            review_id = api.review_id.as_deref().unwrap_or_default(),
            create_time = %api.create_time,
            "skipping review with unparseable createTime"
        );
        return None;
    };

    let author = api
        .reviewer
        .and_then(|r| r.display_name)
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| ANONYMOUS.to_string());

    Some(
        Review {
            id,
            author,
            rating,
            text: api.comment.unwrap_or_default(),
            date,
            location_name: None,
            brand: None,
        }
        .at_location(location),
    )
}

#[derive(Debug, Default, Clone, Copy)]
struct DayCounters {
    search: u64,
    map: u64,
    website: u64,
    directions: u64,
    calls: u64,
}

impl DayCounters {
    fn add(&mut self, metric: &str, value: u64) -> bool {
        let slot = match metric {
            "BUSINESS_IMPRESSIONS_DESKTOP_SEARCH" | "BUSINESS_IMPRESSIONS_MOBILE_SEARCH" => {
                &mut self.search
            }
            "BUSINESS_IMPRESSIONS_DESKTOP_MAPS" | "BUSINESS_IMPRESSIONS_MOBILE_MAPS" => {
                &mut self.map
            }
            "WEBSITE_CLICKS" => &mut self.website,
            "BUSINESS_DIRECTION_REQUESTS" => &mut self.directions,
            "CALL_CLICKS" => &mut self.calls,
            _ => return false,
        };
        *slot += value;
        true
    }
}

/// Fold the per-metric time series into one row per day of `range`.
///
/// Days the API did not report are zero. Values outside `range` and
/// unknown metrics are ignored. Photo views are not reported by the
/// Performance API and are always zero.
#[must_use]
pub fn insight_rows(
    response: MultiDailyMetricsResponse,
    location: &Location,
    range: &DateRange,
) -> Vec<InsightRow> {
    let mut by_date: BTreeMap<NaiveDate, DayCounters> =
        range.days().map(|d| (d, DayCounters::default())).collect();

    let series = response
        .multi_daily_metric_time_series
        .into_iter()
        .flat_map(|m| m.daily_metric_time_series);

    for metric in series {
        for dated in metric.time_series.dated_values {
            let Some(date) =
                NaiveDate::from_ymd_opt(dated.date.year, dated.date.month, dated.date.day)
            else {
                continue;
            };
            let Some(counters) = by_date.get_mut(&date) else {
                continue;
            };
            let value = match dated.value.as_deref().map(str::parse::<u64>) {
                None => 0,
                Some(Ok(v)) => v,
                Some(Err(_)) => {
                    tracing::warn!(
                        location = %location.id,
                        metric = %metric.daily_metric,
                        %date,
                        "skipping non-numeric metric value"
                    );
                    continue;
                }
            };
            if !counters.add(&metric.daily_metric, value) {
                tracing::debug!(metric = %metric.daily_metric, "ignoring unrequested metric");
            }
        }
    }

    by_date
        .into_iter()
        .map(|(date, c)| InsightRow {
            date,
            search_impressions: c.search,
            map_impressions: c.map,
            website_clicks: c.website,
            direction_requests: c.directions,
            phone_calls: c.calls,
            photo_views: 0,
            location_id: location.id.clone(),
            location_name: location.name.clone(),
            brand: location.brand.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PhoneNumbers, Reviewer};

    fn location() -> Location {
        Location {
            id: "123".to_string(),
            name: "Downtown Store".to_string(),
            brand: "Brand A".to_string(),
            address: None,
            phone: None,
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    #[test]
    fn resource_ids_drop_collection_prefix() {
        assert_eq!(resource_id("locations/123", "locations"), "123");
        assert_eq!(resource_id("accounts/9", "accounts"), "9");
        assert_eq!(resource_id("9", "accounts"), "9");
    }

    #[test]
    fn location_takes_first_label_as_brand() {
        let loc = location_from_api(ApiLocation {
            name: "locations/55".to_string(),
            title: Some("Airport Store".to_string()),
            storefront_address: Some(PostalAddress {
                address_lines: vec!["1 Terminal Rd".to_string()],
                locality: Some("Springfield".to_string()),
                administrative_area: None,
                postal_code: Some("12345".to_string()),
            }),
            phone_numbers: Some(PhoneNumbers {
                primary_phone: Some("555-0100".to_string()),
            }),
            labels: vec![" Brand B ".to_string(), "Other".to_string()],
        });
        assert_eq!(loc.id, "55");
        assert_eq!(loc.name, "Airport Store");
        assert_eq!(loc.brand, "Brand B");
        assert_eq!(
            loc.address.as_deref(),
            Some("1 Terminal Rd, Springfield, 12345")
        );
        assert_eq!(loc.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn unlabelled_location_is_unbranded() {
        let loc = location_from_api(ApiLocation {
            name: "locations/7".to_string(),
            title: None,
            storefront_address: None,
            phone_numbers: None,
            labels: Vec::new(),
        });
        assert_eq!(loc.brand, UNBRANDED);
        assert_eq!(loc.name, "7");
        assert!(loc.address.is_none());
    }

    #[test]
    fn star_ratings_map_to_numbers() {
        assert_eq!(star_rating("ONE"), Some(1));
        assert_eq!(star_rating("FIVE"), Some(5));
        assert_eq!(star_rating("STAR_RATING_UNSPECIFIED"), None);
    }

    #[test]
    fn create_time_keeps_written_date() {
        assert_eq!(create_date("2024-07-20T23:59:00-05:00"), Some(date(20)));
        assert_eq!(create_date("2024-07-08T10:00:00.123Z"), Some(date(8)));
        assert_eq!(create_date("yesterday"), None);
    }

    #[test]
    fn review_conversion_fills_defaults() {
        let review = review_from_api(
            ApiReview {
                review_id: Some("abc".to_string()),
                reviewer: Some(Reviewer { display_name: None }),
                star_rating: "FOUR".to_string(),
                comment: None,
                create_time: "2024-07-18T12:00:00Z".to_string(),
            },
            2,
            &location(),
        )
        .unwrap();
        assert_eq!(review.id, 2);
        assert_eq!(review.author, ANONYMOUS);
        assert_eq!(review.rating, 4);
        assert_eq!(review.text, "");
        assert_eq!(review.location_name.as_deref(), Some("Downtown Store"));
        assert_eq!(review.brand.as_deref(), Some("Brand A"));
    }

    #[test]
    fn review_with_unknown_rating_is_skipped() {
        let review = review_from_api(
            ApiReview {
                review_id: None,
                reviewer: None,
                star_rating: "STAR_RATING_UNSPECIFIED".to_string(),
                comment: Some("hm".to_string()),
                create_time: "2024-07-18T12:00:00Z".to_string(),
            },
            1,
            &location(),
        );
        assert!(review.is_none());
    }

    #[test]
    fn insight_rows_sum_platforms_and_fill_gaps() {
        let response: MultiDailyMetricsResponse = serde_json::from_value(serde_json::json!({
            "multiDailyMetricTimeSeries": [{
                "dailyMetricTimeSeries": [
                    {
                        "dailyMetric": "BUSINESS_IMPRESSIONS_DESKTOP_SEARCH",
                        "timeSeries": { "datedValues": [
                            { "date": { "year": 2024, "month": 7, "day": 1 }, "value": "10" },
                            { "date": { "year": 2024, "month": 6, "day": 30 }, "value": "99" }
                        ]}
                    },
                    {
                        "dailyMetric": "BUSINESS_IMPRESSIONS_MOBILE_SEARCH",
                        "timeSeries": { "datedValues": [
                            { "date": { "year": 2024, "month": 7, "day": 1 }, "value": "5" },
                            { "date": { "year": 2024, "month": 7, "day": 2 } }
                        ]}
                    },
                    {
                        "dailyMetric": "CALL_CLICKS",
                        "timeSeries": { "datedValues": [
                            { "date": { "year": 2024, "month": 7, "day": 3 }, "value": "4" }
                        ]}
                    }
                ]
            }]
        }))
        .unwrap();
        let range = DateRange::new(date(1), date(3)).unwrap();
        let rows = insight_rows(response, &location(), &range);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date, date(1));
        assert_eq!(rows[0].search_impressions, 15);
        assert_eq!(rows[1].search_impressions, 0);
        assert_eq!(rows[2].phone_calls, 4);
        assert!(rows.iter().all(|r| r.photo_views == 0));
        assert!(rows.iter().all(|r| r.location_name == "Downtown Store"));
    }
}
