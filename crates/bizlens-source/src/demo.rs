//! Deterministic sample data for running without credentials.

use std::ops::Range;

use bizlens_core::{load_locations, AppConfig, DateRange, InsightRow, Location, Review};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SourceError;

const SEARCH_RANGE: Range<u64> = 50..200;
const MAP_RANGE: Range<u64> = 30..150;
const CLICKS_RANGE: Range<u64> = 5..50;
const DIRECTIONS_RANGE: Range<u64> = 10..80;
const CALLS_RANGE: Range<u64> = 2..25;
const PHOTOS_RANGE: Range<u64> = 20..100;

const BUILTIN_LOCATIONS: [(&str, &str, &str); 4] = [
    ("loc_1", "Downtown Store", "Brand A"),
    ("loc_2", "Mall Location", "Brand A"),
    ("loc_3", "Airport Store", "Brand B"),
    ("loc_4", "Suburb Branch", "Brand B"),
];

/// `(id, author, rating, text, (year, month, day))`
const CANNED_REVIEWS: [(i64, &str, u8, &str, (i32, u32, u32)); 6] = [
    (
        1,
        "John D.",
        5,
        "Excellent service! The staff was very helpful and friendly. Will definitely come back.",
        (2024, 7, 20),
    ),
    (
        2,
        "Sarah M.",
        4,
        "Good experience overall. The product quality is great but the wait time was a bit long.",
        (2024, 7, 18),
    ),
    (
        3,
        "Mike R.",
        2,
        "Disappointing visit. The staff seemed uninterested and the place was messy.",
        (2024, 7, 15),
    ),
    (
        4,
        "Lisa K.",
        5,
        "Amazing! Best customer service I've experienced. Highly recommend this place.",
        (2024, 7, 12),
    ),
    (
        5,
        "Tom W.",
        3,
        "It's okay, nothing special. Average service and products.",
        (2024, 7, 10),
    ),
    (
        6,
        "Emma B.",
        1,
        "Terrible experience. Rude staff and poor quality products. Won't be returning.",
        (2024, 7, 8),
    ),
];

/// Sample locations, reviews, and seeded insight counters.
#[derive(Debug, Clone)]
pub struct DemoSource {
    seed: u64,
    locations: Vec<Location>,
}

impl DemoSource {
    /// Demo data over the four built-in locations.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let locations = BUILTIN_LOCATIONS
            .iter()
            .map(|(id, name, brand)| Location {
                id: (*id).to_string(),
                name: (*name).to_string(),
                brand: (*brand).to_string(),
                address: None,
                phone: None,
            })
            .collect();
        Self { seed, locations }
    }

    /// Demo data over caller-supplied locations.
    #[must_use]
    pub fn with_locations(seed: u64, locations: Vec<Location>) -> Self {
        Self { seed, locations }
    }

    /// Use `config.locations_path` when the file exists, the built-in
    /// locations otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Config`] if the file exists but is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, SourceError> {
        if config.locations_path.is_file() {
            let file = load_locations(&config.locations_path)?;
            tracing::info!(
                path = %config.locations_path.display(),
                count = file.locations.len(),
                "loaded demo locations"
            );
            return Ok(Self::with_locations(config.demo_seed, file.locations));
        }
        Ok(Self::new(config.demo_seed))
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// One row per day of `range`, drawn from an RNG seeded by the source
    /// seed and the location id. Same seed, location and range give the
    /// same rows.
    #[must_use]
    pub fn insights(&self, location: &Location, range: &DateRange) -> Vec<InsightRow> {
        let mut rng = StdRng::seed_from_u64(self.location_seed(&location.id));
        range
            .days()
            .map(|date| InsightRow {
                date,
                search_impressions: rng.random_range(SEARCH_RANGE),
                map_impressions: rng.random_range(MAP_RANGE),
                website_clicks: rng.random_range(CLICKS_RANGE),
                direction_requests: rng.random_range(DIRECTIONS_RANGE),
                phone_calls: rng.random_range(CALLS_RANGE),
                photo_views: rng.random_range(PHOTOS_RANGE),
                location_id: location.id.clone(),
                location_name: location.name.clone(),
                brand: location.brand.clone(),
            })
            .collect()
    }

    /// The six sample reviews, tagged with `location`.
    #[must_use]
    pub fn reviews(&self, location: &Location) -> Vec<Review> {
        CANNED_REVIEWS
            .iter()
            .filter_map(|&(id, author, rating, text, (y, m, d))| {
                let date = NaiveDate::from_ymd_opt(y, m, d)?;
                Some(
                    Review {
                        id,
                        author: author.to_string(),
                        rating,
                        text: text.to_string(),
                        date,
                        location_name: None,
                        brand: None,
                    }
                    .at_location(location),
                )
            })
            .collect()
    }

    /// FNV-1a over the location id, mixed with the source seed.
    fn location_seed(&self, location_id: &str) -> u64 {
        const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
        let hash = location_id.bytes().fold(FNV_OFFSET, |acc, b| {
            (acc ^ u64::from(b)).wrapping_mul(FNV_PRIME)
        });
        hash ^ self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u32, end: u32) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 7, start).unwrap(),
            NaiveDate::from_ymd_opt(2024, 7, end).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn builtin_locations_cover_two_brands() {
        let demo = DemoSource::new(42);
        let names: Vec<&str> = demo.locations().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Downtown Store", "Mall Location", "Airport Store", "Suburb Branch"]
        );
        assert_eq!(demo.locations()[3].brand, "Brand B");
    }

    #[test]
    fn insight_window_is_inclusive() {
        let demo = DemoSource::new(42);
        let rows = demo.insights(&demo.locations()[0], &range(1, 30));
        assert_eq!(rows.len(), 30);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(rows[29].date, NaiveDate::from_ymd_opt(2024, 7, 30).unwrap());
    }

    #[test]
    fn insights_stay_within_ranges() {
        let demo = DemoSource::new(7);
        for location in demo.locations() {
            for row in demo.insights(location, &range(1, 31)) {
                assert!(SEARCH_RANGE.contains(&row.search_impressions));
                assert!(MAP_RANGE.contains(&row.map_impressions));
                assert!(CLICKS_RANGE.contains(&row.website_clicks));
                assert!(DIRECTIONS_RANGE.contains(&row.direction_requests));
                assert!(CALLS_RANGE.contains(&row.phone_calls));
                assert!(PHOTOS_RANGE.contains(&row.photo_views));
                assert_eq!(row.location_id, location.id);
            }
        }
    }

    #[test]
    fn insights_are_reproducible_per_seed() {
        let a = DemoSource::new(42);
        let b = DemoSource::new(42);
        let loc = &a.locations()[1];
        assert_eq!(a.insights(loc, &range(1, 10)), b.insights(loc, &range(1, 10)));
    }

    #[test]
    fn locations_get_distinct_series() {
        let demo = DemoSource::new(42);
        let first = demo.insights(&demo.locations()[0], &range(1, 10));
        let second = demo.insights(&demo.locations()[1], &range(1, 10));
        assert_ne!(first, second);
    }

    #[test]
    fn reviews_are_tagged_with_location() {
        let demo = DemoSource::new(42);
        let loc = &demo.locations()[2];
        let reviews = demo.reviews(loc);
        assert_eq!(reviews.len(), 6);
        assert!(reviews
            .iter()
            .all(|r| r.location_name.as_deref() == Some("Airport Store")
                && r.brand.as_deref() == Some("Brand B")));
        assert!(reviews.iter().all(|r| r.validate().is_ok()));
        assert_eq!(reviews[0].author, "John D.");
    }

    #[test]
    fn custom_locations_replace_builtins() {
        let demo = DemoSource::with_locations(
            1,
            vec![Location {
                id: "x".to_string(),
                name: "Harbor Kiosk".to_string(),
                brand: "Brand C".to_string(),
                address: None,
                phone: None,
            }],
        );
        assert_eq!(demo.locations().len(), 1);
        assert_eq!(demo.reviews(&demo.locations()[0])[0].brand.as_deref(), Some("Brand C"));
    }
}
