use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A business location listed on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Platform identifier, e.g. `"loc_1"` or `"locations/1234567890"`.
    pub id: String,
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Daily performance counters for one location (a location-day).
///
/// Field order matches the column order of exported insight tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightRow {
    pub date: NaiveDate,
    pub search_impressions: u64,
    pub map_impressions: u64,
    pub website_clicks: u64,
    pub direction_requests: u64,
    pub phone_calls: u64,
    pub photo_views: u64,
    pub location_id: String,
    pub location_name: String,
    pub brand: String,
}

/// A customer review as delivered by a data source.
///
/// Sentiment is not part of the upstream record; it is derived in
/// `bizlens-sentiment` from `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub author: String,
    /// Star rating, `1..=5`.
    pub rating: u8,
    pub text: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

impl Review {
    /// Check the record invariants a source must uphold.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRating`] if `rating` is outside `1..=5`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if (1..=5).contains(&self.rating) {
            Ok(())
        } else {
            Err(CoreError::InvalidRating {
                review_id: self.id,
                rating: self.rating,
            })
        }
    }

    /// Tag the review with the location it was collected for.
    #[must_use]
    pub fn at_location(mut self, location: &Location) -> Self {
        self.location_name = Some(location.name.clone());
        self.brand = Some(location.brand.clone());
        self
    }
}

/// An inclusive calendar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDateRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The `days`-long window ending on (and including) `end`.
    ///
    /// `days == 0` is treated as a single-day window.
    #[must_use]
    pub fn ending_on(end: NaiveDate, days: u32) -> Self {
        let back = chrono::Days::new(u64::from(days.saturating_sub(1)));
        let start = end.checked_sub_days(back).unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days in the window, both ends included.
    #[must_use]
    pub fn len_days(&self) -> u64 {
        u64::try_from((self.end - self.start).num_days()).unwrap_or(0) + 1
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every date in the window, in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
