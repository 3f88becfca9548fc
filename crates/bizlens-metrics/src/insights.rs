//! Aggregations over location-day insight rows.

use std::collections::BTreeMap;

use bizlens_core::InsightRow;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Column sums over a set of insight rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InsightTotals {
    pub days: usize,
    pub search_impressions: u64,
    pub map_impressions: u64,
    pub website_clicks: u64,
    pub direction_requests: u64,
    pub phone_calls: u64,
    pub photo_views: u64,
}

impl InsightTotals {
    #[must_use]
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a InsightRow>) -> Self {
        rows.into_iter().fold(Self::default(), |mut acc, row| {
            acc.add(row);
            acc
        })
    }

    fn add(&mut self, row: &InsightRow) {
        self.days += 1;
        self.search_impressions += row.search_impressions;
        self.map_impressions += row.map_impressions;
        self.website_clicks += row.website_clicks;
        self.direction_requests += row.direction_requests;
        self.phone_calls += row.phone_calls;
        self.photo_views += row.photo_views;
    }

    /// Mean search impressions per row, `None` for no rows.
    #[must_use]
    pub fn search_per_day(&self) -> Option<f64> {
        per_day(self.search_impressions, self.days)
    }

    /// Mean map impressions per row, `None` for no rows.
    #[must_use]
    pub fn map_per_day(&self) -> Option<f64> {
        per_day(self.map_impressions, self.days)
    }
}

#[allow(clippy::cast_precision_loss)]
fn per_day(total: u64, days: usize) -> Option<f64> {
    (days > 0).then(|| total as f64 / days as f64)
}

/// All locations' counters summed for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub totals: InsightTotals,
}

/// Sum rows per date, ascending by date.
#[must_use]
pub fn daily_totals(rows: &[InsightRow]) -> Vec<DailyTotals> {
    let mut by_date: BTreeMap<NaiveDate, InsightTotals> = BTreeMap::new();
    for row in rows {
        by_date.entry(row.date).or_default().add(row);
    }
    by_date
        .into_iter()
        .map(|(date, totals)| DailyTotals { date, totals })
        .collect()
}

/// Search impressions per location name, sorted by name.
#[must_use]
pub fn location_search_impressions(rows: &[InsightRow]) -> Vec<(String, u64)> {
    let mut by_location: BTreeMap<&str, u64> = BTreeMap::new();
    for row in rows {
        *by_location.entry(row.location_name.as_str()).or_default() += row.search_impressions;
    }
    by_location
        .into_iter()
        .map(|(name, total)| (name.to_string(), total))
        .collect()
}

/// Search and map impressions per brand, sorted by brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandImpressions {
    pub brand: String,
    pub search_impressions: u64,
    pub map_impressions: u64,
}

#[must_use]
pub fn brand_impressions(rows: &[InsightRow]) -> Vec<BrandImpressions> {
    let mut by_brand: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for row in rows {
        let entry = by_brand.entry(row.brand.as_str()).or_default();
        entry.0 += row.search_impressions;
        entry.1 += row.map_impressions;
    }
    by_brand
        .into_iter()
        .map(|(brand, (search, map))| BrandImpressions {
            brand: brand.to_string(),
            search_impressions: search,
            map_impressions: map,
        })
        .collect()
}

/// Customer action counts over the selected rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActionsDistribution {
    pub website_clicks: u64,
    pub direction_requests: u64,
    pub phone_calls: u64,
    pub photo_views: u64,
}

impl ActionsDistribution {
    /// `(label, count)` pairs in display order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, u64); 4] {
        [
            ("Website Clicks", self.website_clicks),
            ("Direction Requests", self.direction_requests),
            ("Phone Calls", self.phone_calls),
            ("Photo Views", self.photo_views),
        ]
    }
}

#[must_use]
pub fn actions_distribution(rows: &[InsightRow]) -> ActionsDistribution {
    let totals = InsightTotals::from_rows(rows);
    ActionsDistribution {
        website_clicks: totals.website_clicks,
        direction_requests: totals.direction_requests,
        phone_calls: totals.phone_calls,
        photo_views: totals.photo_views,
    }
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Mean search impressions per weekday, Monday first.
///
/// Weekdays with no rows map to `None`.
#[must_use]
pub fn weekday_search_pattern(rows: &[InsightRow]) -> [(Weekday, Option<f64>); 7] {
    let mut sums = [(0_u64, 0_usize); 7];
    for row in rows {
        let idx = row.date.weekday().num_days_from_monday() as usize;
        sums[idx].0 += row.search_impressions;
        sums[idx].1 += 1;
    }
    std::array::from_fn(|i| (WEEK[i], per_day(sums[i].0, sums[i].1)))
}
