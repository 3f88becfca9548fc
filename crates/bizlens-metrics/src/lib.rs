//! Metric aggregation over location insights and reviews.

pub mod insights;
pub mod reviews;
pub mod selection;
pub mod summary;

pub use insights::{
    actions_distribution, brand_impressions, daily_totals, location_search_impressions,
    weekday_search_pattern, ActionsDistribution, BrandImpressions, DailyTotals, InsightTotals,
};
pub use reviews::{most_recent, rating_distribution, ReviewStats};
pub use selection::{brands, LocationFilter, SelectionError};
pub use summary::summary_metrics;
