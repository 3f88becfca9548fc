//! Fetch, classify, and aggregate one dashboard view.

use bizlens_core::{AppConfig, DateRange, InsightRow, Location, SummaryMetrics};
use bizlens_metrics::{brands, summary_metrics, LocationFilter};
use bizlens_report::{ReportPayload, Table};
use bizlens_sentiment::{analyze_reviews, ClassifiedReview, ReviewAnalysis};
use bizlens_source::Source;
use chrono::NaiveDate;

use crate::SelectionArgs;

/// What to load: which locations and which inclusive date window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Request {
    pub filter: LocationFilter,
    pub range: DateRange,
}

impl Request {
    pub(crate) fn from_args(
        args: &SelectionArgs,
        today: NaiveDate,
        config: &AppConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            filter: LocationFilter {
                brand: args.brand.clone(),
                location: args.location.clone(),
            },
            range: resolve_range(args.start, args.end, today, config.default_range_days)?,
        })
    }
}

/// Window from `--start` / `--end`; a missing end is today, a missing start
/// is `default_days` back from the end.
pub(crate) fn resolve_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
    default_days: u32,
) -> anyhow::Result<DateRange> {
    let end = end.unwrap_or(today);
    match start {
        Some(start) => Ok(DateRange::new(start, end)?),
        None => Ok(DateRange::ending_on(end, default_days)),
    }
}

/// Everything the overview, reviews, and export commands show.
#[derive(Debug)]
pub(crate) struct Dashboard {
    pub range: DateRange,
    pub brands: Vec<String>,
    pub locations: Vec<Location>,
    pub single_location: bool,
    pub insights: Vec<InsightRow>,
    pub reviews: ReviewAnalysis,
}

/// Load locations, then each selected location's insights and reviews in
/// turn.
///
/// # Errors
///
/// Returns an error for an unknown brand or location, or if the source fails.
pub(crate) async fn load(source: &Source, request: &Request) -> anyhow::Result<Dashboard> {
    let all = source.list_locations().await?;
    let selected: Vec<Location> = request.filter.apply(&all)?.into_iter().cloned().collect();

    let mut insights = Vec::new();
    let mut reviews = Vec::new();
    for location in &selected {
        insights.extend(source.fetch_insights(location, &request.range).await?);
        reviews.extend(source.fetch_reviews(location).await?);
    }

    let analysis = analyze_reviews(reviews);
    tracing::debug!(
        locations = selected.len(),
        insight_rows = insights.len(),
        reviews = analysis.reviews.len(),
        range = %request.range,
        "loaded dashboard"
    );

    Ok(Dashboard {
        range: request.range,
        brands: brands(&all),
        locations: selected,
        single_location: request.filter.is_single_location(),
        insights,
        reviews: analysis,
    })
}

impl Dashboard {
    pub(crate) fn summary_metrics(&self) -> SummaryMetrics {
        summary_metrics(
            &self.insights,
            self.reviews.reviews.iter().map(ClassifiedReview::review),
        )
    }

    /// Payload for the summary document: metrics only.
    pub(crate) fn document_payload(&self) -> ReportPayload {
        ReportPayload::new(self.range.to_string(), self.summary_metrics())
    }

    /// Payload for the workbook: metrics plus the raw tables that have rows.
    pub(crate) fn spreadsheet_payload(&self) -> ReportPayload {
        let mut payload = self.document_payload();
        if !self.insights.is_empty() {
            payload = payload.with_insights(Table::from_insights(&self.insights));
        }
        if !self.reviews.reviews.is_empty() {
            payload = payload.with_reviews(Table::from_reviews(&self.reviews.reviews));
        }
        payload
    }
}
