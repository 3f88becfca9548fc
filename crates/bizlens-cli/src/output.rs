//! Plain-text rendering of dashboard views.

use bizlens_core::InsightRow;
use bizlens_metrics::{
    actions_distribution, brand_impressions, daily_totals, location_search_impressions,
    most_recent, rating_distribution, weekday_search_pattern, InsightTotals, ReviewStats,
};
use bizlens_report::humanize_key;
use bizlens_sentiment::{ClassifiedReview, SentimentBreakdown};

use crate::dashboard::Dashboard;

const EXCERPT_CHARS: usize = 100;

/// Format an optional number with two decimals, `—` when absent.
fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "\u{2014}".to_string(), |v| format!("{v:.2}"))
}

fn stars(rating: u8) -> String {
    "*".repeat(usize::from(rating))
}

fn selection_label(dash: &Dashboard) -> String {
    match dash.locations.as_slice() {
        [only] if dash.single_location => format!("{} ({})", only.name, only.brand),
        locations => format!("{} locations", locations.len()),
    }
}

pub(crate) fn print_overview(dash: &Dashboard) {
    println!("# Business Profile Overview");
    println!();
    println!("**Period**: {}", dash.range);
    println!("**Selection**: {}", selection_label(dash));
    println!("**Brands**: {}", dash.brands.join(", "));
    println!();

    println!("## Summary Metrics");
    println!();
    for (key, value) in dash.summary_metrics().iter() {
        println!("{:<28}{value}", humanize_key(key));
    }
    let totals = InsightTotals::from_rows(&dash.insights);
    println!("{:<28}{}", "Search / Day", fmt_opt(totals.search_per_day()));
    println!("{:<28}{}", "Maps / Day", fmt_opt(totals.map_per_day()));
    println!();

    println!("## Performance Trends");
    println!();
    for line in trend_lines(&dash.insights) {
        println!("{line}");
    }
    println!();

    println!("## Customer Actions");
    println!();
    for (label, count) in actions_distribution(&dash.insights).entries() {
        println!("{label:<28}{count}");
    }
    println!();

    if dash.single_location {
        println!("## Search Impressions by Weekday");
        println!();
        for (weekday, avg) in weekday_search_pattern(&dash.insights) {
            println!("{:<28}{}", weekday.to_string(), fmt_opt(avg));
        }
        println!();
    } else {
        println!("## Search Impressions by Location");
        println!();
        for (name, total) in location_search_impressions(&dash.insights) {
            println!("{name:<28}{total}");
        }
        println!();

        println!("## Impressions by Brand");
        println!();
        println!("{:<28}{:<12}MAPS", "BRAND", "SEARCH");
        for brand in brand_impressions(&dash.insights) {
            println!(
                "{:<28}{:<12}{}",
                brand.brand, brand.search_impressions, brand.map_impressions
            );
        }
        println!();
    }

    print_review_stats(dash);
    print_sentiment(&dash.reviews.breakdown);
}

/// Daily search and maps impressions, summed across locations, oldest first.
fn trend_lines(rows: &[InsightRow]) -> Vec<String> {
    let days = daily_totals(rows);
    if days.is_empty() {
        return vec!["no insight data".to_string()];
    }
    let mut lines = vec![format!("{:<12}{:<12}MAPS", "DATE", "SEARCH")];
    lines.extend(days.iter().map(|day| {
        format!(
            "{:<12}{:<12}{}",
            day.date.to_string(),
            day.totals.search_impressions,
            day.totals.map_impressions
        )
    }));
    lines
}

fn print_review_stats(dash: &Dashboard) {
    let stats = ReviewStats::compute(
        dash.reviews.reviews.iter().map(ClassifiedReview::review),
        dash.range.start(),
    );

    println!("## Reviews");
    println!();
    println!("{:<28}{}", "Total Reviews", stats.total);
    println!("{:<28}{}", "Average Rating", fmt_opt(stats.average_rating));
    println!("{:<28}{}", "Reviews Since Start", stats.recent);
    if let Some(latest) = stats.latest {
        println!("{:<28}{latest}", "Latest Review");
    }
    let dist = rating_distribution(dash.reviews.reviews.iter().map(ClassifiedReview::review));
    for (rating, count) in dist.iter().rev() {
        println!("{:<28}{count}", stars(*rating));
    }
    println!();
}

fn print_sentiment(breakdown: &SentimentBreakdown) {
    println!("## Sentiment");
    println!();
    if breakdown.is_empty() {
        println!("no reviews to analyze");
        println!();
        return;
    }
    for summary in breakdown {
        println!(
            "### {} ({} reviews, avg {:.1})",
            summary.label, summary.count, summary.average_rating
        );
        println!("keywords: {}", summary.keywords.join(", "));
        println!("sample: \"{}\"", summary.sample_excerpt(EXCERPT_CHARS));
        println!();
    }
}

pub(crate) fn print_reviews(dash: &Dashboard, limit: usize) {
    println!("# Reviews: {}", selection_label(dash));
    println!();
    print_sentiment(&dash.reviews.breakdown);

    let recent = most_recent(&dash.reviews.reviews, limit, |r| r.review().date);
    if recent.is_empty() {
        return;
    }

    println!("## Most Recent");
    println!();
    println!(
        "{:<12}{:<7}{:<10}{:<20}{:<18}TEXT",
        "DATE", "STARS", "SENTIMENT", "AUTHOR", "LOCATION"
    );
    for classified in recent {
        let review = classified.review();
        println!(
            "{:<12}{:<7}{:<10}{:<20}{:<18}{}",
            review.date.to_string(),
            stars(review.rating),
            classified.sentiment().as_str(),
            review.author,
            review.location_name.as_deref().unwrap_or("\u{2014}"),
            review.text
        );
    }
}
