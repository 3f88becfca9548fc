//! Group classified reviews by label and compute per-label statistics.

use std::collections::HashMap;

use crate::classifier::ClassifiedReview;
use crate::tokens::keyword_words;
use crate::types::{SentimentBreakdown, SentimentLabel, SentimentSummary};

/// Number of keywords kept per label.
pub const KEYWORD_LIMIT: usize = 5;
/// Words of this many characters or fewer are never keywords.
const MIN_KEYWORD_CHARS: usize = 3;

/// Summarize reviews per sentiment label.
///
/// Labels are visited in Positive, Negative, Neutral order. A label with no
/// matching reviews is omitted, so an empty input gives an empty breakdown.
#[must_use]
pub fn summarize(reviews: &[ClassifiedReview]) -> SentimentBreakdown {
    let summaries = SentimentLabel::SUMMARY_ORDER
        .iter()
        .filter_map(|&label| summarize_label(reviews, label))
        .collect();
    SentimentBreakdown::from_summaries(summaries)
}

fn summarize_label(reviews: &[ClassifiedReview], label: SentimentLabel) -> Option<SentimentSummary> {
    let matching: Vec<&ClassifiedReview> =
        reviews.iter().filter(|r| r.sentiment() == label).collect();
    let first = matching.first()?;

    let count = matching.len();
    let rating_sum: u32 = matching.iter().map(|r| u32::from(r.rating())).sum();
    #[allow(clippy::cast_precision_loss)]
    let average_rating = f64::from(rating_sum) / count as f64;

    let corpus = matching
        .iter()
        .map(|r| r.text())
        .collect::<Vec<_>>()
        .join(" ");

    Some(SentimentSummary {
        label,
        count,
        average_rating,
        keywords: top_keywords(&corpus, KEYWORD_LIMIT),
        sample_text: first.text().to_string(),
    })
}

/// Rank the words of `text` longer than three characters by frequency.
///
/// Contractions are split first, so `didn't` counts as `did` and `n't`.
/// Ties keep first-occurrence order. At most `limit` words are returned.
#[must_use]
pub fn top_keywords(text: &str, limit: usize) -> Vec<String> {
    // word -> (count, first position)
    let mut freq: HashMap<String, (usize, usize)> = HashMap::new();
    for (pos, word) in keyword_words(text)
        .into_iter()
        .filter(|w| w.chars().count() > MIN_KEYWORD_CHARS)
        .enumerate()
    {
        freq.entry(word).or_insert((0, pos)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = freq
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(word, _, _)| word)
        .collect()
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
