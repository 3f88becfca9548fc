use serde::Serialize;

/// Discrete sentiment of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Order in which aggregated summaries are emitted.
    pub const SUMMARY_ORDER: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistics for the reviews sharing one label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub label: SentimentLabel,
    /// Always at least 1; empty labels are never summarized.
    pub count: usize,
    /// Mean star rating of the group.
    pub average_rating: f64,
    /// Up to five most frequent words longer than three characters.
    pub keywords: Vec<String>,
    /// Full text of the first review in the group.
    pub sample_text: String,
}

impl SentimentSummary {
    /// `sample_text` cut to `max_chars` characters, with `...` appended when cut.
    #[must_use]
    pub fn sample_excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.sample_text.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}

/// Per-label summaries in Positive, Negative, Neutral order.
///
/// A label with no reviews is absent rather than present with a zero count.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentBreakdown {
    summaries: Vec<SentimentSummary>,
}

impl SentimentBreakdown {
    pub(crate) fn from_summaries(summaries: Vec<SentimentSummary>) -> Self {
        Self { summaries }
    }

    #[must_use]
    pub fn get(&self, label: SentimentLabel) -> Option<&SentimentSummary> {
        self.summaries.iter().find(|s| s.label == label)
    }

    #[must_use]
    pub fn contains(&self, label: SentimentLabel) -> bool {
        self.get(label).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SentimentSummary> {
        self.summaries.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = SentimentLabel> + '_ {
        self.summaries.iter().map(|s| s.label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Sum of `count` over all present labels.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.summaries.iter().map(|s| s.count).sum()
    }
}

impl<'a> IntoIterator for &'a SentimentBreakdown {
    type Item = &'a SentimentSummary;
    type IntoIter = std::slice::Iter<'a, SentimentSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.summaries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(text: &str) -> SentimentSummary {
        SentimentSummary {
            label: SentimentLabel::Neutral,
            count: 1,
            average_rating: 3.0,
            keywords: vec![],
            sample_text: text.to_string(),
        }
    }

    #[test]
    fn excerpt_leaves_short_text_alone() {
        assert_eq!(summary("short").sample_excerpt(100), "short");
    }

    #[test]
    fn excerpt_truncates_on_char_boundary() {
        assert_eq!(summary("héllo wörld").sample_excerpt(5), "héllo...");
    }

    #[test]
    fn excerpt_of_exact_length_is_not_marked() {
        assert_eq!(summary("abcde").sample_excerpt(5), "abcde");
    }

    #[test]
    fn label_display_is_capitalized() {
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
    }
}
