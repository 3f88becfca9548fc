use bizlens_core::{MetricValue, SummaryMetrics};
use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ReportError;

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
    Empty,
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Integer(v) => write!(f, "{v}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Date(d) => write!(f, "{d}"),
            Cell::Empty => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

impl From<Option<String>> for Cell {
    fn from(v: Option<String>) -> Self {
        v.map_or(Cell::Empty, Cell::Text)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Integer(v)
    }
}

impl From<u64> for Cell {
    fn from(v: u64) -> Self {
        Cell::Integer(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<u8> for Cell {
    fn from(v: u8) -> Self {
        Cell::Integer(i64::from(v))
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<NaiveDate> for Cell {
    fn from(v: NaiveDate) -> Self {
        Cell::Date(v)
    }
}

impl From<MetricValue> for Cell {
    fn from(v: MetricValue) -> Self {
        match v {
            MetricValue::Integer(i) => Cell::Integer(i),
            MetricValue::Float(f) => Cell::Float(f),
        }
    }
}

/// Rows under a header, written as one worksheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    #[must_use]
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check every row has one cell per column.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::RaggedTable`] for the first mismatched row.
    pub fn validate(&self, name: &str) -> Result<(), ReportError> {
        let expected = self.columns.len();
        match self.rows.iter().position(|r| r.len() != expected) {
            Some(row) => Err(ReportError::RaggedTable {
                table: name.to_string(),
                row,
                found: self.rows[row].len(),
                expected,
            }),
            None => Ok(()),
        }
    }
}

/// Everything a report renderer needs, assembled right before export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportPayload {
    /// Human-readable inclusive window, e.g. `"2024-06-20 to 2024-07-20"`.
    pub date_range: String,
    pub summary_metrics: SummaryMetrics,
    pub insights_table: Option<Table>,
    pub reviews_table: Option<Table>,
}

impl ReportPayload {
    #[must_use]
    pub fn new(date_range: impl Into<String>, summary_metrics: SummaryMetrics) -> Self {
        Self {
            date_range: date_range.into(),
            summary_metrics,
            insights_table: None,
            reviews_table: None,
        }
    }

    #[must_use]
    pub fn with_insights(mut self, table: Table) -> Self {
        self.insights_table = Some(table);
        self
    }

    #[must_use]
    pub fn with_reviews(mut self, table: Table) -> Self {
        self.reviews_table = Some(table);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_reported() {
        let mut table = Table::new(["a", "b"]);
        table.push_row(vec![Cell::from(1_i64), Cell::from("x")]);
        table.push_row(vec![Cell::from(2_i64)]);
        let err = table.validate("Insights").unwrap_err();
        assert!(matches!(
            err,
            ReportError::RaggedTable { row: 1, found: 1, expected: 2, .. }
        ));
    }

    #[test]
    fn cells_display_plainly() {
        assert_eq!(Cell::from(6_i64).to_string(), "6");
        assert_eq!(Cell::from(3.33).to_string(), "3.33");
        assert_eq!(Cell::Empty.to_string(), "");
        assert_eq!(
            Cell::from(NaiveDate::from_ymd_opt(2024, 7, 8).unwrap()).to_string(),
            "2024-07-08"
        );
    }

    #[test]
    fn payload_starts_without_tables() {
        let payload = ReportPayload::new("a to b", SummaryMetrics::new());
        assert!(payload.insights_table.is_none());
        assert!(payload.reviews_table.is_none());
    }
}
