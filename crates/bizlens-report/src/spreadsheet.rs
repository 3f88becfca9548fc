//! XLSX workbook export.

use std::borrow::Cow;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::ReportError;
use crate::payload::{Cell, ReportPayload, Table};

pub const SUMMARY_SHEET: &str = "Summary";
pub const INSIGHTS_SHEET: &str = "Insights";
pub const REVIEWS_SHEET: &str = "Reviews";

const DATE_FORMAT: &str = "yyyy-mm-dd";

/// A worksheet that will be written, in workbook order.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan<'a> {
    pub name: &'static str,
    pub table: Cow<'a, Table>,
}

fn summary_table(payload: &ReportPayload) -> Table {
    let mut table = Table::new(["Metric", "Value"]);
    for (key, value) in payload.summary_metrics.iter() {
        table.push_row(vec![Cell::from(key), Cell::from(value)]);
    }
    table
}

/// Sheets to write: always "Summary", then "Insights" and "Reviews" when
/// the payload carries them.
#[must_use]
pub fn sheet_plan(payload: &ReportPayload) -> Vec<SheetPlan<'_>> {
    let mut plan = vec![SheetPlan {
        name: SUMMARY_SHEET,
        table: Cow::Owned(summary_table(payload)),
    }];
    if let Some(table) = &payload.insights_table {
        plan.push(SheetPlan {
            name: INSIGHTS_SHEET,
            table: Cow::Borrowed(table),
        });
    }
    if let Some(table) = &payload.reviews_table {
        plan.push(SheetPlan {
            name: REVIEWS_SHEET,
            table: Cow::Borrowed(table),
        });
    }
    plan
}

#[allow(clippy::cast_precision_loss)]
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    date_format: &Format,
) -> Result<(), ReportError> {
    match cell {
        Cell::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        Cell::Integer(v) => {
            worksheet.write_number(row, col, *v as f64)?;
        }
        Cell::Float(v) => {
            worksheet.write_number(row, col, *v)?;
        }
        Cell::Date(d) => {
            worksheet.write_datetime_with_format(row, col, d, date_format)?;
        }
        Cell::Empty => {}
    }
    Ok(())
}

fn write_table(
    worksheet: &mut Worksheet,
    table: &Table,
    header_format: &Format,
    date_format: &Format,
) -> Result<(), ReportError> {
    for (col, name) in (0_u16..).zip(&table.columns) {
        worksheet.write_string_with_format(0, col, name, header_format)?;
    }
    for (row, cells) in (1_u32..).zip(&table.rows) {
        for (col, cell) in (0_u16..).zip(cells) {
            write_cell(worksheet, row, col, cell, date_format)?;
        }
    }
    worksheet.autofit();
    Ok(())
}

/// Render the payload as XLSX workbook bytes.
///
/// # Errors
///
/// Returns [`ReportError::RaggedTable`] for a malformed table, or
/// [`ReportError::Spreadsheet`] if the workbook cannot be written.
pub fn render_spreadsheet(payload: &ReportPayload) -> Result<Vec<u8>, ReportError> {
    let plan = sheet_plan(payload);
    for sheet in &plan {
        sheet.table.validate(sheet.name)?;
    }

    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format(DATE_FORMAT);

    let mut workbook = Workbook::new();
    for sheet in &plan {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name)?;
        write_table(worksheet, &sheet.table, &header_format, &date_format)?;
    }

    let bytes = workbook.save_to_buffer()?;
    tracing::debug!(
        sheets = plan.len(),
        bytes = bytes.len(),
        "rendered spreadsheet"
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use bizlens_core::SummaryMetrics;

    use super::*;

    fn metrics() -> SummaryMetrics {
        SummaryMetrics::new()
            .with("total_reviews", 6_i64)
            .with("average_rating", 3.33)
    }

    #[test]
    fn metrics_only_payload_plans_summary_sheet() {
        let payload = ReportPayload::new("a to b", metrics());
        let plan = sheet_plan(&payload);
        let names: Vec<&str> = plan.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Summary"]);

        let summary = &plan[0].table;
        assert_eq!(summary.columns, vec!["Metric", "Value"]);
        assert_eq!(
            summary.rows,
            vec![
                vec![Cell::from("total_reviews"), Cell::Integer(6)],
                vec![Cell::from("average_rating"), Cell::Float(3.33)],
            ]
        );
    }

    #[test]
    fn optional_tables_follow_summary_in_order() {
        let payload = ReportPayload::new("a to b", metrics())
            .with_reviews(Table::new(["id"]))
            .with_insights(Table::new(["date"]));
        let names: Vec<&str> = sheet_plan(&payload).iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Summary", "Insights", "Reviews"]);
    }

    #[test]
    fn workbook_bytes_are_a_zip_container() {
        let payload = ReportPayload::new("a to b", metrics());
        let bytes = render_spreadsheet(&payload).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn ragged_table_is_rejected_before_writing() {
        let mut table = Table::new(["a", "b"]);
        table.push_row(vec![Cell::Empty]);
        let payload = ReportPayload::new("a to b", metrics()).with_insights(table);
        let err = render_spreadsheet(&payload).unwrap_err();
        assert!(matches!(err, ReportError::RaggedTable { ref table, .. } if table == "Insights"));
    }
}
