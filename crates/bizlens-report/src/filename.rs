use chrono::NaiveDateTime;

/// Which export is being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Document,
    Spreadsheet,
}

impl ReportKind {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ReportKind::Document => "pdf",
            ReportKind::Spreadsheet => "xlsx",
        }
    }

    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            ReportKind::Document => "application/pdf",
            ReportKind::Spreadsheet => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    fn stem(self) -> &'static str {
        match self {
            ReportKind::Document => "bizlens_report",
            ReportKind::Spreadsheet => "bizlens_data",
        }
    }
}

/// `bizlens_report_YYYYmmdd_HHMMSS.pdf` / `bizlens_data_YYYYmmdd_HHMMSS.xlsx`.
///
/// The timestamp comes from the caller so renders stay reproducible.
#[must_use]
pub fn export_filename(kind: ReportKind, generated_at: NaiveDateTime) -> String {
    format!(
        "{}_{}.{}",
        kind.stem(),
        generated_at.format("%Y%m%d_%H%M%S"),
        kind.extension()
    )
}
