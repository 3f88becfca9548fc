use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("PDF rendering error: {0}")]
    Pdf(String),

    #[error("spreadsheet rendering error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("table '{table}' row {row} has {found} cells, expected {expected}")]
    RaggedTable {
        table: String,
        row: usize,
        found: usize,
        expected: usize,
    },
}

impl From<printpdf::Error> for ReportError {
    fn from(e: printpdf::Error) -> Self {
        ReportError::Pdf(format!("{e:?}"))
    }
}
