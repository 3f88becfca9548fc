//! Writing report files to disk.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bizlens_report::{export_filename, render_document, render_spreadsheet, ReportKind};
use chrono::NaiveDateTime;

use crate::dashboard::Dashboard;
use crate::ExportFormat;

fn kinds(format: ExportFormat) -> &'static [ReportKind] {
    match format {
        ExportFormat::Pdf => &[ReportKind::Document],
        ExportFormat::Xlsx => &[ReportKind::Spreadsheet],
        ExportFormat::All => &[ReportKind::Document, ReportKind::Spreadsheet],
    }
}

/// Render the requested reports into `dir`, named after `generated_at`.
///
/// Returns the written paths in render order.
///
/// # Errors
///
/// Returns an error if `dir` cannot be created, rendering fails, or a file
/// cannot be written.
pub(crate) fn write_exports(
    dash: &Dashboard,
    format: ExportFormat,
    dir: &Path,
    generated_at: NaiveDateTime,
) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating export directory {}", dir.display()))?;

    let mut written = Vec::new();
    for &kind in kinds(format) {
        let bytes = match kind {
            ReportKind::Document => render_document(&dash.document_payload())?,
            ReportKind::Spreadsheet => render_spreadsheet(&dash.spreadsheet_payload())?,
        };
        let path = dir.join(export_filename(kind, generated_at));
        std::fs::write(&path, &bytes).with_context(|| format!("writing {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            bytes = bytes.len(),
            mime = kind.mime_type(),
            "wrote export"
        );
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use bizlens_core::DateRange;
    use bizlens_metrics::LocationFilter;
    use bizlens_source::{DemoSource, Source};
    use chrono::NaiveDate;

    use super::*;
    use crate::dashboard::{load, Request};

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bizlens-{name}-{}", uuid::Uuid::new_v4()))
    }

    async fn demo_dashboard() -> Dashboard {
        let day = |d| NaiveDate::from_ymd_opt(2024, 7, d).unwrap();
        let request = Request {
            filter: LocationFilter::default(),
            range: DateRange::new(day(1), day(7)).unwrap(),
        };
        load(&Source::Demo(DemoSource::new(42)), &request)
            .await
            .unwrap()
    }

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 20)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn all_format_writes_both_files() {
        let dir = scratch_dir("all");
        let dash = demo_dashboard().await;
        let written = write_exports(&dash, ExportFormat::All, &dir, at()).unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "bizlens_report_20240720_091500.pdf",
                "bizlens_data_20240720_091500.xlsx"
            ]
        );
        assert!(std::fs::read(&written[0]).unwrap().starts_with(b"%PDF"));
        assert!(std::fs::read(&written[1]).unwrap().starts_with(b"PK"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn single_format_writes_one_file() {
        let dir = scratch_dir("xlsx");
        let dash = demo_dashboard().await;
        let written = write_exports(&dash, ExportFormat::Xlsx, &dir, at()).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].extension().is_some_and(|e| e == "xlsx"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
