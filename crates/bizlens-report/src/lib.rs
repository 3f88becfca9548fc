//! Report serialization: PDF summary documents and XLSX workbooks.
//!
//! Both renderers are pure functions of a [`ReportPayload`]. The text content
//! of each output is available as a plain layout ([`DocumentLayout`],
//! [`sheet_plan`]) so callers and tests can inspect it without parsing the
//! binary formats.

pub mod document;
pub mod error;
pub mod filename;
pub mod naming;
pub mod payload;
pub mod spreadsheet;
pub mod tables;

pub use document::{render_document, DocumentLayout};
pub use error::ReportError;
pub use filename::{export_filename, ReportKind};
pub use naming::humanize_key;
pub use payload::{Cell, ReportPayload, Table};
pub use spreadsheet::{render_spreadsheet, sheet_plan, SheetPlan};
