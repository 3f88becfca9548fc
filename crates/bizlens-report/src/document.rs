//! PDF summary document.

use printpdf::path::PaintMode;
use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb};

use crate::error::ReportError;
use crate::naming::humanize_key;
use crate::payload::ReportPayload;

pub const TITLE: &str = "Business Profile Analytics Report";
pub const HEADING: &str = "Summary Metrics";
pub const HEADER: [&str; 2] = ["Metric", "Value"];

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const ROW_HEIGHT: f32 = 8.0;
const COLUMN_WIDTHS: [f32; 2] = [110.0, 60.0];
const CELL_PADDING: f32 = 3.0;

const TITLE_SIZE: f32 = 24.0;
const PERIOD_SIZE: f32 = 11.0;
const HEADING_SIZE: f32 = 14.0;
const CELL_SIZE: f32 = 10.0;

// Helvetica averages roughly half an em per glyph; 1pt = 0.3528mm.
const GLYPH_WIDTH_EM: f32 = 0.5;
const PT_TO_MM: f32 = 0.3528;

/// The text content of a summary document, before any drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLayout {
    pub title: String,
    pub period: String,
    pub heading: String,
    pub header: [String; 2],
    /// `[humanized key, value]` in summary-metrics order.
    pub rows: Vec<[String; 2]>,
}

impl DocumentLayout {
    #[must_use]
    pub fn from_payload(payload: &ReportPayload) -> Self {
        Self {
            title: TITLE.to_string(),
            period: format!("Report Period: {}", payload.date_range),
            heading: HEADING.to_string(),
            header: HEADER.map(str::to_string),
            rows: payload
                .summary_metrics
                .iter()
                .map(|(key, value)| [humanize_key(key), value.to_string()])
                .collect(),
        }
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Title text and header band share the accent colour.
const ACCENT_RGB: (u8, u8, u8) = (0x2E, 0x86, 0xAB);
const TITLE_RGB: (u8, u8, u8) = ACCENT_RGB;
const HEADER_RGB: (u8, u8, u8) = ACCENT_RGB;

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

fn from_rgb((r, g, b): (u8, u8, u8)) -> Color {
    rgb(r, g, b)
}

fn header_fill() -> Color {
    from_rgb(HEADER_RGB)
}

fn body_fill() -> Color {
    rgb(0xF5, 0xF5, 0xDC)
}

fn black() -> Color {
    rgb(0, 0, 0)
}

fn white() -> Color {
    rgb(0xFF, 0xFF, 0xFF)
}

#[allow(clippy::cast_precision_loss)]
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_WIDTH_EM * PT_TO_MM
}

fn centered_text(layer: &PdfLayerReference, text: &str, size: f32, y: f32, font: &IndirectFontRef) {
    let x = ((PAGE_WIDTH - text_width(text, size)) / 2.0).max(MARGIN);
    layer.use_text(text, size, Mm(x), Mm(y), font);
}

/// Draw one bordered table row whose top edge sits at `top`.
fn draw_row(
    layer: &PdfLayerReference,
    cells: &[String; 2],
    top: f32,
    fill: Color,
    text_color: Color,
    font: &IndirectFontRef,
) {
    let bottom = top - ROW_HEIGHT;
    let mut left = MARGIN;

    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        layer.set_fill_color(fill.clone());
        layer.set_outline_color(black());
        layer.set_outline_thickness(1.0);
        layer.add_rect(
            Rect::new(Mm(left), Mm(bottom), Mm(left + width), Mm(top))
                .with_mode(PaintMode::FillStroke),
        );

        layer.set_fill_color(text_color.clone());
        let baseline = bottom + (ROW_HEIGHT - CELL_SIZE * PT_TO_MM) / 2.0;
        layer.use_text(
            cell.as_str(),
            CELL_SIZE,
            Mm(left + CELL_PADDING),
            Mm(baseline),
            font,
        );
        left += width;
    }
}

fn draw_header(layer: &PdfLayerReference, header: &[String; 2], top: f32, fonts: &Fonts) {
    draw_row(layer, header, top, header_fill(), white(), &fonts.bold);
}

/// Render the summary document as A4 PDF bytes.
///
/// Rows that do not fit on a page continue on the next one, under a
/// repeated header row.
///
/// # Errors
///
/// Returns [`ReportError::Pdf`] if the PDF backend fails.
pub fn render_document(payload: &ReportPayload) -> Result<Vec<u8>, ReportError> {
    let layout = DocumentLayout::from_payload(payload);

    let (doc, page, layer) = PdfDocument::new(
        layout.title.as_str(),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
    };

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - MARGIN - TITLE_SIZE * PT_TO_MM;

    current.set_fill_color(from_rgb(TITLE_RGB));
    centered_text(&current, &layout.title, TITLE_SIZE, y, &fonts.bold);
    y -= 14.0;
    current.set_fill_color(black());
    centered_text(&current, &layout.period, PERIOD_SIZE, y, &fonts.regular);
    y -= 14.0;
    current.use_text(
        layout.heading.as_str(),
        HEADING_SIZE,
        Mm(MARGIN),
        Mm(y),
        &fonts.bold,
    );
    y -= 6.0;

    draw_header(&current, &layout.header, y, &fonts);
    y -= ROW_HEIGHT;

    let mut pages = 1_usize;
    for row in &layout.rows {
        if y - ROW_HEIGHT < MARGIN {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            current = doc.get_page(next_page).get_layer(next_layer);
            pages += 1;
            y = PAGE_HEIGHT - MARGIN;
            draw_header(&current, &layout.header, y, &fonts);
            y -= ROW_HEIGHT;
        }
        draw_row(&current, row, y, body_fill(), black(), &fonts.regular);
        y -= ROW_HEIGHT;
    }

    let bytes = doc.save_to_bytes()?;
    tracing::debug!(
        rows = layout.rows.len(),
        pages,
        bytes = bytes.len(),
        "rendered summary document"
    );
    Ok(bytes)
}
