//! # Barcode Sheet Rendering
//!
//! Consumes the layout engine's placements plus a [`BarcodeRenderer`] and
//! writes a paginated PDF. Objects, content streams and the xref table
//! are emitted by hand; the only font is the built-in Helvetica, which
//! every reader ships.
//!
//! Page geometry is A4 portrait in points. Placements are computed from
//! the top-left corner of a page, PDF coordinates grow from the
//! bottom-left, so all y values are flipped on the way out.

use crate::barcode::{BarcodeImage, BarcodeRenderer};
use crate::error::{Result, RollcallError};
use crate::layout::{Placement, SheetLayout};
use crate::model::Student;
use std::io::Write;

pub const PAGE_WIDTH: f64 = 595.0;
pub const PAGE_HEIGHT: f64 = 842.0;

/// Bars are scaled to this draw width, whatever the image resolution.
const BARCODE_DRAW_WIDTH: f64 = 180.0;
/// Vertical gap between a cell's label line and the top of its bars.
const BARS_TOP_OFFSET: f64 = 20.0;

const TITLE_SIZE: f64 = 20.0;
const LABEL_SIZE: f64 = 12.0;
const CAPTION_SIZE: f64 = 10.0;
// Rough advance width per glyph for centering; Helvetica has no metrics
// table on board here and exact centering is not worth carrying one.
const GLYPH_WIDTH_EM: f64 = 0.5;

/// Render `students` as a multi-page barcode sheet.
///
/// An empty selection is rejected before any bytes are written; an empty
/// document has no meaning.
pub fn write_sheet<W: Write, R: BarcodeRenderer>(
    writer: &mut W,
    students: &[Student],
    layout: &SheetLayout,
    renderer: &R,
    title: &str,
) -> Result<()> {
    if students.is_empty() {
        return Err(RollcallError::EmptySelection);
    }

    let mut pages: Vec<Vec<(Placement, BarcodeImage)>> = vec![Vec::new(); layout.page_count(students.len())];
    for placement in layout.placements(students) {
        let image = renderer.render(&placement.student.barcode)?;
        pages[placement.page].push((placement, image));
    }

    let mut pdf = PdfBuilder::new();
    let page_count = pages.len();

    // Objects: 1 catalog, 2 page tree, 3 font, then a content/page pair
    // per page (4+2i, 5+2i).
    pdf.object("<< /Type /Catalog /Pages 2 0 R >>");
    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", 5 + 2 * i)).collect();
    pdf.object(&format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        page_count
    ));
    pdf.object("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>");

    for (i, entries) in pages.iter().enumerate() {
        let content = page_content(entries, title);
        let content_obj = pdf.stream_object(&content);
        pdf.object(&format!(
            "<< /Type /Page /Parent 2 0 R \
             /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << /F1 3 0 R >> >> \
             /Contents {content_obj} 0 R >>"
        ));
        debug_assert_eq!(pdf.next_object - 1, 5 + 2 * i);
    }

    pdf.finish(writer)
}

fn page_content(entries: &[(Placement, BarcodeImage)], title: &str) -> String {
    let mut ops = String::new();

    let title_x = centered_x(title, TITLE_SIZE, 0.0, PAGE_WIDTH);
    text_op(&mut ops, title, TITLE_SIZE, title_x, PAGE_HEIGHT - 50.0);

    for (placement, image) in entries {
        let Placement { student, x, y, .. } = *placement;

        let label = format!("{} (ID: {})", student.full_name(), student.id);
        text_op(&mut ops, &label, LABEL_SIZE, x, PAGE_HEIGHT - y - LABEL_SIZE);

        // Bars, scaled horizontally onto the fixed draw width.
        let bars_top = y + BARS_TOP_OFFSET;
        let bar_height = image.height() as f64;
        let bars_bottom = PAGE_HEIGHT - bars_top - bar_height;
        let scale = BARCODE_DRAW_WIDTH / image.width() as f64;
        for (offset, width) in image.dark_runs() {
            ops.push_str(&format!(
                "{:.2} {:.2} {:.2} {:.2} re f\n",
                x + offset as f64 * scale,
                bars_bottom,
                width as f64 * scale,
                bar_height,
            ));
        }

        // Human-readable text under the bars.
        let caption_x = centered_x(&student.barcode, CAPTION_SIZE, x, BARCODE_DRAW_WIDTH);
        let caption_y = bars_bottom - CAPTION_SIZE - 2.0;
        text_op(&mut ops, &student.barcode, CAPTION_SIZE, caption_x, caption_y);
    }

    ops
}

fn centered_x(text: &str, size: f64, left: f64, width: f64) -> f64 {
    let text_width = text.chars().count() as f64 * size * GLYPH_WIDTH_EM;
    (left + (width - text_width) / 2.0).max(left)
}

fn text_op(ops: &mut String, text: &str, size: f64, x: f64, y: f64) {
    ops.push_str(&format!(
        "BT /F1 {size} Tf {x:.2} {y:.2} Td ({}) Tj ET\n",
        escape_pdf_string(text)
    ));
}

fn escape_pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Accumulates numbered objects and writes the xref table at the end.
struct PdfBuilder {
    buf: Vec<u8>,
    offsets: Vec<usize>,
    next_object: usize,
}

impl PdfBuilder {
    fn new() -> Self {
        Self {
            buf: b"%PDF-1.4\n".to_vec(),
            offsets: Vec::new(),
            next_object: 1,
        }
    }

    fn object(&mut self, body: &str) -> usize {
        let num = self.begin_object();
        self.buf.extend_from_slice(body.as_bytes());
        self.buf.extend_from_slice(b"\nendobj\n");
        num
    }

    fn stream_object(&mut self, content: &str) -> usize {
        let num = self.begin_object();
        self.buf.extend_from_slice(
            format!("<< /Length {} >>\nstream\n{content}endstream\nendobj\n", content.len())
                .as_bytes(),
        );
        num
    }

    fn begin_object(&mut self) -> usize {
        let num = self.next_object;
        self.next_object += 1;
        self.offsets.push(self.buf.len());
        self.buf.extend_from_slice(format!("{num} 0 obj\n").as_bytes());
        num
    }

    fn finish<W: Write>(self, writer: &mut W) -> Result<()> {
        let mut buf = self.buf;
        let xref_offset = buf.len();
        let count = self.offsets.len() + 1;

        buf.extend_from_slice(format!("xref\n0 {count}\n").as_bytes());
        buf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &self.offsets {
            buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        buf.extend_from_slice(
            format!("trailer\n<< /Size {count} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n")
                .as_bytes(),
        );

        writer.write_all(&buf).map_err(RollcallError::Io)
    }
}
