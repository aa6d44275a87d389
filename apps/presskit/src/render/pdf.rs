//! Paginated PDF rendering: a small deterministic PDF 1.4 writer.
//!
//! Text is set in the standard Helvetica faces (not embedded) and wrapped with
//! the static width tables in `font_metrics`. Body blocks are split on blank
//! lines into separately flowed paragraphs; a new page starts whenever the
//! next line would cross the bottom margin.

use crate::render::font_metrics::PdfFont;
use crate::render::{Block, Document};

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 56.0;
const TEXT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const TITLE_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 14.0;
const SUBHEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 11.0;
const LINE_SPACING: f32 = 1.4;
const PARAGRAPH_GAP: f32 = 5.0;
const SECTION_GAP: f32 = 10.0;

/// Renders the document to PDF bytes. Equal input gives byte-identical output.
pub fn render_pdf(doc: &Document) -> Vec<u8> {
    let mut layout = PageLayout::new();

    for block in &doc.blocks {
        match block {
            Block::Title(heading) => {
                layout.centered(&heading.compose(false), PdfFont::HelveticaBold, TITLE_SIZE);
                layout.gap(SECTION_GAP);
            }
            Block::Heading(heading) => {
                layout.wrapped(&heading.compose(false), PdfFont::HelveticaBold, HEADING_SIZE);
            }
            Block::Subheading(heading) => {
                layout.wrapped(&heading.compose(false), PdfFont::HelveticaBold, SUBHEADING_SIZE);
            }
            Block::Body(text) => {
                for paragraph in split_paragraphs(text) {
                    layout.wrapped(paragraph, PdfFont::Helvetica, BODY_SIZE);
                    layout.gap(PARAGRAPH_GAP);
                }
                layout.gap(SECTION_GAP);
            }
            Block::List(items) => {
                for item in items {
                    layout.wrapped(&format!("- {item}"), PdfFont::Helvetica, BODY_SIZE);
                }
                layout.gap(SECTION_GAP);
            }
            Block::Scores(rows) => {
                for row in rows {
                    layout.wrapped(
                        &format!("{}: {}/10", row.label, row.score),
                        PdfFont::Helvetica,
                        BODY_SIZE,
                    );
                }
                layout.gap(SECTION_GAP);
            }
        }
    }

    serialize(&layout.finish())
}

/// Splits on blank lines, dropping empty paragraphs.
fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n")
        .map(|p| p.trim_matches('\n'))
        .filter(|p| !p.trim().is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// Accumulates content streams, one per page, with a top-down text cursor.
struct PageLayout {
    pages: Vec<String>,
    current: String,
    y: f32,
}

impl PageLayout {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: String::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn new_page(&mut self) {
        let finished = std::mem::take(&mut self.current);
        self.pages.push(finished);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn gap(&mut self, points: f32) {
        self.y -= points;
    }

    /// Moves the cursor down one line, breaking the page first if the line would not fit.
    fn advance(&mut self, size: f32) -> f32 {
        let line_height = size * LINE_SPACING;
        if self.y - line_height < MARGIN {
            self.new_page();
        }
        self.y -= line_height;
        self.y
    }

    fn emit(&mut self, x: f32, y: f32, text: &str, font: PdfFont, size: f32) {
        self.current.push_str(&format!(
            "BT /{} {} Tf {:.2} {:.2} Td ({}) Tj ET\n",
            font.resource(),
            size,
            x,
            y,
            escape_text(text)
        ));
    }

    /// Wraps like `wrapped`, then centers each resulting line.
    fn centered(&mut self, text: &str, font: PdfFont, size: f32) {
        for line in wrap_line(text, font, size, TEXT_WIDTH) {
            let width = font.text_width(&line, size).min(TEXT_WIDTH);
            let x = MARGIN + (TEXT_WIDTH - width) / 2.0;
            let y = self.advance(size);
            self.emit(x, y, &line, font, size);
        }
    }

    /// Writes `text` left-aligned, honoring its own line breaks and wrapping long lines.
    fn wrapped(&mut self, text: &str, font: PdfFont, size: f32) {
        for source_line in text.lines() {
            for line in wrap_line(source_line, font, size, TEXT_WIDTH) {
                let y = self.advance(size);
                self.emit(MARGIN, y, &line, font, size);
            }
        }
    }

    fn finish(mut self) -> Vec<String> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.new_page();
        }
        self.pages
    }
}

/// Greedy word wrap. Words wider than the line are broken by character.
/// An empty source line yields one empty output line.
fn wrap_line(line: &str, font: PdfFont, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if font.text_width(&candidate, size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for ch in word.chars() {
            current.push(ch);
            if font.text_width(&current, size) > max_width && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(ch);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Serialization
// ────────────────────────────────────────────────────────────────────────────

/// Maps a character to its WinAnsiEncoding byte, or `?` when it has none.
fn win_ansi_byte(c: char) -> u8 {
    match c {
        ' '..='~' => c as u8,
        '\u{a0}'..='\u{ff}' => c as u32 as u8,
        '€' => 0x80,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '\t' => b' ',
        _ => b'?',
    }
}

/// Escapes text for a PDF literal string; non-ASCII bytes become octal escapes.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.chars().map(win_ansi_byte) {
        match byte {
            b'(' | b')' | b'\\' => {
                out.push('\\');
                out.push(byte as char);
            }
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\{byte:03o}")),
        }
    }
    out
}

/// Object layout: 1 catalog, 2 page tree, 3–4 fonts, then a page/content pair per page.
fn serialize(pages: &[String]) -> Vec<u8> {
    let page_ids: Vec<usize> = (0..pages.len()).map(|i| 5 + 2 * i).collect();
    let kids = page_ids
        .iter()
        .map(|id| format!("{id} 0 R"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut objects: Vec<String> = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!("<< /Type /Pages /Kids [{kids}] /Count {} >>", pages.len()),
        font_object(PdfFont::Helvetica),
        font_object(PdfFont::HelveticaBold),
    ];
    for (page_id, content) in page_ids.iter().zip(pages) {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
            page_id + 1
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{content}endstream",
            content.len()
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, object) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{object}\nendobj\n", index + 1));
    }

    let xref_offset = out.len();
    out.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        out.push_str(&format!("{offset:010} 00000 n \n"));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));
    out.into_bytes()
}

fn font_object(font: PdfFont) -> String {
    format!(
        "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
        font.base_font()
    )
}
