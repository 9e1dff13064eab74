use crate::error::{Error, Result};
use crate::layout::{PageSetup, ParagraphStyle};
use crate::render::DocumentSink;
use docx_rs::{
    Docx, LineSpacing, LineSpacingType, PageMargin, Paragraph, Run, RunFonts, Style, StyleType,
};
use std::collections::BTreeMap;
use std::io::Cursor;

const TWIPS_PER_INCH: f64 = 1440.0;
const TWIPS_PER_POINT: f64 = 20.0;

// docx-rs mixes signed and unsigned integers across its setters.
fn twips<T: TryFrom<i64> + Default>(value: f64) -> T {
    T::try_from(value.round() as i64).unwrap_or_default()
}

fn inches<T: TryFrom<i64> + Default>(value: f64) -> T {
    twips(value * TWIPS_PER_INCH)
}

fn points<T: TryFrom<i64> + Default>(value: f64) -> T {
    twips(value * TWIPS_PER_POINT)
}

fn half_points(value: f64) -> usize {
    twips(value * 2.0)
}

fn heading_style_id(level: u8) -> String {
    format!("Heading{}", level)
}

/// Run formatting carried by a heading style rather than by its runs.
#[derive(Debug, Clone, PartialEq)]
struct HeadingLook {
    color: Option<String>,
    bold: bool,
}

/// Collects paragraphs and packs them into a `.docx` archive.
#[derive(Default)]
pub struct DocxSink {
    page: Option<PageSetup>,
    headings: BTreeMap<u8, HeadingLook>,
    paragraphs: Vec<Paragraph>,
}

impl DocxSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Builds the archive in memory.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut docx = Docx::new();
        if let Some(page) = &self.page {
            docx = docx.page_size(inches(page.width), inches(page.height)).page_margin(
                PageMargin::new()
                    .top(inches(page.margin_top))
                    .right(inches(page.margin_right))
                    .bottom(inches(page.margin_bottom))
                    .left(inches(page.margin_left)),
            );
        }
        for (level, look) in &self.headings {
            let mut style = Style::new(heading_style_id(*level), StyleType::Paragraph)
                .name(format!("Heading {}", level))
                .outline_lvl(usize::from(level.saturating_sub(1)));
            if let Some(color) = &look.color {
                style = style.color(color.as_str());
            }
            if look.bold {
                style = style.bold();
            }
            docx = docx.add_style(style);
        }
        for paragraph in self.paragraphs {
            docx = docx.add_paragraph(paragraph);
        }

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| Error::Render(e.to_string()))?;
        Ok(buf.into_inner())
    }
}

impl DocumentSink for DocxSink {
    fn set_page(&mut self, page: &PageSetup) {
        self.page = Some(page.clone());
    }

    fn add_paragraph(&mut self, text: &str, style: &ParagraphStyle) {
        // East Asian text keeps the theme font.
        let family = style.font_family.as_str();
        let fonts = RunFonts::new().ascii(family).hi_ansi(family);
        let mut run = Run::new()
            .add_text(text)
            .size(half_points(style.font_size))
            .fonts(fonts);
        if style.heading_level.is_none() {
            if let Some(color) = &style.color {
                run = run.color(color.as_str());
            }
            if style.bold {
                run = run.bold();
            }
        }

        let spacing = LineSpacing::new()
            .before(points(style.space_before))
            .after(points(style.space_after))
            .line(points(style.line_spacing))
            .line_rule(LineSpacingType::Exact);
        let mut paragraph = Paragraph::new().add_run(run).line_spacing(spacing);
        if style.left_indent > 0.0 {
            paragraph = paragraph.indent(Some(inches(style.left_indent)), None, None, None);
        }
        if let Some(level) = style.heading_level {
            self.headings.entry(level).or_insert_with(|| HeadingLook {
                color: style.color.clone(),
                bold: style.bold,
            });
            paragraph = paragraph.style(&heading_style_id(level));
        }
        self.paragraphs.push(paragraph);
    }
}
