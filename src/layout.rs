use crate::config::Config;
use crate::ir::Category;

/// Page geometry in inches, applied once per document.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSetup {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

/// Formatting of one paragraph. Sizes are in points, indents in inches.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    /// `Some(level)` renders the paragraph as a heading of that level.
    pub heading_level: Option<u8>,
    pub font_family: String,
    pub font_size: f64,
    pub space_before: f64,
    pub space_after: f64,
    pub line_spacing: f64,
    pub left_indent: f64,
    /// Hex RGB, `None` for the default text color.
    pub color: Option<String>,
    pub bold: bool,
}

pub fn page_setup(config: &Config) -> PageSetup {
    PageSetup {
        width: config.page_width,
        height: config.page_height,
        margin_top: config.margin,
        margin_right: config.margin,
        margin_bottom: config.margin,
        margin_left: config.margin,
    }
}

/// Number of indent steps for each category.
pub fn indent_steps(category: Category) -> u8 {
    match category {
        Category::Dialogue => 1,
        Category::Action | Category::Transition => 2,
        Category::Slugline | Category::Heading | Category::Blank => 0,
    }
}

pub fn paragraph_style(category: Category, config: &Config) -> ParagraphStyle {
    let is_slugline = category == Category::Slugline;
    ParagraphStyle {
        heading_level: is_slugline.then_some(config.slugline_heading_level),
        font_family: config.font_family.clone(),
        font_size: config.font_size,
        space_before: 0.0,
        space_after: 0.0,
        line_spacing: config.line_spacing,
        left_indent: f64::from(indent_steps(category)) * config.indent_step,
        color: is_slugline.then(|| config.slugline_color.clone()),
        bold: is_slugline,
    }
}
