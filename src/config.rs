use serde::Deserialize;
use thiserror::Error;

/// A config value that would produce a broken document.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("slugline_color must be six hex digits, got {0:?}")]
    Color(String),

    #[error("slugline_heading_level must be between 1 and 9, got {0}")]
    HeadingLevel(u8),

    #[error("font_family must be a non-empty name without markup characters, got {0:?}")]
    FontFamily(String),

    #[error("{name} is out of range: {value}")]
    OutOfRange { name: &'static str, value: f64 },
}

/// Document layout settings. Every field may be omitted from the JSON file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in points.
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Exact line height in points.
    #[serde(default = "default_line_spacing")]
    pub line_spacing: f64,

    /// Width of one indent step in inches.
    #[serde(default = "default_indent_step")]
    pub indent_step: f64,

    /// Page width in inches.
    #[serde(default = "default_page_width")]
    pub page_width: f64,

    /// Page height in inches.
    #[serde(default = "default_page_height")]
    pub page_height: f64,

    /// Margin on all four sides, in inches.
    #[serde(default = "default_margin")]
    pub margin: f64,

    /// Hex RGB color of slugline text.
    #[serde(default = "default_slugline_color")]
    pub slugline_color: String,

    #[serde(default = "default_slugline_heading_level")]
    pub slugline_heading_level: u8,
}

fn default_font_family() -> String {
    "Arial".to_string()
}
fn default_font_size() -> f64 {
    12.0
}
fn default_line_spacing() -> f64 {
    18.0
}
fn default_indent_step() -> f64 {
    0.5
}
fn default_page_width() -> f64 {
    8.27
}
fn default_page_height() -> f64 {
    11.69
}
fn default_margin() -> f64 {
    1.0
}
fn default_slugline_color() -> String {
    "666666".to_string()
}
fn default_slugline_heading_level() -> u8 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Config {
            font_family: default_font_family(),
            font_size: default_font_size(),
            line_spacing: default_line_spacing(),
            indent_step: default_indent_step(),
            page_width: default_page_width(),
            page_height: default_page_height(),
            margin: default_margin(),
            slugline_color: default_slugline_color(),
            slugline_heading_level: default_slugline_heading_level(),
        }
    }
}

impl Config {
    /// Rejects values that cannot be written into a document as-is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let color = &self.slugline_color;
        if color.len() != 6 || !color.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::Color(color.clone()));
        }
        if !(1..=9).contains(&self.slugline_heading_level) {
            return Err(ConfigError::HeadingLevel(self.slugline_heading_level));
        }
        let family = &self.font_family;
        if family.trim().is_empty() || family.contains(['"', '\'', '<', '>', '&']) {
            return Err(ConfigError::FontFamily(family.clone()));
        }

        let positive = [
            ("font_size", self.font_size),
            ("line_spacing", self.line_spacing),
            ("page_width", self.page_width),
            ("page_height", self.page_height),
        ];
        let non_negative = [("indent_step", self.indent_step), ("margin", self.margin)];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::OutOfRange { name, value });
            }
        }
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { name, value });
            }
        }
        Ok(())
    }
}
