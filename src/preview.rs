use crate::ir::{Category, TaggedLine};
use crossterm::style::{style, Color, Stylize};

fn category_color(category: Category) -> Option<Color> {
    match category {
        Category::Slugline => Some(Color::DarkYellow),
        Category::Action => Some(Color::DarkBlue),
        Category::Dialogue => Some(Color::DarkGreen),
        Category::Transition => Some(Color::DarkRed),
        Category::Heading => Some(Color::DarkCyan),
        Category::Blank => None,
    }
}

/// One tagged line colored by its category, for terminal preview.
pub fn format_line(line: &TaggedLine) -> String {
    match category_color(line.category) {
        Some(color) => style(line.text.as_str()).with(color).to_string(),
        None => line.text.clone(),
    }
}
