use std::fmt;

/// The screenplay role of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Slugline,
    Dialogue,
    Action,
    Transition,
    Heading,
    Blank,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Slugline => "slugline",
            Category::Dialogue => "dialogue",
            Category::Action => "action",
            Category::Transition => "transition",
            Category::Heading => "heading",
            Category::Blank => "blank",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLine {
    pub text: String,
    pub category: Category,
}

impl TaggedLine {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        TaggedLine {
            text: text.into(),
            category,
        }
    }

    /// A synthetic separator inserted by the break normalizer.
    pub fn blank() -> Self {
        TaggedLine::new(String::new(), Category::Blank)
    }

    pub fn is_blank(&self) -> bool {
        self.category == Category::Blank
    }
}
