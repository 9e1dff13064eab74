use crate::config::Config;
use crate::ir::TaggedLine;
use crate::layout::{page_setup, paragraph_style, PageSetup, ParagraphStyle};

/// A paginated document that tagged lines are written into.
pub trait DocumentSink {
    /// Called once, before any paragraph is added.
    fn set_page(&mut self, page: &PageSetup);

    fn add_paragraph(&mut self, text: &str, style: &ParagraphStyle);
}

pub fn render<S: DocumentSink>(lines: &[TaggedLine], config: &Config, sink: &mut S) {
    sink.set_page(&page_setup(config));
    for line in lines {
        log::trace!("{}: {}", line.category, line.text);
        let style = paragraph_style(line.category, config);
        sink.add_paragraph(&line.text, &style);
    }
    log::debug!("rendered {} paragraphs", lines.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Category;

    #[derive(Default)]
    struct Recorder {
        pages: Vec<PageSetup>,
        paragraphs: Vec<(String, ParagraphStyle)>,
    }

    impl DocumentSink for Recorder {
        fn set_page(&mut self, page: &PageSetup) {
            self.pages.push(page.clone());
        }

        fn add_paragraph(&mut self, text: &str, style: &ParagraphStyle) {
            self.paragraphs.push((text.to_string(), style.clone()));
        }
    }

    #[test]
    fn test_render_order_and_styles() {
        let config = Config::default();
        let lines = vec![
            TaggedLine::new("○Office", Category::Slugline),
            TaggedLine::blank(),
            TaggedLine::new("「Hello」", Category::Dialogue),
        ];
        let mut rec = Recorder::default();
        render(&lines, &config, &mut rec);

        assert_eq!(rec.pages.len(), 1);
        let texts: Vec<&str> = rec.paragraphs.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(texts, vec!["○Office", "", "「Hello」"]);
        assert_eq!(rec.paragraphs[0].1.heading_level, Some(3));
        assert_eq!(rec.paragraphs[2].1.left_indent, 0.5);
    }

    #[test]
    fn test_render_empty_sets_page_only() {
        let mut rec = Recorder::default();
        render(&[], &Config::default(), &mut rec);
        assert_eq!(rec.pages.len(), 1);
        assert!(rec.paragraphs.is_empty());
    }
}
