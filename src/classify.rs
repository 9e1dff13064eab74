use crate::ir::{Category, TaggedLine};
use regex::Regex;
use std::sync::LazyLock;

const FULLWIDTH_SPACE: char = '\u{3000}';

struct Rule {
    category: Category,
    pattern: Regex,
    transform: fn(&str) -> String,
}

impl Rule {
    fn new(category: Category, pattern: &str, transform: fn(&str) -> String) -> Self {
        Rule {
            category,
            pattern: Regex::new(pattern).unwrap(),
            transform,
        }
    }
}

fn keep(line: &str) -> String {
    line.to_string()
}

fn indent_transition(line: &str) -> String {
    format!("{}{}", FULLWIDTH_SPACE, line)
}

// Order matters: the first matching rule wins, Action is the fallback.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // ○ or □ marker followed by the location
        Rule::new(Category::Slugline, r"^[○□].+", keep),
        // ends in a 「…」 quote, optionally after the speaker's name
        Rule::new(Category::Dialogue, r"^.*「.+」$", keep),
        // ×　　×　　×
        Rule::new(Category::Transition, r"^×\s+×\s+×$", indent_transition),
        Rule::new(Category::Heading, r"^【.+】$", keep),
        Rule::new(Category::Blank, r"^$", keep),
    ]
});

pub fn classify_line(line: &str) -> TaggedLine {
    RULES
        .iter()
        .find(|rule| rule.pattern.is_match(line))
        .map(|rule| TaggedLine::new((rule.transform)(line), rule.category))
        .unwrap_or_else(|| TaggedLine::new(line, Category::Action))
}

pub fn classify(lines: &[String]) -> Vec<TaggedLine> {
    lines.iter().map(|l| classify_line(l)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    fn category(line: &str) -> Category {
        classify_line(line).category
    }

    #[test]
    fn test_slugline_markers() {
        assert_eq!(category("○Office"), Category::Slugline);
        assert_eq!(category("□Rooftop, night"), Category::Slugline);
    }

    #[test]
    fn test_slugline_needs_text_after_marker() {
        assert_eq!(category("○"), Category::Action);
        assert_eq!(category("□"), Category::Action);
    }

    #[test]
    fn test_dialogue() {
        assert_eq!(category("「Hello」"), Category::Dialogue);
        assert_eq!(category("Taro「Hello」"), Category::Dialogue);
    }

    #[test]
    fn test_dialogue_needs_content_and_closing_quote() {
        assert_eq!(category("「」"), Category::Action);
        assert_eq!(category("「Hello」 he says."), Category::Action);
        assert_eq!(category("「Hello"), Category::Action);
    }

    #[test]
    fn test_transition_text_is_indented() {
        let tagged = classify_line("×   ×   ×");
        assert_eq!(tagged.category, Category::Transition);
        assert_eq!(tagged.text, "\u{3000}×   ×   ×");
    }

    #[test]
    fn test_transition_accepts_any_whitespace_run() {
        assert_eq!(category("×\u{3000}\u{3000}×\t×"), Category::Transition);
        assert_eq!(category("××   ×"), Category::Action);
        assert_eq!(category("×   ×   ×   ×"), Category::Action);
        assert_eq!(category("×   ×"), Category::Action);
    }

    #[test]
    fn test_heading() {
        assert_eq!(category("【Scene 1】"), Category::Heading);
        assert_eq!(category("【】"), Category::Action);
        assert_eq!(category("【Scene 1】 notes"), Category::Action);
    }

    #[test]
    fn test_blank() {
        let tagged = classify_line("");
        assert_eq!(tagged, TaggedLine::new("", Category::Blank));
    }

    #[test]
    fn test_action_fallback() {
        assert_eq!(category("He walks in."), Category::Action);
        assert_eq!(category(" "), Category::Action);
        assert_eq!(category("\u{1F600}"), Category::Action);
    }

    #[test]
    fn test_text_unchanged_outside_transition() {
        for line in ["○Office", "「Hello」", "【Scene 1】", "He walks in."] {
            assert_eq!(classify_line(line).text, line);
        }
    }

    #[test]
    fn test_precedence_slugline_over_dialogue() {
        assert_eq!(category("○「Hello」"), Category::Slugline);
        assert_eq!(category("○【Scene】"), Category::Slugline);
    }

    #[test]
    fn test_precedence_dialogue_over_heading() {
        assert_eq!(category("【「Hello」"), Category::Dialogue);
        assert_eq!(category("【Scene「Hello」】"), Category::Heading);
    }

    #[test]
    fn test_classify_is_total_and_ordered() {
        let lines = s(&["○Office", "「Hello」", "", "×  ×  ×", "【Act】", "text"]);
        let result = classify(&lines);
        let categories: Vec<Category> = result.iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Slugline,
                Category::Dialogue,
                Category::Blank,
                Category::Transition,
                Category::Heading,
                Category::Action,
            ]
        );
    }
}
