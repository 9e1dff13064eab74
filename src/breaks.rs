use crate::ir::{Category, TaggedLine};

/// Whether a separator belongs between a line of category `prev` and the
/// following line of category `cur`.
fn needs_break(prev: Category, cur: Category) -> bool {
    let repeated_slugline = prev == Category::Slugline && cur == Category::Slugline;
    let category_change = prev != cur && prev != Category::Blank && cur != Category::Blank;
    repeated_slugline || category_change
}

/// Inserts blank lines so that sluglines never sit back to back and every
/// change between two non-blank categories is separated by a blank.
///
/// The running context starts at the first line's own category, so nothing
/// is ever inserted in front of the first line. Empty input yields empty
/// output.
pub fn fix_line_breaks(lines: &[TaggedLine]) -> Vec<TaggedLine> {
    let Some(first) = lines.first() else {
        return Vec::new();
    };

    let mut seed = Vec::with_capacity(lines.len());
    seed.push(first.clone());

    let (out, _) = lines.iter().skip(1).fold(
        (seed, first.category),
        |(mut out, prev), line| {
            if needs_break(prev, line.category) {
                out.push(TaggedLine::blank());
            }
            out.push(line.clone());
            (out, line.category)
        },
    );
    out
}
