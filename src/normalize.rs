const BOM: char = '\u{FEFF}';

/// Splits raw file text into lines. A trailing newline does not produce an
/// extra empty line, and empty text produces no lines at all.
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.lines().map(|l| l.to_string()).collect()
}

/// Trims surrounding whitespace from every line, U+3000 included.
pub fn preprocess(lines: &[String]) -> Vec<String> {
    lines.iter().map(|l| l.trim().to_string()).collect()
}
