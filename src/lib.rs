pub mod breaks;
pub mod classify;
pub mod config;
pub mod docx;
pub mod error;
pub mod ir;
pub mod layout;
pub mod normalize;
pub mod preview;
pub mod render;
pub mod status;

use config::Config;
use error::{Error, Result};
use ir::TaggedLine;
use std::fs;
use std::path::{Path, PathBuf};

pub const INPUT_EXTENSION: &str = "txt";
pub const OUTPUT_EXTENSION: &str = "docx";

/// Classifies every line of a script and fixes up the blank lines between
/// them.
pub fn format_script(text: &str) -> Vec<TaggedLine> {
    // Stage 0
    let lines = normalize::split_lines(text);

    // Stage 1
    let lines = normalize::preprocess(&lines);

    // Stage 2
    let tagged = classify::classify(&lines);

    // Stage 3
    let fixed = breaks::fix_line_breaks(&tagged);

    log::debug!(
        "formatted {} lines into {} ({} blanks inserted)",
        tagged.len(),
        fixed.len(),
        fixed.len() - tagged.len()
    );
    fixed
}

/// Renders tagged lines into the bytes of a `.docx` file.
pub fn build_document(lines: &[TaggedLine], config: &Config) -> Result<Vec<u8>> {
    config.validate()?;
    let mut sink = docx::DocxSink::new();
    render::render(lines, config, &mut sink);
    sink.finish()
}

/// Rejects paths that are not existing `.txt` files.
pub fn validate_input(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    if path.extension().and_then(|e| e.to_str()) != Some(INPUT_EXTENSION) {
        return Err(Error::WrongExtension(path.to_path_buf()));
    }
    Ok(())
}

/// Same directory and file stem as the input, with the `.docx` extension.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

pub fn read_script(path: &Path) -> Result<Vec<TaggedLine>> {
    validate_input(path)?;
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| Error::Decode(path.to_path_buf()))?;
    log::info!("read {}", path.display());
    Ok(format_script(&text))
}

/// Converts one script file to a `.docx` next to it and returns the output
/// path. Nothing is written unless the whole document was built.
pub fn convert_file(path: &Path, config: &Config) -> Result<PathBuf> {
    let lines = read_script(path)?;
    write_document(&lines, path, config)
}

/// Writes already formatted lines to the `.docx` path derived from `input`.
pub fn write_document(lines: &[TaggedLine], input: &Path, config: &Config) -> Result<PathBuf> {
    let bytes = build_document(lines, config)?;
    let target = output_path(input);
    fs::write(&target, bytes).map_err(|source| Error::Write {
        path: target.clone(),
        source,
    })?;
    log::info!("wrote {}", target.display());
    Ok(target)
}

/// Cleans up a path typed or dropped into the terminal: surrounding
/// whitespace and one pair of matching quotes are removed.
pub fn clean_input_path(raw: &str) -> PathBuf {
    let t = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| t.strip_prefix(*q).and_then(|rest| rest.strip_suffix(*q)))
        .unwrap_or(t);
    PathBuf::from(unquoted)
}
