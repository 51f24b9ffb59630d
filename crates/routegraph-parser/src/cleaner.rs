use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ParserError;

static TAB_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t+").expect("valid tab-run pattern"));

/// `\r\n`, a lone `\r` and `\n` all end a line.
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("valid line-break pattern"));

/// Trims each line and squeezes every run of tabs down to a single tab.
///
/// Lines are rejoined with `\n`. Empty lines are kept, and no trailing newline
/// is added.
pub fn clean_text(raw: &str) -> String {
    let mut lines: Vec<&str> = LINE_BREAK.split(raw).collect();
    // A final line break terminates the last line rather than opening a new one.
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
        .into_iter()
        .map(|line| TAB_RUN.replace_all(line.trim(), "\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads `path` as UTF-8 and runs [`clean_text`] over it.
pub fn clean_file(path: impl AsRef<Path>) -> Result<String, ParserError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(clean_text(&raw))
}
