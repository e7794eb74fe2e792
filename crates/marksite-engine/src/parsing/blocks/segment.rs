use std::sync::OnceLock;

use regex::Regex;

use crate::error::MarkupError;

fn blank_line_regex() -> &'static Regex {
    static BLANK_LINE_REGEX: OnceLock<Regex> = OnceLock::new();
    BLANK_LINE_REGEX.get_or_init(|| Regex::new(r"\n{2,}").expect("Invalid blank line regex"))
}

/// Splits markdown into blocks separated by blank lines.
///
/// Runs of blank lines count as one separator. Each block is trimmed and
/// blocks that trim to nothing are dropped. Splitting is purely textual:
/// a blank line inside a code fence still ends the block.
pub fn segment_blocks(markdown: &str) -> Result<Vec<&str>, MarkupError> {
    if markdown.is_empty() {
        return Err(MarkupError::EmptyInput);
    }

    let blocks = blank_line_regex()
        .split(markdown.trim_matches('\n'))
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect();
    Ok(blocks)
}
