use std::sync::OnceLock;

use regex::Regex;

/// ATX heading with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;
    /// Prefix of a level one heading, which doubles as the page title.
    pub const TITLE_PREFIX: &'static str = "# ";

    fn pattern() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        // `.` stops at a newline, so the first line must carry text after the space.
        HEADING_REGEX.get_or_init(|| Regex::new(r"^(#{1,6}) .+").expect("Invalid heading regex"))
    }

    pub fn matches(block: &str) -> bool {
        Self::pattern().is_match(block)
    }

    /// Splits a heading block into its level and the text after the `# ` prefix.
    ///
    /// The text keeps any following lines of the block.
    pub fn parse(block: &str) -> Option<(usize, &str)> {
        let caps = Self::pattern().captures(block)?;
        let level = caps.get(1)?.len();
        Some((level, &block[level + 1..]))
    }
}
