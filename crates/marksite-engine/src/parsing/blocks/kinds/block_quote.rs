/// Blockquote block type with owned prefix constants.
pub struct BlockQuote;

impl BlockQuote {
    /// The prefix every quoted line with content starts with.
    pub const PREFIX: &'static str = "> ";
    /// A quoted line with no content.
    pub const BARE: &'static str = ">";

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX) || line == Self::BARE
    }

    /// Strips the quote marker from a line. A bare `>` yields an empty line.
    pub fn strip_prefix(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX)
            .or_else(|| line.strip_prefix(Self::BARE))
            .unwrap_or(line)
    }
}
