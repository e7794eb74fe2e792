/// The kind of a markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// `#` to `######` followed by a space and text.
    Heading,
    /// Fenced with triple backticks at both ends.
    Code,
    /// Every line starts with `> ` or is a bare `>`.
    Quote,
    /// Every line starts with `* `, or every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in sequence.
    OrderedList,
    /// Anything that matches nothing else.
    Paragraph,
}
