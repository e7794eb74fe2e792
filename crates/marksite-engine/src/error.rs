use crate::parsing::blocks::BlockType;

/// Errors raised while parsing markdown or rendering the node tree.
///
/// Every stage fails fast: the first error aborts the whole call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("markdown input must not be empty")]
    EmptyInput,
    #[error("invalid markdown, no closing delimiter found for \"{0}\"")]
    UnclosedDelimiter(String),
    #[error("node requires a tag")]
    MissingTag,
    #[error("<{tag}> element must have at least one child")]
    EmptyElement { tag: String },
    #[error("text node must have a value")]
    MissingValue,
    #[error("invalid text token kind: {0}")]
    InvalidTextTokenKind(String),
    #[error("<{0}> is not a void element")]
    UnknownVoidTag(String),
    #[error("block text does not match its {0:?} block type")]
    MalformedBlock(BlockType),
    #[error("markdown must contain a top-level `# ` heading")]
    MissingTitle,
}
