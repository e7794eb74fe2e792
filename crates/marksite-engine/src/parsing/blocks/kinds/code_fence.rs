/// Fenced code block. The whole block must open and close with the fence.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Returns the raw text between the opening and closing fences.
    ///
    /// `None` unless the block starts and ends with a fence and something sits
    /// between them. Language tags and newlines stay in the returned text.
    pub fn inner(block: &str) -> Option<&str> {
        let inner = block
            .strip_prefix(Self::FENCE)?
            .strip_suffix(Self::FENCE)?;
        (!inner.is_empty()).then_some(inner)
    }
}
