use super::kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList};
use super::types::BlockType;

/// Classifies one trimmed block.
///
/// Checks run in a fixed priority order and the first match wins:
/// heading, code, quote, unordered list, ordered list, then paragraph.
pub fn classify_block(block: &str) -> BlockType {
    let lines: Vec<&str> = block.split('\n').collect();

    if Heading::matches(block) {
        BlockType::Heading
    } else if CodeFence::inner(block).is_some() {
        BlockType::Code
    } else if lines.iter().all(|line| BlockQuote::is_quote_line(line)) {
        BlockType::Quote
    } else if UnorderedList::marker(&lines).is_some() {
        BlockType::UnorderedList
    } else if OrderedList::is_sequential(&lines) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}
