pub mod blocks;
pub mod inline;

use blocks::{BlockType, classify_block, segment_blocks};

use crate::error::MarkupError;

/// A classified block borrowed from the markdown source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub block_type: BlockType,
    pub text: &'a str,
}

/// Segments markdown and classifies every block, in source order.
pub fn parse_blocks(markdown: &str) -> Result<Vec<Block<'_>>, MarkupError> {
    let blocks = segment_blocks(markdown)?
        .into_iter()
        .map(|text| {
            let block_type = classify_block(text);
            log::debug!("classified block as {block_type:?}: {:?}", first_line(text));
            Block { block_type, text }
        })
        .collect();
    Ok(blocks)
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}
