pub mod builder;
pub mod error;
pub mod nodes;
pub mod page;
pub mod parsing;

// Re-export key types for easier usage
pub use builder::{DEFAULT_WRAPPER_TAG, build_block, build_document, markdown_to_html};
pub use error::MarkupError;
pub use nodes::{Attributes, Node, VoidTag};
pub use page::{extract_title, fill_template, render_page, rewrite_base_path};
pub use parsing::{
    Block,
    blocks::{BlockType, classify_block, segment_blocks},
    inline::{TextKind, TextToken, tokenize},
    parse_blocks,
};
