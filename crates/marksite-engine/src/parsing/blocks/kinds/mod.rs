//! # Block Kinds
//!
//! Block-specific types that own their syntax markers. The classifier and the
//! node builder ask these types; neither hardcodes `#`, `>` or list markers.
//!
//! - **`Heading`**: `#` runs of 1 to 6 followed by a space
//! - **`CodeFence`**: triple backticks at both ends of the block
//! - **`BlockQuote`**: `> ` prefix or a bare `>` line
//! - **`UnorderedList`** / **`OrderedList`**: `* `, `- ` and `N. ` item markers

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
