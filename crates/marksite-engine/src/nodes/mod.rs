//! # HTML Nodes
//!
//! The tree the markdown pipeline produces.
//!
//! ## Variants
//!
//! - **`Element`**: tag plus ordered children, renders `<tag>...</tag>`
//! - **`Text`**: optional tag plus a string value; untagged text renders verbatim
//! - **`Void`**: one of the [`VoidTag`]s, renders an opening tag only
//!
//! All variants carry [`Attributes`], rendered as `name="value"` pairs in
//! insertion order.
//!
//! ## Render-time Checks
//!
//! Elements must have a tag and at least one child, untagged text must be
//! non-empty. Void tags are validated when the node is built.

mod node;
mod void_tag;

pub use node::{Attributes, Node};
pub use void_tag::VoidTag;
