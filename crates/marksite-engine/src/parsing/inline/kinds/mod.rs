//! # Inline Kinds
//!
//! Inline-specific types that own their syntax.
//!
//! - **`Delimiter`**: `**` bold, `*` italic, `` ` `` code spans
//! - **`Image`**: `![alt](src)`
//! - **`Link`**: `[text](href)`, never preceded by `!`
//! - **`LineBreak`**: a single `\n`
//!
//! The pipeline refers to these constants; it never hardcodes a marker.

pub mod delimiter;
pub mod line_break;
pub mod media;

pub use delimiter::Delimiter;
pub use line_break::LineBreak;
pub use media::{Image, Link, Media};
