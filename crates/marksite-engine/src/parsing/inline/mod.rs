//! # Inline Parsing
//!
//! Turns a block's text into a flat list of [`TextToken`]s.
//!
//! ## Architecture
//!
//! Tokenizing is a fold over a fixed list of stages (see [`pipeline::STAGES`]).
//! Each stage takes the token list so far and re-splits only the tokens that
//! are still plain text:
//!
//! 1. `**bold**`
//! 2. `*italic*`
//! 3. `` `code` ``
//! 4. `![alt](src)`
//! 5. `[text](href)`
//! 6. single `\n` line breaks
//!
//! ## Modules
//!
//! - **`types`**: [`TextToken`], [`TextKind`] and the token to node mapping
//! - **`kinds`**: inline types owning their syntax (Delimiter, Image, Link, LineBreak)
//! - **`cursor`**: byte [`Cursor`](cursor::Cursor) used by delimiter splitting
//! - **`pipeline`**: [`tokenize`] and the individual stages
//!
//! ## Limits
//!
//! Only one level of emphasis is recognized: text inside a typed span is kept
//! verbatim and never rescanned.

pub mod cursor;
pub mod kinds;
pub mod pipeline;
pub mod types;

pub use pipeline::tokenize;
pub use types::{TextKind, TextToken};
