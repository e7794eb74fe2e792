//! # Block Parsing
//!
//! Turns raw markdown into classified blocks.
//!
//! ## Phases
//!
//! 1. **Segmentation** (`segment`): split on blank lines into trimmed block strings
//! 2. **Classification** (`classify`): assign each block a [`BlockType`] by a fixed
//!    priority order
//!
//! ## Modules
//!
//! - **`types`**: [`BlockType`]
//! - **`kinds`**: block-specific types owning their markers (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList)
//! - **`segment`**: [`segment_blocks`]
//! - **`classify`**: [`classify_block`]
//!
//! ## Key Invariants
//!
//! - Blocks come back in source order and are never empty
//! - Classification looks at one block only; no context carries between blocks

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify_block;
pub use segment::segment_blocks;
pub use types::BlockType;
