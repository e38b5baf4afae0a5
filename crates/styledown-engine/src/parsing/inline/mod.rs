//! # Inline Parsing
//!
//! Cursor-based emphasis tokenizer applied to the content of one line at a
//! time (paragraph text and heading content).
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Emphasis, NumericEmphasis) and `Fragment`
//! - **`kinds`**: `Delimiter` and the `NumericEmphasis` rule
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_inline()` / `parse_fragments()` entry points
//!
//! ## Single Level
//!
//! Emphasis does not nest or cross: inside a `_` span a `*` is literal and
//! vice versa. Malformed markup degrades to literal text, never to an error.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use kinds::Delimiter;
pub use parser::{parse_fragments, parse_inline};
pub use types::{Fragment, InlineNode};
