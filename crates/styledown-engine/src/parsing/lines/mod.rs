//! # Line Classification
//!
//! First stage of conversion. The source is split on `\n` and each physical
//! line is classified independently into a [`LineKind`].
//!
//! ## Modules
//!
//! - **`kinds`**: Line-level markup owners (`Heading`, `HorizontalRule`)
//! - **`classify`**: `MarkdownLineClassifier` and the lazy [`classify_lines`] iterator
//!
//! ## Key Invariants
//!
//! - A trailing newline never produces an extra line
//! - Heading content and paragraph content are the only inputs to inline parsing
//! - Rules are checked before headings, headings before blank/paragraph

pub mod classify;
pub mod kinds;

pub use classify::{ClassifiedLine, ClassifiedLines, LineKind, MarkdownLineClassifier, classify_lines};
