//! # Snapshot Testing Support
//!
//! Utilities for testing the converter via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders parsed lines and styled documents to a stable
//!   text form for `insta` snapshots
//! - **`invariants`**: Runtime checks for parser and assembler correctness
//!   (spans in bounds, inline nodes tiling their line, run text rules)

pub mod invariants;
pub mod normalize;

pub use invariants::{check as invariants, check_runs as run_invariants};
pub use normalize::{render_document, render_parse};
