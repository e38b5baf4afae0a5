//! # styledown-engine
//!
//! Converts a small markdown dialect into a sequence of styled text runs that
//! a renderer can project onto any text view.
//!
//! The grammar covers `# ` and `## ` headings, `---` rules, `_italic_` and
//! `*italic*` emphasis, `*1*`-style bold-italic digits and blank-line spacing.
//! Anything else is literal text; no input is rejected.
//!
//! ```
//! use styledown_engine::{FontSpec, convert};
//!
//! let doc = convert("# Hello\n\nSome *emphasis* and *1*.", &FontSpec::new("Georgia", 12.0)).unwrap();
//! assert_eq!(doc.plain_text(), "Hello\nSome emphasis and 1.");
//! assert!(doc.runs()[4].bold && doc.runs()[4].italic);
//! ```
//!
//! ## Pipeline
//!
//! 1. [`parsing::lines`] classifies each physical line
//! 2. [`parsing::inline`] tokenizes emphasis in heading and paragraph content
//! 3. [`convert`] assembles runs, deriving fonts through a [`FontDeriver`]

pub mod convert;
pub mod document;
pub mod error;
pub mod font;
pub mod parsing;
pub mod style;

pub use convert::{Converter, convert};
pub use document::{HeadingLevel, RunKind, StyledDocument, StyledRun};
pub use error::ConvertError;
pub use font::{FontDeriver, FontError, FontSpec, FontTraits, ScaledFontDeriver};
pub use style::StyleConfig;
