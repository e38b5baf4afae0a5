pub mod lines;
pub mod span;

pub use lines::{LineRef, LineRefs, lines_with_spans};
pub use span::Span;
