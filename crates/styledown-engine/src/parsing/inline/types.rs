use crate::parsing::text::Span;

use super::kinds::Delimiter;

/// A parsed inline node with byte spans into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineNode {
    /// Literal text, including any delimiters that did not form a span.
    Text(Span),
    /// `_text_` or `*text*`.
    Emphasis {
        /// Full span including both delimiters.
        full: Span,
        /// Content between the delimiters.
        inner: Span,
        delim: Delimiter,
    },
    /// `*d*` for a single digit `d`.
    NumericEmphasis { full: Span, inner: Span },
}

impl InlineNode {
    /// The span this node covers in the source, delimiters included.
    pub fn full(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Emphasis { full, .. } => *full,
            InlineNode::NumericEmphasis { full, .. } => *full,
        }
    }

    /// The span of visible text, delimiters excluded.
    pub fn visible(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Emphasis { inner, .. } => *inner,
            InlineNode::NumericEmphasis { inner, .. } => *inner,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, InlineNode::NumericEmphasis { .. })
    }

    pub fn is_italic(&self) -> bool {
        !matches!(self, InlineNode::Text(_))
    }
}

/// A piece of visible line text with uniform emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub text: &'a str,
    pub bold: bool,
    pub italic: bool,
}
