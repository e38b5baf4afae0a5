/// A byte range `[start, end)` into the source text.
///
/// Classified lines and inline nodes store spans rather than copied text, so
/// slicing the source with any span reproduces the exact input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `source` with this span.
    ///
    /// Spans produced by the parser always sit on UTF-8 boundaries because every
    /// delimiter the grammar recognises is ASCII.
    pub fn slice(self, source: &str) -> &str {
        &source[self.start..self.end]
    }
}
