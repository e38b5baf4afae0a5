use super::span::Span;

/// A reference to a single physical line of the source with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 0-based physical line number.
    pub index: usize,
    /// Byte span of this line in the source (includes the newline if present).
    pub span: Span,
    /// The raw line text, including its line terminator.
    pub text: &'a str,
}

impl<'a> LineRef<'a> {
    /// The line text without its `\n` / `\r\n` terminator.
    pub fn content(&self) -> &'a str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `split_inclusive` so a trailing newline does not produce a phantom
/// empty line, and so spans account for the terminator bytes. The iterator is
/// `Clone`, which makes it restartable from any point.
pub fn lines_with_spans(source: &str) -> LineRefs<'_> {
    LineRefs {
        inner: source.split_inclusive('\n'),
        offset: 0,
        index: 0,
    }
}

/// Iterator returned by [`lines_with_spans`].
#[derive(Debug, Clone)]
pub struct LineRefs<'a> {
    inner: std::str::SplitInclusive<'a, char>,
    offset: usize,
    index: usize,
}

impl<'a> Iterator for LineRefs<'a> {
    type Item = LineRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.inner.next()?;
        let start = self.offset;
        self.offset += text.len();
        let index = self.index;
        self.index += 1;
        Some(LineRef {
            index,
            span: Span::new(start, self.offset),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_has_no_lines() {
        assert_eq!(lines_with_spans("").count(), 0);
    }

    #[test]
    fn trailing_newline_has_no_phantom_line() {
        let lines: Vec<_> = lines_with_spans("a\nb\n").collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].span, Span::new(2, 4));
        assert_eq!(lines[1].content(), "b");
    }

    #[test]
    fn lone_newline_is_one_blank_line() {
        let lines: Vec<_> = lines_with_spans("\n").collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].content(), "");
    }

    #[test]
    fn crlf_is_stripped_from_content() {
        let lines: Vec<_> = lines_with_spans("one\r\ntwo").collect();
        assert_eq!(lines[0].content(), "one");
        assert_eq!(lines[0].span, Span::new(0, 5));
        assert_eq!(lines[1].index, 1);
        assert_eq!(lines[1].content(), "two");
    }

    #[test]
    fn iterator_is_restartable() {
        let lines = lines_with_spans("x\ny\nz");
        let first: Vec<_> = lines.clone().collect();
        let second: Vec<_> = lines.collect();
        assert_eq!(first, second);
    }
}
