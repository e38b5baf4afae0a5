use crate::parsing::text::{LineRef, LineRefs, Span, lines_with_spans};

use super::kinds::{Heading, HorizontalRule};

/// The kind of a physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Heading1,
    Heading2,
    HorizontalRule,
    /// Whitespace only. Contributes spacing to the next emitted line.
    Blank,
    ParagraphText,
}

impl LineKind {
    /// Whether the line's content is handed to the inline tokenizer.
    pub fn has_content(self) -> bool {
        !matches!(self, LineKind::HorizontalRule | LineKind::Blank)
    }
}

/// A classified physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// 0-based physical line number.
    pub index: usize,
    /// Full byte span of the line, terminator included.
    pub line: Span,
    pub kind: LineKind,
    /// Byte span of the inline content. Empty for rules and blank lines.
    pub content_span: Span,
    /// The inline content text (`content_span` sliced from the source).
    pub content: &'a str,
}

/// Classifies individual lines. Each line is classified on its own; grouping
/// blank lines into spacing is the assembler's job.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line. Rules apply in priority order: horizontal rule,
    /// heading 2, heading 1, blank, paragraph text.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> ClassifiedLine<'a> {
        let raw = lr.content();
        let leading = raw.len() - raw.trim_start().len();
        let trimmed = raw.trim();
        let base = lr.span.start;

        let (kind, content_span) = if HorizontalRule::matches(trimmed) {
            (LineKind::HorizontalRule, Span::new(base, base))
        } else if let Some((level, rest)) = Heading::strip_prefix(trimmed) {
            let kind = if level == 2 {
                LineKind::Heading2
            } else {
                LineKind::Heading1
            };
            let start = base + leading + (trimmed.len() - rest.len());
            (kind, Span::new(start, base + leading + trimmed.len()))
        } else if trimmed.is_empty() {
            (LineKind::Blank, Span::new(base, base))
        } else {
            (LineKind::ParagraphText, Span::new(base, base + raw.len()))
        };

        let text: &'a str = lr.text;
        let local = (content_span.start - base)..(content_span.end - base);
        ClassifiedLine {
            index: lr.index,
            line: lr.span,
            kind,
            content_span,
            content: &text[local],
        }
    }
}

/// Lazily classifies every line of `source`.
///
/// The returned iterator is `Clone`; cloning it restarts classification from
/// the clone point without re-reading earlier lines.
pub fn classify_lines(source: &str) -> ClassifiedLines<'_> {
    ClassifiedLines {
        lines: lines_with_spans(source),
    }
}

/// Iterator returned by [`classify_lines`].
#[derive(Debug, Clone)]
pub struct ClassifiedLines<'a> {
    lines: LineRefs<'a>,
}

impl<'a> Iterator for ClassifiedLines<'a> {
    type Item = ClassifiedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let lr = self.lines.next()?;
        Some(MarkdownLineClassifier.classify(&lr))
    }
}
