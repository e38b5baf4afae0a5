//! The styled-run document model handed to rendering adapters.

use serde::Serialize;

use crate::font::FontSpec;

/// Heading level of a run. Body text is level 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum HeadingLevel {
    #[default]
    Body,
    H1,
    H2,
}

impl HeadingLevel {
    pub fn level(self) -> u8 {
        match self {
            HeadingLevel::Body => 0,
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
        }
    }
}

/// What a run represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RunKind {
    /// Visible text. `text` is never empty.
    Text,
    /// A horizontal rule marker. `text` is empty.
    Rule,
    /// Trailing blank lines with nothing after them. `text` is empty and
    /// `preceding_spacing` is positive.
    Spacing,
}

/// A contiguous span of output text with one uniform set of attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledRun {
    pub kind: RunKind,
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub heading: HeadingLevel,
    /// Vertical space to insert before this run, in points.
    pub preceding_spacing: f32,
    /// 0-based source line the run came from. Runs from the same line are
    /// adjacent; a change of line is a line break for renderers.
    pub line: usize,
    /// The font derived for this run.
    pub font: FontSpec,
}

impl StyledRun {
    pub fn is_spacing(&self) -> bool {
        self.kind == RunKind::Spacing
    }
}

/// An ordered, immutable sequence of [`StyledRun`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyledDocument {
    runs: Vec<StyledRun>,
}

impl StyledDocument {
    pub(crate) fn new(runs: Vec<StyledRun>) -> Self {
        Self { runs }
    }

    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyledRun> {
        self.runs.iter()
    }

    pub fn into_runs(self) -> Vec<StyledRun> {
        self.runs
    }

    /// Visible text with `\n` between source lines. Spacing runs contribute
    /// nothing and rules contribute an empty line.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        let mut prev_line = None;
        for run in self.runs.iter().filter(|r| !r.is_spacing()) {
            if prev_line.is_some_and(|l| l != run.line) {
                out.push('\n');
            }
            out.push_str(&run.text);
            prev_line = Some(run.line);
        }
        out
    }
}

impl<'a> IntoIterator for &'a StyledDocument {
    type Item = &'a StyledRun;
    type IntoIter = std::slice::Iter<'a, StyledRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

impl IntoIterator for StyledDocument {
    type Item = StyledRun;
    type IntoIter = std::vec::IntoIter<StyledRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(kind: RunKind, text: &str, line: usize) -> StyledRun {
        StyledRun {
            kind,
            text: text.to_string(),
            bold: false,
            italic: false,
            heading: HeadingLevel::Body,
            preceding_spacing: 0.0,
            line,
            font: FontSpec::new("Georgia", 12.0),
        }
    }

    #[test]
    fn plain_text_breaks_between_lines() {
        let doc = StyledDocument::new(vec![
            run(RunKind::Text, "a ", 0),
            run(RunKind::Text, "b", 0),
            run(RunKind::Rule, "", 1),
            run(RunKind::Text, "c", 3),
            run(RunKind::Spacing, "", 5),
        ]);
        assert_eq!(doc.plain_text(), "a b\n\nc");
    }

    #[test]
    fn heading_levels() {
        assert_eq!(HeadingLevel::default().level(), 0);
        assert_eq!(HeadingLevel::H1.level(), 1);
        assert_eq!(HeadingLevel::H2.level(), 2);
    }

    #[test]
    fn empty_document() {
        let doc = StyledDocument::default();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
        assert_eq!(doc.plain_text(), "");
    }
}
