pub mod inline;
pub mod lines;
pub mod snapshot;
pub mod text;

use inline::InlineNode;
use lines::{ClassifiedLine, classify_lines};

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub lines: Vec<ParsedLine<'a>>,
}

/// A classified line with its inline nodes (spans absolute in the source).
#[derive(Debug)]
pub struct ParsedLine<'a> {
    pub line: ClassifiedLine<'a>,
    pub inline: Vec<InlineNode>,
}

/// Classifies every line and runs inline parsing over headings and paragraph
/// text. Used for inspection and tests; conversion streams the same steps.
pub fn parse_document(source: &str) -> ParsedDoc<'_> {
    let lines = classify_lines(source)
        .map(|line| {
            let inline = if line.kind.has_content() {
                inline::parse_inline(line.content_span.start, line.content)
            } else {
                vec![]
            };
            ParsedLine { line, inline }
        })
        .collect();
    ParsedDoc { lines }
}
