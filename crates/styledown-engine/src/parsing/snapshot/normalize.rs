use std::fmt::Write;

use crate::{
    document::{StyledDocument, StyledRun},
    parsing::{ParsedDoc, inline::InlineNode},
};

/// One block per source line, one indented row per inline node.
pub fn render_parse(doc: &ParsedDoc<'_>) -> String {
    let mut out = String::new();
    for parsed in &doc.lines {
        let line = &parsed.line;
        let _ = writeln!(
            out,
            "{} {:?} {}..{} {:?}",
            line.index, line.kind, line.line.start, line.line.end, line.content
        );
        for node in &parsed.inline {
            let kind = match node {
                InlineNode::Text(_) => "Text".to_string(),
                InlineNode::Emphasis { delim, .. } => format!("Emphasis({delim:?})"),
                InlineNode::NumericEmphasis { .. } => "NumericEmphasis".to_string(),
            };
            let full = node.full();
            // Inline spans are absolute; re-base them onto the line content.
            let base = line.content_span.start;
            let visible = node.visible();
            let visible = &line.content[visible.start - base..visible.end - base];
            let _ = writeln!(out, "    {kind} {}..{} {visible:?}", full.start, full.end);
        }
    }
    out
}

/// One row per run. Sizes are rounded so snapshots do not depend on float
/// noise.
pub fn render_document(doc: &StyledDocument) -> String {
    let mut out = String::new();
    for run in doc {
        let _ = writeln!(out, "{}", render_run(run));
    }
    out
}

fn render_run(run: &StyledRun) -> String {
    let style = match (run.bold, run.italic) {
        (true, true) => "bold-italic",
        (true, false) => "bold",
        (false, true) => "italic",
        (false, false) => "plain",
    };
    format!(
        "{} {:?} h{} {} +{:.1} {} {:.1} {:?}",
        run.line,
        run.kind,
        run.heading.level(),
        style,
        run.preceding_spacing,
        run.font.family,
        run.font.size,
        run.text
    )
}
