use crate::{
    document::{RunKind, StyledDocument},
    parsing::ParsedDoc,
};

/// Panics if any span of the parse is out of bounds or inline nodes fail to
/// tile their line's content exactly.
pub fn check(source: &str, doc: &ParsedDoc<'_>) {
    let n = source.len();
    let mut expected_start = 0;
    for parsed in &doc.lines {
        let line = &parsed.line;
        assert_eq!(
            line.line.start, expected_start,
            "line spans must be contiguous: {:?}",
            line.line
        );
        expected_start = line.line.end;
        assert!(
            line.line.start <= line.line.end && line.line.end <= n,
            "line span out of bounds: {:?} (source len: {})",
            line.line,
            n
        );
        assert!(
            line.content_span.start >= line.line.start && line.content_span.end <= line.line.end,
            "content span not contained in line span: content {:?}, line {:?}",
            line.content_span,
            line.line
        );

        let mut cursor = line.content_span.start;
        for node in &parsed.inline {
            let full = node.full();
            let visible = node.visible();
            assert_eq!(full.start, cursor, "inline nodes must be contiguous");
            assert!(
                visible.start >= full.start && visible.end <= full.end,
                "visible span {visible:?} outside node span {full:?}"
            );
            assert!(!visible.is_empty(), "inline node with empty text: {node:?}");
            cursor = full.end;
        }
        if !parsed.inline.is_empty() {
            assert_eq!(cursor, line.content_span.end, "inline nodes must cover the content");
        }
    }
    assert_eq!(expected_start, n, "lines must cover the whole source");
}

/// Panics if a run breaks the document model's text and spacing rules.
pub fn check_runs(doc: &StyledDocument) {
    let mut prev_line = 0;
    for run in doc {
        match run.kind {
            RunKind::Text => assert!(!run.text.is_empty(), "empty text run: {run:?}"),
            RunKind::Rule => assert!(run.text.is_empty(), "rule with text: {run:?}"),
            RunKind::Spacing => {
                assert!(run.text.is_empty(), "spacing run with text: {run:?}");
                assert!(run.preceding_spacing > 0.0, "spacing run without spacing");
            }
        }
        assert!(run.preceding_spacing >= 0.0);
        assert!(run.line >= prev_line, "runs out of document order");
        prev_line = run.line;
    }
}
