use crate::parsing::text::Span;

use super::{
    cursor::Cursor,
    kinds::{Delimiter, NumericEmphasis},
    types::{Fragment, InlineNode},
};

/// Parses one line of inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the source where `s` begins (for absolute spans)
/// - `s`: The line content to parse
///
/// # Emphasis
/// An opening `_` or `*` is closed by the next occurrence of the same
/// character; the other delimiter character inside the span is literal text.
/// Emphasis never nests.
///
/// # Fallback
/// - An empty span (`**`, `__`) leaves both delimiters as literal text.
/// - An opener with no closer turns itself and the rest of the line into
///   literal text. Scanning stops there, so the pass is linear in `s.len()`.
///
/// # Returns
/// Nodes covering the entire input. Adjacent literal text is one `Text` node.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while let Some(b) = cur.peek() {
        let Some(delim) = Delimiter::from_byte(b) else {
            cur.bump();
            continue;
        };
        match try_parse_emphasis(&mut cur, delim) {
            Scan::Closed(node) => {
                flush_text(&mut out, text_start, node.full().start);
                text_start = node.full().end;
                out.push(node);
            }
            // Both delimiters stay in the pending text run.
            Scan::Empty => {}
            Scan::Unclosed => {
                cur.bump_to_end();
                break;
            }
        }
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Parses `s` and resolves the nodes to visible text fragments.
pub fn parse_fragments(s: &str) -> Vec<Fragment<'_>> {
    parse_inline(0, s)
        .into_iter()
        .map(|node| Fragment {
            text: node.visible().slice(s),
            bold: node.is_bold(),
            italic: node.is_italic(),
        })
        .collect()
}

/// Outcome of scanning from an opening delimiter.
enum Scan {
    Closed(InlineNode),
    /// Opener immediately followed by its closer. The cursor is past both.
    Empty,
    /// No closer on the rest of the line. The cursor is restored.
    Unclosed,
}

/// Attempts to parse an emphasis span starting at the current position,
/// which must hold `delim`.
fn try_parse_emphasis(cur: &mut Cursor<'_>, delim: Delimiter) -> Scan {
    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // opener
    let inner_start = cur.pos();

    let Some(close) = cur.find(delim.byte()) else {
        *cur = saved;
        return Scan::Unclosed;
    };
    let inner_local = cur.i..close;
    cur.bump_n(close - cur.i);
    let inner_end = cur.pos();
    cur.bump(); // closer

    if inner_local.is_empty() {
        return Scan::Empty;
    }

    let full = Span::new(start, cur.pos());
    let inner = Span::new(inner_start, inner_end);
    if NumericEmphasis::applies(delim, &cur.s[inner_local]) {
        Scan::Closed(InlineNode::NumericEmphasis { full, inner })
    } else {
        Scan::Closed(InlineNode::Emphasis { full, inner, delim })
    }
}
