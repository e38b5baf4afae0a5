//! Projects a [`StyledDocument`] onto ratatui text.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use styledown_engine::{HeadingLevel, RunKind, StyledDocument, StyledRun};

const RULE_CHAR: &str = "─";

pub fn run_style(run: &StyledRun) -> Style {
    let mut style = Style::default();
    if run.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if run.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    match run.heading {
        HeadingLevel::H1 => style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        HeadingLevel::H2 => style.fg(Color::Blue),
        HeadingLevel::Body => style,
    }
}

/// Terminal rows for `spacing` points, one row per base-size unit.
pub fn spacing_rows(spacing: f32, base_size: f32) -> usize {
    if spacing <= 0.0 || base_size <= 0.0 {
        return 0;
    }
    (spacing / base_size).round() as usize
}

/// Builds terminal lines: one per source line, blank rows for spacing, and
/// rules drawn `width` cells wide.
pub fn document_lines(doc: &StyledDocument, base_size: f32, width: u16) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Option<(usize, Vec<Span<'static>>)> = None;

    for run in doc {
        let starts_line = current.as_ref().is_none_or(|(line, _)| *line != run.line);
        if starts_line {
            if let Some((_, spans)) = current.take() {
                lines.push(Line::from(spans));
            }
            let rows = spacing_rows(run.preceding_spacing, base_size);
            lines.extend(std::iter::repeat_n(Line::default(), rows));
        }

        match run.kind {
            RunKind::Spacing => {}
            RunKind::Rule => {
                let rule = RULE_CHAR.repeat(usize::from(width.max(1)));
                lines.push(Line::styled(rule, Style::default().fg(Color::DarkGray)));
            }
            RunKind::Text => {
                current
                    .get_or_insert_with(|| (run.line, Vec::new()))
                    .1
                    .push(Span::styled(run.text.clone(), run_style(run)));
            }
        }
    }

    if let Some((_, spans)) = current {
        lines.push(Line::from(spans));
    }
    lines
}
