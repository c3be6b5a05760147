//! Placeholder rows standing in for form fields in the content pane.

use crate::ui::theme::Theme;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

const LABEL: char = '▀';
const FIELD: char = '░';

/// Return the skeleton of a small form: text input, select, textarea and a
/// two-option radio group, sized to `width` columns.
///
pub fn skeleton_lines(theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let style = Style::default().fg(theme.skeleton.to_color());
    let width = width.max(8) as usize;
    let bar = |len: usize, c: char| Span::styled(c.to_string().repeat(len.min(width)), style);

    vec![
        // Text input
        Line::from(bar(12, LABEL)),
        Line::from(bar(width, FIELD)),
        Line::from(""),
        // Select
        Line::from(bar(16, LABEL)),
        Line::from(vec![
            bar(width.saturating_sub(2), FIELD),
            Span::styled(" ▾", style),
        ]),
        Line::from(""),
        // Textarea
        Line::from(bar(14, LABEL)),
        Line::from(bar(width, FIELD)),
        Line::from(bar(width, FIELD)),
        Line::from(""),
        // Radio group
        Line::from(bar(18, LABEL)),
        Line::from(vec![Span::styled("○ ", style), bar(8, LABEL)]),
        Line::from(vec![Span::styled("○ ", style), bar(8, LABEL)]),
    ]
}
