use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

const TITLE: &str = "Form Builder";

/// Render the title bar with the page count on the right.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", TITLE),
            styling::normal_text_style(theme)
                .fg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· {}", theme.name), styling::muted_text_style(theme)),
    ]));
    frame.render_widget(title, size);

    let count = Paragraph::new(Span::styled(
        format!("{} pages ", state.pages().len()),
        styling::muted_text_style(theme),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(count, size);
}
