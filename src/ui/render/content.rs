use super::Frame;
use crate::pages::preview;
use crate::state::State;
use crate::ui::widgets::{skeleton::skeleton_lines, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const FORM_FIELDS_TITLE: &str = "Form Fields";
const QUICK_ADD_TITLE: &str = "Quick add";
const CUSTOM_FIELD: &str = "+ Add Custom Field";

/// Render the placeholder content of the active page.
///
pub fn content(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let Some(page) = state.pages().active_page() else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme));
        frame.render_widget(block, size);
        return;
    };
    let config = preview::config_for(page.category());
    let accent = theme.accent(config.accent);

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", page.category().icon()),
                styling::normal_text_style(theme)
                    .fg(accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} ", page.name()),
                styling::active_block_title_style().fg(theme.text.to_color()),
            ),
        ]))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let description = Paragraph::new(Span::styled(
        format!(" {}", config.description),
        styling::muted_text_style(theme),
    ));
    frame.render_widget(description, rows[0]);

    let card = Block::default()
        .title(Span::styled(FORM_FIELDS_TITLE, styling::normal_text_style(theme)))
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let card_inner = card.inner(rows[1]);
    frame.render_widget(card, rows[1]);
    let skeleton_area = Rect {
        x: card_inner.x + 1,
        width: card_inner.width.saturating_sub(2),
        ..card_inner
    };
    frame.render_widget(
        Paragraph::new(skeleton_lines(theme, skeleton_area.width)),
        skeleton_area,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", QUICK_ADD_TITLE),
            styling::normal_text_style(theme).add_modifier(Modifier::BOLD),
        )),
        rows[2],
    );

    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[3]);
    for (field, area) in config.fields.iter().zip(boxes.iter()) {
        let field_box = Paragraph::new(Span::styled(*field, styling::normal_text_style(theme)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styling::normal_block_border_style(theme)),
            );
        frame.render_widget(field_box, *area);
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            CUSTOM_FIELD,
            styling::normal_text_style(theme).fg(accent),
        ))
        .alignment(Alignment::Center),
        rows[4],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::Command;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn draw(state: &State) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| content(frame, frame.size(), state))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_content_follows_active_page() {
        let mut state = State::default();
        let text = draw(&state);
        assert!(text.contains("Info"));
        assert!(text.contains("Collect basic information from users"));
        assert!(text.contains(FORM_FIELDS_TITLE));
        assert!(text.contains("Full Name"));
        assert!(text.contains(CUSTOM_FIELD));

        let details = state.pages().get(1).unwrap().id();
        state.dispatch(Command::SetActive(details));
        let text = draw(&state);
        assert!(text.contains("Details"));
        assert!(text.contains("Upload Document"));
    }
}
