use super::{centered_rect, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

const MENU_WIDTH: u16 = 30;
const DIALOG_MIN_WIDTH: u16 = 30;
const DIALOG_HEIGHT: u16 = 6;

/// Return a rectangle of fixed size centered in `r`, shrunk to fit.
///
fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

/// Render the context menu of the page it was opened for.
///
pub fn context_menu(frame: &mut Frame, size: Rect, state: &State) {
    let Some((page, items, selected)) = state.context_menu() else {
        return;
    };
    let theme = state.theme();
    let area = centered_fixed(MENU_WIDTH, items.len() as u16 + 2, size);

    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let style = if item.is_destructive() {
                styling::danger_style(theme)
            } else {
                styling::normal_text_style(theme)
            };
            ListItem::new(Span::styled(format!(" {}", item.label()), style))
        })
        .collect();
    let list = List::new(list_items)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", page.name()),
                    styling::active_block_title_style(),
                ))
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme)),
        )
        .highlight_style(styling::selected_item_style(theme))
        .highlight_symbol(">");
    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render the rename dialog on top of the screen.
///
pub fn rename_dialog(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let width = centered_rect(60, 100, size).width.max(DIALOG_MIN_WIDTH);
    let area = centered_fixed(width, DIALOG_HEIGHT, size);

    let block = Block::default()
        .title(Span::styled(" Rename page ", styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);
    let input_area = Rect {
        x: rows[1].x + 1,
        width: rows[1].width.saturating_sub(2),
        ..rows[1]
    };
    frame.render_widget(state.rename_input().widget(), input_area);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled(" Enter", styling::normal_text_style(theme)),
        Span::styled(": save, ", styling::muted_text_style(theme)),
        Span::styled("Esc", styling::normal_text_style(theme)),
        Span::styled(": cancel", styling::muted_text_style(theme)),
    ]));
    frame.render_widget(hint, rows[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fixed() {
        let area = centered_fixed(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(area, Rect::new(10, 3, 10, 4));

        let area = centered_fixed(50, 20, Rect::new(2, 2, 20, 5));
        assert_eq!(area, Rect::new(2, 2, 20, 5));
    }
}
