use super::Frame;
use crate::pages::Page;
use crate::state::{HitArea, Mode, State, StripTarget};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BLOCK_TITLE: &str = "Pages";
const SEPARATOR: &str = " + ";
const ADD_BUTTON: &str = " [+ Add page]";
const SCROLL_BUTTON_WIDTH: u16 = 2;

/// Text of a tab. The active regular page carries a menu marker.
///
fn tab_label(page: &Page) -> String {
    let marker = if page.is_active() && !page.is_fixed() {
        " ⋯"
    } else {
        ""
    };
    format!(" {} {}{} ", page.category().icon(), page.name(), marker)
}

fn text_width(text: &str) -> u16 {
    Span::raw(text).width() as u16
}

/// Order in which tabs are drawn. While dragging, the grabbed tab is shown
/// at its drop target.
///
fn display_order(len: usize, mode: Mode) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    if let Mode::Drag { from, to } = mode {
        if from < len && to < len {
            let grabbed = order.remove(from);
            order.insert(to, grabbed);
        }
    }
    order
}

/// Number of tabs that fit in `available` columns starting at `offset`. At
/// least one tab is always reported so the strip is never empty.
///
fn visible_count(widths: &[u16], offset: usize, available: u16) -> usize {
    let separator = text_width(SEPARATOR);
    let mut used: u16 = 0;
    let mut count = 0;
    for (i, width) in widths.iter().enumerate().skip(offset) {
        let end = used.saturating_add(*width);
        if count > 0 && end > available {
            break;
        }
        count += 1;
        used = if i + 1 < widths.len() {
            end.saturating_add(separator)
        } else {
            end
        };
    }
    count
}

/// Adjust `offset` so the tab at `focus` is visible.
///
fn fit_offset(widths: &[u16], offset: usize, focus: usize, available: u16) -> usize {
    let mut offset = offset.min(widths.len().saturating_sub(1));
    if focus < offset {
        offset = focus;
    }
    while offset < focus && focus >= offset + visible_count(widths, offset, available) {
        offset += 1;
    }
    offset
}

/// Render the tab strip and record its clickable regions.
///
pub fn navigator(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();
    let mode = state.mode();
    let dragging = matches!(mode, Mode::Drag { .. });

    let block = if dragging {
        Block::default()
            .title(Span::styled(
                format!("{} (moving)", BLOCK_TITLE),
                styling::active_block_title_style(),
            ))
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(&theme))
    } else {
        Block::default()
            .title(BLOCK_TITLE)
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(&theme))
    };
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(text_width(ADD_BUTTON))])
        .split(inner);
    let strip = columns[0];
    let tabs_area = Rect {
        x: strip.x + SCROLL_BUTTON_WIDTH,
        width: strip.width.saturating_sub(2 * SCROLL_BUTTON_WIDTH),
        ..strip
    };

    let pages = state.pages().pages();
    let order = display_order(pages.len(), mode);
    let labels: Vec<String> = order.iter().map(|&i| tab_label(&pages[i])).collect();
    let widths: Vec<u16> = labels.iter().map(|label| text_width(label)).collect();
    let focus = match mode {
        Mode::Drag { to, .. } => to,
        _ => state.cursor(),
    };
    let cursor = state.cursor();

    let mut offset = state.scroll_offset();
    if state.take_reveal_cursor() || dragging {
        offset = fit_offset(&widths, offset, focus, tabs_area.width);
    }
    state.set_scroll_offset(offset);
    let offset = state.scroll_offset();
    let count = visible_count(&widths, offset, tabs_area.width);
    let can_scroll_left = offset > 0;
    let can_scroll_right = offset + count < order.len();

    let left = Rect::new(strip.x, strip.y, SCROLL_BUTTON_WIDTH.min(strip.width), 1);
    let right = Rect::new(
        strip.x + strip.width.saturating_sub(SCROLL_BUTTON_WIDTH),
        strip.y,
        SCROLL_BUTTON_WIDTH.min(strip.width),
        1,
    );
    let mut hits = Vec::new();
    if can_scroll_left {
        hits.push(HitArea {
            area: left,
            target: StripTarget::ScrollLeft,
        });
    }
    if can_scroll_right {
        hits.push(HitArea {
            area: right,
            target: StripTarget::ScrollRight,
        });
    }

    let pages = state.pages().pages();
    let mut spans = Vec::new();
    let mut x = tabs_area.x;
    for position in offset..offset + count {
        let page = &pages[order[position]];
        let style = match mode {
            Mode::Drag { to, .. } if position == to => styling::dragged_tab_style(&theme),
            _ => styling::tab_style(&theme, page.is_active(), order[position] == cursor),
        };
        let width = widths[position].min(tabs_area.right().saturating_sub(x));
        spans.push(Span::styled(labels[position].clone(), style));
        hits.push(HitArea {
            area: Rect::new(x, tabs_area.y, width, 1),
            target: StripTarget::Tab(order[position]),
        });
        x = x.saturating_add(width);

        // A separator that would spill into the scroll button is left out.
        let separator_width = text_width(SEPARATOR);
        if position + 1 < order.len() && x.saturating_add(separator_width) <= tabs_area.right() {
            spans.push(Span::styled(SEPARATOR, styling::muted_text_style(&theme)));
            hits.push(HitArea {
                area: Rect::new(x, tabs_area.y, separator_width, 1),
                target: StripTarget::AddAfter(order[position]),
            });
            x = x.saturating_add(separator_width);
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), tabs_area);

    let button_style = styling::normal_text_style(&theme).fg(theme.primary.to_color());
    if can_scroll_left {
        frame.render_widget(Paragraph::new(Span::styled("◀", button_style)), left);
    }
    if can_scroll_right {
        frame.render_widget(Paragraph::new(Span::styled(" ▶", button_style)), right);
    }

    let add_area = columns[1];
    frame.render_widget(Paragraph::new(Span::styled(ADD_BUTTON, button_style)), add_area);
    hits.push(HitArea {
        area: add_area,
        target: StripTarget::AddAtEnd,
    });

    state.set_hit_areas(hits);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{Command, PageCollection};

    #[test]
    fn test_tab_label() {
        let seed = PageCollection::seed();
        assert_eq!(tab_label(seed.get(0).unwrap()), " ⓘ Info ");

        let next = seed.apply(Command::SetActive(seed.get(1).unwrap().id()));
        assert_eq!(tab_label(next.get(1).unwrap()), " ▤ Details ⋯ ");
    }

    #[test]
    fn test_display_order_while_dragging() {
        assert_eq!(display_order(4, Mode::Navigate), vec![0, 1, 2, 3]);
        assert_eq!(
            display_order(5, Mode::Drag { from: 1, to: 3 }),
            vec![0, 2, 3, 1, 4]
        );
    }

    #[test]
    fn test_visible_count() {
        // Each tab is 5 wide and every separator but the last adds 3.
        let widths = [5, 5, 5, 5];
        assert_eq!(visible_count(&widths, 0, 100), 4);
        assert_eq!(visible_count(&widths, 0, 13), 2);
        assert_eq!(visible_count(&widths, 2, 13), 2);
        assert_eq!(visible_count(&widths, 0, 1), 1);
    }

    #[test]
    fn test_fit_offset_reveals_focus() {
        let widths = [5, 5, 5, 5];
        assert_eq!(fit_offset(&widths, 0, 3, 13), 2);
        assert_eq!(fit_offset(&widths, 2, 0, 13), 0);
        assert_eq!(fit_offset(&widths, 1, 2, 13), 1);
        assert_eq!(fit_offset(&widths, 9, 3, 100), 3);
    }

    #[test]
    fn test_render_records_hit_areas() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut terminal = Terminal::new(TestBackend::new(120, 3)).unwrap();
        let mut state = State::default();
        terminal
            .draw(|frame| navigator(frame, frame.size(), &mut state))
            .unwrap();

        // Info is on the first tab row, right after the left scroll slot.
        state.handle_mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: 4,
            row: 1,
            modifiers: crossterm::event::KeyModifiers::empty(),
        });
        assert_eq!(state.cursor(), 0);

        // The standalone button sits at the right edge.
        state.handle_mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: 112,
            row: 1,
            modifiers: crossterm::event::KeyModifiers::empty(),
        });
        assert_eq!(state.pages().len(), 5);
        assert_eq!(state.pages().get(3).unwrap().name(), "Page 3");
    }

    fn draw_hit_areas(width: u16, state: &mut State) -> Vec<HitArea> {
        use ratatui::{backend::TestBackend, Terminal};

        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        terminal
            .draw(|frame| navigator(frame, frame.size(), state))
            .unwrap();
        state.hit_areas().to_vec()
    }

    #[test]
    fn test_scroll_buttons_do_not_overlap_add_buttons() {
        // Narrow enough that only part of the strip fits.
        let mut state = State::default();
        let hits = draw_hit_areas(54, &mut state);

        let strip = Rect::new(1, 1, 52 - text_width(ADD_BUTTON), 1);
        let tabs_right = strip.right() - SCROLL_BUTTON_WIDTH;
        assert!(hits
            .iter()
            .any(|hit| hit.target == StripTarget::ScrollRight));
        assert!(hits
            .iter()
            .filter(|hit| !matches!(hit.target, StripTarget::ScrollLeft | StripTarget::ScrollRight))
            .all(|hit| hit.area.right() <= tabs_right || hit.target == StripTarget::AddAtEnd));

        // The arrow sits in the last column of the strip.
        state.handle_mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: strip.right() - 1,
            row: 1,
            modifiers: crossterm::event::KeyModifiers::empty(),
        });
        assert_eq!(state.pages().len(), 4);
        assert_eq!(state.scroll_offset(), 1);
    }

    #[test]
    fn test_add_after_names_page_index() {
        let mut state = State::default();
        let targets: Vec<StripTarget> = draw_hit_areas(120, &mut state)
            .iter()
            .map(|hit| hit.target)
            .filter(|target| matches!(target, StripTarget::AddAfter(_)))
            .collect();
        assert_eq!(
            targets,
            vec![
                StripTarget::AddAfter(0),
                StripTarget::AddAfter(1),
                StripTarget::AddAfter(2)
            ]
        );
    }
}
