use super::log::log;
use super::overlays::{context_menu, rename_dialog};
use super::{content, footer, header, navigator, Frame};
use crate::state::{Mode, State};
use ratatui::layout::{Constraint, Direction, Layout};

const LOG_HEIGHT: u16 = 8;

/// Render the whole screen according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let log_height = if state.show_log() { LOG_HEIGHT } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(log_height),
            Constraint::Length(1),
        ])
        .split(size);

    header(frame, rows[0], state);
    navigator(frame, rows[1], state);
    content(frame, rows[2], state);
    if state.show_log() {
        log(frame, rows[3], state);
    }
    footer(frame, rows[4], state);

    match state.mode() {
        Mode::ContextMenu { .. } => context_menu(frame, size, state),
        Mode::Rename { .. } => rename_dialog(frame, size, state),
        _ => {}
    }
}
