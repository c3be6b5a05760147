use super::Frame;
use crate::config::hotkeys::{build_footer_text, HotkeyAction};
use crate::state::{Mode, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the mode label and key hints shown in the footer.
///
fn controls(state: &State) -> (&'static str, String) {
    let hotkeys = state.hotkeys();
    match state.mode() {
        Mode::Navigate => (
            "PAGES:",
            build_footer_text(
                &hotkeys.navigator,
                &[
                    (
                        HotkeyAction::FocusPrev,
                        "move",
                        Some(HotkeyAction::FocusNext),
                    ),
                    (HotkeyAction::Activate, "open", None),
                    (
                        HotkeyAction::AddAfter,
                        "add",
                        Some(HotkeyAction::AddAtEnd),
                    ),
                    (HotkeyAction::OpenMenu, "menu", None),
                    (HotkeyAction::Grab, "move page", None),
                    (
                        HotkeyAction::ScrollLeft,
                        "scroll",
                        Some(HotkeyAction::ScrollRight),
                    ),
                    (HotkeyAction::CycleTheme, "theme", None),
                    (HotkeyAction::ToggleLog, "log", None),
                    (HotkeyAction::Quit, "quit", None),
                ],
            ),
        ),
        Mode::Drag { .. } => (
            "MOVE:",
            build_footer_text(
                &hotkeys.drag,
                &[
                    (
                        HotkeyAction::DragPrev,
                        "choose position",
                        Some(HotkeyAction::DragNext),
                    ),
                    (HotkeyAction::Drop, "drop", None),
                    (HotkeyAction::CancelDrag, "cancel", None),
                ],
            ),
        ),
        Mode::ContextMenu { .. } => (
            "MENU:",
            build_footer_text(
                &hotkeys.context_menu,
                &[
                    (
                        HotkeyAction::MenuNext,
                        "navigate",
                        Some(HotkeyAction::MenuPrev),
                    ),
                    (HotkeyAction::MenuSelect, "select", None),
                    (HotkeyAction::MenuClose, "close", None),
                ],
            ),
        ),
        Mode::Rename { .. } => ("RENAME:", " Type a name, Enter: save, Esc: cancel".to_string()),
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let (label, text) = controls(state);
    let line = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(theme.tab_active_fg.to_color())
                .bg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(text, styling::muted_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}
