use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};
use tui_logger::TuiLoggerWidget;

/// Render the log panel fed by the `tui-logger` backend.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .title("Log")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let widget = TuiLoggerWidget::default()
        .block(block)
        .style(styling::normal_text_style(theme))
        .style_error(styling::danger_style(theme))
        .style_warn(styling::normal_text_style(theme).fg(theme.orange.to_color()))
        .style_info(styling::normal_text_style(theme))
        .style_debug(styling::muted_text_style(theme))
        .output_separator(' ')
        .output_target(false);
    frame.render_widget(widget, size);
}
