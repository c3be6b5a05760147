mod all;
mod content;
mod footer;
mod header;
mod log;
mod navigator;
mod overlays;

use super::*;
use content::content;
use footer::footer;
use header::header;
use navigator::navigator;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub use all::all as render;

/// Return a rectangle of the given percentage size centered in `r`.
///
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
