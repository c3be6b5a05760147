//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Screen layout (header, tab strip, content pane, log, footer)
//! - Theme management
//! - Shared styling helpers
//! - Overlays (context menu, rename dialog)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::render;
pub use theme::{ColorSpec, Theme};
