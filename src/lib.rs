//! Terminal page navigator for a multi-page form builder.
//!
//! The page list lives in [`pages::PageCollection`], a value type changed only
//! through [`pages::Command`]. [`state::State`] wraps it with the cursor, the
//! input mode and the tab strip layout, and [`app::App`] drives the terminal.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod pages;
pub mod state;
pub mod ui;
