//! Application state management module.
//!
//! This module contains the navigator state, including:
//! - Main `State` struct owning the page collection and UI state
//! - Navigation types (Mode, MenuItem, StripTarget, etc.)
//! - Rename dialog input validation
//! - State error handling

mod error;
mod form;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use form::validate_rename;
pub use navigation::{HitArea, MenuItem, Mode, StripTarget};
pub use state_impl::State;
