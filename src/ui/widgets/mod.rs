//! Reusable UI widget components.
//!
//! This module contains styling helpers and the content pane skeleton.

pub mod skeleton;
pub mod styling;
