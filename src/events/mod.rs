//! Event handling module.
//!
//! Terminal events (keys, mouse and ticks) are polled on their own thread and
//! applied to the navigator state on the render thread.

pub mod terminal;
