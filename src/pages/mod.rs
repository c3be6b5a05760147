//! Page collection model.
//!
//! This module holds everything that decides what the page list looks like:
//! - `Page` records and their categories
//! - `PageCollection` with the transition function driven by `Command`
//! - Automatic naming of new pages
//! - The static preview table rendered by the content pane

mod collection;
mod naming;
mod page;
pub mod preview;

pub use collection::{Command, PageCollection};
pub use page::{Page, PageCategory, PageId};
