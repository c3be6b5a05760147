//! Navigator state error types.
//!
//! These describe requests the UI turns down before they become commands.
//! The page collection itself never fails.

use crate::pages::PageId;

/// Errors that can occur while handling navigator input.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Rename submitted with nothing but whitespace
    #[error("Page name cannot be blank")]
    BlankName,

    /// Rename submitted without changing the name
    #[error("Page name unchanged: '{0}'")]
    UnchangedName(String),

    /// The page a dialog or menu was opened for no longer exists
    #[error("Page not found: {0}")]
    PageNotFound(PageId),

    /// No tab at the requested position
    #[error("No page at position {0}")]
    NoPageAt(usize),

    /// Fixed pages cannot be dragged, renamed or given a menu
    #[error("Page '{0}' is fixed")]
    FixedPage(String),
}
