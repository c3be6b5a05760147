//! Rename dialog input handling.

use super::StateError;
use tui_textarea::{CursorMove, TextArea};

/// Return a single-line input prefilled with `current`, cursor at the end.
///
pub fn rename_input(current: &str) -> TextArea<'static> {
    let mut input = TextArea::new(vec![current.to_string()]);
    input.move_cursor(CursorMove::End);
    input
}

/// Return the name to apply for a rename submission. The input is trimmed;
/// blank or unchanged names are refused.
///
pub fn validate_rename(current: &str, input: &str) -> Result<String, StateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(StateError::BlankName);
    }
    if trimmed == current {
        return Err(StateError::UnchangedName(current.to_string()));
    }
    Ok(trimmed.to_string())
}
