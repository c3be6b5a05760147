//! Navigation-related state types.
//!
//! This module contains the input modes of the navigator, the context menu
//! entries and the clickable targets of the tab strip.

use crate::pages::PageId;
use ratatui::layout::Rect;

/// Specifying what keyboard input currently drives.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    Navigate,
    Drag { from: usize, to: usize },
    ContextMenu { page_id: PageId, selected: usize },
    Rename { page_id: PageId },
}

/// Specifying the entries of a page's context menu.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuItem {
    SetAsFirst,
    Rename,
    Duplicate,
    Delete,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::SetAsFirst => "Set as first page",
            MenuItem::Rename => "Rename",
            MenuItem::Duplicate => "Duplicate",
            MenuItem::Delete => "Delete",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, MenuItem::Delete)
    }

    /// Entries offered for a page. Fixed pages have no menu.
    ///
    pub fn for_page(is_fixed: bool) -> &'static [MenuItem] {
        if is_fixed {
            &[]
        } else {
            &[
                MenuItem::SetAsFirst,
                MenuItem::Rename,
                MenuItem::Duplicate,
                MenuItem::Delete,
            ]
        }
    }
}

/// Specifying the clickable parts of the tab strip.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StripTarget {
    Tab(usize),
    AddAfter(usize),
    AddAtEnd,
    ScrollLeft,
    ScrollRight,
}

/// A clickable region recorded while drawing the tab strip.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct HitArea {
    pub area: Rect,
    pub target: StripTarget,
}

impl HitArea {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }
}
