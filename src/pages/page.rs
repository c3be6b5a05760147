use std::fmt;

/// Opaque page identifier. Assigned once by the owning collection and never
/// reused.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(u64);

impl PageId {
    pub(crate) fn new(raw: u64) -> Self {
        PageId(raw)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a page. Decides the icon and the preview shown for it.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageCategory {
    Info,
    Document,
    Check,
}

impl PageCategory {
    /// Glyph drawn in front of the page name.
    ///
    pub fn icon(&self) -> &'static str {
        match self {
            PageCategory::Info => "ⓘ",
            PageCategory::Document => "▤",
            PageCategory::Check => "✓",
        }
    }
}

/// A single page of the form.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub(crate) id: PageId,
    pub(crate) name: String,
    pub(crate) category: PageCategory,
    pub(crate) is_active: bool,
    pub(crate) is_fixed: bool,
}

impl Page {
    pub(crate) fn new(id: PageId, name: &str, category: PageCategory) -> Self {
        Page {
            id,
            name: name.to_string(),
            category,
            is_active: false,
            is_fixed: false,
        }
    }

    pub(crate) fn fixed(id: PageId, name: &str, category: PageCategory) -> Self {
        Page {
            is_fixed: true,
            ..Page::new(id, name, category)
        }
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> PageCategory {
        self.category
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_fixed(&self) -> bool {
        self.is_fixed
    }
}
