//! Placeholder content shown for each page category.

use super::PageCategory;

/// Accent colour family used for a category's header icon.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Orange,
    Blue,
    Green,
}

/// Static preview description for one category.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    pub description: &'static str,
    pub fields: [&'static str; 3],
    pub accent: Accent,
}

const INFO: PreviewConfig = PreviewConfig {
    description: "Collect basic information from users",
    fields: ["Full Name", "Email Address", "Phone Number"],
    accent: Accent::Orange,
};

const DOCUMENT: PreviewConfig = PreviewConfig {
    description: "Gather detailed information and documents",
    fields: ["Upload Document", "Additional Details", "Comments"],
    accent: Accent::Blue,
};

const CHECK: PreviewConfig = PreviewConfig {
    description: "Final confirmation and review",
    fields: ["Terms & Conditions", "Final Review", "Submit"],
    accent: Accent::Green,
};

/// Return the preview configuration for `category`.
///
pub fn config_for(category: PageCategory) -> &'static PreviewConfig {
    match category {
        PageCategory::Info => &INFO,
        PageCategory::Document => &DOCUMENT,
        PageCategory::Check => &CHECK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_for_each_category() {
        assert_eq!(config_for(PageCategory::Info).fields[0], "Full Name");
        assert_eq!(config_for(PageCategory::Info).accent, Accent::Orange);
        assert_eq!(
            config_for(PageCategory::Document).description,
            "Gather detailed information and documents"
        );
        assert_eq!(config_for(PageCategory::Document).accent, Accent::Blue);
        assert_eq!(config_for(PageCategory::Check).fields[2], "Submit");
        assert_eq!(config_for(PageCategory::Check).accent, Accent::Green);
    }
}
