//! Automatic names for new pages.

use super::Page;
use log::*;
use regex::Regex;

const GENERATED_NAME_PATTERN: &str = r"^Page (\d+)$";

/// Return the name for a page about to be added.
///
/// The number starts from the count of regular (non-fixed) pages plus one,
/// and is raised above any "Page N" name still present so a generated name
/// is never handed out twice while its holder exists.
///
pub fn next_page_name(pages: &[Page]) -> String {
    let regular = pages.iter().filter(|p| !p.is_fixed()).count() as u64;
    let number = (regular + 1).max(highest_generated_number(pages) + 1);
    format!("Page {}", number)
}

/// Return the name given to a duplicate of a page called `name`.
///
pub fn copy_name(name: &str) -> String {
    format!("{} Copy", name)
}

fn highest_generated_number(pages: &[Page]) -> u64 {
    let re = match Regex::new(GENERATED_NAME_PATTERN) {
        Ok(r) => r,
        Err(e) => {
            warn!("Failed to compile page name pattern: {}", e);
            return 0;
        }
    };
    pages
        .iter()
        .filter_map(|p| re.captures(p.name()))
        .filter_map(|caps| caps.get(1).and_then(|m| m.as_str().parse::<u64>().ok()))
        .max()
        .unwrap_or(0)
}
