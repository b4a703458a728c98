//! Navigation model construction from document sections.
//!
//! The navigation container is populated once at startup with one entry per
//! section, in document order. Entries pair a label (the heading text) with
//! an anchor-style target reference the scroll dispatcher resolves back to a
//! section.

use crate::section::Section;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One navigation list entry linking to a section.
pub struct NavigationEntry {
    /// Anchor-style target reference: `#` followed by the section id.
    pub target: String,
    /// Label copied from the section's heading.
    pub label: String,
}

impl NavigationEntry {
    #[must_use]
    /// Section identifier this entry points at, if the target is well-formed.
    pub fn section_id(&self) -> Option<&str> {
        self.target.strip_prefix('#')
    }
}

/// Populate the navigation container with one entry per section, in document order.
///
/// A document with no sections leaves the container untouched: an explicit
/// early exit, not an error. Entries are assembled first and appended in a
/// single batch so the container mutates exactly once.
pub fn construct_nav(sections: &[Section], container: &mut Vec<NavigationEntry>) {
    if sections.is_empty() {
        return;
    }

    let entries: Vec<NavigationEntry> = sections
        .iter()
        .map(|section| NavigationEntry {
            target: format!("#{}", section.id),
            label: section.nav_label.clone(),
        })
        .collect();

    container.extend(entries);
}

#[cfg(test)]
#[path = "tests/nav.rs"]
mod tests;
