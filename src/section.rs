//! Section representation for tree-sitter parsed documents.
//!
//! A section is a heading plus everything beneath it up to the next heading.
//! Sections carry the line coordinates the viewport needs to measure
//! visibility and the identity the navigation list needs to link to them.
//! They are immutable for the lifetime of a loaded document; every other
//! component refers to them by index or identifier, never by ownership.

#[derive(Clone, Debug)]
/// A document division anchored at a heading, with coordinates for visibility measurement.
pub struct Section {
    /// Unique identifier derived from the heading text (anchor slug).
    pub id: String,
    /// Human-readable label shown in the navigation list.
    pub nav_label: String,
    /// Heading depth (1 for top-level).
    pub level: usize,
    /// Line of the heading itself (0-indexed).
    pub line_start: usize,
    /// Line where the next section begins or the document ends (exclusive).
    pub line_end: usize,
}

impl Section {
    #[must_use]
    /// Number of lines the section spans, never zero.
    pub fn extent(&self) -> usize {
        self.line_end.saturating_sub(self.line_start).max(1)
    }
}
