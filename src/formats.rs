//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over different
//! document formats (markdown, org-mode, restructuredtext, etc.) by providing
//! tree-sitter queries specific to each format, plus the mapping from the
//! grammar's heading-marker node kinds to nesting levels.

pub mod markdown;

/// Tree-sitter hooks a document format provides for section extraction.
pub trait Format {
    /// Grammar used to parse documents of this format.
    fn language(&self) -> tree_sitter::Language;
    /// Query matching one node per section heading.
    fn section_query(&self) -> &str;
    /// Query capturing the title text inside a heading node.
    fn title_query(&self) -> &str;
    /// Nesting level for a heading-marker node kind, `None` for other kinds.
    fn heading_level(&self, marker_kind: &str) -> Option<usize>;
}
