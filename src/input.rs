//! Document loading and section extraction.
//!
//! Parses a document with tree-sitter, walks heading matches in document
//! order, and produces the `Section` records everything else consumes. A
//! section's extent runs from its heading line to the line the next heading
//! starts on (or the end of the document). Slug identifiers are derived from
//! heading text the way anchor ids are, with a numeric suffix keeping
//! duplicates unique.

use crate::formats::Format;
use crate::section::Section;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use streaming_iterator::StreamingIterator;

/// Read the document into memory.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_document(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Extract sections from document text, in document order.
///
/// # Errors
///
/// Returns `InvalidData` if the format's grammar is incompatible with the
/// parser or one of its queries fails to compile.
pub fn extract_sections(content: &str, format: &dyn Format) -> io::Result<Vec<Section>> {
    let language = format.language();

    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let Some(tree) = parser.parse(content, None) else {
        return Ok(Vec::new());
    };

    let section_query = tree_sitter::Query::new(&language, format.section_query())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let title_query = tree_sitter::Query::new(&language, format.title_query())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let bytes = content.as_bytes();
    let total_lines = content.lines().count();

    let mut sections: Vec<Section> = Vec::new();
    let mut seen_slugs: HashMap<String, usize> = HashMap::new();

    let mut cursor = tree_sitter::QueryCursor::new();
    let mut matches = cursor.matches(&section_query, tree.root_node(), bytes);

    while let Some(matched) = matches.next() {
        for capture in matched.captures {
            let heading = capture.node;
            let line = heading.start_position().row;

            // The previous section ends where this heading begins.
            if let Some(previous) = sections.last_mut() {
                previous.line_end = line;
            }

            let title = heading_title(heading, bytes, &title_query);
            let id = unique_slug(&title, &mut seen_slugs);

            sections.push(Section {
                id,
                nav_label: title,
                level: heading_level(heading, format),
                line_start: line,
                line_end: total_lines,
            });
        }
    }

    Ok(sections)
}

/// Title text captured inside a heading node, trimmed of markup whitespace.
fn heading_title(heading: tree_sitter::Node, bytes: &[u8], title_query: &tree_sitter::Query) -> String {
    let mut cursor = tree_sitter::QueryCursor::new();
    let mut matches = cursor.matches(title_query, heading, bytes);

    while let Some(matched) = matches.next() {
        if let Some(capture) = matched.captures.first() {
            return capture
                .node
                .utf8_text(bytes)
                .unwrap_or_default()
                .trim()
                .to_string();
        }
    }

    String::new()
}

/// Nesting level read from the heading's marker child, defaulting to 1.
fn heading_level(heading: tree_sitter::Node, format: &dyn Format) -> usize {
    let mut walker = heading.walk();
    for child in heading.children(&mut walker) {
        if let Some(level) = format.heading_level(child.kind()) {
            return level;
        }
    }

    1
}

/// Anchor slug for a heading title, unique across the document.
///
/// Lowercases, collapses runs of non-alphanumerics to single hyphens, and
/// appends `-N` to repeats so two sections titled "Setup" get distinct ids.
fn unique_slug(title: &str, seen: &mut HashMap<String, usize>) -> String {
    let lowered = title.to_lowercase();
    let base = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    let base = if base.is_empty() {
        "section".to_string()
    } else {
        base
    };

    let count = seen.entry(base.clone()).or_insert(0);
    let slug = if *count == 0 {
        base.clone()
    } else {
        format!("{base}-{count}")
    };
    *count += 1;

    slug
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
