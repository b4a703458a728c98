use super::{construct_nav, NavigationEntry};
use crate::section::Section;

fn section(id: &str, label: &str, level: usize) -> Section {
    Section {
        id: id.to_string(),
        nav_label: label.to_string(),
        level,
        line_start: 0,
        line_end: 1,
    }
}

#[test]
fn test_zero_sections_is_a_no_op() {
    let mut container = Vec::new();
    construct_nav(&[], &mut container);
    assert!(container.is_empty());

    // A pre-filled container is left untouched too.
    let existing = NavigationEntry {
        target: "#existing".to_string(),
        label: "Existing".to_string(),
    };
    let mut container = vec![existing.clone()];
    construct_nav(&[], &mut container);
    assert_eq!(container, vec![existing]);
}

#[test]
fn test_entries_match_sections_in_order() {
    let sections = vec![
        section("intro", "Introduction", 1),
        section("details", "Details", 1),
        section("usage", "Usage", 2),
    ];

    let mut container = Vec::new();
    construct_nav(&sections, &mut container);

    assert_eq!(container.len(), 3);
    assert_eq!(container[0].target, "#intro");
    assert_eq!(container[0].label, "Introduction");
    assert_eq!(container[1].target, "#details");
    assert_eq!(container[1].label, "Details");
    assert_eq!(container[2].target, "#usage");
    assert_eq!(container[2].label, "Usage");
}

#[test]
fn test_entries_append_after_existing_content() {
    let mut container = vec![NavigationEntry {
        target: "#home".to_string(),
        label: "Home".to_string(),
    }];

    construct_nav(&[section("intro", "Introduction", 1)], &mut container);

    assert_eq!(container.len(), 2);
    assert_eq!(container[0].target, "#home");
    assert_eq!(container[1].target, "#intro");
}

#[test]
fn test_section_id_strips_target_prefix() {
    let entry = NavigationEntry {
        target: "#intro".to_string(),
        label: "Introduction".to_string(),
    };
    assert_eq!(entry.section_id(), Some("intro"));

    let malformed = NavigationEntry {
        target: "intro".to_string(),
        label: "Introduction".to_string(),
    };
    assert_eq!(malformed.section_id(), None);
}
