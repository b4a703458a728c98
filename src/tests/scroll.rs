use super::{advance, ActivationSource, ScrollBehavior, ScrollDispatcher};
use crate::nav::construct_nav;
use crate::section::Section;

fn fixture() -> (Vec<Section>, Vec<crate::nav::NavigationEntry>) {
    let sections = vec![
        Section {
            id: "intro".to_string(),
            nav_label: "Introduction".to_string(),
            level: 1,
            line_start: 0,
            line_end: 12,
        },
        Section {
            id: "details".to_string(),
            nav_label: "Details".to_string(),
            level: 1,
            line_start: 12,
            line_end: 30,
        },
    ];

    let mut entries = Vec::new();
    construct_nav(&sections, &mut entries);
    (sections, entries)
}

#[test]
fn test_entry_activation_resolves_section_line() {
    let (sections, entries) = fixture();
    let dispatcher = ScrollDispatcher::new(ScrollBehavior::Smooth);

    let request = dispatcher
        .dispatch(ActivationSource::Entry(1), &entries, &sections)
        .expect("entry activation must resolve");

    assert_eq!(request.line, 12);
    assert_eq!(request.behavior, ScrollBehavior::Smooth);
}

#[test]
fn test_container_activation_is_ignored() {
    let (sections, entries) = fixture();
    let dispatcher = ScrollDispatcher::new(ScrollBehavior::Smooth);

    assert!(dispatcher
        .dispatch(ActivationSource::Container, &entries, &sections)
        .is_none());
}

#[test]
fn test_out_of_range_entry_is_ignored() {
    let (sections, entries) = fixture();
    let dispatcher = ScrollDispatcher::new(ScrollBehavior::Smooth);

    assert!(dispatcher
        .dispatch(ActivationSource::Entry(99), &entries, &sections)
        .is_none());
}

#[test]
fn test_dangling_target_is_ignored() {
    let (sections, mut entries) = fixture();
    entries[0].target = "#missing".to_string();
    let dispatcher = ScrollDispatcher::new(ScrollBehavior::Smooth);

    assert!(dispatcher
        .dispatch(ActivationSource::Entry(0), &entries, &sections)
        .is_none());
}

#[test]
fn test_instant_dispatcher_requests_default_jump() {
    let (sections, entries) = fixture();
    let dispatcher = ScrollDispatcher::new(ScrollBehavior::Instant);

    let request = dispatcher
        .dispatch(ActivationSource::Entry(0), &entries, &sections)
        .expect("entry activation must resolve");

    assert_eq!(request.behavior, ScrollBehavior::Instant);
}

#[test]
fn test_advance_moves_toward_target_and_stops() {
    assert_eq!(advance(0, 7, 3), 3);
    assert_eq!(advance(3, 7, 3), 6);
    assert_eq!(advance(6, 7, 3), 7, "never overshoots");

    assert_eq!(advance(10, 2, 4), 6);
    assert_eq!(advance(6, 2, 4), 2);

    assert_eq!(advance(5, 5, 3), 5, "at target stays put");
    assert_eq!(advance(0, 2, 0), 1, "zero step still makes progress");
}
