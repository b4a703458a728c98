use super::AppState;
use crate::config::Config;
use crate::formats::markdown::MarkdownFormat;
use crate::input;
use crate::observe::VisibilityEvent;
use crate::scroll::ActivationSource;
use std::io::Write;
use tempfile::NamedTempFile;

fn config(smooth_scroll: bool) -> Config {
    Config {
        smooth_scroll,
        threshold_start: 1.0,
        threshold_steps: 20,
        scroll_step: 3,
    }
}

/// Two sections: "Introduction" on lines 0..5, "Details" on lines 5..9.
fn demo_app(smooth_scroll: bool, viewport_height: usize) -> AppState {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "# Introduction\n\nintro text\nmore intro\n\n# Details\n\ndetail text\nmore detail"
    )
    .unwrap();

    let content = input::load_document(file.path()).unwrap();
    let sections = input::extract_sections(&content, &MarkdownFormat).unwrap();
    let lines = content.lines().map(str::to_string).collect();

    AppState::startup(lines, sections, &config(smooth_scroll), viewport_height)
}

#[test]
fn test_startup_builds_nav_then_tracks_visibility() {
    let app = demo_app(false, 4);

    assert_eq!(app.nav_entries.len(), 2);
    assert_eq!(app.nav_entries[0].target, "#introduction");
    assert_eq!(app.nav_entries[0].label, "Introduction");
    assert_eq!(app.nav_entries[1].target, "#details");
    assert_eq!(app.nav_entries[1].label, "Details");

    // Viewport shows lines 0..4: 4 of Introduction's 5 lines (0.8 > 0.7),
    // none of Details.
    assert!(app.is_active(0));
    assert!(!app.is_active(1));
}

#[test]
fn test_event_batch_leaves_other_sections_untouched() {
    let mut app = demo_app(false, 4);

    app.tracker.handle(&[VisibilityEvent {
        section: 0,
        is_intersecting: true,
        ratio: 0.8,
    }]);

    assert!(app.is_active(0));
    assert!(!app.is_active(1), "no event for Details, no transition");
}

#[test]
fn test_whole_document_visible_marks_both_active() {
    // No exclusivity between active sections.
    let app = demo_app(false, 9);

    assert!(app.is_active(0));
    assert!(app.is_active(1));
}

#[test]
fn test_instant_activation_jumps_to_section() {
    let mut app = demo_app(false, 4);

    app.select_next();
    app.activate_selected();

    assert_eq!(app.viewport.top, 5, "default jump lands on the heading");
    assert_eq!(app.pending_scroll, None);
    assert!(!app.is_active(0), "Introduction left the viewport");
    assert!(app.is_active(1), "Details fills the viewport");
}

#[test]
fn test_smooth_activation_suppresses_default_jump() {
    let mut app = demo_app(true, 4);

    app.select_next();
    app.activate_selected();

    assert_eq!(app.viewport.top, 0, "no instant jump");
    assert_eq!(app.pending_scroll, Some(5));

    app.tick();
    assert_eq!(app.viewport.top, 3);

    app.tick();
    assert_eq!(app.viewport.top, 5, "animation arrives");
    assert_eq!(app.pending_scroll, None);
    assert!(app.is_active(1));
}

#[test]
fn test_cancel_abandons_smooth_scroll() {
    let mut app = demo_app(true, 4);

    app.select_next();
    app.activate_selected();
    app.tick();
    app.cancel_scroll();

    assert_eq!(app.viewport.top, 3, "viewport stays where the animation stopped");
    assert_eq!(app.pending_scroll, None);
}

#[test]
fn test_container_activation_does_nothing() {
    let mut app = demo_app(true, 4);

    app.activate(ActivationSource::Container);

    assert_eq!(app.viewport.top, 0);
    assert_eq!(app.pending_scroll, None);
}

#[test]
fn test_line_scrolling_re_measures_visibility() {
    let mut app = demo_app(false, 4);
    assert!(app.is_active(0));

    // One line down: 4 of Introduction's 5 lines visible, still 0.8.
    app.scroll_down();
    assert_eq!(app.viewport.top, 1);
    assert!(app.is_active(0));

    // Another line: 3 of 5 visible, ratio 0.6 falls below the mark.
    app.scroll_down();
    assert_eq!(app.viewport.top, 2);
    assert!(!app.is_active(0));
    assert!(!app.is_active(1), "Details shows one line of four");

    app.scroll_up();
    assert!(app.is_active(0), "scrolling back re-activates");
    app.scroll_up();
    assert_eq!(app.viewport.top, 0);
    app.scroll_up();
    assert_eq!(app.viewport.top, 0, "clamped at the top");
}

#[test]
fn test_paging_clamps_to_document() {
    let mut app = demo_app(false, 4);

    app.page_down();
    assert_eq!(app.viewport.top, 4);
    app.page_down();
    assert_eq!(app.viewport.top, 5, "clamped to the last full viewport");

    app.page_up();
    assert_eq!(app.viewport.top, 1);
    app.to_bottom();
    assert_eq!(app.viewport.top, 5);
    app.to_top();
    assert_eq!(app.viewport.top, 0);
}

#[test]
fn test_selection_stays_in_bounds() {
    let mut app = demo_app(false, 4);

    app.select_prev();
    assert_eq!(app.selected_entry, 0);
    app.select_next();
    app.select_next();
    assert_eq!(app.selected_entry, 1);
}

#[test]
fn test_resize_adopts_pane_height() {
    let mut app = demo_app(false, 4);
    assert!(!app.is_active(1));

    app.resize(9);

    assert_eq!(app.viewport.height, 9);
    assert!(app.is_active(0));
    assert!(app.is_active(1), "resize re-measures visibility");
}
