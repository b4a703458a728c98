//! The composition root bridging the document, its navigation model, and the viewport.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated
//! as the user navigates. One `AppState` owns everything with session
//! lifetime: the document lines, the parsed sections, the navigation entries
//! built from them, the shared section observer with its active tracker, and
//! the viewport the document pane renders. Startup wiring runs exactly once
//! per loaded document: navigation construction first, then observer setup.

use crate::config::Config;
use crate::nav::{construct_nav, NavigationEntry};
use crate::observe::{build_threshold_list, ActiveTracker, SectionObserver, Viewport};
use crate::scroll::{advance, ActivationSource, ScrollBehavior, ScrollDispatcher};
use crate::section::Section;

/// Bridges the document, navigation model, observer, and viewport.
pub struct AppState {
    /// Document text split into lines for rendering and measurement.
    pub lines: Vec<String>,
    /// Parsed sections in document order.
    pub sections: Vec<Section>,
    /// Navigation container, populated once during startup.
    pub nav_entries: Vec<NavigationEntry>,
    /// Shared observer delivering visibility events on threshold crossings.
    pub observer: SectionObserver,
    /// Per-section active markers fed by the observer.
    pub tracker: ActiveTracker,
    /// Delegated activation handler for the navigation container.
    pub dispatcher: ScrollDispatcher,
    /// Window of document lines the document pane shows.
    pub viewport: Viewport,
    /// Selected entry in the navigation pane.
    pub selected_entry: usize,
    /// Target line of an in-flight smooth scroll.
    pub pending_scroll: Option<usize>,
    /// Lines the viewport advances per animation frame.
    scroll_step: usize,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
}

impl AppState {
    #[must_use]
    /// Wire up the application for a loaded document.
    ///
    /// Runs the startup sequence once: construct the navigation list, then
    /// subscribe the observer to every section and take the initial
    /// visibility measurement. The observer and tracker live here for the
    /// session; nothing else holds them.
    pub fn startup(
        lines: Vec<String>,
        sections: Vec<Section>,
        cfg: &Config,
        viewport_height: usize,
    ) -> Self {
        let mut nav_entries = Vec::new();
        construct_nav(&sections, &mut nav_entries);

        let thresholds = build_threshold_list(cfg.threshold_start, cfg.threshold_steps);
        let mut observer = SectionObserver::new(thresholds);
        observer.observe(sections.len());

        let behavior = if cfg.smooth_scroll {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        };

        let mut state = Self {
            tracker: ActiveTracker::new(sections.len()),
            lines,
            sections,
            nav_entries,
            observer,
            dispatcher: ScrollDispatcher::new(behavior),
            viewport: Viewport {
                top: 0,
                height: viewport_height,
            },
            selected_entry: 0,
            pending_scroll: None,
            scroll_step: cfg.scroll_step,
            message: None,
        };
        state.refresh_visibility();
        state
    }

    /// Re-measure section visibility and apply any delivered events.
    pub fn refresh_visibility(&mut self) {
        let events = self.observer.measure(&self.sections, self.viewport);
        self.tracker.handle(&events);
    }

    #[must_use]
    /// Whether the section at `index` currently holds the active marker.
    pub fn is_active(&self, index: usize) -> bool {
        self.tracker.is_active(index)
    }

    fn max_top(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport.height)
    }

    /// Reposition the viewport top, clamped to the document, and re-measure.
    pub fn scroll_to(&mut self, line: usize) {
        self.viewport.top = line.min(self.max_top());
        self.refresh_visibility();
    }

    /// Adopt the document pane's rendered height, re-measuring on change.
    pub fn resize(&mut self, height: usize) {
        if height != self.viewport.height {
            self.viewport.height = height;
            self.viewport.top = self.viewport.top.min(self.max_top());
            self.refresh_visibility();
        }
    }

    /// Scroll the document up one line.
    pub fn scroll_up(&mut self) {
        self.scroll_to(self.viewport.top.saturating_sub(1));
    }

    /// Scroll the document down one line.
    pub fn scroll_down(&mut self) {
        self.scroll_to(self.viewport.top + 1);
    }

    /// Scroll up one viewport's worth of lines.
    pub fn page_up(&mut self) {
        let page = self.viewport.height.max(1);
        self.scroll_to(self.viewport.top.saturating_sub(page));
    }

    /// Scroll down one viewport's worth of lines.
    pub fn page_down(&mut self) {
        let page = self.viewport.height.max(1);
        self.scroll_to(self.viewport.top + page);
    }

    /// Jump the viewport to the start of the document.
    pub fn to_top(&mut self) {
        self.scroll_to(0);
    }

    /// Jump the viewport to the end of the document.
    pub fn to_bottom(&mut self) {
        self.scroll_to(usize::MAX);
    }

    /// Move the navigation selection to the previous entry.
    pub fn select_prev(&mut self) {
        if self.selected_entry > 0 {
            self.selected_entry -= 1;
        }
    }

    /// Move the navigation selection to the next entry.
    pub fn select_next(&mut self) {
        if self.selected_entry + 1 < self.nav_entries.len() {
            self.selected_entry += 1;
        }
    }

    /// Route an activation through the delegated dispatcher.
    ///
    /// A `Smooth` request suppresses the default jump and starts the
    /// animation; an `Instant` request is the default jump itself.
    /// Activations the dispatcher declines (non-entry sources, dangling
    /// targets) do nothing.
    pub fn activate(&mut self, source: ActivationSource) {
        let Some(request) = self
            .dispatcher
            .dispatch(source, &self.nav_entries, &self.sections)
        else {
            return;
        };

        match request.behavior {
            ScrollBehavior::Instant => {
                self.pending_scroll = None;
                self.scroll_to(request.line);
            }
            ScrollBehavior::Smooth => {
                self.pending_scroll = Some(request.line.min(self.max_top()));
            }
        }
    }

    /// Activate the entry the navigation selection rests on.
    pub fn activate_selected(&mut self) {
        self.activate(ActivationSource::Entry(self.selected_entry));
    }

    /// Advance an in-flight smooth scroll by one frame.
    pub fn tick(&mut self) {
        if let Some(target) = self.pending_scroll {
            let target = target.min(self.max_top());
            let next = advance(self.viewport.top, target, self.scroll_step);
            self.scroll_to(next);

            if self.viewport.top == target {
                self.pending_scroll = None;
            }
        }
    }

    /// Abandon an in-flight smooth scroll, leaving the viewport where it is.
    pub fn cancel_scroll(&mut self) {
        self.pending_scroll = None;
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
