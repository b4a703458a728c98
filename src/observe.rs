//! Viewport-intersection tracking for document sections.
//!
//! Instead of recomputing every section's position on every keystroke, the
//! observer reports a section only when its visible-area ratio crosses one of
//! a configured list of thresholds, and the tracker folds those reports into
//! per-section active markers. The split mirrors the seam between a
//! platform compositor (which measures) and the application (which reacts):
//! `SectionObserver::measure` plays the compositor, `ActiveTracker::handle`
//! plays the application.

use crate::section::Section;

/// Visibility ratio above which a section is marked active.
pub const ACTIVE_RATIO: f64 = 0.7;

#[must_use]
#[allow(clippy::cast_precision_loss)]
/// Build the ordered list of visibility-ratio breakpoints an observer reports at.
///
/// Produces `i / threshold_steps` for a counter `i` running from `start` up
/// to and including `threshold_steps`, so the defaults (1.0, 20) give the
/// ramp 0.05, 0.10, ... 1.0. The counter is a float on purpose: a fractional
/// `start` shifts every breakpoint rather than merely truncating the ramp,
/// and callers rely on that parametrized shape.
pub fn build_threshold_list(start: f64, threshold_steps: usize) -> Vec<f64> {
    let mut thresholds = Vec::new();
    let steps = threshold_steps as f64;

    let mut i = start;
    while i <= steps {
        thresholds.push(i / steps);
        i += 1.0;
    }

    thresholds
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Window of document lines currently shown in the document pane.
pub struct Viewport {
    /// First visible line (0-indexed).
    pub top: usize,
    /// Number of visible lines.
    pub height: usize,
}

impl Viewport {
    #[must_use]
    /// Line just past the last visible one (exclusive).
    pub fn bottom(self) -> usize {
        self.top + self.height
    }
}

#[derive(Clone, Copy, Debug)]
/// Transient notification that a section's visibility crossed a threshold.
pub struct VisibilityEvent {
    /// Index of the section in document order.
    pub section: usize,
    /// Whether any part of the section overlaps the viewport.
    pub is_intersecting: bool,
    /// Fraction of the section's lines inside the viewport, in [0, 1].
    pub ratio: f64,
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
/// Fraction of a section's line extent that falls inside the viewport.
pub fn visible_ratio(section: &Section, viewport: Viewport) -> f64 {
    let top = section.line_start.max(viewport.top);
    let bottom = section.line_end.min(viewport.bottom());
    let overlap = bottom.saturating_sub(top);

    overlap as f64 / section.extent() as f64
}

/// Emits `VisibilityEvent`s when sections cross configured visibility thresholds.
///
/// One observer is shared by every section. Each section's ratio is mapped to
/// a bucket (the count of thresholds at or below it); `measure` reports a
/// section only when its bucket differs from the previous delivery, so a
/// viewport that has not moved produces no events. The first measurement
/// after `observe` has no previous bucket and reports every section, the
/// initial delivery an intersection observer makes after subscription.
pub struct SectionObserver {
    /// Ordered ratio breakpoints configuring delivery granularity.
    thresholds: Vec<f64>,
    /// Bucket reported at the last delivery, per observed section.
    last_bucket: Vec<Option<usize>>,
}

impl SectionObserver {
    #[must_use]
    /// Observer configured with the given threshold list, observing nothing yet.
    pub fn new(thresholds: Vec<f64>) -> Self {
        Self {
            thresholds,
            last_bucket: Vec::new(),
        }
    }

    /// Begin observing `count` sections, clearing any delivery history.
    pub fn observe(&mut self, count: usize) {
        self.last_bucket = vec![None; count];
    }

    fn bucket(&self, ratio: f64) -> usize {
        self.thresholds.iter().filter(|t| ratio >= **t).count()
    }

    /// Measure every observed section against the viewport.
    ///
    /// Returns one event per section whose ratio moved into a different
    /// threshold bucket since the last delivery, in document order.
    pub fn measure(&mut self, sections: &[Section], viewport: Viewport) -> Vec<VisibilityEvent> {
        let mut events = Vec::new();

        for (index, section) in sections.iter().enumerate() {
            if index >= self.last_bucket.len() {
                break;
            }

            let ratio = visible_ratio(section, viewport);
            let bucket = self.bucket(ratio);

            if self.last_bucket[index] != Some(bucket) {
                self.last_bucket[index] = Some(bucket);
                events.push(VisibilityEvent {
                    section: index,
                    is_intersecting: ratio > 0.0,
                    ratio,
                });
            }
        }

        events
    }
}

/// Folds visibility events into per-section active markers.
///
/// Each section runs an independent two-state machine:
///
/// ```text
/// Inactive -> Active    on is_intersecting && ratio > ACTIVE_RATIO
/// Active   -> Inactive  on the negation
/// ```
///
/// Every event is a pure per-section transition with no cross-section memory
/// and no arbitration, so several sections can hold the marker at once (two
/// short sections sharing the viewport) or none at all (the middle of one
/// very long section). An event whose flag and ratio disagree follows the
/// flag: not intersecting means inactive, whatever the ratio claims.
///
/// The marker itself is presentation state. The tracker only flips booleans;
/// the UI layer decides what "active" looks like.
pub struct ActiveTracker {
    active: Vec<bool>,
}

impl ActiveTracker {
    #[must_use]
    /// Tracker with every section initially inactive.
    pub fn new(count: usize) -> Self {
        Self {
            active: vec![false; count],
        }
    }

    /// Apply a delivered batch of visibility events, one transition per event.
    pub fn handle(&mut self, events: &[VisibilityEvent]) {
        for event in events {
            if let Some(marker) = self.active.get_mut(event.section) {
                *marker = event.is_intersecting && event.ratio > ACTIVE_RATIO;
            }
        }
    }

    #[must_use]
    /// Whether the section currently holds the active marker.
    pub fn is_active(&self, section: usize) -> bool {
        self.active.get(section).copied().unwrap_or(false)
    }

    #[must_use]
    /// Indices of every section currently marked active, in document order.
    pub fn active_sections(&self) -> Vec<usize> {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(index, marked)| marked.then_some(index))
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/observe.rs"]
mod tests;
