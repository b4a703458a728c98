//! Scroll dispatch for navigation activations.
//!
//! One dispatcher serves the whole navigation container: a single handler
//! inspects the activation source instead of registering one handler per
//! entry, so entries added later would be covered without rewiring. The
//! dispatcher resolves an entry's target reference back to its section and
//! produces a scroll request; a smooth request replaces (and thereby
//! suppresses) the default instant jump, which must not run first or the
//! jump visually preempts the animation.

use crate::nav::NavigationEntry;
use crate::section::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Where an activation (Enter press, click) originated.
pub enum ActivationSource {
    /// A navigation entry, by index in the container.
    Entry(usize),
    /// Anywhere else in the container; the dispatcher ignores these.
    Container,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a requested scroll reaches its target.
pub enum ScrollBehavior {
    /// Animate toward the target a bounded number of lines per frame.
    Smooth,
    /// Reposition in one step, the platform's default jump.
    Instant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A resolved scroll action produced by the dispatcher.
pub struct ScrollRequest {
    /// Line the viewport top should land on (the section heading).
    pub line: usize,
    /// Animation mode for reaching it.
    pub behavior: ScrollBehavior,
}

/// Delegated activation handler for the navigation container.
///
/// The behavior is fixed at startup from configuration: `Smooth` when smooth
/// scrolling is enabled, `Instant` (the default jump) otherwise. Either way
/// every activation flows through `dispatch`, which guards on the activation
/// source and declines anything that is not a resolvable entry.
pub struct ScrollDispatcher {
    behavior: ScrollBehavior,
}

impl ScrollDispatcher {
    #[must_use]
    /// Dispatcher producing requests with the given behavior.
    pub fn new(behavior: ScrollBehavior) -> Self {
        Self { behavior }
    }

    #[must_use]
    /// Behavior this dispatcher stamps on its requests.
    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    #[must_use]
    /// Resolve an activation to a scroll request.
    ///
    /// Returns `None` when the activation did not originate on a navigation
    /// entry, or when the entry's target matches no section; nothing happens
    /// in either case. A `Some(Smooth)` result means the default jump is
    /// suppressed in favor of the animation.
    pub fn dispatch(
        &self,
        source: ActivationSource,
        entries: &[NavigationEntry],
        sections: &[Section],
    ) -> Option<ScrollRequest> {
        let ActivationSource::Entry(index) = source else {
            return None;
        };

        let id = entries.get(index)?.section_id()?;
        let section = sections.iter().find(|section| section.id == id)?;

        Some(ScrollRequest {
            line: section.line_start,
            behavior: self.behavior,
        })
    }
}

#[must_use]
/// Advance a smooth scroll one frame, moving at most `step` lines toward `target`.
pub fn advance(current: usize, target: usize, step: usize) -> usize {
    let step = step.max(1);

    if current < target {
        (current + step).min(target)
    } else {
        current.saturating_sub(step).max(target)
    }
}

#[cfg(test)]
#[path = "tests/scroll.rs"]
mod tests;
