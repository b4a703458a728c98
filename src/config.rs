//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a sectra.toml, and if present we load settings from there.
//! This provides the smooth-scroll switch, the observer threshold shape, and
//! the animation step.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from sectra.toml or falling back to defaults.
pub struct Config {
    #[facet(default = false)]
    /// Animate navigation jumps instead of repositioning instantly.
    pub smooth_scroll: bool,
    #[facet(default = 1.0)]
    /// Counter start for the observer threshold ramp.
    pub threshold_start: f64,
    #[facet(default = 20)]
    /// Number of steps in the observer threshold ramp.
    pub threshold_steps: usize,
    #[facet(default = 3)]
    /// Lines the viewport moves per smooth-scroll frame.
    pub scroll_step: usize,
}

impl Config {
    #[must_use]
    /// Load configuration from sectra.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("sectra.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
