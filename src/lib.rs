//! Section navigation for static documents.
//!
//! sectra loads a markdown document, builds a navigation list from its
//! section headings, and tracks which sections are most visible in the
//! document viewport so the navigation list can highlight them. Activating
//! an entry jumps to its section, either instantly (the default) or as a
//! smooth scroll when enabled in configuration.

pub mod app_state;
pub mod config;
pub mod formats;
pub mod input;
pub mod nav;
pub mod observe;
pub mod scroll;
pub mod section;
pub mod ui;
