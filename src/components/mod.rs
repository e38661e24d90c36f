//! UI components built with Leptos.
//!
//! - [`browser`] - Document browser (toolbar, listing, export panel)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;

pub use browser::Browser;
