//! Utility modules for web and display concerns.
//!
//! Provides:
//! - [`fetch_text`], [`post_json`] - Network fetching with timeout
//! - [`format`] - Display formatting for the listing and export panel

pub mod fetch;
pub mod format;

pub use fetch::{fetch_text, post_json};
