//! Core logic of the browser, free of any UI dependency.
//!
//! This module provides:
//! - [`SelectionStore`] checked-state tracking and commit snapshots
//! - [`ExportChannel`] observable holder for the committed export list
//! - [`DocumentTree`] index over the synced listing
//! - [`cascade`] tri-state folder selection
//! - [`is_ip_valid`] tablet address validation

pub mod cascade;
mod channel;
pub mod error;
mod net;
mod selection;
mod tree;

pub use channel::{ExportChannel, Subscription};
pub use net::is_ip_valid;
pub use selection::SelectionStore;
pub use tree::DocumentTree;
