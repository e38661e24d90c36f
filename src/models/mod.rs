//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`DocInfo`], [`DocId`] - Document tree entries synced from the tablet
//! - [`ExportFormat`], [`ExportOptions`], [`ExportRequest`] - Export bridge wire types
//! - [`SelectionStatus`], [`SelectionInfo`] - Tri-state checkbox reporting

mod document;
mod export;

pub use document::{DocId, DocInfo, ROOT_PARENT_ID, TRASH_PARENT_ID, parse_documents};
pub use export::{ExportFormat, ExportOptions, ExportRequest, SelectionInfo, SelectionStatus};
