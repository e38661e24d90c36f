//! Document browser UI components.
//!
//! Components:
//! - [`Browser`] - Main browser view
//! - [`Toolbar`] - Navigation, tablet address, refresh
//! - [`DocList`] - Listing of the current folder with checkboxes
//! - [`ExportPanel`] - Export trigger and last-commit display

#[allow(clippy::module_inception)]
mod browser;
mod doc_list;
mod export_panel;
mod toolbar;

pub use browser::Browser;
pub use doc_list::DocList;
pub use export_panel::ExportPanel;
pub use toolbar::Toolbar;
