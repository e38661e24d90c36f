//! Formatting utilities for display values in the listing.

use chrono::{DateTime, Utc};

/// Format a modification timestamp for the listing (e.g. "2024-03-08 09:15").
///
/// Documents without a reported timestamp render as a dash.
pub fn format_modified(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        None => "-".to_string(),
        Some(t) => t.format("%Y-%m-%d %H:%M").to_string(),
    }
}

/// Human label for a device file type ("notebook", "pdf", "epub").
pub fn format_file_type(file_type: Option<&str>, is_folder: bool) -> String {
    if is_folder {
        return "Folder".to_string();
    }
    match file_type {
        Some("notebook") => "Notebook".to_string(),
        Some("pdf") => "PDF".to_string(),
        Some("epub") => "EPUB".to_string(),
        Some(other) => other.to_string(),
        None => "Document".to_string(),
    }
}

/// Item-count label for the export panel (e.g. "3 items selected").
pub fn format_selected_count(count: usize) -> String {
    match count {
        0 => "Nothing selected".to_string(),
        1 => "1 item selected".to_string(),
        n => format!("{} items selected", n),
    }
}
