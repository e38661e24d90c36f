//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the toolbar.
pub const APP_NAME: &str = "rmbrowse";

// =============================================================================
// Tablet Configuration
// =============================================================================

/// Default address of the tablet's USB web interface.
pub const DEFAULT_TABLET_ADDR: &str = "10.11.99.1";

/// Listing endpoint on the tablet.
pub const DOCUMENTS_PATH: &str = "/documents/";

// =============================================================================
// Backend Configuration
// =============================================================================

/// Export endpoint of the companion backend (same origin as the app).
pub const EXPORT_ENDPOINT: &str = "/api/export";

/// Fetch request timeout in milliseconds.
///
/// The USB interface either answers quickly or not at all, so this stays
/// short.
pub const FETCH_TIMEOUT_MS: i32 = 5000;

// =============================================================================
// Export Defaults
// =============================================================================

/// Default destination folder shown in the export panel.
pub const DEFAULT_EXPORT_LOCATION: &str = "~/Documents/reMarkable";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
