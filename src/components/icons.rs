//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBook as FileEpub, LuBookOpen as FilePdf, LuChevronLeft as Up, LuDownload as Export,
        LuFile as File, LuFileText as FileNotebook, LuFolder as Folder, LuGlobe as Network,
        LuRefreshCw as Refresh, LuStar as Bookmark,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsBook as FileEpub, BsChevronLeft as Up,
        BsDownload as Export, BsFileEarmark as File, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkText as FileNotebook, BsFolderFill as Folder, BsGlobe as Network,
        BsStarFill as Bookmark,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(UP, Up);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_NOTEBOOK, FileNotebook);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_EPUB, FileEpub);
themed_icon!(BOOKMARK, Bookmark);
themed_icon!(REFRESH, Refresh);
themed_icon!(EXPORT, Export);
themed_icon!(NETWORK, Network);
