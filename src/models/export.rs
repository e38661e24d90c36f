//! Wire types for the export backend.
//!
//! These mirror the request shapes of the companion service that performs
//! the actual export; the client only builds and posts them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::document::{DocId, DocInfo};

/// Output format for an export run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Rendered PDF.
    #[default]
    Pdf,
    /// Raw `.rmdoc` archive, re-importable on another tablet.
    Rmdoc,
}

impl ExportFormat {
    /// File extension the backend appends to exported items.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Rmdoc => "rmdoc",
        }
    }

    /// Parse a UI form value; unknown values fall back to the default.
    pub fn from_value(value: &str) -> Self {
        match value {
            "rmdoc" => Self::Rmdoc,
            _ => Self::Pdf,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// User-chosen export parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Destination folder on the exporting machine.
    pub location: String,
}

/// Full request handed to the export backend.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportRequest {
    pub options: ExportOptions,
    pub items: Vec<DocInfo>,
    pub tablet_addr: String,
}

/// Tri-state checked status of a tree node.
///
/// Integer-encoded on the wire (0/1/2), matching the backend contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SelectionStatus {
    #[default]
    NotSelected,
    Indeterminate,
    Selected,
}

impl From<SelectionStatus> for u8 {
    fn from(status: SelectionStatus) -> u8 {
        match status {
            SelectionStatus::NotSelected => 0,
            SelectionStatus::Indeterminate => 1,
            SelectionStatus::Selected => 2,
        }
    }
}

impl TryFrom<u8> for SelectionStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotSelected),
            1 => Ok(Self::Indeterminate),
            2 => Ok(Self::Selected),
            other => Err(format!("invalid selection status: {}", other)),
        }
    }
}

/// Checked status of a single node, as reported to the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SelectionInfo {
    pub id: DocId,
    pub status: SelectionStatus,
}
