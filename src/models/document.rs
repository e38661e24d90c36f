//! Document tree entities synced from the tablet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a document or folder on the tablet.
///
/// The device uses UUID strings, but nothing here depends on that shape.
pub type DocId = String;

/// Parent id of top-level items in the device listing.
pub const ROOT_PARENT_ID: &str = "";

/// Parent id of items sitting in the tablet's trash.
pub const TRASH_PARENT_ID: &str = "trash";

/// A file or folder entry from the tablet's document listing.
///
/// Deserializes from the USB web interface schema (`ID`, `Parent`, `Type`,
/// `VissibleName`, ...) and serializes in PascalCase for the export backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", from = "RawDoc")]
pub struct DocInfo {
    pub id: DocId,
    pub parent_id: DocId,
    pub is_folder: bool,
    pub name: String,
    pub bookmarked: bool,
    pub last_modified: Option<DateTime<Utc>>,
    pub file_type: Option<String>,
}

/// Wire representation of a listing entry as the device reports it.
///
/// `VissibleName` is not a typo here: the device API itself misspells it.
#[derive(Deserialize)]
struct RawDoc {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Parent", default)]
    parent: String,
    #[serde(rename = "Type", default)]
    kind: String,
    #[serde(rename = "VissibleName", default)]
    name: String,
    #[serde(rename = "Bookmarked", default)]
    bookmarked: bool,
    #[serde(rename = "ModifiedClient", default)]
    modified: Option<String>,
    #[serde(rename = "fileType", default)]
    file_type: Option<String>,
}

impl From<RawDoc> for DocInfo {
    fn from(raw: RawDoc) -> Self {
        // An unparseable timestamp degrades to None; the listing itself
        // must never fail on one bad optional field.
        let last_modified = raw
            .modified
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|t| t.with_timezone(&Utc));

        Self {
            id: raw.id,
            parent_id: raw.parent,
            is_folder: raw.kind == "CollectionType",
            name: raw.name,
            bookmarked: raw.bookmarked,
            last_modified,
            file_type: raw.file_type.filter(|s| !s.is_empty()),
        }
    }
}

impl DocInfo {
    /// Create a folder entry (mostly useful in tests).
    pub fn folder(id: &str, parent_id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            parent_id: parent_id.to_string(),
            is_folder: true,
            name: name.to_string(),
            bookmarked: false,
            last_modified: None,
            file_type: None,
        }
    }

    /// Create a document entry (mostly useful in tests).
    pub fn document(id: &str, parent_id: &str, name: &str) -> Self {
        Self {
            is_folder: false,
            ..Self::folder(id, parent_id, name)
        }
    }
}

/// Parse the raw body of the `/documents/` endpoint into a listing.
pub fn parse_documents(body: &str) -> Result<Vec<DocInfo>, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "ID": "41cc74a5",
            "Parent": "",
            "Type": "CollectionType",
            "VissibleName": "Notebooks",
            "Bookmarked": false
        },
        {
            "ID": "9d5f21cb",
            "Parent": "41cc74a5",
            "Type": "DocumentType",
            "VissibleName": "Meeting notes",
            "Bookmarked": true,
            "ModifiedClient": "2024-03-08T09:15:30.000Z",
            "fileType": "notebook"
        },
        {
            "ID": "7aa0e3f2",
            "Parent": "trash",
            "Type": "DocumentType",
            "VissibleName": "Old draft",
            "ModifiedClient": "not a date"
        }
    ]"#;

    #[test]
    fn parses_device_listing() {
        let docs = parse_documents(SAMPLE).expect("sample should parse");
        assert_eq!(docs.len(), 3);

        let folder = &docs[0];
        assert!(folder.is_folder);
        assert_eq!(folder.id, "41cc74a5");
        assert_eq!(folder.parent_id, ROOT_PARENT_ID);
        assert_eq!(folder.name, "Notebooks");

        let doc = &docs[1];
        assert!(!doc.is_folder);
        assert!(doc.bookmarked);
        assert_eq!(doc.file_type.as_deref(), Some("notebook"));
        let modified = doc.last_modified.expect("timestamp should parse");
        assert_eq!(modified.to_rfc3339(), "2024-03-08T09:15:30+00:00");
    }

    #[test]
    fn bad_timestamp_degrades_to_none() {
        let docs = parse_documents(SAMPLE).unwrap();
        assert_eq!(docs[2].parent_id, TRASH_PARENT_ID);
        assert!(docs[2].last_modified.is_none());
    }

    #[test]
    fn missing_required_id_is_an_error() {
        let body = r#"[{"Parent": "", "Type": "DocumentType", "VissibleName": "x"}]"#;
        assert!(parse_documents(body).is_err());
    }

    #[test]
    fn serializes_pascal_case_for_the_bridge() {
        let doc = DocInfo::document("a1", "", "Journal");
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["Id"], "a1");
        assert_eq!(json["IsFolder"], false);
        assert_eq!(json["Name"], "Journal");
        assert!(json["LastModified"].is_null());
    }
}
