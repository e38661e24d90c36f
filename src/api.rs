//! Typed bridge to the tablet and the export backend.
//!
//! Two calls: read the document listing straight off the tablet's USB web
//! interface, and hand a committed selection to the companion service that
//! performs the actual export. Export execution (downloads, retries, file
//! writing) happens entirely on the backend side.

use crate::config::{DOCUMENTS_PATH, EXPORT_ENDPOINT};
use crate::core::error::RpcError;
use crate::models::{DocInfo, ExportRequest, parse_documents};
use crate::utils::{fetch_text, post_json};

/// Listing URL of the tablet's USB web interface.
fn documents_url(addr: &str) -> String {
    format!("http://{}{}", addr, DOCUMENTS_PATH)
}

/// Fetch and parse the full document listing from the tablet at `addr`.
pub async fn read_files(addr: &str) -> Result<Vec<DocInfo>, RpcError> {
    let body = fetch_text(&documents_url(addr)).await?;
    parse_documents(&body).map_err(|e| RpcError::InvalidPayload(e.to_string()))
}

/// Hand an export request to the backend service.
pub async fn start_export(request: &ExportRequest) -> Result<(), RpcError> {
    post_json(EXPORT_ENDPOINT, request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_url_targets_the_usb_interface() {
        assert_eq!(documents_url("10.11.99.1"), "http://10.11.99.1/documents/");
    }
}
