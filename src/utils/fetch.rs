//! Network fetching utilities with timeout support.
//!
//! The tablet's USB interface silently drops requests when the cable is
//! out, so every call races against a timeout via `Promise.race`.

use js_sys::{Array, Promise};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::RpcError;

// =============================================================================
// Promise Racing
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout of `timeout_ms` milliseconds.
///
/// The timeout promise resolves to `undefined`, which a completed fetch
/// never does, so the winner is unambiguous.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);

    match JsFuture::from(Promise::race(&race_array)).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch text content from a URL with the default timeout.
pub async fn fetch_text(url: &str) -> Result<String, RpcError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    send(url, &opts).await
}

/// POST a JSON body to a URL, discarding the response body.
pub async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<(), RpcError> {
    let json = serde_json::to_string(body)
        .map_err(|e| RpcError::InvalidPayload(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&json));

    send_with_content_type(url, &opts, "application/json").await?;
    Ok(())
}

async fn send_with_content_type(
    url: &str,
    opts: &RequestInit,
    content_type: &str,
) -> Result<String, RpcError> {
    let request =
        Request::new_with_str_and_init(url, opts).map_err(|_| RpcError::RequestCreationFailed)?;
    request
        .headers()
        .set("Content-Type", content_type)
        .map_err(|_| RpcError::RequestCreationFailed)?;
    dispatch(request).await
}

async fn send(url: &str, opts: &RequestInit) -> Result<String, RpcError> {
    let request =
        Request::new_with_str_and_init(url, opts).map_err(|_| RpcError::RequestCreationFailed)?;
    dispatch(request).await
}

/// Run a prepared request against the window's fetch, racing the timeout.
async fn dispatch(request: Request) -> Result<String, RpcError> {
    let window = web_sys::window().ok_or(RpcError::NoWindow)?;
    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(RpcError::Timeout),
        RaceResult::Error(msg) => Err(RpcError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result
                .dyn_into()
                .map_err(|_| RpcError::NetworkError("not a Response".to_string()))?;

            if !resp.ok() {
                return Err(RpcError::HttpError(resp.status()));
            }

            let text = JsFuture::from(resp.text().map_err(|_| RpcError::ResponseReadFailed)?)
                .await
                .map_err(|_| RpcError::ResponseReadFailed)?;

            text.as_string().ok_or(RpcError::ResponseReadFailed)
        }
    }
}
