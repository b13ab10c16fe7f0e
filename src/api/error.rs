//! API error taxonomy.

use thiserror::Error;

/// Errors surfaced by the REST client.
///
/// Connection problems, timeouts included, are collapsed into one variant:
/// callers present them as a generic "cannot connect" message and never
/// retry. Backend rejections carry the backend's own message when the body
/// provides one.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("cannot connect to the backend: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("backend rejected the request ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("malformed response from the backend: {0}")]
    Decode(#[source] reqwest::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Pull a human-readable message out of an error response.
///
/// Prefers the backend's JSON `message` field, falls back to the raw body,
/// then to a generic string.
pub(super) async fn extract_message(response: reqwest::Response) -> String {
    let text = response.text().await.unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| {
            if text.is_empty() {
                "request failed".to_owned()
            } else {
                text
            }
        })
}
