//! API utilities for frontend-backend communication
//!
//! URL construction and the error type shared by all API calls.

use thiserror::Error;

/// Failure of an API call, from transport up to the server's own verdict
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    /// The server answered but refused the request
    #[error("Rejected by server: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
}

/// Build a full API URL from the configured base and a path
///
/// An empty base keeps the URL relative, so requests go to the origin
/// that served the page.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("http://localhost:8000/", "/api/inquiries/");
/// assert_eq!(url, "http://localhost:8000/api/inquiries/");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
