//! API utilities for frontend-backend communication
//!
//! The backend serves the built frontend itself, so API requests go to the
//! page's own origin.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin like "http://localhost:3000"
/// - Empty string if window is not available (relative URLs still work)
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/categories");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
