//! API utilities for frontend-server communication
//!
//! The server renders this page itself, so API requests go back to the
//! same origin.

/// Get the base URL for API requests.
///
/// Constructed from the current window location (scheme + host + port).
/// Returns an empty string if no window is available, which makes the
/// resulting URLs relative and still same-origin.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    location.origin().unwrap_or_default()
}

/// Build a full API URL from a path.
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&format!("/sign_apk/{}", project_id));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
