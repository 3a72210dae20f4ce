//! Helpers for constructing remote API URLs.

/// Base URL of the REST API, derived from the current window location with
/// the API server's fixed port.
///
/// Returns an empty string if no window is available (then relative URLs are
/// used as-is).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

/// Full API URL for a path like `/api/pharmacies`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
