//! Static Asset Handlers
//!
//! The stylesheet is minified at build time and embedded in the binary.

use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};

/// Minified guide stylesheet.
pub const GUIDE_CSS: &str = include_str!(concat!(env!("OUT_DIR"), "/guide.min.css"));

/// Assets are versioned by query string, so they can be cached for a year.
const CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Handler for /public/css/guide.css.
pub async fn stylesheet() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        GUIDE_CSS,
    )
}

/// Fallback for unknown paths.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_is_minified() {
        assert!(!GUIDE_CSS.is_empty());
        assert!(!GUIDE_CSS.contains("/* Hero */"));
        assert!(GUIDE_CSS.contains(".step-card"));
        assert!(GUIDE_CSS.contains(".code-panel__pre"));
    }
}
