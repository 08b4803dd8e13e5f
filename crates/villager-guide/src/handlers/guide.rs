//! Guide Page Handler

use axum::response::IntoResponse;

use crate::templates::GuidePage;

/// Handler for / - renders the tutorial page.
pub async fn guide() -> impl IntoResponse {
    GuidePage::new()
}
