//! Villager Trade Guide
//!
//! Renders the Paper 1.21.1 "unlock every villager trade" tutorial page and
//! either serves it over HTTP or exports it as static files.

use axum::{
    Router,
    http::{HeaderValue, header},
    routing::get,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod handlers;
pub mod templates;

pub use config::SiteConfig;
pub use error::SiteError;
pub use export::{ExportReport, ExportedFile, export};
pub use templates::render_guide;

/// Build version for cache busting static assets.
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

const CONTENT_SECURITY_POLICY: &str =
    "default-src 'self'; style-src 'self'; img-src 'self' data:; frame-ancestors 'none'";
const STRICT_TRANSPORT_SECURITY: &str = "max-age=63072000; includeSubDomains";

/// Build the site router with tracing and security headers applied to every
/// response, including the 404 fallback.
pub fn router() -> Router {
    Router::new()
        .route("/", get(handlers::guide::guide))
        .route("/public/css/guide.css", get(handlers::assets::stylesheet))
        .fallback(handlers::assets::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::overriding(
                    header::CONTENT_SECURITY_POLICY,
                    HeaderValue::from_static(CONTENT_SECURITY_POLICY),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::STRICT_TRANSPORT_SECURITY,
                    HeaderValue::from_static(STRICT_TRANSPORT_SECURITY),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::REFERRER_POLICY,
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                )),
        )
}

/// Bind the configured address and serve the guide until Ctrl-C.
pub async fn serve(config: &SiteConfig) -> Result<(), SiteError> {
    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| SiteError::Bind { addr, source })?;
    serve_on(listener).await
}

/// Serve the guide on an already-bound listener until Ctrl-C.
pub async fn serve_on(listener: TcpListener) -> Result<(), SiteError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Serving guide on http://{}", addr);
    }

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(SiteError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
