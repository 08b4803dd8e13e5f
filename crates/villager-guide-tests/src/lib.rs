//! Test support for the guide site integration tests.
//!
//! Starts the site on an ephemeral local port inside the test's runtime.

use tokio::net::TcpListener;

/// Spawn the site server and return its base URL, e.g. `http://127.0.0.1:49152`.
pub async fn spawn_site() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("listener has a local address");

    tokio::spawn(async move {
        if let Err(e) = villager_guide::serve_on(listener).await {
            tracing::error!("Guide server on {addr} stopped: {e}");
        }
    });

    format!("http://{addr}")
}
