//! Test server harness for integration tests.
//!
//! Spins up the real Axum router on a random port with temp-dir storage
//! so HTTP clients can exercise the wire contract end to end.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::{routing::post, Router};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use tokex_server::routes;
use tokex_server::AppState;

/// A test server instance with control handles.
pub struct TestServer {
    addr: SocketAddr,
    store_dir: PathBuf,
    output_path: PathBuf,
    // Keeps the temp dir alive for the server's lifetime.
    _dir: tempfile::TempDir,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on a random available port.
    ///
    /// # Panics
    ///
    /// Panics if no port is available or the server fails to bind.
    pub async fn start() -> Self {
        let port = portpicker::pick_unused_port().expect("no available port");
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        let dir = tempfile::tempdir().expect("tempdir");
        let store_dir = dir.path().join("store");
        let output_path = dir.path().join("design-system.json");
        let state = AppState::new(store_dir.clone(), output_path.clone());

        let app = Router::new()
            .route(
                "/extract",
                post(routes::receive_extract)
                    .options(routes::preflight)
                    .fallback(routes::not_found),
            )
            .fallback(routes::not_found)
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .with_state(state);

        let listener = TcpListener::bind(addr).await.expect("failed to bind");
        let actual_addr = listener.local_addr().expect("failed to get local addr");

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("server error");
        });

        // Give the server a moment to start
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr: actual_addr,
            store_dir,
            output_path,
            _dir: dir,
            shutdown_tx: Some(shutdown_tx),
            handle,
        }
    }

    /// URL of the extract endpoint.
    pub fn extract_url(&self) -> String {
        format!("http://{}/extract", self.addr)
    }

    /// Base URL of the server.
    #[allow(dead_code)]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Store directory backing this instance.
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Latest-record copy path backing this instance.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Gracefully shut down the server.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let _ = tokio::time::timeout(tokio::time::Duration::from_secs(5), self.handle).await;
    }
}
