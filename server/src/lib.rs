//! The HTTP surface of the rent estimation service.
//!
//! One page, one JSON endpoint. The codec is a deliberately small HTTP/1.1
//! subset: enough for a browser to fetch the form and post an estimate
//! request, nothing more.

pub mod http;
mod page;
mod routes;

pub use routes::App;

use std::io;

use log::{debug, warn};
use tokio::net::TcpListener;

/// Accepts connections forever, serving each one on its own task.
///
/// # Arguments
/// * `listener` - An already-bound TCP listener.
/// * `app` - The request router, sharing the read-only estimator.
///
/// # Errors
/// Returns an `io::Error` if accepting a connection fails. Per-connection
/// failures are logged and do not stop the loop.
pub async fn run(listener: TcpListener, app: App) -> io::Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        debug!("connection accepted from {peer}");

        let app = app.clone();
        tokio::spawn(async move {
            if let Err(e) = app.serve_connection(stream).await {
                warn!("connection from {peer} failed: {e}");
            }
        });
    }
}
