//! Web form command implementation.

use crate::data;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing::info;
use warren_score::BuffettScorer;
use warren_web::{AppState, build_router};

/// Default port of the web form.
pub(crate) const DEFAULT_PORT: u16 = 5050;

/// Serve the single-ticker form on `127.0.0.1:port` until interrupted.
pub(crate) async fn serve(port: u16, offline: bool) -> Result<()> {
    let source = data::metrics_source(offline)?;
    let source_name = source.name().to_string();
    let app = build_router(AppState::new(source, BuffettScorer::default()));

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, source = %source_name, "Web form listening");
    println!("\nUncle Warren is listening on http://{addr}");
    println!("Press Ctrl+C to stop.\n");

    axum::serve(listener, app)
        .await
        .context("Web server failed")?;

    Ok(())
}
