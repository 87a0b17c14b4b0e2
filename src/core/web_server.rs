//! HTTP front door for the bot.
//!
//! Exposes the liveness endpoint and the webhook receiver. The receiver
//! answers 200 even when processing fails: Telegram treats a non-success
//! status as a delivery failure and redelivers the same update over and
//! over, which is pointless once the body has been read.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::telegram::dispatch::Dispatcher;

/// Shared state for the web server.
#[derive(Clone)]
struct WebState {
    dispatcher: Arc<Dispatcher>,
}

/// Builds the router with the liveness endpoint and the webhook receiver.
///
/// Kept separate from `start_web_server` so tests can drive the router
/// without binding a socket.
pub fn build_router(webhook_path: &str, dispatcher: Arc<Dispatcher>) -> Router {
    let state = WebState { dispatcher };

    Router::new()
        .route("/", get(root_handler))
        .route(webhook_path, post(webhook_handler))
        .with_state(state)
}

/// Start the web server.
pub async fn start_web_server(
    port: u16,
    webhook_path: &str,
    dispatcher: Arc<Dispatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = build_router(webhook_path, dispatcher);

    log::info!("Starting web server on http://{}", addr);
    log::info!("  GET  /   - Liveness check");
    log::info!("  POST {}  - Webhook receiver", webhook_path);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET / — liveness endpoint for external health checks.
async fn root_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK - bot server")
}

/// POST <webhook_path> — receives one Telegram update per request.
///
/// Malformed payloads and handler failures end up in the log, never in
/// the response status.
async fn webhook_handler(State(state): State<WebState>, body: Bytes) -> StatusCode {
    if let Err(e) = state.dispatcher.dispatch_raw(&body).await {
        log::error!("Failed to process update: {}", e);
    }
    StatusCode::OK
}
