//! Axum HTTP gateway
//!
//! Thin I/O shim around [`crate::transfer::TransferService`]: routing,
//! body deserialization and error-to-status mapping live here, no
//! business rules.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/transfer",
            post(handlers::create_transfer).get(handlers::list_transfers),
        )
        .route("/transfer/{id}", get(handlers::get_transfer))
        .route("/accounts", get(handlers::list_accounts))
        .route("/accounts/{id}", get(handlers::get_account))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .fallback(handlers::not_found)
        .with_state(Arc::new(state))
}

/// Start the HTTP gateway server
pub async fn run_server(host: &str, port: u16, state: AppState) {
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "  Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API docs: http://{}/api-docs/openapi.json", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
