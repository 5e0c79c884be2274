//! Gateway HTTP handlers

pub mod account;
pub mod health;
pub mod transfer;

pub use account::{get_account, list_accounts};
pub use health::health_check;
pub use transfer::{create_transfer, get_transfer, list_transfers};

use axum::Json;
use axum::http::{StatusCode, Uri};

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "route not found",
            "path": uri.path(),
        })),
    )
}
