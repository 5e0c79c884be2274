//! OpenAPI document for the gateway

use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "payflow API",
        description = "Simplified P2P payment ledger: atomic transfers with external authorization",
        version = "0.1.0"
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::transfer::create_transfer,
        crate::gateway::handlers::transfer::list_transfers,
        crate::gateway::handlers::transfer::get_transfer,
        crate::gateway::handlers::account::list_accounts,
        crate::gateway::handlers::account::get_account,
    ),
    tags(
        (name = "Transfer", description = "Transfer execution and history"),
        (name = "Account", description = "Ledger account inspection"),
        (name = "System", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in ["/health", "/transfer", "/transfer/{id}", "/accounts", "/accounts/{id}"] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {expected}, have {paths:?}"
            );
        }
    }
}
