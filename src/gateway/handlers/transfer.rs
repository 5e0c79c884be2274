//! Transfer handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiJson, ApiResult, StrictAmount};
use crate::transfer::{TransferRecord, TransferResult};

/// Transfer request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTransferRequest {
    /// Amount to move; number or string, strict format
    #[schema(value_type = String, example = "100.00")]
    pub value: StrictAmount,
    /// Payer account id
    pub payer: i64,
    /// Payee account id
    pub payee: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateTransferResponse {
    pub message: String,
    pub transfer: TransferResult,
}

/// Execute a transfer
///
/// POST /transfer
#[utoipa::path(
    post,
    path = "/transfer",
    request_body = CreateTransferRequest,
    responses(
        (status = 201, description = "Transfer completed", body = CreateTransferResponse, content_type = "application/json"),
        (status = 400, description = "Invalid request, ineligible payer or insufficient funds"),
        (status = 403, description = "Authorization gate denied the transfer"),
        (status = 404, description = "Payer or payee account not found"),
        (status = 503, description = "Authorization gate unavailable")
    ),
    tag = "Transfer"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateTransferRequest>,
) -> ApiResult<(StatusCode, Json<CreateTransferResponse>)> {
    let result = state
        .transfers
        .execute(req.value.inner(), req.payer, req.payee)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTransferResponse {
            message: "Transfer completed successfully".to_string(),
            transfer: result,
        }),
    ))
}

/// List all transfers, newest first
///
/// GET /transfer
#[utoipa::path(
    get,
    path = "/transfer",
    responses(
        (status = 200, description = "All transfer records", body = [TransferRecord], content_type = "application/json")
    ),
    tag = "Transfer"
)]
pub async fn list_transfers(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<TransferRecord>>> {
    let records = state.transfers.find_all().await?;
    Ok(Json(records))
}

/// Get one transfer by id
///
/// GET /transfer/{id}
#[utoipa::path(
    get,
    path = "/transfer/{id}",
    params(
        ("id" = i64, Path, description = "Transfer id")
    ),
    responses(
        (status = 200, description = "Transfer record", body = TransferRecord, content_type = "application/json"),
        (status = 404, description = "Transfer not found")
    ),
    tag = "Transfer"
)]
pub async fn get_transfer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TransferRecord>> {
    let record = state.transfers.find_by_id(id).await?;
    Ok(Json(record))
}
