//! Account handlers (read-only, for inspecting the ledger)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult};
use crate::account::{Account, AccountKind, AccountRepository};

/// Account as exposed over the API
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountView {
    pub id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub document: String,
    pub email: String,
    pub balance: Decimal,
    #[schema(value_type = String, example = "REGULAR")]
    pub kind: AccountKind,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountView {
    fn from(a: Account) -> Self {
        Self {
            id: a.account_id,
            full_name: a.full_name,
            document: a.document,
            email: a.email,
            balance: a.balance,
            kind: a.kind,
            created_at: a.created_at,
        }
    }
}

/// List all accounts
///
/// GET /accounts
#[utoipa::path(
    get,
    path = "/accounts",
    responses(
        (status = 200, description = "All accounts", body = [AccountView], content_type = "application/json")
    ),
    tag = "Account"
)]
pub async fn list_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<AccountView>>> {
    let accounts = AccountRepository::find_all(state.db.pool()).await?;
    Ok(Json(accounts.into_iter().map(AccountView::from).collect()))
}

/// Get one account by id
///
/// GET /accounts/{id}
#[utoipa::path(
    get,
    path = "/accounts/{id}",
    params(
        ("id" = i64, Path, description = "Account id")
    ),
    responses(
        (status = 200, description = "Account", body = AccountView, content_type = "application/json"),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<AccountView>> {
    let account = AccountRepository::get_by_id(state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("account not found"))?;
    Ok(Json(account.into()))
}
