//! Transfer data models and result DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

/// Balances and record identity returned by the atomic mutation.
///
/// `payer_balance` / `payee_balance` are the post-commit values read
/// back from the store, never recomputed by the orchestrator.
#[derive(Debug, Clone)]
pub struct CommittedTransfer {
    pub transfer_id: i64,
    pub amount: Decimal,
    pub payer_balance: Decimal,
    pub payee_balance: Decimal,
    pub created_at: DateTime<Utc>,
}

/// One side of a completed transfer, as shown to the caller
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PartySummary {
    pub id: i64,
    pub name: String,
    #[serde(rename = "newBalance")]
    pub new_balance: Decimal,
}

/// Result of a successful transfer execution
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TransferResult {
    pub id: i64,
    pub amount: Decimal,
    pub source: PartySummary,
    pub destination: PartySummary,
    pub timestamp: DateTime<Utc>,
}

/// Account reference embedded in stored transfer records
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PartyRef {
    pub id: i64,
    pub name: String,
}

/// Stored transfer record (append-only ledger entry)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TransferRecord {
    pub id: i64,
    pub amount: Decimal,
    pub payer: PartyRef,
    pub payee: PartyRef,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
