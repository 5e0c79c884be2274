//! Trait seams for the transfer pipeline
//!
//! The orchestrator only talks to these three traits. Production
//! implementations are [`super::PgLedger`],
//! [`crate::authorization::AuthorizationGate`] and
//! [`crate::notification::NotificationSink`]; tests substitute
//! in-memory doubles to assert that failed transfers never reach the
//! mutation step.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::error::TransferError;
use super::models::{CommittedTransfer, TransferRecord};
use crate::account::Account;

/// Durable storage of accounts and transfer records.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn account_by_id(&self, account_id: i64) -> Result<Option<Account>, TransferError>;

    /// Atomic mutation primitive: debit payer, credit payee, insert the
    /// transfer record. All three commit together or none do, and
    /// concurrent mutations on the same accounts serialize so that no
    /// balance is ever observed out of line with its transfer history.
    async fn execute_transfer(
        &self,
        payer_id: i64,
        payee_id: i64,
        amount: Decimal,
    ) -> Result<CommittedTransfer, TransferError>;

    /// All transfer records, newest first.
    async fn transfers(&self) -> Result<Vec<TransferRecord>, TransferError>;

    async fn transfer_by_id(&self, transfer_id: i64)
    -> Result<Option<TransferRecord>, TransferError>;
}

/// External yes/no oracle consulted before committing a transfer.
///
/// An explicit denial maps to [`TransferError::NotAuthorized`]; not
/// being able to ask (connect/DNS/timeout) maps to
/// [`TransferError::GateUnavailable`] so callers can tell the two
/// apart. No retry at this layer.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn authorize(&self) -> Result<(), TransferError>;
}

/// Best-effort delivery of a message to an account holder.
///
/// Never errors: returns `false` on any failure and logs internally.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, recipient_email: &str, message: &str) -> bool;
}
