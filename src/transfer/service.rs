//! Transfer orchestration
//!
//! The execution pipeline: validate input, check eligibility, consult
//! the authorization gate, invoke the atomic mutation, fire the
//! detached notification, shape the result. Local checks run in a fixed
//! order and nothing irreversible happens before all of them and the
//! gate have passed.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::error::{AccountRole, TransferError};
use super::models::{PartySummary, TransferRecord, TransferResult};
use super::ports::{Authorizer, LedgerStore, Notifier};

pub struct TransferService {
    ledger: Arc<dyn LedgerStore>,
    authorizer: Arc<dyn Authorizer>,
    notifier: Arc<dyn Notifier>,
}

impl TransferService {
    pub fn new(
        ledger: Arc<dyn LedgerStore>,
        authorizer: Arc<dyn Authorizer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            ledger,
            authorizer,
            notifier,
        }
    }

    /// Execute a transfer from `payer_id` to `payee_id`.
    ///
    /// Precondition order is fixed: amount > 0, distinct accounts,
    /// payer exists, payee exists, payer is not a merchant, payer has
    /// the funds. Only then is the gate consulted, and only an approved
    /// transfer reaches the atomic mutation. The payee notification is
    /// dispatched on a detached task after commit; its outcome never
    /// changes the returned result.
    pub async fn execute(
        &self,
        amount: Decimal,
        payer_id: i64,
        payee_id: i64,
    ) -> Result<TransferResult, TransferError> {
        if amount <= Decimal::ZERO {
            return Err(TransferError::InvalidAmount);
        }
        if payer_id == payee_id {
            return Err(TransferError::SelfTransfer);
        }

        let payer = self
            .ledger
            .account_by_id(payer_id)
            .await?
            .ok_or(TransferError::AccountNotFound(AccountRole::Payer))?;

        let payee = self
            .ledger
            .account_by_id(payee_id)
            .await?
            .ok_or(TransferError::AccountNotFound(AccountRole::Payee))?;

        if payer.is_merchant() {
            return Err(TransferError::IneligibleSource);
        }

        if payer.balance < amount {
            return Err(TransferError::InsufficientFunds {
                balance: payer.balance,
                requested: amount,
            });
        }

        // All local checks passed; ask the gate before mutating anything.
        self.authorizer.authorize().await?;

        let committed = self
            .ledger
            .execute_transfer(payer_id, payee_id, amount)
            .await?;

        tracing::info!(
            transfer_id = committed.transfer_id,
            amount = %committed.amount,
            payer_id,
            payee_id,
            "Transfer committed"
        );

        // Detached notification: the transfer is already committed and
        // must not wait on (or be failed by) delivery.
        let notifier = Arc::clone(&self.notifier);
        let recipient = payee.email.clone();
        let message = format!(
            "You received a transfer of {} from {}",
            committed.amount, payer.full_name
        );
        tokio::spawn(async move {
            if !notifier.notify(&recipient, &message).await {
                tracing::warn!(recipient = %recipient, "Transfer notification was not delivered");
            }
        });

        Ok(TransferResult {
            id: committed.transfer_id,
            amount: committed.amount,
            source: PartySummary {
                id: payer.account_id,
                name: payer.full_name,
                new_balance: committed.payer_balance,
            },
            destination: PartySummary {
                id: payee.account_id,
                name: payee.full_name,
                new_balance: committed.payee_balance,
            },
            timestamp: committed.created_at,
        })
    }

    /// All transfer records, newest first. No pagination.
    pub async fn find_all(&self) -> Result<Vec<TransferRecord>, TransferError> {
        self.ledger.transfers().await
    }

    pub async fn find_by_id(&self, transfer_id: i64) -> Result<TransferRecord, TransferError> {
        self.ledger
            .transfer_by_id(transfer_id)
            .await?
            .ok_or(TransferError::TransferNotFound(transfer_id))
    }
}
