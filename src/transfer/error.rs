//! Transfer error taxonomy
//!
//! Closed set of failure kinds for the transfer pipeline. Every variant
//! except [`TransferError::TransferFailed`] is operational: expected,
//! user-facing, with a stable message. `TransferFailed` wraps an
//! infrastructure fault; its display is generic and the underlying
//! cause is only ever logged, never sent to the caller.

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Which side of the transfer an account lookup failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRole {
    Payer,
    Payee,
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountRole::Payer => write!(f, "payer"),
            AccountRole::Payee => write!(f, "payee"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("transfer amount must be greater than zero")]
    InvalidAmount,

    #[error("cannot transfer to your own account")]
    SelfTransfer,

    #[error("{0} account not found")]
    AccountNotFound(AccountRole),

    #[error("merchant accounts can only receive transfers, not send them")]
    IneligibleSource,

    #[error("insufficient funds: current balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    #[error("transfer was not authorized")]
    NotAuthorized,

    #[error("authorization service unavailable, try again later")]
    GateUnavailable,

    #[error("transfer could not be completed")]
    TransferFailed(#[from] sqlx::Error),

    #[error("transfer {0} not found")]
    TransferNotFound(i64),
}

impl TransferError {
    /// Operational errors are expected and safe to show to callers.
    /// Non-operational ones carry internal detail that must stay in the
    /// logs.
    pub fn is_operational(&self) -> bool {
        !matches!(self, TransferError::TransferFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insufficient_funds_message_carries_both_figures() {
        let err = TransferError::InsufficientFunds {
            balance: dec!(50),
            requested: dec!(100),
        };
        let msg = err.to_string();
        assert!(msg.contains("50"), "message should include balance: {msg}");
        assert!(
            msg.contains("100"),
            "message should include requested amount: {msg}"
        );
    }

    #[test]
    fn test_transfer_failed_display_is_generic() {
        let err = TransferError::TransferFailed(sqlx::Error::PoolClosed);
        assert_eq!(err.to_string(), "transfer could not be completed");
        assert!(!err.is_operational());
    }

    #[test]
    fn test_account_role_in_message() {
        assert_eq!(
            TransferError::AccountNotFound(AccountRole::Payer).to_string(),
            "payer account not found"
        );
        assert_eq!(
            TransferError::AccountNotFound(AccountRole::Payee).to_string(),
            "payee account not found"
        );
    }
}
