//! Data models for ledger accounts

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Account kind, immutable post-creation.
///
/// A MERCHANT account may receive transfers but never send them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum AccountKind {
    Regular = 1,
    Merchant = 2,
}

impl From<i16> for AccountKind {
    fn from(v: i16) -> Self {
        match v {
            2 => AccountKind::Merchant,
            _ => AccountKind::Regular,
        }
    }
}

/// Ledger account
#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: i64,
    pub full_name: String,
    pub document: String,
    pub email: String,
    pub balance: Decimal,
    pub kind: AccountKind,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn is_merchant(&self) -> bool {
        self.kind == AccountKind::Merchant
    }
}
