//! Account management module
//!
//! PostgreSQL-based storage for ledger accounts. Accounts are created
//! out of band (seed/admin flow); the transfer pipeline only reads them
//! and mutates balances through the atomic primitive in
//! [`crate::transfer::PgLedger`].

pub mod models;
pub mod repository;

pub use models::{Account, AccountKind};
pub use repository::AccountRepository;
