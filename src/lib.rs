//! payflow - Simplified P2P Payment Ledger
//!
//! Moves value between two account holders inside a PostgreSQL ledger,
//! enforcing eligibility rules, consulting an external authorizer, and
//! committing the balance mutation and transfer record atomically.
//!
//! # Modules
//!
//! - [`account`] - Account model and PostgreSQL repository
//! - [`transfer`] - Transfer orchestration (the core pipeline)
//! - [`authorization`] - External authorization gate client
//! - [`notification`] - Best-effort notification sink client
//! - [`gateway`] - Axum HTTP surface
//! - [`db`] - PostgreSQL connection pool
//! - [`config`] - YAML application config
//! - [`logging`] - tracing setup (rolling file + stdout)

pub mod account;
pub mod authorization;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod notification;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AccountKind, AccountRepository};
pub use authorization::AuthorizationGate;
pub use db::Database;
pub use notification::NotificationSink;
pub use transfer::{
    AccountRole, Authorizer, CommittedTransfer, LedgerStore, Notifier, PgLedger, TransferError,
    TransferRecord, TransferResult, TransferService,
};
