//! Transfer module: the core execution pipeline
//!
//! Validation → eligibility → authorization gate → atomic mutation →
//! detached notification. See [`TransferService::execute`].

pub mod error;
pub mod models;
pub mod ports;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{AccountRole, TransferError};
pub use models::{CommittedTransfer, PartyRef, PartySummary, TransferRecord, TransferResult};
pub use ports::{Authorizer, LedgerStore, Notifier};
pub use repository::PgLedger;
pub use service::TransferService;
