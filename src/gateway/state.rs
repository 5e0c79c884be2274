use std::sync::Arc;

use crate::db::Database;
use crate::transfer::TransferService;

/// Shared gateway application state.
///
/// Built once in `main` and passed by reference into every handler;
/// there is no global store handle.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL ledger store (shared pool)
    pub db: Arc<Database>,
    /// Transfer orchestrator
    pub transfers: Arc<TransferService>,
}

impl AppState {
    pub fn new(db: Arc<Database>, transfers: Arc<TransferService>) -> Self {
        Self { db, transfers }
    }
}
