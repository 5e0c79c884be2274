//! payflow - Simplified P2P Payment Ledger
//!
//! Entry point. Architecture:
//!
//! ```text
//! ┌─────────┐   ┌──────────────┐   ┌─────────────┐   ┌────────────┐
//! │ Gateway │──▶│ TransferSvc  │──▶│ AuthGate    │   │ PgLedger   │
//! │ (axum)  │   │ (pipeline)   │   │ (reqwest)   │──▶│ (sqlx tx)  │
//! └─────────┘   └──────────────┘   └─────────────┘   └────────────┘
//!                      └──────────▶ NotificationSink (detached)
//! ```

use std::sync::Arc;
use std::time::Duration;

use payflow::account::AccountRepository;
use payflow::authorization::AuthorizationGate;
use payflow::config::AppConfig;
use payflow::db::Database;
use payflow::gateway;
use payflow::gateway::state::AppState;
use payflow::notification::NotificationSink;
use payflow::transfer::{PgLedger, TransferService};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn seed_mode() -> bool {
    std::env::args().any(|a| a == "--seed")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = payflow::logging::init_logging(&config);

    tracing::info!("Starting payflow in {} mode", env);

    let db = Arc::new(Database::connect(&config.postgres_url).await?);

    if seed_mode() {
        AccountRepository::seed(db.pool()).await?;
        return Ok(());
    }

    let timeout = Duration::from_secs(config.external.timeout_secs);
    let gate = Arc::new(AuthorizationGate::new(
        config.external.authorizer_url.clone(),
        timeout,
    )?);
    let sink = Arc::new(NotificationSink::new(
        config.external.notification_url.clone(),
        timeout,
    )?);
    let ledger = Arc::new(PgLedger::new(db.pool().clone()));

    let transfers = Arc::new(TransferService::new(ledger, gate, sink));
    let state = AppState::new(db, transfers);

    let port = get_port_override().unwrap_or(config.gateway.port);
    gateway::run_server(&config.gateway.host, port, state).await;

    Ok(())
}
