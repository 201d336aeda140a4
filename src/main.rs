//! Message board server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser                 ┌───────────────────────────────────────────────┐
//!     ───────────────────────▶│ request id / trace / body limit / headers     │
//!                             └──────────────────────┬────────────────────────┘
//!                                                    ▼
//!                             ┌───────────────────────────────────────────────┐
//!                             │ router:  GET /   POST /   POST /delete/{id}   │
//!                             └──────────────────────┬────────────────────────┘
//!                                                    ▼
//!                             ┌──────────────┐   ┌──────────────────────────┐
//!     ◀───── HTML / 302 ──────│    views     │◀──│ Binding<SqliteStore>     │──▶ SQLite
//!                             └──────────────┘   └──────────────────────────┘
//! ```

use clap::Parser;

use message_board::cli::Cli;
use message_board::lifecycle::{startup, Shutdown};
use message_board::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    observability::init_logging(&config.observability);

    tracing::info!("message-board v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        database_configured = config.database.url.is_some(),
        run_migrations = config.database.run_migrations,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    startup::start(config, shutdown.listener()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
