//! Startup orchestration.
//!
//! Only a malformed configuration is fatal. A missing database URL starts an
//! unconfigured board, and a failed migration is logged and left for the
//! handlers to report.

use tokio::net::TcpListener;

use crate::config::{BoardConfig, DatabaseConfig};
use crate::http::HttpServer;
use crate::lifecycle::shutdown::ShutdownListener;
use crate::store::{Binding, SqliteStore, StoreResult};

/// Resolve the database binding described by `config`.
pub async fn open_binding(config: &DatabaseConfig) -> StoreResult<Binding<SqliteStore>> {
    let Some(url) = config.url.as_deref() else {
        tracing::warn!("No database.url configured; every request will show the setup page");
        return Ok(Binding::unconfigured());
    };

    let store = SqliteStore::open(url, config)?;

    if config.run_migrations {
        if let Err(e) = store.migrate().await {
            tracing::error!(error = %e, "Migration failed; continuing without schema changes");
        }
    }

    Ok(Binding::new(store))
}

/// Open the binding, bind the listener and serve until shutdown.
pub async fn start(
    config: BoardConfig,
    shutdown: ShutdownListener,
) -> Result<(), Box<dyn std::error::Error>> {
    let binding = open_binding(&config.database).await?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        database = binding.is_configured(),
        "Listening for connections"
    );

    HttpServer::new(&config, binding).run(listener, shutdown).await?;
    Ok(())
}
