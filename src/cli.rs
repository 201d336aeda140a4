//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{load_config, validate_config, BoardConfig, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "message-board")]
#[command(about = "A small server-rendered message board", long_about = None, version)]
pub struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Override database.url (e.g. sqlite://board.db).
    #[arg(long)]
    pub database_url: Option<String>,

    /// Apply the bundled schema migration at startup.
    #[arg(long)]
    pub migrate: bool,
}

impl Cli {
    /// Load the config file (if any), apply overrides and validate.
    pub fn resolve_config(&self) -> Result<BoardConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None => BoardConfig::default(),
        };

        let config = self.apply_overrides(config);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    fn apply_overrides(&self, mut config: BoardConfig) -> BoardConfig {
        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(url) = &self.database_url {
            config.database.url = Some(url.clone());
        }
        if self.migrate {
            config.database.run_migrations = true;
        }
        config
    }
}
