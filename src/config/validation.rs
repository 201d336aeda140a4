//! Configuration validation.
//!
//! Serde handles syntax; this module checks value ranges and formats.
//! Returns all validation errors, not just the first.

use std::net::SocketAddr;

use chrono::format::{Item, StrftimeItems};
use thiserror::Error;

use crate::config::schema::BoardConfig;

const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("database.url `{0}` is not a sqlite URL")]
    DatabaseUrl(String),

    #[error("database.max_connections must be greater than zero")]
    MaxConnections,

    #[error("display.utc_offset_minutes {0} is outside ±840")]
    UtcOffset(i32),

    #[error("display.timestamp_format `{0}` is not a valid strftime pattern")]
    TimestampFormat(String),

    #[error("security.max_body_size must be greater than zero")]
    MaxBodySize,
}

/// Check a configuration for semantic errors.
pub fn validate_config(config: &BoardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if let Some(url) = &config.database.url {
        if !url.starts_with("sqlite:") {
            errors.push(ValidationError::DatabaseUrl(url.clone()));
        }
    }

    if config.database.max_connections == 0 {
        errors.push(ValidationError::MaxConnections);
    }

    if config.display.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
        errors.push(ValidationError::UtcOffset(config.display.utc_offset_minutes));
    }

    if StrftimeItems::new(&config.display.timestamp_format).any(|item| matches!(item, Item::Error)) {
        errors.push(ValidationError::TimestampFormat(
            config.display.timestamp_format.clone(),
        ));
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::MaxBodySize);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&BoardConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = BoardConfig::default();
        config.listener.bind_address = "not-an-addr".into();
        config.database.url = Some("postgres://localhost/board".into());
        config.database.max_connections = 0;
        config.display.utc_offset_minutes = 15 * 60;
        config.display.timestamp_format = "%Y %Q".into();
        config.security.max_body_size = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(errors.contains(&ValidationError::MaxConnections));
        assert!(errors.contains(&ValidationError::UtcOffset(900)));
    }

    #[test]
    fn test_memory_url_accepted() {
        let mut config = BoardConfig::default();
        config.database.url = Some("sqlite::memory:".into());
        assert!(validate_config(&config).is_ok());
    }
}
