//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the board.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the message board.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BoardConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Database binding. An absent URL leaves the board unconfigured.
    pub database: DatabaseConfig,

    /// Presentation settings for rendered pages.
    pub display: DisplayConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Security hardening.
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8787").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8787".to_string(),
        }
    }
}

/// Database binding configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx SQLite URL, e.g. `sqlite://board.db` or `sqlite::memory:`.
    pub url: Option<String>,

    /// Pool size. Forced to 1 for in-memory databases.
    pub max_connections: u32,

    /// Create the database file when it does not exist.
    pub create_if_missing: bool,

    /// Apply the bundled migration at startup.
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
            create_if_missing: true,
            run_migrations: false,
        }
    }
}

/// True for sqlx SQLite URLs that name an in-memory database.
pub fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Presentation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Page title and main heading.
    pub title: String,

    /// strftime pattern for message timestamps.
    pub timestamp_format: String,

    /// Offset from UTC applied to stored timestamps before display.
    pub utc_offset_minutes: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Message Board".to_string(),
            timestamp_format: "%Y/%-m/%-d %-H:%M:%S".to_string(),
            utc_offset_minutes: 0,
        }
    }
}

/// Log output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-oriented or single-line log output.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Add nosniff / frame / referrer headers to every response.
    pub enable_headers: bool,
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_board_unconfigured() {
        let config = BoardConfig::default();
        assert!(config.database.url.is_none());
        assert!(!config.database.run_migrations);
        assert_eq!(config.listener.bind_address, "127.0.0.1:8787");
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: BoardConfig = toml::from_str(
            r#"
            [database]
            url = "sqlite://board.db"

            [observability]
            log_format = "compact"
            "#,
        )
        .unwrap();

        assert_eq!(config.database.url.as_deref(), Some("sqlite://board.db"));
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.observability.log_format, LogFormat::Compact);
        assert_eq!(config.display.title, "Message Board");
    }

    #[test]
    fn test_memory_url_detection() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite://file:board?mode=memory&cache=shared"));
        assert!(!is_memory_url("sqlite://board.db"));
    }
}
