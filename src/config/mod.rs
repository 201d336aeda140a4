//! Configuration management.
//!
//! # Data Flow
//! ```text
//! board.toml
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI overrides applied in main.rs
//!     → BoardConfig (immutable for the life of the process)
//! ```
//!
//! All fields have defaults, so an empty file (or no file at all) yields a
//! runnable but unconfigured board.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    BoardConfig, DatabaseConfig, DisplayConfig, ListenerConfig, LogFormat, ObservabilityConfig,
    SecurityConfig,
};
pub use validation::{validate_config, ValidationError};
