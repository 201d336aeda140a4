//! Observability.
//!
//! # Data Flow
//! ```text
//! handlers, startup, store
//!     → tracing events with structured fields (message_id, error, ...)
//!     → request span carrying method, path and x-request-id
//!     → logging.rs subscriber (stdout, pretty or compact)
//! ```

pub mod logging;

pub use logging::init_logging;
