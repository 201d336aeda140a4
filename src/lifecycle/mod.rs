//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → open binding (lazy pool, optional migration) → bind → serve
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     trigger() or SIGINT/SIGTERM → stop accepting → drain in-flight requests
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownListener};
