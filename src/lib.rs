//! A minimal server-rendered message board.
//!
//! Visitors post short text messages, see them newest first, and delete
//! them. Messages live in a single SQLite `messages` table.

pub mod cli;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;
pub mod views;

pub use config::BoardConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{Binding, Message, MessageStore, SqliteStore, StoreError};
