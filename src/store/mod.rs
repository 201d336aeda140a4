//! Message persistence.
//!
//! [`MessageStore`] is the seam between the HTTP handlers and the database.
//! The production implementation is [`sqlite::SqliteStore`]; handlers are
//! generic over the trait so tests can inject failing stores.
//!
//! The store is injected once, at router construction, wrapped in a
//! [`Binding`]. A binding may be empty: the board still serves requests and
//! each handler reports [`StoreError::Unconfigured`] on its own.
//!
//! Trait methods use `impl Future` in their signatures, so no `async-trait`
//! crate is needed.

pub mod sqlite;

use std::future::Future;

use chrono::NaiveDateTime;
use thiserror::Error;

pub use sqlite::SqliteStore;

/// A single posted message.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub content: String,
    /// Assigned by the database at insert time (UTC).
    pub created_at: NaiveDateTime,
}

/// Errors surfaced by the store layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No database binding was configured for this process.
    #[error("Database binding is not configured.")]
    Unconfigured,

    /// Any failure while running a statement.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The bundled schema migration failed.
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    pub fn is_unconfigured(&self) -> bool {
        matches!(self, StoreError::Unconfigured)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD access to the `messages` table.
pub trait MessageStore: Clone + Send + Sync + 'static {
    /// All messages, newest first.
    fn list(&self) -> impl Future<Output = StoreResult<Vec<Message>>> + Send;

    /// Insert a message and return its id.
    fn insert(&self, content: &str) -> impl Future<Output = StoreResult<i64>> + Send;

    /// Delete by id and return the number of rows removed (0 or 1).
    fn delete(&self, id: i64) -> impl Future<Output = StoreResult<u64>> + Send;
}

/// The database handle shared by every handler, possibly absent.
#[derive(Debug, Clone)]
pub struct Binding<S> {
    store: Option<S>,
}

impl<S: MessageStore> Binding<S> {
    pub fn new(store: S) -> Self {
        Self { store: Some(store) }
    }

    pub fn unconfigured() -> Self {
        Self { store: None }
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    /// Resolve the store for the current request.
    pub fn store(&self) -> StoreResult<&S> {
        self.store.as_ref().ok_or(StoreError::Unconfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_binding() {
        let binding: Binding<SqliteStore> = Binding::unconfigured();
        assert!(!binding.is_configured());

        let err = binding.store().unwrap_err();
        assert!(err.is_unconfigured());
        assert_eq!(err.to_string(), "Database binding is not configured.");
    }

    #[test]
    fn test_database_error_is_transparent() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(!err.is_unconfigured());
        assert_eq!(err.to_string(), sqlx::Error::RowNotFound.to_string());
    }
}
