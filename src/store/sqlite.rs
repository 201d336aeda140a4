//! SQLite implementation of [`MessageStore`].
//!
//! The pool connects lazily: an unreachable or missing database file does not
//! stop the server from starting, it shows up as a [`StoreError::Database`]
//! on the first request that touches it.
//!
//! `sqlx::query` (runtime-checked) is used so no `DATABASE_URL` is needed at
//! compile time. The migration directory is embedded at compile time.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::{Message, MessageStore, StoreResult};
use crate::config::schema::{is_memory_url, DatabaseConfig};

/// SQLite-backed message store.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Build a lazily-connecting pool for `url`.
    ///
    /// In-memory databases are pinned to a single connection that never
    /// expires, otherwise each pooled connection would see its own empty
    /// database.
    pub fn open(url: &str, config: &DatabaseConfig) -> StoreResult<Self> {
        let options =
            SqliteConnectOptions::from_str(url)?.create_if_missing(config.create_if_missing);

        let memory = is_memory_url(url);
        let pool = if memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_lazy_with(options)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .connect_lazy_with(options)
        };

        tracing::debug!(url = %url, memory, "SQLite pool created");
        Ok(Self { pool })
    }

    /// A fresh, migrated in-memory store.
    pub async fn in_memory() -> StoreResult<Self> {
        let store = Self::open("sqlite::memory:", &DatabaseConfig::default())?;
        store.migrate().await?;
        Ok(store)
    }

    /// Apply the bundled schema migration.
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database schema is up to date");
        Ok(())
    }
}

impl MessageStore for SqliteStore {
    async fn list(&self) -> StoreResult<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, content, created_at FROM messages \
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }

    async fn insert(&self, content: &str) -> StoreResult<i64> {
        let result = sqlx::query("INSERT INTO messages (content) VALUES (?1)")
            .bind(content)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[tokio::test]
    async fn test_insert_then_list_newest_first() {
        let store = SqliteStore::in_memory().await.unwrap();

        let first = store.insert("first").await.unwrap();
        let second = store.insert("second").await.unwrap();
        assert!(second > first);

        let messages = store.list().await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "second");
        assert_eq!(messages[1].content, "first");
    }

    #[tokio::test]
    async fn test_delete_counts_rows() {
        let store = SqliteStore::in_memory().await.unwrap();
        let id = store.insert("bye").await.unwrap();

        assert_eq!(store.delete(id + 100).await.unwrap(), 0);
        assert_eq!(store.delete(id).await.unwrap(), 1);
        assert_eq!(store.delete(id).await.unwrap(), 0);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_table_is_database_error() {
        let store = SqliteStore::open("sqlite::memory:", &DatabaseConfig::default()).unwrap();

        let err = store.list().await.unwrap_err();
        assert!(matches!(err, StoreError::Database(_)));
        assert!(err.to_string().contains("no such table"));
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.migrate().await.unwrap();
        store.insert("still here").await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
