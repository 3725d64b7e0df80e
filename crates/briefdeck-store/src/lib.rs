//! Briefdeck Storage Layer
//!
//! Implements the [`ExampleStore`] trait on SQLite.
//!
//! # Architecture
//!
//! - One table, `examples`: an append-only log of (brief, breakdown) pairs
//! - Schema initialization is explicit and idempotent: the constructor runs
//!   `CREATE TABLE IF NOT EXISTS` unconditionally instead of gating on the
//!   database file existing
//! - Recency ordering breaks ties on the rowid, so inserts within the same
//!   second still come back in insertion order
//!
//! # Examples
//!
//! ```no_run
//! use briefdeck_store::SqliteStore;
//!
//! let store = SqliteStore::open(":memory:").unwrap();
//! // Store is now ready for example operations
//! ```

#![warn(missing_docs)]

use briefdeck_domain::traits::ExampleStore;
use briefdeck_domain::Example;
use rusqlite::{params, Connection};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A write was attempted with empty text
    #[error("Refusing to record empty {0}")]
    EmptyField(&'static str),
}

/// SQLite-based implementation of [`ExampleStore`]
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Callers that share a store across
/// tasks wrap it in a mutex, which also serializes writes.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a store at the given database path.
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    /// The schema is applied on every open; re-applying is a no-op.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use briefdeck_store::SqliteStore;
    ///
    /// let store = SqliteStore::open("briefdeck.db").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }
}

impl ExampleStore for SqliteStore {
    type Error = StoreError;

    fn record(&mut self, brief_text: &str, breakdown_text: &str) -> Result<(), Self::Error> {
        if brief_text.trim().is_empty() {
            return Err(StoreError::EmptyField("brief_text"));
        }
        if breakdown_text.trim().is_empty() {
            return Err(StoreError::EmptyField("breakdown_text"));
        }

        self.conn.execute(
            "INSERT INTO examples (brief_text, breakdown_text) VALUES (?1, ?2)",
            params![brief_text, breakdown_text],
        )?;

        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<Example>, Self::Error> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut stmt = self.conn.prepare(
            "SELECT brief_text, breakdown_text, created_at
             FROM examples
             ORDER BY created_at DESC, id DESC
             LIMIT ?1",
        )?;

        let examples = stmt
            .query_map(params![limit as i64], |row| {
                Ok(Example {
                    brief_text: row.get(0)?,
                    breakdown_text: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(examples)
    }

    fn count(&self) -> Result<u64, Self::Error> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM examples", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_store() -> SqliteStore {
        SqliteStore::open(":memory:").unwrap()
    }

    #[test]
    fn test_schema_init_is_idempotent() {
        let store = memory_store();
        // Re-applying the schema on an already-initialized connection works
        store.initialize_schema().unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_record_and_recent() {
        let mut store = memory_store();
        store.record("brief one", "1. task").unwrap();

        let examples = store.recent(10).unwrap();
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].brief_text, "brief one");
        assert_eq!(examples[0].breakdown_text, "1. task");
        assert!(examples[0].created_at > 0);
    }

    #[test]
    fn test_recent_zero_limit_is_empty() {
        let mut store = memory_store();
        store.record("brief", "breakdown").unwrap();
        assert!(store.recent(0).unwrap().is_empty());
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let mut store = memory_store();
        store.record("A", "breakdown a").unwrap();
        store.record("B", "breakdown b").unwrap();
        store.record("C", "breakdown c").unwrap();

        let briefs: Vec<_> = store
            .recent(2)
            .unwrap()
            .into_iter()
            .map(|e| e.brief_text)
            .collect();
        assert_eq!(briefs, vec!["C", "B"]);
    }

    #[test]
    fn test_recent_limit_above_count_returns_all() {
        let mut store = memory_store();
        store.record("A", "a").unwrap();
        store.record("B", "b").unwrap();

        let examples = store.recent(100).unwrap();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].brief_text, "B");
        assert_eq!(examples[1].brief_text, "A");
    }

    #[test]
    fn test_record_rejects_empty_text() {
        let mut store = memory_store();
        assert!(matches!(
            store.record("", "breakdown"),
            Err(StoreError::EmptyField("brief_text"))
        ));
        assert!(matches!(
            store.record("brief", "   "),
            Err(StoreError::EmptyField("breakdown_text"))
        ));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_count_tracks_inserts() {
        let mut store = memory_store();
        assert_eq!(store.count().unwrap(), 0);
        store.record("A", "a").unwrap();
        store.record("B", "b").unwrap();
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("briefdeck.db");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.record("persisted brief", "persisted breakdown").unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let examples = store.recent(10).unwrap();
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].brief_text, "persisted brief");
    }
}
