//! SQLite-backed pending sync counter.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::{PendingSyncStore, SyncError};

/// SQLite-backed pending sync counter, stored as a single row.
pub struct SqlitePendingSync {
    conn: Mutex<Connection>,
}

impl SqlitePendingSync {
    /// Open the database file, creating it and the table if needed.
    pub fn new(path: &Path) -> Result<Self, SyncError> {
        let conn = Connection::open(path).map_err(|e| SyncError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        debug!(path = %path.display(), "Pending sync store opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, SyncError> {
        let conn = Connection::open_in_memory().map_err(|e| SyncError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), SyncError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS pending_sync (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                count INTEGER NOT NULL DEFAULT 0
            );

            INSERT OR IGNORE INTO pending_sync (id, count) VALUES (1, 0);
            "#,
        )
        .map_err(|e| SyncError::Database(e.to_string()))?;

        Ok(())
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> Result<T, SyncError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SyncError::Database(format!("Lock poisoned: {}", e)))?;
        f(&*conn).map_err(|e| SyncError::Database(e.to_string()))
    }

    fn read_count(conn: &Connection) -> rusqlite::Result<u64> {
        let count: Option<i64> = conn
            .query_row("SELECT count FROM pending_sync WHERE id = 1", [], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(count.unwrap_or(0).max(0) as u64)
    }

    fn write_count(conn: &Connection, count: u64) -> rusqlite::Result<u64> {
        let stored = i64::try_from(count).unwrap_or(i64::MAX);
        conn.execute(
            "INSERT INTO pending_sync (id, count) VALUES (1, ?1)
             ON CONFLICT(id) DO UPDATE SET count = excluded.count",
            params![stored],
        )?;
        Ok(stored as u64)
    }
}

impl PendingSyncStore for SqlitePendingSync {
    fn count(&self) -> Result<u64, SyncError> {
        self.with_conn(Self::read_count)
    }

    fn increment(&self) -> Result<u64, SyncError> {
        self.with_conn(|conn| {
            let current = Self::read_count(conn)?;
            Self::write_count(conn, current.saturating_add(1))
        })
    }

    fn decrement(&self, count: u64) -> Result<u64, SyncError> {
        self.with_conn(|conn| {
            let current = Self::read_count(conn)?;
            Self::write_count(conn, current.saturating_sub(count))
        })
    }

    fn clear(&self) -> Result<u64, SyncError> {
        self.with_conn(|conn| Self::write_count(conn, 0))
    }
}
