//! Target database connection wrapper.
//!
//! [`MigratorDb`] owns a DuckDB [`Connection`] and provides helpers for
//! opening the target database and running work inside a transaction.
//! Opening never mutates the database; ledger creation is an explicit,
//! separate step so callers control when DDL happens.

use crate::error::{MigrateError, MigrateResult};
use duckdb::Connection;
use std::path::Path;

/// Wrapper around a DuckDB connection to the database being migrated.
///
/// Single-threaded; the executor assumes exclusive use of the connection
/// for the duration of one script's application, so no `Mutex` is needed.
pub struct MigratorDb {
    conn: Connection,
}

impl MigratorDb {
    /// Open (or create) the target database at `path`.
    pub fn open(path: &Path) -> MigrateResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| MigrateError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self { conn })
    }

    /// Open an in-memory database.
    ///
    /// Useful for unit tests that don't need persistence.
    pub fn open_memory() -> MigrateResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| MigrateError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Execute `body` within a `BEGIN` / `COMMIT` transaction, rolling back
    /// on error.
    ///
    /// Rollback happens on every exit path other than a successful commit,
    /// including a panic inside `body`, so a failed batch can never leave
    /// an open transaction behind.
    pub fn transaction<F, T>(&self, body: F) -> MigrateResult<T>
    where
        F: FnOnce(&Connection) -> MigrateResult<T>,
    {
        self.conn
            .execute_batch("BEGIN TRANSACTION")
            .map_err(|e| MigrateError::TransactionError(format!("BEGIN failed: {e}")))?;
        let mut guard = RollbackGuard::new(&self.conn);

        let value = body(&self.conn)?;

        self.conn
            .execute_batch("COMMIT")
            .map_err(|e| MigrateError::TransactionError(format!("COMMIT failed: {e}")))?;
        guard.defuse();
        Ok(value)
    }
}

/// Issues `ROLLBACK` on drop unless defused after a successful commit.
/// Covers early returns, errors, and unwinding panics alike.
struct RollbackGuard<'a> {
    conn: &'a Connection,
    armed: bool,
}

impl<'a> RollbackGuard<'a> {
    fn new(conn: &'a Connection) -> Self {
        Self { conn, armed: true }
    }

    fn defuse(&mut self) {
        self.armed = false;
    }
}

impl Drop for RollbackGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let _ = self.conn.execute_batch("ROLLBACK");
        }
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
