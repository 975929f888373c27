//! The migration ledger: the `migrations` table recording which named
//! scripts have been applied, and when.
//!
//! Rows are append-only. The key is the script's declared name, not a
//! content hash, so renaming a script causes re-application.

use crate::error::{MigrateError, MigrateResult};
use duckdb::Connection;

/// Name recorded in the ledger for the ledger-creation step itself, so a
/// freshly created ledger is immediately non-empty and queryable.
pub const CREATE_LEDGER_STEP: &str = "create migrations table";

const CREATE_LEDGER_SQL: &str = "CREATE TABLE migrations (
    id         UUID NOT NULL PRIMARY KEY,
    filename   VARCHAR(255) NOT NULL UNIQUE,
    applied_on TIMESTAMPTZ NOT NULL
)";

/// One row of the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRecord {
    pub id: uuid::Uuid,
    pub filename: String,
    /// DuckDB's string rendering of the `TIMESTAMPTZ` value.
    pub applied_on: String,
}

/// Return whether the `migrations` table exists in the main schema.
pub fn migrations_table_exists(conn: &Connection) -> MigrateResult<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM information_schema.tables
             WHERE table_schema = 'main' AND table_name = 'migrations'",
            [],
            |row| row.get(0),
        )
        .map_err(|e| MigrateError::LedgerError(format!("existence probe failed: {e}")))?;
    Ok(count > 0)
}

/// Create the `migrations` table inside the caller's transaction and record
/// the creation step itself.
///
/// Not idempotent at the storage layer: fails if the table already exists.
/// Callers check [`migrations_table_exists`] first.
pub fn create_migrations_table(conn: &Connection) -> MigrateResult<()> {
    conn.execute_batch(CREATE_LEDGER_SQL)
        .map_err(|e| MigrateError::LedgerError(format!("failed to create ledger table: {e}")))?;
    record_applied(conn, CREATE_LEDGER_STEP)?;
    Ok(())
}

/// Return whether a ledger row exists for `name`.
pub fn is_applied(conn: &Connection, name: &str) -> MigrateResult<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM migrations WHERE filename = ?",
            duckdb::params![name],
            |row| row.get(0),
        )
        .map_err(|e| MigrateError::LedgerError(format!("ledger lookup for '{name}' failed: {e}")))?;
    Ok(count > 0)
}

/// Insert a ledger row for `name`, stamped with the current time.
///
/// Must run inside the same transaction as the script's batches so that
/// partial application is impossible.
pub fn record_applied(conn: &Connection, name: &str) -> MigrateResult<()> {
    let id = uuid::Uuid::new_v4();
    let applied_on = chrono::Utc::now();
    conn.execute(
        "INSERT INTO migrations (id, filename, applied_on) VALUES (?::UUID, ?, ?::TIMESTAMPTZ)",
        duckdb::params![id.to_string(), name, applied_on.to_rfc3339()],
    )
    .map_err(|e| MigrateError::LedgerError(format!("failed to record '{name}': {e}")))?;
    Ok(())
}

/// Return every ledger row, oldest first.
pub fn all_records(conn: &Connection) -> MigrateResult<Vec<MigrationRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT CAST(id AS VARCHAR), filename, CAST(applied_on AS VARCHAR)
             FROM migrations ORDER BY applied_on, filename",
        )
        .map_err(|e| MigrateError::LedgerError(format!("ledger query failed: {e}")))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })
        .map_err(|e| MigrateError::LedgerError(format!("ledger query failed: {e}")))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| MigrateError::LedgerError(format!("ledger row error: {e}")))?;

    rows.into_iter()
        .map(|(id, filename, applied_on)| {
            let id = uuid::Uuid::parse_str(&id)
                .map_err(|e| MigrateError::LedgerError(format!("malformed ledger id: {e}")))?;
            Ok(MigrationRecord {
                id,
                filename,
                applied_on,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "ledger_test.rs"]
mod tests;
