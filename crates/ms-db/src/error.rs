//! Error types for the migration database layer.

use thiserror::Error;

/// Migration database errors.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Failed to open or create the target database (M001).
    #[error("[M001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Transaction management error (M002).
    #[error("[M002] Transaction failed: {0}")]
    TransactionError(String),

    /// Ledger table creation or query failed (M003).
    #[error("[M003] Migration ledger operation failed: {0}")]
    LedgerError(String),

    /// A script's batch or its ledger insert failed; the script's
    /// transaction has been rolled back in full (M004).
    #[error("[M004] Migration script '{script}' failed: {message}")]
    ScriptFailed { script: String, message: String },

    /// The same script name appears more than once in one run (M005).
    #[error("[M005] Duplicate script name in migration run: {name}")]
    DuplicateScript { name: String },

    /// DuckDB driver error with preserved source chain (M006).
    #[error("[M006] DuckDB error")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`MigrateError`].
pub type MigrateResult<T> = Result<T, MigrateError>;

impl From<duckdb::Error> for MigrateError {
    fn from(err: duckdb::Error) -> Self {
        MigrateError::DuckDb(err)
    }
}
