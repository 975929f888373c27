//! Database layer for Milestone.
//!
//! Owns the DuckDB connection wrapper, the `migrations` ledger table, and
//! the executor that applies [`ms_core::MigrationScript`]s exactly once
//! each, one transaction per script.

pub mod connection;
pub mod error;
pub mod executor;
pub mod ledger;

pub use connection::MigratorDb;
pub use error::{MigrateError, MigrateResult};
pub use executor::{execute_migrations, RunSummary};
pub use ledger::MigrationRecord;
