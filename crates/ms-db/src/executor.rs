//! Migration executor: applies an ordered sequence of scripts exactly once
//! each, one transaction per script, recording successes in the ledger.

use crate::connection::MigratorDb;
use crate::error::{MigrateError, MigrateResult};
use crate::ledger;
use ms_core::{split_into_statements, MigrationScript};
use std::collections::HashSet;

/// Outcome of one migration run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Names of scripts applied by this run, in application order.
    pub applied: Vec<String>,
    /// Number of scripts skipped because the ledger already had them.
    pub skipped: usize,
}

/// Apply `scripts` in order, skipping any whose name is already in the
/// ledger.
///
/// Each unapplied script runs inside its own transaction: all of its
/// non-empty batches (see [`split_into_statements`]) execute sequentially,
/// then a ledger row is inserted, then the transaction commits. The first
/// failure rolls that script back in full and aborts the run; scripts
/// applied earlier in the sequence stay committed.
///
/// With `create_table_if_missing`, the ledger table is created (in its own
/// committed transaction) before any script runs. Without it, callers are
/// responsible for the table existing before supplying a non-empty
/// sequence.
pub fn execute_migrations(
    db: &MigratorDb,
    scripts: &[MigrationScript],
    create_table_if_missing: bool,
) -> MigrateResult<RunSummary> {
    let mut seen = HashSet::new();
    for script in scripts {
        if !seen.insert(script.name()) {
            return Err(MigrateError::DuplicateScript {
                name: script.name().to_string(),
            });
        }
    }

    if create_table_if_missing && !ledger::migrations_table_exists(db.conn())? {
        log::info!("Creating migrations ledger table");
        db.transaction(ledger::create_migrations_table)?;
    }

    let mut summary = RunSummary::default();
    for script in scripts {
        if ledger::is_applied(db.conn(), script.name())? {
            log::debug!("Skipping already applied script '{}'", script.name());
            summary.skipped += 1;
            continue;
        }

        log::info!("Applying migration script '{}'", script.name());
        db.transaction(|conn| {
            for batch in split_into_statements(script.sql()) {
                if batch.trim().is_empty() {
                    continue;
                }
                conn.execute_batch(&batch)
                    .map_err(|e| MigrateError::ScriptFailed {
                        script: script.name().to_string(),
                        message: e.to_string(),
                    })?;
            }
            ledger::record_applied(conn, script.name())
        })?;
        summary.applied.push(script.name().to_string());
    }
    Ok(summary)
}

#[cfg(test)]
#[path = "executor_test.rs"]
mod tests;
