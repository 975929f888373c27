//! `ms status` - report applied/pending state for every discovered script.

use crate::cli::{GlobalArgs, StatusArgs, StatusOutput};
use anyhow::Result;
use ms_core::MigrationScript;
use ms_db::{ledger, MigratorDb};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Per-script state as seen by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum ScriptStatus {
    Applied,
    Pending,
}

impl fmt::Display for ScriptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptStatus::Applied => write!(f, "applied"),
            ScriptStatus::Pending => write!(f, "pending"),
        }
    }
}

#[derive(Debug, Serialize)]
struct StatusRow {
    name: String,
    status: ScriptStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    applied_on: Option<String>,
}

/// Applied-on stamps by script name. Without a ledger table the map is
/// empty and every script is pending.
fn applied_stamps(db: &MigratorDb) -> Result<HashMap<String, String>> {
    let mut stamps = HashMap::new();
    if ledger::migrations_table_exists(db.conn())? {
        for record in ledger::all_records(db.conn())? {
            stamps.insert(record.filename, record.applied_on);
        }
    }
    Ok(stamps)
}

/// One row per discovered script, in discovery order.
fn status_rows(scripts: &[MigrationScript], stamps: &HashMap<String, String>) -> Vec<StatusRow> {
    scripts
        .iter()
        .map(|script| {
            let stamp = stamps.get(script.name()).cloned();
            StatusRow {
                name: script.name().to_string(),
                status: if stamp.is_some() {
                    ScriptStatus::Applied
                } else {
                    ScriptStatus::Pending
                },
                applied_on: stamp,
            }
        })
        .collect()
}

/// Count ledger entries with no matching script on disk, excluding the
/// ledger's own bookkeeping row.
fn orphaned_entries(stamps: &HashMap<String, String>, scripts: &[MigrationScript]) -> usize {
    stamps
        .keys()
        .filter(|name| {
            name.as_str() != ledger::CREATE_LEDGER_STEP
                && !scripts.iter().any(|s| s.name() == name.as_str())
        })
        .count()
}

pub fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let (db, scripts) = super::open_and_discover(global)?;

    let stamps = applied_stamps(&db)?;
    let rows = status_rows(&scripts, &stamps);

    if global.verbose {
        let orphans = orphaned_entries(&stamps, &scripts);
        if orphans > 0 {
            eprintln!("[verbose] {orphans} ledger entry(ies) have no matching script on disk");
        }
    }

    match args.output {
        StatusOutput::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        StatusOutput::Table => {
            let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(4);
            for row in &rows {
                match &row.applied_on {
                    Some(stamp) => {
                        println!("{:<width$}  {}  {}", row.name, row.status, stamp)
                    }
                    None => println!("{:<width$}  {}", row.name, row.status),
                }
            }
            let pending = rows
                .iter()
                .filter(|r| r.status == ScriptStatus::Pending)
                .count();
            println!("{} script(s), {} pending", rows.len(), pending);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
