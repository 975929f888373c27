//! `ms migrate` - apply all unapplied scripts in filename order.

use crate::cli::{GlobalArgs, MigrateArgs};
use anyhow::Result;
use ms_db::{execute_migrations, RunSummary};

/// Open, discover, and apply; returns what this run did.
fn run(args: &MigrateArgs, global: &GlobalArgs) -> Result<RunSummary> {
    let (db, scripts) = super::open_and_discover(global)?;
    let summary = execute_migrations(&db, &scripts, !args.no_create)?;
    Ok(summary)
}

pub fn execute(args: &MigrateArgs, global: &GlobalArgs) -> Result<()> {
    let summary = run(args, global)?;

    for name in &summary.applied {
        println!("Applied {name}");
    }
    println!(
        "Done: {} applied, {} already up to date",
        summary.applied.len(),
        summary.skipped
    );
    Ok(())
}

#[cfg(test)]
#[path = "migrate_test.rs"]
mod tests;
