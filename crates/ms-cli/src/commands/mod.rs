//! CLI command implementations.

pub mod migrate;
pub mod status;

use crate::cli::GlobalArgs;
use anyhow::{Context, Result};
use ms_core::{discover_scripts, MigrationScript};
use ms_db::MigratorDb;
use std::path::Path;

/// Open the target database and discover the ordered script sequence.
pub(crate) fn open_and_discover(global: &GlobalArgs) -> Result<(MigratorDb, Vec<MigrationScript>)> {
    log::debug!("Opening target database {}", global.db);
    let db = MigratorDb::open(Path::new(&global.db))
        .with_context(|| format!("opening database {}", global.db))?;
    let scripts = discover_scripts(Path::new(&global.dir))
        .with_context(|| format!("discovering scripts in {}", global.dir))?;

    if global.verbose {
        eprintln!(
            "[verbose] Discovered {} script(s) in {}",
            scripts.len(),
            global.dir
        );
        for script in &scripts {
            eprintln!("[verbose]   {}", script.name());
        }
    }
    Ok((db, scripts))
}
