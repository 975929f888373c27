//! On-disk discovery of migration scripts.
//!
//! The executor only consumes an ordered sequence of [`MigrationScript`]s;
//! this module produces one from a directory of `.sql` files, ordered by
//! file name so the ordering is deterministic across platforms.

use crate::error::{CoreError, CoreResult};
use crate::script::MigrationScript;
use std::path::Path;

/// Discover migration scripts in `dir`, ordered by file name.
///
/// Non-recursive: subdirectories and files without a `.sql` extension
/// (matched case-insensitively) are ignored. The script name is the file
/// name including its extension; the body is the file contents. Ordering
/// is byte order of the file names, so zero-padded numeric prefixes
/// (`001_...`, `002_...`) sort the way authors expect.
pub fn discover_scripts(dir: &Path) -> CoreResult<Vec<MigrationScript>> {
    if !dir.is_dir() {
        return Err(CoreError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| CoreError::IoWithPath {
        path: dir.display().to_string(),
        source: e,
    })? {
        let entry = entry.map_err(|e| CoreError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        if !path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("sql"))
        {
            log::debug!("Skipping non-SQL file: {}", path.display());
            continue;
        }
        paths.push(path);
    }
    paths.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

    let mut scripts = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let sql = std::fs::read_to_string(&path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        scripts.push(MigrationScript::new(name, sql)?);
    }
    Ok(scripts)
}

#[cfg(test)]
#[path = "discover_test.rs"]
mod tests;
