//! Migration script input type.

use crate::error::{CoreError, CoreResult};

/// Ledger column width for script names (`filename VARCHAR(255)`).
pub const MAX_SCRIPT_NAME_LEN: usize = 255;

/// A named SQL script to be applied exactly once.
///
/// The name is the idempotency key: the executor skips any script whose
/// name already has a ledger row. Renaming a script therefore causes
/// re-application; that is intentional (no content hashing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationScript {
    name: String,
    sql: String,
}

impl MigrationScript {
    /// Create a script, validating the name against the ledger column.
    pub fn new(name: impl Into<String>, sql: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::InvalidScriptName {
                reason: "name must not be empty".to_string(),
            });
        }
        if name.chars().count() > MAX_SCRIPT_NAME_LEN {
            return Err(CoreError::InvalidScriptName {
                reason: format!("name exceeds {MAX_SCRIPT_NAME_LEN} characters: {name}"),
            });
        }
        Ok(Self {
            name,
            sql: sql.into(),
        })
    }

    /// The script's unique name (the ledger key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw SQL body, possibly containing multiple `GO`-separated batches.
    pub fn sql(&self) -> &str {
        &self.sql
    }
}
