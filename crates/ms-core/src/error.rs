//! Error types for ms-core

use thiserror::Error;

/// Core error type for Milestone
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Script name is empty or exceeds the ledger column width
    #[error("[E001] Invalid script name: {reason}")]
    InvalidScriptName { reason: String },

    /// E002: Scripts directory not found
    #[error("[E002] Scripts directory not found: {path}")]
    DirectoryNotFound { path: String },

    /// E003: I/O error with the offending path attached
    #[error("[E003] I/O error at {path}: {source}")]
    IoWithPath {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;
