//! ms-core - Core types for Milestone
//!
//! This crate holds the pure/domain layer of the migration runner: the
//! [`MigrationScript`] input type, the batch-separator splitter, and
//! on-disk script discovery. Nothing in here touches a database.

pub mod discover;
pub mod error;
pub mod script;
pub mod splitter;

pub use discover::discover_scripts;
pub use error::{CoreError, CoreResult};
pub use script::MigrationScript;
pub use splitter::split_into_statements;
