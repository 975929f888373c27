//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Milestone - apply named SQL migration scripts to a database exactly once each
#[derive(Parser, Debug)]
#[command(name = "ms")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the target database file
    #[arg(long, global = true, env = "MS_DATABASE", default_value = "milestone.duckdb")]
    pub db: String,

    /// Directory containing the migration scripts (*.sql, ordered by filename)
    #[arg(short = 'd', long, global = true, default_value = "migrations")]
    pub dir: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply all unapplied scripts, creating the ledger table if missing
    Migrate(MigrateArgs),

    /// Show applied/pending state for every discovered script
    Status(StatusArgs),
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Fail instead of creating the ledger table when it is missing
    #[arg(long)]
    pub no_create: bool,
}

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: StatusOutput,
}

/// Status output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutput {
    /// Human-readable table
    Table,
    /// One JSON object per script
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
