//! CLI command handlers for Iconshelf.
//!
//! Every command is headless and scriptable: human-readable output by
//! default, `--json` for machines, and exit codes from [`ExitCode`].

pub mod build;
pub mod check;
pub mod common;
pub mod config;
pub mod search;
pub mod show;

// Re-export types used by main.rs and tests
pub use build::BuildArgs;
pub use check::CheckArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use search::SearchArgs;
pub use show::ShowArgs;
