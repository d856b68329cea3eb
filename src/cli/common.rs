//! Shared CLI error types and exit codes.

use crate::config::Config;
use crate::models::Catalog;
use crate::services::load_catalog;
use std::fmt;
use std::path::{Path, PathBuf};

/// Process exit codes for every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Data integrity problem, mirror mismatch, unknown icon, or bad argument
    ValidationError = 1,
    /// Missing or unreadable input, or a failed write
    IoError = 2,
}

impl ExitCode {
    /// Numeric status passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Maps to [`ExitCode::ValidationError`]
    Validation,
    /// Maps to [`ExitCode::IoError`]
    Io,
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Failure category
    pub kind: CliErrorKind,
    /// Message printed after "Error: "
    pub message: String,
}

impl CliError {
    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Resolves the project root, defaulting to the working directory.
pub fn project_root(root: Option<&Path>) -> CliResult<PathBuf> {
    match root {
        Some(path) if path.is_dir() => Ok(path.to_path_buf()),
        Some(path) => Err(CliError::io(format!(
            "Project directory not found: {}",
            path.display()
        ))),
        None => std::env::current_dir()
            .map_err(|e| CliError::io(format!("Failed to read current directory: {e}"))),
    }
}

/// Catalog opened for a browsing command.
#[derive(Debug)]
pub struct OpenedCatalog {
    /// Project root
    pub root: PathBuf,
    /// Project configuration
    pub config: Config,
    /// Loaded and migrated catalog
    pub catalog: Catalog,
}

/// Loads the project configuration and the catalog it points at.
///
/// An explicit `catalog` path wins over the configured location.
pub fn open_catalog(catalog: Option<&Path>, root: Option<&Path>) -> CliResult<OpenedCatalog> {
    let root = project_root(root)?;
    let config = Config::load(&root)
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
    let path = catalog.map_or_else(|| config.catalog_path(&root), Path::to_path_buf);
    let catalog = load_catalog(&path).map_err(|e| CliError::io(format!("{e:#}")))?;
    Ok(OpenedCatalog {
        root,
        config,
        catalog,
    })
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
