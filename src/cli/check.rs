//! Check command: verify mirrored catalogs match the canonical file.

use crate::cli::common::{print_json, project_root, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::services::{CatalogPublisher, MirrorStatus};
use clap::Args;
use std::path::PathBuf;

/// Verify that every catalog copy is identical to the canonical catalog
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> CliResult<()> {
        let root = project_root(self.root.as_deref())?;
        let config = Config::load(&root)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let report = CatalogPublisher::new(&config, &root)
            .check()
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        if self.json {
            print_json(&report)?;
        } else {
            for mirror in &report.mirrors {
                let (mark, label) = match mirror.status {
                    MirrorStatus::Synced => ("✓", "in sync"),
                    MirrorStatus::Mismatch => ("✗", "differs"),
                    MirrorStatus::Missing => ("✗", "missing"),
                };
                println!("{mark} {} {label}", mirror.path.display());
            }
        }

        if !report.is_consistent() {
            return Err(CliError::validation(format!(
                "Catalog copies do not match {}. Run `{APP_BINARY_NAME} build` to resync.",
                report.catalog.display()
            )));
        }

        if !self.json {
            println!("✓ All catalog copies match");
        }
        Ok(())
    }
}
