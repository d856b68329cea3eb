//! Build command: generate and publish the icon catalog.

use crate::catalog::{BuildReport, CatalogBuilder, NameNormalizer};
use crate::cli::common::{print_json, project_root, CliError, CliResult};
use crate::config::Config;
use crate::services::{
    CatalogPublisher, MirrorCheck, MirrorStatus, PublishReport, VendorPackage, VersionSource,
};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Generate the icon catalog from the installed icon package
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output the build report as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output of a build.
#[derive(Debug, Serialize)]
struct BuildOutput<'a> {
    success: bool,
    report: &'a BuildReport,
    publish: &'a PublishReport,
}

impl BuildArgs {
    /// Execute the build command
    pub fn execute(&self) -> CliResult<()> {
        let root = project_root(self.root.as_deref())?;
        let config = Config::load(&root)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let package = VendorPackage::new(&config, &root);
        let metadata = package
            .load_metadata()
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        let exports = package
            .load_exports()
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        let (version, source) = package.current_version();
        match source {
            VersionSource::Installed => info!("Using installed {} {version}", package.name()),
            VersionSource::Manifest => info!("Using {} {version} from manifest", package.name()),
            VersionSource::Unknown => warn!(
                "Could not determine the {} version; release tags disabled",
                package.name()
            ),
        }

        let build = CatalogBuilder::new(version.clone())
            .with_deprecated(config.catalog.deprecated.iter().cloned())
            .with_normalizer(NameNormalizer::new(
                config.catalog.strip_suffixes.iter().cloned(),
            ))
            .build(&metadata, &exports);

        let publish = CatalogPublisher::new(&config, &root)
            .publish(&build.records, &version)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        if self.json {
            print_json(&BuildOutput {
                success: publish.is_consistent(),
                report: &build.report,
                publish: &publish,
            })?;
        } else {
            for line in build.report.summary_lines() {
                println!("{line}");
            }
            println!();
            println!("✓ Wrote {}", publish.catalog.display());
            if let Some(marker) = &publish.version_marker {
                println!("✓ Wrote {}", marker.display());
            }
            for mirror in &publish.mirrors {
                println!("{}", mirror_line(mirror));
            }
        }

        if !publish.is_consistent() {
            let diverged: Vec<String> = publish
                .diverged()
                .map(|m| m.path.display().to_string())
                .collect();
            return Err(CliError::validation(format!(
                "Catalog copies are out of sync: {}",
                diverged.join(", ")
            )));
        }

        Ok(())
    }
}

fn mirror_line(mirror: &MirrorCheck) -> String {
    let path = mirror.path.display();
    match mirror.status {
        MirrorStatus::Synced => format!("✓ Copied to {path}"),
        MirrorStatus::Mismatch => format!("✗ Copy at {path} differs from the catalog"),
        MirrorStatus::Missing => format!("✗ Copy at {path} is missing"),
    }
}
