//! Vendor icon package I/O service.
//!
//! Reads the installed icon package (metadata, export list, version) and the
//! project manifest used as a version fallback.

use crate::catalog::ExportTable;
use crate::config::Config;
use crate::models::{RawIconMetadataEntry, VersionTag};
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info, warn};

/// Minimal view of a `package.json`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct PackageManifest {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    dependencies: HashMap<String, String>,
    #[serde(default)]
    dev_dependencies: HashMap<String, String>,
}

/// Where the current package version was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// The installed package's own `package.json`
    Installed,
    /// The dependency range in the project manifest
    Manifest,
    /// Nothing usable was found
    Unknown,
}

/// Service for reading the installed vendor package.
///
/// Paths are resolved from the project configuration once, at construction.
#[derive(Debug, Clone)]
pub struct VendorPackage {
    name: String,
    metadata_path: PathBuf,
    exports_path: PathBuf,
    vendor_manifest_path: PathBuf,
    project_manifest_path: PathBuf,
}

impl VendorPackage {
    /// Resolves the vendor package layout for the project at `root`.
    #[must_use]
    pub fn new(config: &Config, root: &Path) -> Self {
        Self {
            name: config.package.name.clone(),
            metadata_path: config.metadata_path(root),
            exports_path: config.exports_path(root),
            vendor_manifest_path: config.vendor_manifest_path(root),
            project_manifest_path: config.manifest_path(root),
        }
    }

    /// Package name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Loads the per-variant metadata array.
    ///
    /// A missing or malformed file is fatal for the build.
    pub fn load_metadata(&self) -> Result<Vec<RawIconMetadataEntry>> {
        let content = fs::read_to_string(&self.metadata_path).with_context(|| {
            format!(
                "Failed to read icon metadata: {}",
                self.metadata_path.display()
            )
        })?;

        serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse icon metadata: {}",
                self.metadata_path.display()
            )
        })
    }

    /// Loads the table of exported symbols.
    ///
    /// `.json` files hold a name array; anything else is scanned as
    /// TypeScript declarations.
    pub fn load_exports(&self) -> Result<ExportTable> {
        let path = &self.exports_path;
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read package exports: {}", path.display()))?;

        let table = if path.extension().is_some_and(|ext| ext == "json") {
            ExportTable::from_json(&content)
                .with_context(|| format!("Failed to parse package exports: {}", path.display()))?
        } else {
            ExportTable::from_declarations(&content)
        };

        for module in table.star_reexports() {
            warn!(
                "Not following `export * from '{module}'` in {}; its icons will be reported as unexported",
                path.display()
            );
        }

        info!("Found {} exported symbols in {}", table.len(), self.name);
        Ok(table)
    }

    /// Resolves the current package version.
    ///
    /// Prefers the installed package's declared version, then the dependency
    /// range in the project manifest with range operators removed, then
    /// "unknown".
    pub fn current_version(&self) -> (VersionTag, VersionSource) {
        if let Some(version) = read_manifest(&self.vendor_manifest_path).and_then(|m| m.version) {
            return (VersionTag::parse(&version), VersionSource::Installed);
        }
        debug!(
            "No installed version at {}, falling back to project manifest",
            self.vendor_manifest_path.display()
        );

        let declared = read_manifest(&self.project_manifest_path).and_then(|manifest| {
            manifest
                .dependencies
                .get(&self.name)
                .or_else(|| manifest.dev_dependencies.get(&self.name))
                .cloned()
        });

        match declared {
            Some(range) => (
                VersionTag::parse(&strip_range_operators(&range)),
                VersionSource::Manifest,
            ),
            None => (VersionTag::Unknown, VersionSource::Unknown),
        }
    }
}

/// Reads a manifest, treating any failure as absent.
fn read_manifest(path: &Path) -> Option<PackageManifest> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            debug!("Ignoring unreadable manifest {}: {e}", path.display());
            None
        }
    }
}

static RANGE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\^~>=<v\s]+").expect("range prefix pattern is valid"));

/// Removes leading semver range operators (e.g., "^5.6.0" -> "5.6.0").
///
/// # Examples
///
/// ```
/// use iconshelf::services::package::strip_range_operators;
///
/// assert_eq!(strip_range_operators("^5.6.0"), "5.6.0");
/// assert_eq!(strip_range_operators(">= 7.1.0"), "7.1.0");
/// assert_eq!(strip_range_operators("5.6.0"), "5.6.0");
/// ```
#[must_use]
pub fn strip_range_operators(range: &str) -> String {
    RANGE_PREFIX.replace(range.trim(), "").into_owned()
}
