//! Catalog publishing: canonical write, mirrors, and consistency checks.

use crate::config::Config;
use crate::constants::VERSION_FILE_NAME;
use crate::models::{IconRecord, VersionMarker, VersionTag};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// State of one mirrored catalog copy relative to the canonical file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MirrorStatus {
    /// Byte-identical to the canonical catalog
    Synced,
    /// Present but different
    Mismatch,
    /// Not found on disk
    Missing,
}

/// Per-mirror comparison result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MirrorCheck {
    /// Mirror file path
    pub path: PathBuf,
    /// Comparison outcome
    pub status: MirrorStatus,
}

/// Outcome of publishing or checking the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishReport {
    /// Canonical catalog path
    pub catalog: PathBuf,
    /// Version marker path (only set when written)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_marker: Option<PathBuf>,
    /// Mirror comparison results
    pub mirrors: Vec<MirrorCheck>,
}

impl PublishReport {
    /// True when every mirror matches the canonical catalog.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.mirrors.iter().all(|m| m.status == MirrorStatus::Synced)
    }

    /// Mirrors that are missing or differ.
    pub fn diverged(&self) -> impl Iterator<Item = &MirrorCheck> {
        self.mirrors
            .iter()
            .filter(|m| m.status != MirrorStatus::Synced)
    }
}

/// Writes the catalog to its canonical location and every mirror.
#[derive(Debug, Clone)]
pub struct CatalogPublisher {
    catalog_path: PathBuf,
    version_path: PathBuf,
    mirror_paths: Vec<PathBuf>,
}

impl CatalogPublisher {
    /// Resolves output locations for the project at `root`.
    #[must_use]
    pub fn new(config: &Config, root: &Path) -> Self {
        Self {
            catalog_path: config.catalog_path(root),
            version_path: config.output_dir(root).join(VERSION_FILE_NAME),
            mirror_paths: config.mirror_paths(root),
        }
    }

    /// Serializes records the way they are stored: pretty JSON, two-space indent.
    pub fn render(records: &[IconRecord]) -> Result<String> {
        serde_json::to_string_pretty(records).context("Failed to serialize icon catalog")
    }

    /// Writes the catalog, version marker, and mirrors, then verifies the
    /// mirrors byte for byte.
    ///
    /// Write failures are errors. Diverged mirrors are reported, not raised;
    /// callers decide whether that fails the build.
    pub fn publish(&self, records: &[IconRecord], version: &VersionTag) -> Result<PublishReport> {
        let catalog = Self::render(records)?;
        write_atomic(&self.catalog_path, catalog.as_bytes())?;
        info!(
            "Wrote {} icons to {}",
            records.len(),
            self.catalog_path.display()
        );

        let marker = VersionMarker {
            version: version.clone(),
        };
        let marker_json =
            serde_json::to_string_pretty(&marker).context("Failed to serialize version marker")?;
        write_atomic(&self.version_path, marker_json.as_bytes())?;

        for mirror in &self.mirror_paths {
            write_atomic(mirror, catalog.as_bytes())?;
        }

        let mut report = self.check()?;
        report.version_marker = Some(self.version_path.clone());
        Ok(report)
    }

    /// Compares every mirror with the canonical catalog without writing.
    pub fn check(&self) -> Result<PublishReport> {
        let canonical = fs::read(&self.catalog_path).with_context(|| {
            format!(
                "Failed to read canonical catalog: {}",
                self.catalog_path.display()
            )
        })?;

        let mut mirrors = Vec::with_capacity(self.mirror_paths.len());
        for path in &self.mirror_paths {
            let status = match fs::read(path) {
                Ok(bytes) if bytes == canonical => MirrorStatus::Synced,
                Ok(_) => MirrorStatus::Mismatch,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => MirrorStatus::Missing,
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("Failed to read mirror: {}", path.display()))
                }
            };
            if status != MirrorStatus::Synced {
                warn!("Catalog copy {} is {:?}", path.display(), status);
            }
            mirrors.push(MirrorCheck {
                path: path.clone(),
                status,
            });
        }

        Ok(PublishReport {
            catalog: self.catalog_path.clone(),
            version_marker: None,
            mirrors,
        })
    }
}

/// Writes `bytes` to `path` via a temp file and rename, creating parent
/// directories as needed.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, bytes)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
