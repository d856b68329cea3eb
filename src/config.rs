//! Configuration management for a catalog project.
//!
//! This module handles loading, validating, and saving the project
//! configuration in TOML format. The file lives at the project root and is
//! optional: every field has a default, so a bare project builds with no
//! configuration at all.

use crate::constants::{CATALOG_FILE_NAME, CONFIG_FILE_NAME, DEFAULT_PACKAGE_NAME};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Vendor package settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// npm package name of the icon library (e.g., "stera-icons")
    pub name: String,
    /// Prefix of the recommended component aliases (e.g., "Si" -> `SiCheck`)
    pub component_prefix: String,
    /// Subpath exposing weight/duotone-parameterised components
    pub dynamic_variants_subpath: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_PACKAGE_NAME.to_string(),
            component_prefix: "Si".to_string(),
            dynamic_variants_subpath: "dynamic-variants".to_string(),
        }
    }
}

/// File system locations, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Installed vendor package; defaults to `node_modules/<package name>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_dir: Option<PathBuf>,
    /// Metadata file, relative to the vendor directory
    pub metadata: PathBuf,
    /// Export list (JSON array or `.d.ts`), relative to the vendor directory
    pub exports: PathBuf,
    /// Project dependency manifest
    pub manifest: PathBuf,
    /// Directory receiving the canonical catalog and version marker
    pub output_dir: PathBuf,
    /// Directories receiving byte-identical catalog copies
    pub mirrors: Vec<PathBuf>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            vendor_dir: None,
            metadata: PathBuf::from("dist/icons.meta.json"),
            exports: PathBuf::from("dist/exports.json"),
            manifest: PathBuf::from("package.json"),
            output_dir: PathBuf::from("src/data"),
            mirrors: vec![PathBuf::from("public/data")],
        }
    }
}

/// Catalog generation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Legacy component names excluded from the catalog
    pub deprecated: Vec<String>,
    /// Component-name suffixes stripped to obtain the grouping key.
    /// Empty when the package already uses canonical names.
    pub strip_suffixes: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            deprecated: ["Checkmark", "CheckmarkBold", "CheckmarkFilled"]
                .into_iter()
                .map(String::from)
                .collect(),
            strip_suffixes: [
                "IconBold",
                "IconFilled",
                "IconRegular",
                "Icon",
                "BoldDuotone",
                "FilledDuotone",
                "RegularDuotone",
                "Duotone",
                "Bold",
                "Filled",
                "Regular",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Project configuration.
///
/// # File Location
///
/// `<project root>/iconshelf.toml`
///
/// # Validation
///
/// - package name must be non-empty
/// - suffixes must be non-empty and unique
/// - no mirror may point at the output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Vendor package settings
    pub package: PackageConfig,
    /// File locations
    pub paths: PathConfig,
    /// Generation rules
    pub catalog: CatalogConfig,
}

impl Config {
    /// Creates a Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the full path to the config file for a project.
    #[must_use]
    pub fn config_file_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    /// Checks if the project has a config file.
    #[must_use]
    pub fn exists(root: &Path) -> bool {
        Self::config_file_path(root).exists()
    }

    /// Loads configuration for the project at `root`.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = Self::config_file_path(root);

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration using an atomic write (temp file + rename).
    pub fn save(&self, root: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path(root);
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.package.name.trim().is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        let mut seen = HashSet::new();
        for suffix in &self.catalog.strip_suffixes {
            if suffix.is_empty() {
                anyhow::bail!("Suffixes in catalog.strip_suffixes cannot be empty");
            }
            if !seen.insert(suffix) {
                anyhow::bail!("Duplicate suffix '{suffix}' in catalog.strip_suffixes");
            }
        }

        for mirror in &self.paths.mirrors {
            if mirror == &self.paths.output_dir {
                anyhow::bail!(
                    "Mirror directory {} is the same as the output directory",
                    mirror.display()
                );
            }
        }

        Ok(())
    }

    /// Installed vendor package directory, resolved against `root`.
    #[must_use]
    pub fn vendor_dir(&self, root: &Path) -> PathBuf {
        match &self.paths.vendor_dir {
            Some(dir) => root.join(dir),
            None => root.join("node_modules").join(&self.package.name),
        }
    }

    /// Vendor metadata file.
    #[must_use]
    pub fn metadata_path(&self, root: &Path) -> PathBuf {
        self.vendor_dir(root).join(&self.paths.metadata)
    }

    /// Vendor export list.
    #[must_use]
    pub fn exports_path(&self, root: &Path) -> PathBuf {
        self.vendor_dir(root).join(&self.paths.exports)
    }

    /// Vendor `package.json`.
    #[must_use]
    pub fn vendor_manifest_path(&self, root: &Path) -> PathBuf {
        self.vendor_dir(root).join("package.json")
    }

    /// Project dependency manifest.
    #[must_use]
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.manifest)
    }

    /// Directory holding the canonical catalog.
    #[must_use]
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.output_dir)
    }

    /// Canonical catalog file.
    #[must_use]
    pub fn catalog_path(&self, root: &Path) -> PathBuf {
        self.output_dir(root).join(CATALOG_FILE_NAME)
    }

    /// Mirrored catalog files.
    #[must_use]
    pub fn mirror_paths(&self, root: &Path) -> Vec<PathBuf> {
        self.paths
            .mirrors
            .iter()
            .map(|dir| root.join(dir).join(CATALOG_FILE_NAME))
            .collect()
    }
}
