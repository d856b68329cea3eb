//! Catalog file loading for the browsing side.

use crate::models::Catalog;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Reads and migrates a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read icon catalog: {}", path.display()))?;
    let catalog = Catalog::from_json(&content)
        .with_context(|| format!("Failed to load icon catalog: {}", path.display()))?;

    if let Some(revision) = catalog.revision() {
        info!(
            "Loaded {} icons from {} (schema revision {revision})",
            catalog.len(),
            path.display()
        );
    }
    Ok(catalog)
}

/// Lifecycle of the catalog a browser session works with.
///
/// A failed load stays distinguishable from an empty catalog so the
/// presentation layer can offer a retry instead of an empty grid.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    /// Nothing loaded yet
    #[default]
    Loading,
    /// Catalog available (possibly empty)
    Ready(Catalog),
    /// Loading failed with this message
    Failed(String),
}

impl CatalogState {
    /// Loads `path`, capturing failures instead of returning them.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match load_catalog(path) {
            Ok(catalog) => Self::Ready(catalog),
            Err(e) => {
                error!("Failed to load icons: {e:#}");
                Self::Failed(format!("{e:#}"))
            }
        }
    }

    /// Retries a failed or pending load; a ready catalog is kept.
    #[must_use]
    pub fn retry(self, path: &Path) -> Self {
        match self {
            Self::Ready(catalog) => Self::Ready(catalog),
            Self::Loading | Self::Failed(_) => Self::load(path),
        }
    }

    /// The loaded catalog, if any.
    #[must_use]
    pub const fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// The failure message, if loading failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
