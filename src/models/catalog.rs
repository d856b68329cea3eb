//! In-memory icon catalog with schema migration.
//!
//! Catalog files have gone through three layouts. All of them load into the
//! current [`IconRecord`] shape:
//!
//! 1. `{name, tags, category?, style?}` with no weights or versions
//! 2. weights and versions, but `variants` maps keys to bare version strings
//! 3. `variants` maps keys to `{version, componentName?, fileName?}`

use crate::models::{IconRecord, IconStyle, IconWeight, VariantInfo, VariantKey, VersionTag};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Catalog file layout revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaRevision {
    /// Name, tags and a name-derived style only
    Legacy,
    /// Variant map holds plain version strings
    VersionMap,
    /// Variant map holds version and naming details
    Current,
}

impl fmt::Display for SchemaRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Legacy => "1 (legacy styles)",
            Self::VersionMap => "2 (variant versions)",
            Self::Current => "3 (variant details)",
        };
        f.write_str(label)
    }
}

/// Variant value in any supported revision.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredVariant {
    Version(String),
    Detailed(VariantInfo),
}

/// Record as stored on disk, any revision.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    name: String,
    #[serde(default)]
    kebab_name: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    version_added: VersionTag,
    #[serde(default)]
    version_last_modified: VersionTag,
    #[serde(default)]
    weights: Option<Vec<IconWeight>>,
    #[serde(default)]
    supports_duotone: bool,
    #[serde(default)]
    variants: BTreeMap<VariantKey, StoredVariant>,
    #[serde(default)]
    style: Option<IconStyle>,
}

impl StoredRecord {
    fn revision(&self) -> SchemaRevision {
        if self.weights.is_none() {
            SchemaRevision::Legacy
        } else if self
            .variants
            .values()
            .any(|v| matches!(v, StoredVariant::Version(_)))
        {
            SchemaRevision::VersionMap
        } else {
            SchemaRevision::Current
        }
    }

    fn migrate(self) -> IconRecord {
        let weights = match self.weights {
            Some(mut weights) => {
                weights.sort();
                weights.dedup();
                weights
            }
            None => {
                let style = self
                    .style
                    .unwrap_or_else(|| IconStyle::from_name(&self.name));
                vec![style.weight()]
            }
        };

        let variants = self
            .variants
            .into_iter()
            .map(|(key, stored)| {
                let info = match stored {
                    StoredVariant::Version(version) => VariantInfo {
                        version: VersionTag::parse(&version),
                        ..VariantInfo::default()
                    },
                    StoredVariant::Detailed(info) => info,
                };
                (key, info)
            })
            .collect();

        IconRecord {
            name: self.name,
            kebab_name: self.kebab_name,
            tags: self.tags,
            version_added: self.version_added,
            version_last_modified: self.version_last_modified,
            weights,
            supports_duotone: self.supports_duotone,
            variants,
            style: self.style,
        }
    }
}

/// Loaded catalog with name lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<IconRecord>,
    lookup: HashMap<String, usize>,
    revision: Option<SchemaRevision>,
}

impl Catalog {
    /// Wraps records produced by the builder.
    #[must_use]
    pub fn new(records: Vec<IconRecord>) -> Self {
        let lookup = Self::index(&records);
        Self {
            records,
            lookup,
            revision: Some(SchemaRevision::Current),
        }
    }

    /// Parses a catalog file in any supported revision.
    ///
    /// The reported revision is the oldest one found among the records.
    pub fn from_json(json: &str) -> Result<Self> {
        let stored: Vec<StoredRecord> =
            serde_json::from_str(json).context("Failed to parse icon catalog")?;

        let revision = stored.iter().map(StoredRecord::revision).min();
        let records: Vec<IconRecord> = stored.into_iter().map(StoredRecord::migrate).collect();
        let lookup = Self::index(&records);

        Ok(Self {
            records,
            lookup,
            revision,
        })
    }

    fn index(records: &[IconRecord]) -> HashMap<String, usize> {
        let mut lookup = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            lookup.entry(record.name.clone()).or_insert(idx);
            if let Some(kebab) = &record.kebab_name {
                lookup.entry(kebab.clone()).or_insert(idx);
            }
        }
        lookup
    }

    /// All records in catalog order.
    #[must_use]
    pub fn records(&self) -> &[IconRecord] {
        &self.records
    }

    /// Looks up a record by canonical or kebab-case name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IconRecord> {
        let idx = self.lookup.get(name)?;
        self.records.get(*idx)
    }

    /// Oldest schema revision found; `None` for an empty catalog file.
    #[must_use]
    pub const fn revision(&self) -> Option<SchemaRevision> {
        self.revision
    }

    /// Number of icons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no icons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_current_revision() {
        let catalog = Catalog::from_json(
            r#"[{
                "name": "Check",
                "kebabName": "check",
                "tags": ["Check"],
                "versionAdded": "1.0",
                "weights": ["regular", "bold"],
                "supportsDuotone": false,
                "variants": {
                    "regular": {"version": "1.0"},
                    "bold": {"version": "1.0", "componentName": "CheckBold"}
                }
            }]"#,
        )
        .unwrap();

        assert_eq!(catalog.revision(), Some(SchemaRevision::Current));
        let icon = catalog.get("check").unwrap();
        assert_eq!(icon.name, "Check");
        assert_eq!(icon.weights, vec![IconWeight::Bold, IconWeight::Regular]);
        assert_eq!(
            icon.variant(VariantKey::new(IconWeight::Bold, false))
                .unwrap()
                .component_name
                .as_deref(),
            Some("CheckBold")
        );
    }

    #[test]
    fn test_migrate_version_map_revision() {
        let catalog = Catalog::from_json(
            r#"[{
                "name": "Heart",
                "tags": ["love"],
                "versionAdded": "2.0",
                "weights": ["regular"],
                "supportsDuotone": true,
                "variants": {"regular": "2.0", "regular-duotone": "2.1"}
            }]"#,
        )
        .unwrap();

        assert_eq!(catalog.revision(), Some(SchemaRevision::VersionMap));
        let icon = catalog.get("Heart").unwrap();
        let duotone = icon
            .variant(VariantKey::new(IconWeight::Regular, true))
            .unwrap();
        assert_eq!(duotone.version.as_known(), Some("2.1"));
        assert!(duotone.component_name.is_none());
    }

    #[test]
    fn test_migrate_legacy_revision() {
        let catalog = Catalog::from_json(
            r#"[
                {"name": "ArrowBold", "tags": ["ArrowBold", "outline"], "category": "Navigation"},
                {"name": "Star", "tags": ["Star"], "style": "Filled"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.revision(), Some(SchemaRevision::Legacy));
        let arrow = catalog.get("ArrowBold").unwrap();
        assert_eq!(arrow.weights, vec![IconWeight::Bold]);
        assert!(arrow.version_added.is_unknown());
        assert!(arrow.variants.is_empty());
        let star = catalog.get("Star").unwrap();
        assert_eq!(star.weights, vec![IconWeight::Fill]);
        assert_eq!(star.style(), IconStyle::Filled);
        assert_eq!(arrow.style, None);
    }

    #[test]
    fn test_mixed_revisions_report_oldest() {
        let catalog = Catalog::from_json(
            r#"[
                {"name": "A", "tags": [], "weights": ["regular"], "variants": {"regular": {"version": "1.0"}}},
                {"name": "B", "tags": [], "weights": ["regular"], "variants": {"regular": "1.0"}}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.revision(), Some(SchemaRevision::VersionMap));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_empty_and_invalid_catalogs() {
        let empty = Catalog::from_json("[]").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.revision(), None);

        assert!(Catalog::from_json(r#"{"icons": []}"#).is_err());
    }
}
