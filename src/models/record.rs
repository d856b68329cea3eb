//! Catalog records: one per logical icon.

use crate::constants::{NEW_TAG, UPDATED_TAG};
use crate::models::{IconStyle, IconWeight, VariantKey, VersionTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version and naming details for one variant of an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VariantInfo {
    /// Version the variant was added in
    pub version: VersionTag,
    /// Exported component for this variant (e.g., "CheckBoldDuotone")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    /// Source file name without extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// A logical icon as emitted into the catalog.
///
/// Records are produced once per build and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRecord {
    /// Canonical name shared by all variants (e.g., "Check")
    pub name: String,
    /// Kebab-case identifier, when the package provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kebab_name: Option<String>,
    /// Union of variant tags plus the name and release markers
    pub tags: Vec<String>,
    /// Earliest version any variant was added in
    pub version_added: VersionTag,
    /// Latest modification across variants; omitted when unknown
    #[serde(default, skip_serializing_if = "VersionTag::is_unknown")]
    pub version_last_modified: VersionTag,
    /// Distinct supported weights, sorted
    pub weights: Vec<IconWeight>,
    /// True if any variant is duotone
    pub supports_duotone: bool,
    /// Per-variant version and naming info
    #[serde(default)]
    pub variants: BTreeMap<VariantKey, VariantInfo>,
    /// Stored style of records migrated from the first catalog revision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<IconStyle>,
}

impl IconRecord {
    /// Returns true if the record lists this exact variant.
    ///
    /// Records without variant details (migrated from old catalogs) fall back
    /// to their weight list and duotone flag.
    #[must_use]
    pub fn supports(&self, key: VariantKey) -> bool {
        if self.variants.is_empty() {
            return self.weights.contains(&key.weight) && (!key.duotone || self.supports_duotone);
        }
        self.variants.contains_key(&key)
    }

    /// Looks up variant info.
    #[must_use]
    pub fn variant(&self, key: VariantKey) -> Option<&VariantInfo> {
        self.variants.get(&key)
    }

    /// Style classification: the stored style when present, else by name suffix.
    #[must_use]
    pub fn style(&self) -> IconStyle {
        self.style.unwrap_or_else(|| IconStyle::from_name(&self.name))
    }

    /// True if tagged as introduced in the current release.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.tags.iter().any(|t| t == NEW_TAG)
    }

    /// True if tagged as modified in the current release.
    #[must_use]
    pub fn is_updated(&self) -> bool {
        self.tags.iter().any(|t| t == UPDATED_TAG)
    }
}

/// Contents of `version.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionMarker {
    /// Resolved vendor package version
    pub version: VersionTag,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> IconRecord {
        let mut variants = BTreeMap::new();
        variants.insert(
            VariantKey::new(IconWeight::Regular, false),
            VariantInfo {
                version: VersionTag::parse("1.0"),
                ..VariantInfo::default()
            },
        );
        variants.insert(
            VariantKey::new(IconWeight::Bold, true),
            VariantInfo {
                version: VersionTag::parse("1.1"),
                component_name: Some("CheckBoldDuotone".to_string()),
                file_name: None,
            },
        );
        IconRecord {
            name: "Check".to_string(),
            kebab_name: Some("check".to_string()),
            tags: vec!["done".to_string(), "Check".to_string()],
            version_added: VersionTag::parse("1.0"),
            version_last_modified: VersionTag::Unknown,
            weights: vec![IconWeight::Bold, IconWeight::Regular],
            supports_duotone: true,
            variants,
            style: None,
        }
    }

    #[test]
    fn test_serialize_field_names_and_omissions() {
        let json: serde_json::Value = serde_json::to_value(record()).unwrap();
        assert_eq!(json["name"], "Check");
        assert_eq!(json["kebabName"], "check");
        assert_eq!(json["versionAdded"], "1.0");
        assert!(json.get("versionLastModified").is_none());
        assert!(json.get("style").is_none());
        assert_eq!(json["weights"], serde_json::json!(["bold", "regular"]));
        assert_eq!(json["supportsDuotone"], true);
        assert_eq!(json["variants"]["regular"]["version"], "1.0");
        assert!(json["variants"]["regular"].get("componentName").is_none());
        assert_eq!(
            json["variants"]["bold-duotone"]["componentName"],
            "CheckBoldDuotone"
        );
    }

    #[test]
    fn test_supports_uses_variant_map() {
        let icon = record();
        assert!(icon.supports(VariantKey::new(IconWeight::Bold, true)));
        assert!(!icon.supports(VariantKey::new(IconWeight::Bold, false)));
        assert!(!icon.supports(VariantKey::new(IconWeight::Fill, false)));
    }

    #[test]
    fn test_supports_without_variants_uses_weights() {
        let mut icon = record();
        icon.variants.clear();
        assert!(icon.supports(VariantKey::new(IconWeight::Bold, false)));
        assert!(icon.supports(VariantKey::new(IconWeight::Bold, true)));
        assert!(!icon.supports(VariantKey::new(IconWeight::Fill, false)));
    }
}
