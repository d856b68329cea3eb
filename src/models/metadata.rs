//! Raw per-variant metadata shipped by the vendor icon package.

use crate::models::{IconWeight, VariantKey, VersionTag};
use serde::{Deserialize, Serialize};

/// One entry of the vendor's `icons.meta.json`, describing a single
/// weight/duotone variant of a logical icon.
///
/// The triple (`component_name`, `weight`, `duotone`) is unique within a
/// metadata file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIconMetadataEntry {
    /// Exported symbol name for this exact variant (e.g., "CheckBold")
    pub component_name: String,
    /// Kebab-case identifier (e.g., "check")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Variant weight; regular when absent
    #[serde(default)]
    pub weight: IconWeight,
    /// Whether this is the duotone rendering
    #[serde(default)]
    pub duotone: bool,
    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Version the variant first appeared in
    #[serde(default)]
    pub version_added: VersionTag,
    /// Version the variant last changed in
    #[serde(default)]
    pub version_last_modified: VersionTag,
    /// Variant-specific component name, when it differs from `component_name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_component_name: Option<String>,
    /// Source file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl RawIconMetadataEntry {
    /// Creates an entry with no tags or version information.
    pub fn new(component_name: impl Into<String>, weight: IconWeight, duotone: bool) -> Self {
        Self {
            component_name: component_name.into(),
            name: None,
            weight,
            duotone,
            tags: Vec::new(),
            version_added: VersionTag::Unknown,
            version_last_modified: VersionTag::Unknown,
            variant_component_name: None,
            file_name: None,
        }
    }

    /// Variant key of this entry (e.g., "fill-duotone").
    #[must_use]
    pub const fn variant_key(&self) -> VariantKey {
        VariantKey::new(self.weight, self.duotone)
    }

    /// Source file name without a trailing `.tsx` extension.
    #[must_use]
    pub fn file_stem(&self) -> Option<&str> {
        self.file_name
            .as_deref()
            .map(|f| f.strip_suffix(".tsx").unwrap_or(f))
    }
}
