//! Naming conventions and usage snippets for the icon detail view.

use crate::config::PackageConfig;
use crate::models::{IconRecord, VariantKey};
use serde::Serialize;

/// Names under which one variant of an icon can be imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconNames {
    /// Canonical icon name
    pub base_name: String,
    /// Source file for subpath imports
    pub file_name: String,
    /// Component name for this variant; the regular weight carries no suffix
    pub display_variant_name: String,
    /// Recommended alias (e.g., "SiCheckBold")
    pub prefixed_name: String,
    /// Suffix alias (e.g., "CheckBoldIcon")
    pub suffixed_name: String,
}

impl IconNames {
    /// Derives all names for `icon` in variant `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconshelf::models::{Catalog, IconWeight, VariantKey};
    /// use iconshelf::resolve::IconNames;
    ///
    /// let catalog = Catalog::from_json(r#"[{"name": "Check", "tags": [], "weights": ["regular"]}]"#).unwrap();
    /// let icon = catalog.get("Check").unwrap();
    /// let names = IconNames::new(icon, VariantKey::new(IconWeight::Regular, true), "Si");
    /// assert_eq!(names.prefixed_name, "SiCheckDuotone");
    /// assert_eq!(names.suffixed_name, "CheckDuotoneIcon");
    /// ```
    #[must_use]
    pub fn new(icon: &IconRecord, key: VariantKey, prefix: &str) -> Self {
        let info = icon.variant(key);
        let component = info.and_then(|i| i.component_name.as_deref());

        let file_name = info
            .and_then(|i| i.file_name.as_deref())
            .or(component)
            .unwrap_or(&icon.name)
            .to_string();

        let display_variant_name = component
            .filter(|_| !key.weight.component_suffix().is_empty())
            .map_or_else(|| key.component_name(&icon.name), str::to_string);

        Self {
            base_name: icon.name.clone(),
            file_name,
            prefixed_name: format!("{prefix}{display_variant_name}"),
            suffixed_name: format!("{display_variant_name}Icon"),
            display_variant_name,
        }
    }
}

/// Copyable code snippets for one icon variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippets {
    /// Prefixed named import from the package root
    pub recommended: String,
    /// The three equivalent component aliases
    pub aliases: String,
    /// Base component with weight/duotone props
    pub dynamic_variants: String,
    /// Per-file subpath import
    pub subpath_import: String,
}

impl CodeSnippets {
    /// Renders snippets for `names` at `size` pixels.
    #[must_use]
    pub fn generate(names: &IconNames, package: &PackageConfig, key: VariantKey, size: u32) -> Self {
        let IconNames {
            base_name,
            file_name,
            display_variant_name,
            prefixed_name,
            suffixed_name,
        } = names;
        let pkg = &package.name;
        let prefix = &package.component_prefix;

        let recommended =
            format!("import {{ {prefixed_name} }} from '{pkg}';\n\n<{prefixed_name} size={{{size}}} />");

        let aliases = format!(
            "// Base\n<{display_variant_name} />\n\n// Prefix (Recommended)\n<{prefixed_name} />\n\n// Suffix\n<{suffixed_name} />"
        );

        let mut props = String::new();
        if !key.weight.component_suffix().is_empty() {
            props.push_str(&format!(" weight=\"{}\"", key.weight));
        }
        if key.duotone {
            props.push_str(" duotone");
        }
        let subpath = &package.dynamic_variants_subpath;
        let dynamic_variants = format!(
            "import {{ {prefix}{base_name} }} from '{pkg}/{subpath}';\n\n<{prefix}{base_name}{props} size={{{size}}} />"
        );

        let subpath_import = format!(
            "import {{ {prefixed_name} }} from '{pkg}/icons/{file_name}';\n\n<{prefixed_name} size={{{size}}} />"
        );

        Self {
            recommended,
            aliases,
            dynamic_variants,
            subpath_import,
        }
    }
}

/// Download filename for an exported SVG (e.g., "check-bold-duotone.svg").
#[must_use]
pub fn svg_filename(name: &str, key: VariantKey) -> String {
    format!("{}-{key}.svg", name.to_lowercase())
}

/// Element id for an exported SVG (e.g., "Check-Bold-Duotone").
#[must_use]
pub fn svg_id(name: &str, key: VariantKey) -> String {
    let duotone = if key.duotone { "-Duotone" } else { "" };
    format!("{name}-{}{duotone}", key.weight.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IconWeight, VariantInfo, VersionTag};
    use std::collections::BTreeMap;

    fn check() -> IconRecord {
        let mut variants = BTreeMap::new();
        variants.insert(
            VariantKey::new(IconWeight::Regular, false),
            VariantInfo {
                version: VersionTag::parse("1.0"),
                component_name: Some("CheckRegular".to_string()),
                file_name: Some("check-regular".to_string()),
            },
        );
        variants.insert(
            VariantKey::new(IconWeight::Bold, false),
            VariantInfo {
                version: VersionTag::parse("1.0"),
                component_name: Some("CheckBold".to_string()),
                file_name: None,
            },
        );
        IconRecord {
            name: "Check".to_string(),
            kebab_name: Some("check".to_string()),
            tags: vec!["Check".to_string()],
            version_added: VersionTag::parse("1.0"),
            version_last_modified: VersionTag::Unknown,
            weights: vec![IconWeight::Bold, IconWeight::Regular],
            supports_duotone: false,
            variants,
            style: None,
        }
    }

    #[test]
    fn test_regular_names_omit_weight() {
        let names = IconNames::new(&check(), VariantKey::new(IconWeight::Regular, false), "Si");
        assert_eq!(names.display_variant_name, "Check");
        assert_eq!(names.prefixed_name, "SiCheck");
        assert_eq!(names.suffixed_name, "CheckIcon");
        assert_eq!(names.file_name, "check-regular");
    }

    #[test]
    fn test_bold_names_use_component_name() {
        let names = IconNames::new(&check(), VariantKey::new(IconWeight::Bold, false), "Si");
        assert_eq!(names.display_variant_name, "CheckBold");
        assert_eq!(names.prefixed_name, "SiCheckBold");
        assert_eq!(names.file_name, "CheckBold");
    }

    #[test]
    fn test_unlisted_variant_derives_names() {
        let names = IconNames::new(&check(), VariantKey::new(IconWeight::Fill, true), "Si");
        assert_eq!(names.display_variant_name, "CheckFillDuotone");
        assert_eq!(names.file_name, "Check");
    }

    #[test]
    fn test_snippets() {
        let key = VariantKey::new(IconWeight::Bold, true);
        let names = IconNames::new(&check(), key, "Si");
        let snippets = CodeSnippets::generate(&names, &PackageConfig::default(), key, 32);

        assert_eq!(
            snippets.recommended,
            "import { SiCheckBoldDuotone } from 'stera-icons';\n\n<SiCheckBoldDuotone size={32} />"
        );
        assert!(snippets.aliases.starts_with("// Base\n<CheckBoldDuotone />"));
        assert!(snippets.aliases.ends_with("// Suffix\n<CheckBoldDuotoneIcon />"));
        assert_eq!(
            snippets.dynamic_variants,
            "import { SiCheck } from 'stera-icons/dynamic-variants';\n\n<SiCheck weight=\"bold\" duotone size={32} />"
        );
        assert_eq!(
            snippets.subpath_import,
            "import { SiCheckBoldDuotone } from 'stera-icons/icons/Check';\n\n<SiCheckBoldDuotone size={32} />"
        );
    }

    #[test]
    fn test_regular_dynamic_snippet_has_no_weight_prop() {
        let key = VariantKey::new(IconWeight::Regular, false);
        let names = IconNames::new(&check(), key, "Si");
        let snippets = CodeSnippets::generate(&names, &PackageConfig::default(), key, 24);
        assert!(snippets.dynamic_variants.ends_with("<SiCheck size={24} />"));
    }

    #[test]
    fn test_svg_filename_and_id() {
        let key = VariantKey::new(IconWeight::Fill, true);
        assert_eq!(svg_filename("ArrowUp", key), "arrowup-fill-duotone.svg");
        assert_eq!(svg_id("ArrowUp", key), "ArrowUp-Fill-Duotone");

        let regular = VariantKey::new(IconWeight::Regular, false);
        assert_eq!(svg_filename("ArrowUp", regular), "arrowup-regular.svg");
        assert_eq!(svg_id("ArrowUp", regular), "ArrowUp-Regular");
    }
}
