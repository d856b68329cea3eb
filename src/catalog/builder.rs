//! Groups raw per-variant metadata into catalog records.

use crate::catalog::{BuildReport, ExportTable, NameNormalizer};
use crate::constants::{NEW_TAG, UPDATED_TAG};
use crate::models::{
    IconRecord, IconWeight, RawIconMetadataEntry, VariantInfo, VariantKey, VersionTag,
};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tracing::{debug, warn};

/// Result of a catalog build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogBuild {
    /// Records in first-seen order of their grouping key
    pub records: Vec<IconRecord>,
    /// Counts and skipped entries
    pub report: BuildReport,
}

/// Builds the icon catalog from vendor metadata.
///
/// # Examples
///
/// ```
/// use iconshelf::catalog::{CatalogBuilder, ExportTable, NameNormalizer};
/// use iconshelf::models::{IconWeight, RawIconMetadataEntry, VersionTag};
///
/// let exports = ExportTable::from_names(["Check", "CheckBold"]);
/// let metadata = vec![
///     RawIconMetadataEntry::new("Check", IconWeight::Regular, false),
///     RawIconMetadataEntry::new("CheckBold", IconWeight::Bold, false),
/// ];
///
/// let build = CatalogBuilder::new(VersionTag::parse("1.0.0"))
///     .with_normalizer(NameNormalizer::new(["Bold"]))
///     .build(&metadata, &exports);
///
/// assert_eq!(build.records.len(), 1);
/// assert_eq!(build.records[0].name, "Check");
/// ```
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    current_version: VersionTag,
    deprecated: HashSet<String>,
    normalizer: NameNormalizer,
}

impl CatalogBuilder {
    /// Creates a builder tagging against `current_version`, with no
    /// deprecated names and identity name normalisation.
    #[must_use]
    pub fn new(current_version: VersionTag) -> Self {
        Self {
            current_version,
            deprecated: HashSet::new(),
            normalizer: NameNormalizer::identity(),
        }
    }

    /// Sets the component names to exclude as legacy aliases.
    pub fn with_deprecated<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deprecated = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the grouping-key normalizer.
    pub fn with_normalizer(mut self, normalizer: NameNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Version used for release tagging.
    #[must_use]
    pub const fn current_version(&self) -> &VersionTag {
        &self.current_version
    }

    /// Runs the build over `metadata`, checking each entry against `exports`.
    ///
    /// Deprecated and unexported entries are skipped and recorded in the
    /// report. Records come out in the order their grouping key was first
    /// seen; running twice over the same input yields identical output.
    pub fn build(&self, metadata: &[RawIconMetadataEntry], exports: &ExportTable) -> CatalogBuild {
        let mut report = BuildReport {
            current_version: self.current_version.clone(),
            total_entries: metadata.len(),
            ..BuildReport::default()
        };

        let mut groups: Vec<IconGroup> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for entry in metadata {
            let component = entry.component_name.as_str();

            if self.deprecated.contains(component) {
                warn!("Excluding deprecated icon {component}");
                report.deprecated.push(component.to_string());
                continue;
            }

            if !exports.contains(component) {
                warn!("Icon \"{component}\" not found in the package exports");
                report.invalid.push(component.to_string());
                continue;
            }

            let key = self.normalizer.grouping_key_for(component, entry.variant_key());
            let idx = *index.entry(key.to_string()).or_insert_with(|| {
                groups.push(IconGroup::new(key, entry.name.clone()));
                groups.len() - 1
            });

            if !groups[idx].absorb(entry) {
                if component == key {
                    debug!(
                        "Ignoring duplicate {} variant for {key}",
                        entry.variant_key()
                    );
                } else {
                    warn!(
                        "Ignoring {component}: {key} already has a {} variant",
                        entry.variant_key()
                    );
                }
                report.duplicate_variants += 1;
            }
        }

        let records: Vec<IconRecord> = groups
            .into_iter()
            .map(|group| group.finish(&self.current_version))
            .collect();

        report.new_icons = records.iter().filter(|r| r.is_new()).count();
        report.updated_icons = records.iter().filter(|r| r.is_updated()).count();
        report.icons = records.len();

        CatalogBuild { records, report }
    }
}

/// Tag list that keeps first-seen order and drops repeats.
#[derive(Debug, Default)]
struct TagSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl TagSet {
    fn insert(&mut self, tag: &str) {
        if self.seen.insert(tag.to_string()) {
            self.order.push(tag.to_string());
        }
    }
}

/// Accumulator for all variants sharing a grouping key.
#[derive(Debug)]
struct IconGroup {
    name: String,
    kebab_name: Option<String>,
    tags: TagSet,
    weights: BTreeSet<IconWeight>,
    supports_duotone: bool,
    variants: BTreeMap<VariantKey, VariantInfo>,
    earliest: VersionTag,
    latest: VersionTag,
}

impl IconGroup {
    fn new(name: &str, kebab_name: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            kebab_name,
            tags: TagSet::default(),
            weights: BTreeSet::new(),
            supports_duotone: false,
            variants: BTreeMap::new(),
            earliest: VersionTag::Unknown,
            latest: VersionTag::Unknown,
        }
    }

    /// Folds one entry into the group. Returns false if its variant key was
    /// already present; the first entry for a key keeps its variant info.
    fn absorb(&mut self, entry: &RawIconMetadataEntry) -> bool {
        self.weights.insert(entry.weight);
        self.supports_duotone |= entry.duotone;

        let earliest = std::mem::take(&mut self.earliest);
        self.earliest = earliest.earliest(entry.version_added.clone());
        let latest = std::mem::take(&mut self.latest);
        self.latest = latest.latest(entry.version_last_modified.clone());

        for tag in &entry.tags {
            self.tags.insert(tag);
        }

        let key = entry.variant_key();
        if self.variants.contains_key(&key) {
            return false;
        }
        self.variants.insert(
            key,
            VariantInfo {
                version: entry.version_added.clone(),
                component_name: entry.variant_component_name.clone(),
                file_name: entry.file_stem().map(str::to_string),
            },
        );
        true
    }

    fn finish(mut self, current_version: &VersionTag) -> IconRecord {
        self.tags.insert(&self.name);

        let is_new = self
            .variants
            .values()
            .any(|variant| variant.version.same_release(current_version));
        if is_new {
            self.tags.insert(NEW_TAG);
        } else if self.latest.same_release(current_version) {
            self.tags.insert(UPDATED_TAG);
        }

        IconRecord {
            name: self.name,
            kebab_name: self.kebab_name,
            tags: self.tags.order,
            version_added: self.earliest,
            version_last_modified: self.latest,
            weights: self.weights.into_iter().collect(),
            supports_duotone: self.supports_duotone,
            variants: self.variants,
            style: None,
        }
    }
}
