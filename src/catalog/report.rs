//! Summary of a catalog build.

use crate::models::VersionTag;
use serde::Serialize;

/// Counts and skipped names collected while building the catalog.
///
/// Skipped entries are not errors: the build succeeds with whatever remains.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    /// Resolved vendor package version
    pub current_version: VersionTag,
    /// Raw metadata entries read
    pub total_entries: usize,
    /// Entries dropped because their component is a deprecated alias
    pub deprecated: Vec<String>,
    /// Entries dropped because the package does not export their component
    pub invalid: Vec<String>,
    /// Entries ignored because their variant key was already filled
    pub duplicate_variants: usize,
    /// Icons tagged as new
    pub new_icons: usize,
    /// Icons tagged as updated
    pub updated_icons: usize,
    /// Icons emitted
    pub icons: usize,
}

impl BuildReport {
    /// Entries that made it into the catalog.
    #[must_use]
    pub fn accepted_entries(&self) -> usize {
        self.total_entries - self.deprecated.len() - self.invalid.len()
    }

    /// Human-readable summary lines.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Package version: {} ({} metadata entries)",
            self.current_version, self.total_entries
        )];

        if !self.deprecated.is_empty() {
            lines.push(format!(
                "Excluded {} deprecated entries:",
                self.deprecated.len()
            ));
            lines.extend(self.deprecated.iter().map(|name| format!("  - {name}")));
        }

        if !self.invalid.is_empty() {
            lines.push(format!(
                "Skipped {} entries not exported by the package:",
                self.invalid.len()
            ));
            lines.extend(self.invalid.iter().map(|name| format!("  - {name}")));
        }

        if self.duplicate_variants > 0 {
            lines.push(format!(
                "Ignored {} duplicate variant entries",
                self.duplicate_variants
            ));
        }

        lines.push(format!(
            "Tagged {} icons as \"*new*\" for version {}",
            self.new_icons, self.current_version
        ));
        lines.push(format!(
            "Tagged {} icons as \"*updated*\" for version {}",
            self.updated_icons, self.current_version
        ));
        lines.push(format!("Generated data for {} icons", self.icons));
        lines
    }
}
