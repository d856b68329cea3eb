//! Grouping-key normalisation for raw component names.

use crate::models::{IconWeight, VariantKey};

/// Maps variant component names to the logical icon they belong to by
/// stripping one known suffix.
///
/// Suffixes are tried longest first, so "IconBold" wins over "Icon" and
/// "BoldDuotone" wins over "Duotone". A suffix is only stripped when
/// something remains, so an icon literally named "Bold" keeps its name.
///
/// [`NameNormalizer::grouping_key_for`] additionally skips suffixes that
/// name a different weight or duotone state than the entry itself, so a
/// regular-weight icon called "TextBold" stays its own icon.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameNormalizer {
    suffixes: Vec<String>,
}

impl NameNormalizer {
    /// Creates a normalizer from a suffix list in any order.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut suffixes: Vec<String> = suffixes
            .into_iter()
            .map(Into::into)
            .filter(|s| !s.is_empty())
            .collect();
        suffixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        suffixes.dedup();
        Self { suffixes }
    }

    /// Normalizer for packages whose component names are already canonical.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Returns the grouping key for a component name.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconshelf::catalog::NameNormalizer;
    ///
    /// let normalizer = NameNormalizer::new(["Icon", "IconBold", "Bold"]);
    /// assert_eq!(normalizer.grouping_key("CheckIconBold"), "Check");
    /// assert_eq!(normalizer.grouping_key("CheckBold"), "Check");
    /// assert_eq!(normalizer.grouping_key("Check"), "Check");
    /// ```
    #[must_use]
    pub fn grouping_key<'a>(&self, component_name: &'a str) -> &'a str {
        for suffix in &self.suffixes {
            if let Some(base) = component_name.strip_suffix(suffix.as_str()) {
                if !base.is_empty() {
                    return base;
                }
            }
        }
        component_name
    }

    /// Returns the grouping key for the component of variant `key`.
    ///
    /// Only suffixes that agree with the variant are stripped: "Bold" needs a
    /// bold weight, "Fill"/"Filled" a fill weight, "Regular" a regular weight
    /// and "Duotone" a duotone variant. Suffixes naming none of these, such
    /// as "Icon", always apply.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconshelf::catalog::NameNormalizer;
    /// use iconshelf::models::{IconWeight, VariantKey};
    ///
    /// let normalizer = NameNormalizer::new(["Bold"]);
    /// let bold = VariantKey::new(IconWeight::Bold, false);
    /// let regular = VariantKey::new(IconWeight::Regular, false);
    /// assert_eq!(normalizer.grouping_key_for("TextBold", bold), "Text");
    /// assert_eq!(normalizer.grouping_key_for("TextBold", regular), "TextBold");
    /// ```
    #[must_use]
    pub fn grouping_key_for<'a>(&self, component_name: &'a str, key: VariantKey) -> &'a str {
        for suffix in self.suffixes.iter().filter(|s| suffix_agrees(s, key)) {
            if let Some(base) = component_name.strip_suffix(suffix.as_str()) {
                if !base.is_empty() {
                    return base;
                }
            }
        }
        component_name
    }

    /// Suffixes in the order they are tried.
    #[must_use]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

fn suffix_agrees(suffix: &str, key: VariantKey) -> bool {
    let weight = [
        ("Bold", IconWeight::Bold),
        ("Fill", IconWeight::Fill),
        ("Regular", IconWeight::Regular),
    ]
    .into_iter()
    .all(|(marker, weight)| !suffix.contains(marker) || key.weight == weight);
    weight && (!suffix.contains("Duotone") || key.duotone)
}
