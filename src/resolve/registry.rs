//! Variant resolution with memoisation and a placeholder fallback.
//!
//! The renderer asks for `(name, weight, duotone)` and always gets a
//! [`Glyph`] back. Which symbols exist is decided by an injected
//! [`VariantLookup`]; the resolver only adds caching and the fallback.

use crate::catalog::ExportTable;
use crate::models::{Catalog, IconStyle, IconWeight, VariantKey};
use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Source of renderable symbols, keyed by icon name and variant.
pub trait VariantLookup {
    /// Returns the exported symbol that renders `name` as `key`, or `None`
    /// if the combination is unavailable.
    fn lookup(&self, name: &str, key: VariantKey) -> Option<String>;
}

impl<T: VariantLookup + ?Sized> VariantLookup for &T {
    fn lookup(&self, name: &str, key: VariantKey) -> Option<String> {
        (**self).lookup(name, key)
    }
}

/// Lookup backed by a loaded catalog and the package's export table.
#[derive(Debug, Clone)]
pub struct CatalogLookup {
    catalog: Catalog,
    exports: Option<ExportTable>,
}

impl CatalogLookup {
    /// A variant resolves when the record lists it and its component is
    /// exported.
    #[must_use]
    pub const fn new(catalog: Catalog, exports: ExportTable) -> Self {
        Self {
            catalog,
            exports: Some(exports),
        }
    }

    /// Like [`CatalogLookup::new`], but every listed variant is assumed to be
    /// exported. Used when the vendor package is not installed.
    #[must_use]
    pub const fn trusting(catalog: Catalog) -> Self {
        Self {
            catalog,
            exports: None,
        }
    }

    /// The underlying catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// True if symbols are checked against an export table.
    #[must_use]
    pub const fn checks_exports(&self) -> bool {
        self.exports.is_some()
    }
}

impl VariantLookup for CatalogLookup {
    fn lookup(&self, name: &str, key: VariantKey) -> Option<String> {
        let icon = self.catalog.get(name)?;
        if !icon.supports(key) {
            return None;
        }

        let symbol = icon
            .variant(key)
            .and_then(|info| info.component_name.clone())
            .unwrap_or_else(|| key.component_name(&icon.name));

        match &self.exports {
            Some(exports) if !exports.contains(&symbol) => None,
            _ => Some(symbol),
        }
    }
}

/// Resolution result handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Glyph {
    /// A real exported component
    Component {
        /// Exported symbol name
        symbol: String,
        /// Variant the symbol renders
        key: VariantKey,
    },
    /// Fixed fallback glyph
    Placeholder,
}

impl Glyph {
    /// True for the fallback glyph.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Exported symbol, if resolved.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::Component { symbol, .. } => Some(symbol),
            Self::Placeholder => None,
        }
    }
}

/// SVG markup of the placeholder glyph: an outlined rounded square with a
/// smaller square inside, 24x24 viewbox scaled to `size`.
///
/// # Examples
///
/// ```
/// use iconshelf::resolve::placeholder_svg;
///
/// let svg = placeholder_svg(32);
/// assert!(svg.starts_with(r#"<svg width="32" height="32""#));
/// assert!(svg.contains(r#"<path d="M9 9h6v6H9z"/>"#));
/// ```
#[must_use]
pub fn placeholder_svg(size: u32) -> String {
    format!(
        concat!(
            r#"<svg width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" "#,
            r#"stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
            r#"<rect x="3" y="3" width="18" height="18" rx="2" ry="2"/>"#,
            r#"<path d="M9 9h6v6H9z"/>"#,
            "</svg>"
        ),
        size = size
    )
}

/// Variant selector used by callers that predate weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyVariant {
    /// Outline
    Regular,
    /// Heavier outline
    Bold,
    /// Solid
    Filled,
}

impl LegacyVariant {
    /// Equivalent modern variant; legacy variants are never duotone.
    #[must_use]
    pub const fn key(self) -> VariantKey {
        let weight = match self {
            Self::Regular => IconWeight::Regular,
            Self::Bold => IconWeight::Bold,
            Self::Filled => IconWeight::Fill,
        };
        VariantKey::new(weight, false)
    }
}

impl From<IconStyle> for LegacyVariant {
    fn from(style: IconStyle) -> Self {
        match style {
            IconStyle::Regular => Self::Regular,
            IconStyle::Bold => Self::Bold,
            IconStyle::Filled => Self::Filled,
        }
    }
}

impl fmt::Display for LegacyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Regular => "Regular",
            Self::Bold => "Bold",
            Self::Filled => "Filled",
        };
        f.write_str(label)
    }
}

impl FromStr for LegacyVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<IconStyle>().map(Self::from)
    }
}

/// Memoising resolver.
///
/// Every distinct `(name, variant)` is looked up once. Misses are cached as
/// the placeholder, so each one is warned about once until the cache is
/// cleared.
#[derive(Debug)]
pub struct IconResolver<L> {
    lookup: L,
    cache: HashMap<(String, VariantKey), Glyph>,
}

impl<L: VariantLookup> IconResolver<L> {
    /// Creates a resolver with an empty cache.
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            cache: HashMap::new(),
        }
    }

    /// The injected lookup.
    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Resolves a variant, falling back to the placeholder.
    pub fn resolve(&mut self, name: &str, weight: IconWeight, duotone: bool) -> Glyph {
        let key = VariantKey::new(weight, duotone);
        if let Some(glyph) = self.cache.get(&(name.to_string(), key)) {
            return glyph.clone();
        }

        let glyph = match self.lookup.lookup(name, key) {
            Some(symbol) => Glyph::Component { symbol, key },
            None => {
                warn!("Icon {name} ({key}) not found, using placeholder");
                Glyph::Placeholder
            }
        };
        self.cache.insert((name.to_string(), key), glyph.clone());
        glyph
    }

    /// Resolves a legacy `(name, variant)` request.
    pub fn resolve_legacy(&mut self, name: &str, variant: LegacyVariant) -> Glyph {
        let key = variant.key();
        self.resolve(name, key.weight, key.duotone)
    }

    /// Warms the cache for several icons in one variant.
    pub fn preload<I, S>(&mut self, names: I, weight: IconWeight, duotone: bool)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.resolve(name.as_ref(), weight, duotone);
        }
        debug!("Icon cache holds {} entries", self.cache.len());
    }

    /// Drops every cached resolution.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of cached resolutions, placeholders included.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
