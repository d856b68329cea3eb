//! Style filtering, per-style counts, and the browsing display state.

use crate::models::{IconRecord, IconStyle, IconWeight, VariantKey};
use crate::search::SearchQuery;
use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// List-level style selector.
///
/// `All` keeps every icon in the list; the selected weight then only decides
/// which variant gets rendered. `Style` excludes icons of another style
/// (see [`IconRecord::style`]), as early catalogs did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleFilter {
    /// Every icon is listed
    #[default]
    All,
    /// Only icons of this style
    Style(IconStyle),
}

impl StyleFilter {
    /// Returns true if the icon passes the filter.
    #[must_use]
    pub fn includes(self, icon: &IconRecord) -> bool {
        match self {
            Self::All => true,
            Self::Style(style) => icon.style() == style,
        }
    }
}

impl fmt::Display for StyleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Style(style) => style.fmt(f),
        }
    }
}

impl FromStr for StyleFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Style)
    }
}

/// Filters icons by search query and style, preserving source order.
#[must_use]
pub fn filter_icons<'a>(
    icons: &'a [IconRecord],
    query: &SearchQuery,
    style: StyleFilter,
) -> Vec<&'a IconRecord> {
    icons
        .iter()
        .filter(|icon| style.includes(icon) && query.matches(icon))
        .collect()
}

/// Number of icons per style over a whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StyleCounts {
    /// All icons
    pub total: usize,
    /// Regular icons
    pub regular: usize,
    /// Bold icons
    pub bold: usize,
    /// Filled icons
    pub filled: usize,
}

impl StyleCounts {
    /// Counts icons by style.
    #[must_use]
    pub fn from_icons(icons: &[IconRecord]) -> Self {
        icons.iter().fold(
            Self {
                total: icons.len(),
                ..Self::default()
            },
            |mut counts, icon| {
                match icon.style() {
                    IconStyle::Regular => counts.regular += 1,
                    IconStyle::Bold => counts.bold += 1,
                    IconStyle::Filled => counts.filled += 1,
                }
                counts
            },
        )
    }
}

/// What the browser currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    /// Raw search input
    pub search: String,
    /// Weight requested for rendering
    pub weight: IconWeight,
    /// Duotone toggle
    pub duotone: bool,
    /// List-level style selector
    pub style_filter: StyleFilter,
    /// Name of the icon shown in the detail view
    pub opened: Option<String>,
}

impl DisplayState {
    /// Creates the initial state: no search, regular weight, all styles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Icons to render, in catalog order.
    #[must_use]
    pub fn visible<'a>(&self, icons: &'a [IconRecord]) -> Vec<&'a IconRecord> {
        filter_icons(icons, &SearchQuery::parse(&self.search), self.style_filter)
    }

    /// Variant requested from the renderer for every visible icon.
    #[must_use]
    pub const fn variant_key(&self) -> VariantKey {
        VariantKey::new(self.weight, self.duotone)
    }

    /// Opens the detail view for an icon.
    pub fn open(&mut self, name: impl Into<String>) {
        self.opened = Some(name.into());
    }

    /// Closes the detail view.
    pub fn close(&mut self) {
        self.opened = None;
    }

    /// Resets search text and style filter. Weight, duotone and the open
    /// icon are kept.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.style_filter = StyleFilter::All;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VersionTag;
    use std::collections::BTreeMap;

    fn icon(name: &str, tags: &[&str]) -> IconRecord {
        IconRecord {
            name: name.to_string(),
            kebab_name: None,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            version_added: VersionTag::Unknown,
            version_last_modified: VersionTag::Unknown,
            weights: vec![IconWeight::Regular],
            supports_duotone: false,
            variants: BTreeMap::new(),
            style: None,
        }
    }

    fn icons() -> Vec<IconRecord> {
        vec![
            icon("ArrowUp", &["navigation"]),
            icon("ArrowUpBold", &["navigation"]),
            icon("Heart", &["love"]),
            icon("ArrowDownFilled", &["navigation"]),
        ]
    }

    fn names<'a>(icons: &[&'a IconRecord]) -> Vec<&'a str> {
        icons.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_all_filter_includes_every_style() {
        let icons = icons();
        let visible = filter_icons(&icons, &SearchQuery::parse(""), StyleFilter::All);
        assert_eq!(visible.len(), 4);
    }

    #[test]
    fn test_style_filter_excludes_other_styles() {
        let icons = icons();
        let visible = filter_icons(
            &icons,
            &SearchQuery::parse("arrow"),
            StyleFilter::Style(IconStyle::Regular),
        );
        assert_eq!(names(&visible), vec!["ArrowUp"]);
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let icons = icons();
        let visible = filter_icons(&icons, &SearchQuery::parse("navigation"), StyleFilter::All);
        assert_eq!(
            names(&visible),
            vec!["ArrowUp", "ArrowUpBold", "ArrowDownFilled"]
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let icons = icons();
        let query = SearchQuery::parse("arrow");
        let first = filter_icons(&icons, &query, StyleFilter::All);
        let second = filter_icons(&icons, &query, StyleFilter::All);
        assert_eq!(first, second);
    }

    #[test]
    fn test_style_counts() {
        let counts = StyleCounts::from_icons(&icons());
        assert_eq!(
            counts,
            StyleCounts {
                total: 4,
                regular: 2,
                bold: 1,
                filled: 1,
            }
        );
    }

    #[test]
    fn test_stored_style_overrides_name_suffix() {
        let catalog = crate::models::Catalog::from_json(
            r#"[
                {"name": "Star", "tags": ["Star"], "style": "Filled"},
                {"name": "Moon", "tags": ["Moon"]}
            ]"#,
        )
        .unwrap();

        let filled = filter_icons(
            catalog.records(),
            &SearchQuery::parse(""),
            StyleFilter::Style(IconStyle::Filled),
        );
        assert_eq!(names(&filled), vec!["Star"]);
        assert_eq!(
            StyleCounts::from_icons(catalog.records()),
            StyleCounts {
                total: 2,
                regular: 1,
                bold: 0,
                filled: 1,
            }
        );
    }

    #[test]
    fn test_parse_style_filter() {
        assert_eq!("All".parse::<StyleFilter>().unwrap(), StyleFilter::All);
        assert_eq!(
            "bold".parse::<StyleFilter>().unwrap(),
            StyleFilter::Style(IconStyle::Bold)
        );
        assert!("thin".parse::<StyleFilter>().is_err());
    }

    #[test]
    fn test_display_state_weight_does_not_change_membership() {
        let icons = icons();
        let mut state = DisplayState::new();
        state.weight = IconWeight::Fill;
        state.duotone = true;
        assert_eq!(state.visible(&icons).len(), 4);
        assert_eq!(state.variant_key(), VariantKey::new(IconWeight::Fill, true));
    }

    #[test]
    fn test_display_state_open_close_and_clear() {
        let icons = icons();
        let mut state = DisplayState::new();
        state.search = "heart".to_string();
        state.style_filter = StyleFilter::Style(IconStyle::Bold);
        assert!(state.visible(&icons).is_empty());

        state.open("Heart");
        assert_eq!(state.opened.as_deref(), Some("Heart"));

        state.clear_filters();
        assert_eq!(state.visible(&icons).len(), 4);
        assert_eq!(state.opened.as_deref(), Some("Heart"));

        state.close();
        assert!(state.opened.is_none());
    }
}
