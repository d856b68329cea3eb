//! Multi-word substring matching over icon names and tags.

use crate::models::IconRecord;

/// Parsed search text.
///
/// Words are lower-cased and split on runs of whitespace. Every word must
/// appear somewhere in an icon's searchable text; order does not matter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    words: Vec<String>,
}

impl SearchQuery {
    /// Parses raw search input.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconshelf::search::SearchQuery;
    ///
    /// assert_eq!(SearchQuery::parse("  Arrow   UP "), SearchQuery::parse("arrow up"));
    /// assert!(SearchQuery::parse("   ").is_empty());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let words = input
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self { words }
    }

    /// Query words in input order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// True for a blank query, which matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true if every word is a substring of the icon's searchable text.
    #[must_use]
    pub fn matches(&self, icon: &IconRecord) -> bool {
        if self.is_empty() {
            return true;
        }
        let text = searchable_text(icon);
        self.words.iter().all(|word| text.contains(word.as_str()))
    }
}

/// Lower-cased name followed by the lower-cased tags, space-joined.
#[must_use]
pub fn searchable_text(icon: &IconRecord) -> String {
    let mut text = icon.name.to_lowercase();
    for tag in &icon.tags {
        text.push(' ');
        text.push_str(&tag.to_lowercase());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IconWeight, VersionTag};
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

    #[test]
    fn test_all_words_must_match() {
        let arrow = icon("ArrowUpCircle", &["navigation"]);
        assert!(SearchQuery::parse("arrow up").matches(&arrow));
        assert!(!SearchQuery::parse("arrow left").matches(&arrow));
    }

    #[test]
    fn test_word_order_is_irrelevant() {
        let arrow = icon("ArrowUpCircle", &["navigation"]);
        assert!(SearchQuery::parse("navigation circle").matches(&arrow));
        assert!(SearchQuery::parse("up arrow").matches(&arrow));
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let arrow = icon("ArrowUpCircle", &["Navigation"]);
        let messy = SearchQuery::parse("  Arrow   UP ");
        assert_eq!(messy, SearchQuery::parse("arrow up"));
        assert_eq!(messy.words(), &["arrow".to_string(), "up".to_string()]);
        assert!(messy.matches(&arrow));
        assert!(SearchQuery::parse("NAVIG").matches(&arrow));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = SearchQuery::parse("");
        assert!(query.is_empty());
        assert!(query.matches(&icon("Anything", &[])));
    }

    #[test]
    fn test_match_is_substring_not_fuzzy() {
        let check = icon("Check", &["done"]);
        assert!(SearchQuery::parse("hec").matches(&check));
        assert!(!SearchQuery::parse("chk").matches(&check));
    }

    #[test]
    fn test_searchable_text() {
        let arrow = icon("ArrowUpCircle", &["Navigation", "*new*"]);
        assert_eq!(searchable_text(&arrow), "arrowupcircle navigation *new*");
    }
}
