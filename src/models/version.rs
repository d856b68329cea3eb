//! Package version tags carried by icon metadata.
//!
//! Versions are kept in their original textual form; comparison and equality
//! are derived from the dot-separated components.

use crate::constants::UNKNOWN_VERSION;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A version string as found in metadata, or the "unknown" marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum VersionTag {
    /// A concrete version (e.g., "5.6.0", "1.0")
    Known(String),
    /// Missing, empty, or literally "unknown"
    #[default]
    Unknown,
}

impl VersionTag {
    /// Parses a raw version value. Empty strings and "unknown" become `Unknown`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == UNKNOWN_VERSION {
            Self::Unknown
        } else {
            Self::Known(trimmed.to_string())
        }
    }

    /// Returns the version text, or `None` when unknown.
    #[must_use]
    pub fn as_known(&self) -> Option<&str> {
        match self {
            Self::Known(v) => Some(v),
            Self::Unknown => None,
        }
    }

    /// Returns true for the "unknown" marker.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Equality ignoring the patch component.
    ///
    /// Two versions are equal when both are known and their major and minor
    /// components are textually equal. Unknown versions are never equal to
    /// anything, including each other.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconshelf::models::VersionTag;
    ///
    /// let v = |s: &str| VersionTag::parse(s);
    /// assert!(v("5.6.0").same_release(&v("5.6.9")));
    /// assert!(!v("5.6.0").same_release(&v("5.7.0")));
    /// assert!(!v("unknown").same_release(&v("5.6.0")));
    /// ```
    #[must_use]
    pub fn same_release(&self, other: &Self) -> bool {
        match (self.as_known(), other.as_known()) {
            (Some(a), Some(b)) => is_version_equal(a, b),
            _ => false,
        }
    }

    /// Keeps the earlier of two versions; unknown never wins over a known version.
    #[must_use]
    pub fn earliest(self, other: Self) -> Self {
        match (&self, &other) {
            (Self::Unknown, _) => other,
            (_, Self::Unknown) => self,
            (Self::Known(a), Self::Known(b)) => {
                if compare_versions(b, a) == Ordering::Less {
                    other
                } else {
                    self
                }
            }
        }
    }

    /// Keeps the later of two versions; unknown never wins over a known version.
    #[must_use]
    pub fn latest(self, other: Self) -> Self {
        match (&self, &other) {
            (Self::Unknown, _) => other,
            (_, Self::Unknown) => self,
            (Self::Known(a), Self::Known(b)) => {
                if compare_versions(b, a) == Ordering::Greater {
                    other
                } else {
                    self
                }
            }
        }
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_known().unwrap_or(UNKNOWN_VERSION))
    }
}

impl From<Option<String>> for VersionTag {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map_or(Self::Unknown, Self::parse)
    }
}

impl Serialize for VersionTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionTag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.into())
    }
}

/// Compares major and minor components textually, ignoring patch.
///
/// Returns false when either version lacks a minor component.
#[must_use]
pub fn is_version_equal(a: &str, b: &str) -> bool {
    let mut left = a.split('.');
    let mut right = b.split('.');

    match (left.next(), left.next(), right.next(), right.next()) {
        (Some(major_a), Some(minor_a), Some(major_b), Some(minor_b)) => {
            major_a == major_b && minor_a == minor_b
        }
        _ => false,
    }
}

/// Orders two version strings component by component.
///
/// Components compare numerically when both are integers, textually otherwise.
/// A missing component sorts before a present one ("1.0" < "1.0.1").
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(nx), Ok(ny)) => nx.cmp(&ny),
                    _ => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}
