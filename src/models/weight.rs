//! Icon weights, legacy styles, and variant keys.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Stroke weight of a rendered icon variant.
///
/// Weights order lexicographically by their serialized name
/// (`bold` < `fill` < `regular`), which is the order `weights` is emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconWeight {
    /// Default outline weight
    #[default]
    Regular,
    /// Heavier outline
    Bold,
    /// Solid fill
    Fill,
}

impl IconWeight {
    /// All weights in serialized (lexicographic) order.
    pub const ALL: [Self; 3] = [Self::Bold, Self::Fill, Self::Regular];

    /// Returns the serialized name (e.g., "bold").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Bold => "bold",
            Self::Fill => "fill",
        }
    }

    /// Returns the capitalized label used in SVG ids (e.g., "Bold").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Bold => "Bold",
            Self::Fill => "Fill",
        }
    }

    /// Component-name suffix the icon package uses for this weight.
    ///
    /// Regular variants carry no suffix.
    #[must_use]
    pub const fn component_suffix(self) -> &'static str {
        match self {
            Self::Regular => "",
            Self::Bold => "Bold",
            Self::Fill => "Fill",
        }
    }
}

impl Ord for IconWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for IconWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for IconWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconWeight {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "bold" => Ok(Self::Bold),
            "fill" | "filled" => Ok(Self::Fill),
            other => anyhow::bail!("Invalid weight '{other}'. Must be 'regular', 'bold', or 'fill'"),
        }
    }
}

/// Style classification used by early catalogs, derived from the name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconStyle {
    /// No recognised suffix
    Regular,
    /// Name ends with "Bold"
    Bold,
    /// Name ends with "Filled"
    Filled,
}

impl IconStyle {
    /// Classifies an icon by its component name.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconshelf::models::IconStyle;
    ///
    /// assert_eq!(IconStyle::from_name("ArrowBold"), IconStyle::Bold);
    /// assert_eq!(IconStyle::from_name("ArrowFilled"), IconStyle::Filled);
    /// assert_eq!(IconStyle::from_name("Arrow"), IconStyle::Regular);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.ends_with("Bold") {
            Self::Bold
        } else if name.ends_with("Filled") {
            Self::Filled
        } else {
            Self::Regular
        }
    }

    /// Weight that renders this style.
    #[must_use]
    pub const fn weight(self) -> IconWeight {
        match self {
            Self::Regular => IconWeight::Regular,
            Self::Bold => IconWeight::Bold,
            Self::Filled => IconWeight::Fill,
        }
    }

    /// Display name (e.g., "Filled").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Bold => "Bold",
            Self::Filled => "Filled",
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "bold" => Ok(Self::Bold),
            "filled" | "fill" => Ok(Self::Filled),
            other => anyhow::bail!("Invalid style '{other}'. Must be 'regular', 'bold', or 'filled'"),
        }
    }
}

/// Identifies one weight/duotone combination of a logical icon.
///
/// Serialized as `weight` or `weight-duotone` (e.g., "bold-duotone").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantKey {
    /// Variant weight
    pub weight: IconWeight,
    /// Whether the variant is the two-tone rendering
    pub duotone: bool,
}

impl VariantKey {
    /// Creates a variant key.
    #[must_use]
    pub const fn new(weight: IconWeight, duotone: bool) -> Self {
        Self { weight, duotone }
    }

    /// Default component name for this variant of `name`
    /// (e.g., "Check" + bold duotone -> "CheckBoldDuotone").
    #[must_use]
    pub fn component_name(self, name: &str) -> String {
        let duotone = if self.duotone { "Duotone" } else { "" };
        format!("{name}{}{duotone}", self.weight.component_suffix())
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.duotone {
            write!(f, "{}-duotone", self.weight)
        } else {
            f.write_str(self.weight.as_str())
        }
    }
}

impl FromStr for VariantKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.strip_suffix("-duotone") {
            Some(weight) => Ok(Self::new(weight.parse()?, true)),
            None => Ok(Self::new(s.parse()?, false)),
        }
    }
}

impl Serialize for VariantKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VariantKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_order_is_lexicographic() {
        let mut weights = vec![IconWeight::Regular, IconWeight::Fill, IconWeight::Bold];
        weights.sort();
        assert_eq!(
            weights,
            vec![IconWeight::Bold, IconWeight::Fill, IconWeight::Regular]
        );
    }

    #[test]
    fn test_weight_parse() {
        assert_eq!("bold".parse::<IconWeight>().unwrap(), IconWeight::Bold);
        assert_eq!(" Fill ".parse::<IconWeight>().unwrap(), IconWeight::Fill);
        assert!("heavy".parse::<IconWeight>().is_err());
    }

    #[test]
    fn test_weight_serde_lowercase() {
        let json = serde_json::to_string(&IconWeight::Fill).unwrap();
        assert_eq!(json, "\"fill\"");
        let weight: IconWeight = serde_json::from_str("\"regular\"").unwrap();
        assert_eq!(weight, IconWeight::Regular);
    }

    #[test]
    fn test_style_from_name() {
        assert_eq!(IconStyle::from_name("HeartBold"), IconStyle::Bold);
        assert_eq!(IconStyle::from_name("HeartFilled"), IconStyle::Filled);
        assert_eq!(IconStyle::from_name("Heart"), IconStyle::Regular);
        assert_eq!(IconStyle::from_name("Bolder"), IconStyle::Regular);
    }

    #[test]
    fn test_variant_key_display_and_parse() {
        let key = VariantKey::new(IconWeight::Bold, true);
        assert_eq!(key.to_string(), "bold-duotone");
        assert_eq!("bold-duotone".parse::<VariantKey>().unwrap(), key);
        assert_eq!(
            "regular".parse::<VariantKey>().unwrap(),
            VariantKey::new(IconWeight::Regular, false)
        );
        assert!("thin-duotone".parse::<VariantKey>().is_err());
    }

    #[test]
    fn test_variant_component_name() {
        assert_eq!(
            VariantKey::new(IconWeight::Regular, false).component_name("Check"),
            "Check"
        );
        assert_eq!(
            VariantKey::new(IconWeight::Regular, true).component_name("Check"),
            "CheckDuotone"
        );
        assert_eq!(
            VariantKey::new(IconWeight::Fill, true).component_name("Check"),
            "CheckFillDuotone"
        );
    }
}
