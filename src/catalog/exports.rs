//! Table of symbols the vendor icon package actually exports.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static EXPORT_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+(type\s+)?\{([^}]*)\}").expect("export list pattern is valid")
});

static EXPORT_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"export\s+(?:declare\s+)?(?:const|let|var|function|class)\s+([A-Za-z_$][A-Za-z0-9_$]*)",
    )
    .expect("export item pattern is valid")
});

static EXPORT_STAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"export\s+\*\s+(?:as\s+\w+\s+)?from\s+['"]([^'"]+)['"]"#)
        .expect("star re-export pattern is valid")
});

/// Set of exported symbol names, used to cross-check metadata entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportTable {
    names: HashSet<String>,
    star_reexports: Vec<String>,
}

impl ExportTable {
    /// Builds a table from an explicit list of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            star_reexports: Vec::new(),
        }
    }

    /// Parses a JSON array of symbol names.
    pub fn from_json(json: &str) -> Result<Self> {
        let names: Vec<String> =
            serde_json::from_str(json).context("Failed to parse export list as a JSON array")?;
        Ok(Self::from_names(names))
    }

    /// Scans TypeScript declarations for exported names.
    ///
    /// Recognises `export { A, B as C }` lists (the public name is taken),
    /// `export declare const X`, `export const X`, and `export function X`.
    /// `export type` lists are ignored since they carry no runtime symbol.
    /// `export * from '...'` re-exports are not followed; their module
    /// specifiers are kept in [`ExportTable::star_reexports`].
    #[must_use]
    pub fn from_declarations(source: &str) -> Self {
        let mut names = HashSet::new();

        for caps in EXPORT_LIST.captures_iter(source) {
            if caps.get(1).is_some() {
                continue;
            }
            for item in caps[2].split(',') {
                let item = item.trim();
                if item.is_empty() || item.starts_with("type ") {
                    continue;
                }
                let public = item.rsplit(" as ").next().unwrap_or(item).trim();
                if !public.is_empty() && public != "default" {
                    names.insert(public.to_string());
                }
            }
        }

        for caps in EXPORT_ITEM.captures_iter(source) {
            names.insert(caps[1].to_string());
        }

        let star_reexports = EXPORT_STAR
            .captures_iter(source)
            .map(|caps| caps[1].to_string())
            .collect();

        Self {
            names,
            star_reexports,
        }
    }

    /// Modules re-exported with `export *`, whose symbols are not listed.
    #[must_use]
    pub fn star_reexports(&self) -> &[String] {
        &self.star_reexports
    }

    /// Returns true if the package exports `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of exported symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing is exported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
