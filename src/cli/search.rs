//! Search command: filter the catalog like the icon browser does.

use crate::cli::common::{open_catalog, print_json, CliError, CliResult};
use crate::models::{IconRecord, IconWeight, VariantKey};
use crate::search::{DisplayState, StyleCounts, StyleFilter};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Search icons by name and tags
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Search words; every word must match the name or a tag
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Catalog file (defaults to the configured output)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Only list icons of this style (all, regular, bold, filled)
    #[arg(long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Weight to render (regular, bold, fill)
    #[arg(long, value_name = "WEIGHT")]
    pub weight: Option<String>,

    /// Render the duotone variant
    #[arg(long)]
    pub duotone: bool,

    /// Maximum number of results to list
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable search result.
#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    query: String,
    style: String,
    variant: VariantKey,
    counts: StyleCounts,
    matches: usize,
    icons: Vec<IconMatch<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IconMatch<'a> {
    name: &'a str,
    tags: &'a [String],
    weights: &'a [IconWeight],
    supports_duotone: bool,
    /// False when the requested variant will render as a placeholder
    available: bool,
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self) -> CliResult<()> {
        let state = self.display_state()?;
        let catalog = open_catalog(self.catalog.as_deref(), self.root.as_deref())?.catalog;

        let visible = state.visible(catalog.records());
        let matches = visible.len();
        let key = state.variant_key();
        let shown = visible
            .into_iter()
            .take(self.limit.unwrap_or(usize::MAX))
            .collect::<Vec<_>>();

        if self.json {
            print_json(&SearchOutput {
                query: state.search.clone(),
                style: state.style_filter.to_string(),
                variant: key,
                counts: StyleCounts::from_icons(catalog.records()),
                matches,
                icons: shown.iter().map(|icon| icon_match(icon, key)).collect(),
            })?;
            return Ok(());
        }

        if shown.is_empty() {
            println!("No icons match '{}'", state.search);
            return Ok(());
        }

        let width = shown.iter().map(|i| i.name.len()).max().unwrap_or(0);
        for icon in &shown {
            let marker = if icon.supports(key) { " " } else { "!" };
            println!(
                "{marker} {:width$}  {}",
                icon.name,
                icon.tags.join(", "),
                width = width
            );
        }
        println!();
        if shown.len() < matches {
            println!(
                "Showing {} of {matches} matching icons ({} total)",
                shown.len(),
                catalog.len()
            );
        } else {
            println!("{matches} matching icons ({} total)", catalog.len());
        }
        Ok(())
    }

    fn display_state(&self) -> CliResult<DisplayState> {
        let style_filter = match &self.style {
            Some(style) => style
                .parse::<StyleFilter>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => StyleFilter::All,
        };
        let weight = match &self.weight {
            Some(weight) => weight
                .parse::<IconWeight>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => IconWeight::Regular,
        };

        Ok(DisplayState {
            search: self.query.join(" "),
            weight,
            duotone: self.duotone,
            style_filter,
            opened: None,
        })
    }
}

fn icon_match(icon: &IconRecord, key: VariantKey) -> IconMatch<'_> {
    IconMatch {
        name: &icon.name,
        tags: &icon.tags,
        weights: &icon.weights,
        supports_duotone: icon.supports_duotone,
        available: icon.supports(key),
    }
}
