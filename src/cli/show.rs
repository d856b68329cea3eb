//! Show command: icon details, variant resolution, and usage snippets.

use crate::cli::common::{open_catalog, print_json, CliError, CliResult};
use crate::models::{IconRecord, IconWeight, VariantKey};
use crate::resolve::{
    placeholder_svg, svg_filename, svg_id, CatalogLookup, CodeSnippets, Glyph, IconNames,
    IconResolver,
};
use crate::services::VendorPackage;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Show details and usage snippets for one icon
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Icon name or kebab-case name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Catalog file (defaults to the configured output)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Weight to resolve (regular, bold, fill)
    #[arg(long, value_name = "WEIGHT", default_value = "regular")]
    pub weight: String,

    /// Resolve the duotone variant
    #[arg(long)]
    pub duotone: bool,

    /// Icon size used in snippets, in pixels
    #[arg(long, value_name = "PX", default_value_t = 24)]
    pub size: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable icon details.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowOutput<'a> {
    icon: &'a IconRecord,
    variant: VariantKey,
    glyph: Glyph,
    exports_checked: bool,
    names: IconNames,
    snippets: CodeSnippets,
    svg_filename: String,
    svg_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder_svg: Option<String>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let weight = self
            .weight
            .parse::<IconWeight>()
            .map_err(|e| CliError::validation(e.to_string()))?;
        let key = VariantKey::new(weight, self.duotone);

        let opened = open_catalog(self.catalog.as_deref(), self.root.as_deref())?;
        let config = opened.config;

        let lookup = match VendorPackage::new(&config, &opened.root).load_exports() {
            Ok(exports) => CatalogLookup::new(opened.catalog, exports),
            Err(e) => {
                debug!("Resolving without an export table: {e:#}");
                CatalogLookup::trusting(opened.catalog)
            }
        };

        let icon = lookup
            .catalog()
            .get(&self.name)
            .ok_or_else(|| CliError::validation(format!("Icon not found: {}", self.name)))?;

        let mut resolver = IconResolver::new(&lookup);
        let glyph = resolver.resolve(&icon.name, key.weight, key.duotone);

        let names = IconNames::new(icon, key, &config.package.component_prefix);
        let snippets = CodeSnippets::generate(&names, &config.package, key, self.size);
        let output = ShowOutput {
            icon,
            variant: key,
            exports_checked: lookup.checks_exports(),
            names,
            snippets,
            svg_filename: svg_filename(&icon.name, key),
            svg_id: svg_id(&icon.name, key),
            placeholder_svg: glyph.is_placeholder().then(|| placeholder_svg(self.size)),
            glyph,
        };

        if self.json {
            print_json(&output)?;
        } else {
            output_human_readable(&output);
        }
        Ok(())
    }
}

fn output_human_readable(output: &ShowOutput<'_>) {
    let icon = output.icon;
    println!("{}", icon.name);
    if let Some(kebab) = &icon.kebab_name {
        println!("  Kebab name:     {kebab}");
    }
    println!("  Tags:           {}", icon.tags.join(", "));
    println!("  Added in:       {}", icon.version_added);
    if !icon.version_last_modified.is_unknown() {
        println!("  Last modified:  {}", icon.version_last_modified);
    }
    let weights: Vec<&str> = icon.weights.iter().map(|w| w.as_str()).collect();
    println!("  Weights:        {}", weights.join(", "));
    println!(
        "  Duotone:        {}",
        if icon.supports_duotone { "yes" } else { "no" }
    );
    if !icon.variants.is_empty() {
        println!("  Variants:");
        for (key, info) in &icon.variants {
            println!("    {key:<16} {}", info.version);
        }
    }

    println!();
    match &output.glyph {
        Glyph::Component { symbol, key } => println!("✓ {key} resolves to {symbol}"),
        Glyph::Placeholder => println!("✗ {} is not available, renders as placeholder", output.variant),
    }
    println!("  SVG file: {}", output.svg_filename);
    println!("  SVG id:   {}", output.svg_id);

    let snippets = &output.snippets;
    for (title, code) in [
        ("Recommended", &snippets.recommended),
        ("Aliases", &snippets.aliases),
        ("Dynamic variants", &snippets.dynamic_variants),
        ("Subpath import", &snippets.subpath_import),
    ] {
        println!();
        println!("{title}:");
        for line in code.lines() {
            println!("  {line}");
        }
    }
}
