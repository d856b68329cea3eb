//! Configuration management CLI commands.

use crate::cli::common::{print_json, project_root, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display the effective configuration
    Show(ConfigShowArgs),
    /// Write a configuration file with default values
    Init(ConfigInitArgs),
}

/// Display the effective configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a configuration file with default values
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Init(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let root = project_root(self.root.as_deref())?;
        let config = Config::load(&root)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)?;
        } else {
            output_human_readable(&config, &root);
        }

        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self) -> CliResult<()> {
        let root = project_root(self.root.as_deref())?;
        let path = Config::config_file_path(&root);

        if Config::exists(&root) && !self.force {
            return Err(CliError::validation(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        Config::new()
            .save(&root)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("✓ Created {}", path.display());
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, root: &Path) {
    println!("{APP_NAME} Configuration");
    println!("=======================");
    if !Config::exists(root) {
        println!("(no configuration file, using defaults)");
    }
    println!();

    println!("Package:");
    println!("  Name:              {}", config.package.name);
    println!("  Component Prefix:  {}", config.package.component_prefix);
    println!(
        "  Dynamic Variants:  {}/{}",
        config.package.name, config.package.dynamic_variants_subpath
    );
    println!();

    println!("Paths:");
    println!("  Vendor Package:    {}", config.vendor_dir(root).display());
    println!("  Metadata:          {}", config.metadata_path(root).display());
    println!("  Exports:           {}", config.exports_path(root).display());
    println!("  Manifest:          {}", config.manifest_path(root).display());
    println!("  Catalog:           {}", config.catalog_path(root).display());
    for mirror in config.mirror_paths(root) {
        println!("  Mirror:            {}", mirror.display());
    }
    println!();

    println!("Catalog:");
    println!(
        "  Deprecated:        {}",
        display_list(&config.catalog.deprecated)
    );
    println!(
        "  Strip Suffixes:    {}",
        display_list(&config.catalog.strip_suffixes)
    );
    println!();
}

fn display_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_list() {
        assert_eq!(display_list(&[]), "(none)");
        assert_eq!(
            display_list(&["Bold".to_string(), "Filled".to_string()]),
            "Bold, Filled"
        );
    }
}
