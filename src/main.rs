//! Iconshelf - icon catalog builder and browser
//!
//! Generates the icon catalog from the installed icon package and offers
//! headless search and lookup over it.

use clap::{Parser, Subcommand};
use iconshelf::cli::{
    BuildArgs, CheckArgs, CliResult, ConfigArgs, ExitCode, SearchArgs, ShowArgs,
};
use iconshelf::logging;

/// Iconshelf - icon catalog builder and browser
#[derive(Parser, Debug)]
#[command(name = "iconshelf", author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the icon catalog from the installed icon package
    Build(BuildArgs),
    /// Verify that every catalog copy matches the canonical catalog
    Check(CheckArgs),
    /// Search icons by name and tags
    Search(SearchArgs),
    /// Show details and usage snippets for one icon
    Show(ShowArgs),
    /// Manage the project configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Build(args) => args.execute(),
            Self::Check(args) => args.execute(),
            Self::Search(args) => args.execute(),
            Self::Show(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match cli.command.execute() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };
    std::process::exit(code.code());
}
