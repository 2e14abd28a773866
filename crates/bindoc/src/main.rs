//! bindoc CLI - Documentation for native bindings.
//!
//! Provides commands for:
//! - `site`: Generate a cross-linked Markdown site from a registry dump
//! - `rbs`: Generate RBS type signatures from a registry dump

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RbsArgs, SiteArgs};
use output::Output;

/// bindoc - Documentation for native bindings.
#[derive(Parser)]
#[command(name = "bindoc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Markdown documentation site.
    Site(SiteArgs),
    /// Generate RBS type signatures.
    Rbs(RbsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Site(args) => args.verbose,
        Commands::Rbs(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Site(args) => args.execute(),
        Commands::Rbs(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_site_flags() {
        let cli = Cli::try_parse_from(["bindoc", "site", "-o", "out", "--registry", "r.json", "-v"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Site(args) if args.verbose));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["bindoc"]).is_err());
    }
}
