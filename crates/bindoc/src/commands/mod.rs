//! CLI command implementations.

mod rbs;
mod site;

use std::path::PathBuf;

use bindoc_config::{CliSettings, Config};
use bindoc_registry::Registry;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

pub(crate) use rbs::RbsArgs;
pub(crate) use site::SiteArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover bindoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Registry dump (overrides config).
    #[arg(short, long, env = "BINDOC_REGISTRY")]
    registry: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SourceArgs {
    /// Load the configuration with command-line overrides applied.
    fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            registry: self.registry.clone(),
            output: self.output.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Load the registry named by the configuration.
fn load_registry(config: &Config, output: &Output) -> Result<Registry, CliError> {
    let path = config.require_registry()?;
    output.location("Registry", path);

    let registry = Registry::load(path)?;
    if registry.is_empty() {
        output.warning("Registry contains no artifacts");
    }
    Ok(registry)
}
