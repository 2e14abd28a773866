//! `bindoc site` command implementation.

use bindoc_resolve::NamespaceResolverMap;
use bindoc_site::SiteGenerator;
use clap::Args;

use super::{SourceArgs, load_registry};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the site command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl SiteArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.source.load_config()?;
        let registry = load_registry(&config, &output)?;
        let output_dir = config.require_output()?;
        output.location("Output", output_dir);

        // Fetches every configured documentation index up front.
        let resolvers = NamespaceResolverMap::from_config(&config)?;
        let generator = SiteGenerator::new(&registry, &resolvers, output_dir);
        let summary = generator.generate()?;

        output.site_written(&summary, generator.output_dir());
        Ok(())
    }
}
