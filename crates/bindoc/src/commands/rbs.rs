//! `bindoc rbs` command implementation.

use bindoc_rbs::SignatureEmitter;
use clap::Args;

use super::{SourceArgs, load_registry};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the rbs command.
#[derive(Args)]
pub(crate) struct RbsArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RbsArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.source.load_config()?;
        let registry = load_registry(&config, &output)?;
        let output_dir = config.require_output()?;
        output.location("Output", output_dir);

        let written = SignatureEmitter::new(&registry, output_dir).emit()?;

        output.signatures_written(written, output_dir);
        Ok(())
    }
}
