//! CLI error types.

use bindoc_config::ConfigError;
use bindoc_rbs::RbsError;
use bindoc_registry::RegistryError;
use bindoc_resolve::ResolveError;
use bindoc_site::SiteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Registry(#[from] RegistryError),

    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Rbs(#[from] RbsError),
}
