//! Selection of a resolver by top-level namespace.

use std::collections::HashMap;

use bindoc_config::{Config, ResolverConfig};
use bindoc_index::IndexError;
use bindoc_registry::Artifact;

use crate::{CppReference, Doxygen, Resolver, RiceDocs, RubyCore};

/// Error building the resolvers for a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// A resolver's documentation index could not be loaded.
    #[error("Failed to load documentation index for namespace {namespace}: {source}")]
    Index {
        /// Namespace the resolver serves.
        namespace: NamespaceKey,
        #[source]
        source: IndexError,
    },
}

/// Key of the resolver mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NamespaceKey {
    /// Top-level names with no namespace, such as core runtime classes.
    Global,
    /// First segment of a qualified name.
    Named(String),
}

impl NamespaceKey {
    /// Key for an artifact: `Global` for single-segment non-modules, else its first segment.
    #[must_use]
    pub fn for_artifact(artifact: &Artifact) -> Self {
        if !artifact.is_module() && artifact.segments().nth(1).is_none() {
            Self::Global
        } else {
            Self::Named(artifact.top_level().to_owned())
        }
    }
}

impl std::fmt::Display for NamespaceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => f.write_str("(global)"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Resolvers keyed by top-level namespace.
#[derive(Default)]
pub struct NamespaceResolverMap {
    resolvers: HashMap<NamespaceKey, Box<dyn Resolver>>,
}

impl std::fmt::Debug for NamespaceResolverMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<String> = self.resolvers.keys().map(ToString::to_string).collect();
        keys.sort();
        f.debug_struct("NamespaceResolverMap")
            .field("namespaces", &keys)
            .finish()
    }
}

impl NamespaceResolverMap {
    /// Create an empty map. Every lookup yields `None`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the resolvers named by a configuration.
    ///
    /// The global namespace resolves against Ruby core documentation unless
    /// the configuration maps it explicitly. Indices are fetched here, once.
    ///
    /// # Errors
    ///
    /// Returns an error if any resolver's index cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, ResolveError> {
        let mut map = Self::new();
        map.insert(NamespaceKey::Global, RubyCore);

        for entry in &config.namespaces {
            let key = entry
                .namespace
                .clone()
                .map_or(NamespaceKey::Global, NamespaceKey::Named);
            tracing::info!(
                namespace = %key,
                resolver = entry.resolver.type_name(),
                "Configuring resolver"
            );

            let index_error = |source| ResolveError::Index {
                namespace: key.clone(),
                source,
            };
            match &entry.resolver {
                ResolverConfig::CppReference { index } => {
                    let resolver = CppReference::load(index.as_deref()).map_err(index_error)?;
                    map.insert(key, resolver);
                }
                ResolverConfig::Doxygen(doxygen) => {
                    let resolver = Doxygen::load(doxygen).map_err(index_error)?;
                    map.insert(key, resolver);
                }
                ResolverConfig::Ruby => map.insert(key, RubyCore),
                ResolverConfig::Rice => map.insert(key, RiceDocs),
            }
        }

        Ok(map)
    }

    /// Register a resolver, replacing any previous one for the key.
    pub fn insert(&mut self, key: NamespaceKey, resolver: impl Resolver + 'static) {
        self.resolvers.insert(key, Box::new(resolver));
    }

    /// Resolver responsible for an artifact, if its namespace is mapped.
    #[must_use]
    pub fn resolver_for(&self, artifact: &Artifact) -> Option<&dyn Resolver> {
        self.resolvers
            .get(&NamespaceKey::for_artifact(artifact))
            .map(Box::as_ref)
    }

    /// Number of mapped namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Whether no namespace is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}
