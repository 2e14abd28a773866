//! Configuration management for bindoc.
//!
//! Parses `bindoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The central part of the configuration is the `[namespaces]` table, which
//! maps the top-level namespace of managed artifacts to the resolver that
//! links them to external documentation:
//!
//! ```toml
//! registry = "build/registry.json"
//! output = "site/api"
//!
//! [namespaces.Std]
//! resolver = "cppreference"
//!
//! [namespaces.Cv]
//! resolver = "doxygen"
//! root = "https://docs.opencv.org/4.x"
//! tagfile = "https://docs.opencv.org/4.x/opencv.tag"
//! ```
//!
//! The `default` namespace configures artifacts without a namespace.
//!
//! ## Environment Variable Expansion
//!
//! `root`, `tagfile` and `index` support `${VAR}` and `${VAR:-default}`.

mod expand;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "bindoc.toml";

/// Namespace key that configures artifacts without a namespace.
pub const DEFAULT_NAMESPACE: &str = "default";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the registry dump path.
    pub registry: Option<PathBuf>,
    /// Override the output directory.
    pub output: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Registry dump path.
    pub registry: Option<PathBuf>,
    /// Output directory.
    pub output: Option<PathBuf>,
    /// Resolver settings per namespace, ordered by namespace.
    pub namespaces: Vec<NamespaceConfig>,
    /// Path to the config file (set after loading).
    pub config_path: Option<PathBuf>,
}

/// Resolver assignment for one namespace.
#[derive(Debug)]
pub struct NamespaceConfig {
    /// Top-level namespace, or `None` for the default namespace.
    pub namespace: Option<String>,
    /// Resolver settings.
    pub resolver: ResolverConfig,
}

/// Resolver settings.
#[derive(Debug)]
pub enum ResolverConfig {
    /// C++ standard library reference.
    CppReference {
        /// Override for the function index location.
        index: Option<String>,
    },
    /// Project documentation generated by Doxygen.
    Doxygen(DoxygenConfig),
    /// Ruby core documentation.
    Ruby,
    /// Rice binding library documentation.
    Rice,
}

impl ResolverConfig {
    /// Resolver type name as written in the config file.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::CppReference { .. } => "cppreference",
            Self::Doxygen(_) => "doxygen",
            Self::Ruby => "ruby",
            Self::Rice => "rice",
        }
    }
}

/// Doxygen resolver settings.
#[derive(Debug)]
pub struct DoxygenConfig {
    /// Documentation root URL.
    pub root: String,
    /// Tag file location (URL or absolute path).
    pub tagfile: String,
    /// Native type name rewrites, applied in order.
    pub type_mappings: Vec<TypeMapping>,
    /// Method name overrides: native type -> managed name -> native name.
    pub method_mappings: HashMap<String, HashMap<String, String>>,
}

/// Case-insensitive regex rewrite of native type names.
#[derive(Debug, Clone)]
pub struct TypeMapping {
    /// Pattern to match.
    pub pattern: Regex,
    /// Replacement (supports `$1` group references).
    pub replacement: String,
}

impl TypeMapping {
    /// Compile a case-insensitive mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid regex.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: RegexBuilder::new(pattern).case_insensitive(true).build()?,
            replacement: replacement.to_owned(),
        })
    }

    /// Apply the mapping to a type name.
    #[must_use]
    pub fn apply(&self, name: &str) -> String {
        self.pattern
            .replace_all(name, self.replacement.as_str())
            .into_owned()
    }
}

/// Configuration file layout.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigRaw {
    registry: Option<String>,
    output: Option<String>,
    namespaces: BTreeMap<String, NamespaceConfigRaw>,
}

/// Raw namespace settings as parsed from TOML.
#[derive(Debug, Deserialize)]
struct NamespaceConfigRaw {
    resolver: String,
    root: Option<String>,
    tagfile: Option<String>,
    index: Option<String>,
    #[serde(default)]
    type_mappings: Vec<TypeMappingRaw>,
    #[serde(default)]
    method_mappings: HashMap<String, HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct TypeMappingRaw {
    pattern: String,
    #[serde(default)]
    replacement: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Unknown resolver type.
    #[error("Unknown resolver '{resolver}' for namespace {namespace}")]
    UnknownResolver {
        /// Namespace key.
        namespace: String,
        /// Resolver type as written.
        resolver: String,
    },
    /// Invalid type mapping pattern.
    #[error("Invalid type mapping pattern '{pattern}' for namespace {namespace}: {source}")]
    InvalidPattern {
        namespace: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`namespaces.Cv.tagfile`").
        field: String,
        /// Error message (e.g., "${`OPENCV_TAGFILE`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `bindoc.toml` in current directory and parents,
    /// falling back to an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse configuration text, resolving relative paths against `config_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if the TOML is invalid, a resolver type is unknown, a
    /// pattern does not compile, or an environment variable is unset.
    pub fn parse(content: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let raw: ConfigRaw = toml::from_str(content)?;

        let resolve = |path: Option<String>| path.map(|p| config_dir.join(p));
        let namespaces = raw
            .namespaces
            .into_iter()
            .map(|(key, ns)| build_namespace(key, ns, config_dir))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            registry: resolve(raw.registry),
            output: resolve(raw.output),
            namespaces,
            config_path: None,
        })
    }

    /// Registry dump path, required by every command.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if no registry path is configured.
    pub fn require_registry(&self) -> Result<&Path, ConfigError> {
        self.registry.as_deref().ok_or_else(|| {
            ConfigError::Validation(
                "registry path required (set `registry` in bindoc.toml or pass --registry)"
                    .to_owned(),
            )
        })
    }

    /// Output directory, required by every command.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if no output directory is configured.
    pub fn require_output(&self) -> Result<&Path, ConfigError> {
        self.output.as_deref().ok_or_else(|| {
            ConfigError::Validation(
                "output directory required (set `output` in bindoc.toml or pass --output)"
                    .to_owned(),
            )
        })
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(registry) = &settings.registry {
            self.registry = Some(registry.clone());
        }
        if let Some(output) = &settings.output {
            self.output = Some(output.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::parse(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}

fn build_namespace(
    key: String,
    raw: NamespaceConfigRaw,
    config_dir: &Path,
) -> Result<NamespaceConfig, ConfigError> {
    let field = |name: &str| format!("namespaces.{key}.{name}");

    let resolver = match raw.resolver.as_str() {
        "cppreference" => ResolverConfig::CppReference {
            index: raw
                .index
                .as_deref()
                .map(|index| expand::expand_env(index, &field("index")))
                .transpose()?
                .map(|index| resolve_location(&index, config_dir)),
        },
        "doxygen" => {
            let root = require_field(raw.root.as_deref(), &field("root"))?;
            let tagfile = require_field(raw.tagfile.as_deref(), &field("tagfile"))?;
            let type_mappings = raw
                .type_mappings
                .iter()
                .map(|mapping| {
                    TypeMapping::new(&mapping.pattern, &mapping.replacement).map_err(|source| {
                        ConfigError::InvalidPattern {
                            namespace: key.clone(),
                            pattern: mapping.pattern.clone(),
                            source,
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            ResolverConfig::Doxygen(DoxygenConfig {
                root: expand::expand_env(root, &field("root"))?
                    .trim_end_matches('/')
                    .to_owned(),
                tagfile: resolve_location(
                    &expand::expand_env(tagfile, &field("tagfile"))?,
                    config_dir,
                ),
                type_mappings,
                method_mappings: raw.method_mappings,
            })
        }
        "ruby" => ResolverConfig::Ruby,
        "rice" => ResolverConfig::Rice,
        other => {
            return Err(ConfigError::UnknownResolver {
                namespace: key,
                resolver: other.to_owned(),
            });
        }
    };

    let namespace = (key != DEFAULT_NAMESPACE).then_some(key);
    Ok(NamespaceConfig {
        namespace,
        resolver,
    })
}

/// Require an optional string field to be present and non-empty.
fn require_field<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ConfigError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Validation(format!("{field} is required"))),
    }
}

/// Resolve a local index path against the config directory; URLs pass through.
fn resolve_location(location: &str, config_dir: &Path) -> String {
    if location.starts_with("http://")
        || location.starts_with("https://")
        || location.starts_with('~')
    {
        location.to_owned()
    } else {
        config_dir.join(location).to_string_lossy().into_owned()
    }
}
