//! Artifact registry for bindoc.
//!
//! The registry is the catalog of classes, modules, enums and unions exposed by
//! a binding layer, together with their native members. It is produced by the
//! binding layer as a JSON dump and only read by the documentation tools.
//!
//! # Example
//!
//! ```ignore
//! use bindoc_registry::Registry;
//!
//! let registry = Registry::load(Path::new("build/registry.json"))?;
//! for artifact in registry.artifacts() {
//!     println!("{}", artifact.name);
//! }
//! ```

mod artifact;
mod member;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use artifact::{Artifact, ArtifactKind, EnclosingKind, RuntimeKind, SEPARATOR, strip_keyword};
pub use member::{CONSTRUCTOR, MemberGroup, NativeKind, NativeMember, Parameter, group_by_name};

/// Error loading a registry dump.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Dump file could not be read.
    #[error("failed to read registry {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Dump is not valid JSON or does not match the schema.
    #[error("invalid registry: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two artifacts share a qualified name.
    #[error("duplicate artifact: {0}")]
    Duplicate(String),
}

/// Serialized registry layout.
#[derive(Debug, Deserialize)]
struct RegistryDump {
    #[serde(default)]
    artifacts: Vec<Artifact>,
}

/// Catalog of exposed artifacts, sorted by qualified name.
#[derive(Debug, Default)]
pub struct Registry {
    artifacts: Vec<Artifact>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry from artifacts.
    ///
    /// Artifacts are sorted by qualified name and any undeclared enclosing
    /// kind is derived from the enclosing artifact's runtime kind.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if two artifacts share a name.
    pub fn new(mut artifacts: Vec<Artifact>) -> Result<Self, RegistryError> {
        artifacts.sort_by(|a, b| a.name.cmp(&b.name));

        let mut by_name = HashMap::with_capacity(artifacts.len());
        for (index, artifact) in artifacts.iter().enumerate() {
            if by_name.insert(artifact.name.clone(), index).is_some() {
                return Err(RegistryError::Duplicate(artifact.name.clone()));
            }
        }

        let enclosing: Vec<Option<EnclosingKind>> = artifacts
            .iter()
            .map(|artifact| match artifact.enclosing {
                Some(kind) => Some(kind),
                None => Some(derive_enclosing(artifact, &artifacts, &by_name)),
            })
            .collect();
        for (artifact, kind) in artifacts.iter_mut().zip(enclosing) {
            artifact.enclosing = kind;
        }

        tracing::debug!(count = artifacts.len(), "Loaded artifact registry");
        Ok(Self { artifacts, by_name })
    }

    /// Parse a registry from its JSON dump.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or names are duplicated.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let dump: RegistryDump = serde_json::from_str(json)?;
        Self::new(dump.artifacts)
    }

    /// Load a registry dump from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let json = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// All artifacts in ascending qualified-name order.
    #[must_use]
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Number of artifacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Look up an artifact by qualified name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Artifact> {
        self.by_name.get(name).map(|&index| &self.artifacts[index])
    }

    /// Artifact for a declared parameter or return type.
    ///
    /// Types that are not registered are managed-runtime types without a
    /// native counterpart.
    #[must_use]
    pub fn type_artifact(&self, type_name: &str) -> std::borrow::Cow<'_, Artifact> {
        match self.get(type_name) {
            Some(artifact) => std::borrow::Cow::Borrowed(artifact),
            None => std::borrow::Cow::Owned(Artifact::managed(type_name)),
        }
    }

    /// Attribute readers and writers of an artifact.
    pub fn attributes<'a>(&self, artifact: &'a Artifact) -> Vec<MemberGroup<'a>> {
        group_by_name(artifact.members.iter().filter(|m| m.is_attribute()))
    }

    /// Instance methods of an artifact (constructors included).
    pub fn methods<'a>(&self, artifact: &'a Artifact) -> Vec<MemberGroup<'a>> {
        group_by_name(
            artifact
                .members
                .iter()
                .filter(|m| m.kind == NativeKind::Method),
        )
    }

    /// Singleton functions of an artifact.
    pub fn singleton_functions<'a>(&self, artifact: &'a Artifact) -> Vec<MemberGroup<'a>> {
        group_by_name(
            artifact
                .members
                .iter()
                .filter(|m| m.kind == NativeKind::Function),
        )
    }
}

/// Classify an artifact's enclosing entity from the registry.
fn derive_enclosing(
    artifact: &Artifact,
    artifacts: &[Artifact],
    by_name: &HashMap<String, usize>,
) -> EnclosingKind {
    let Some(parent) = artifact.enclosing_name() else {
        return EnclosingKind::Global;
    };
    match by_name.get(parent).map(|&index| artifacts[index].runtime_kind) {
        Some(RuntimeKind::Class) => EnclosingKind::Class,
        Some(RuntimeKind::Module) | None => EnclosingKind::Namespace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"{
        "artifacts": [
            {"name": "Cv::Mat", "kind": "class", "native_type": "cv::Mat",
             "members": [
                {"name": "rows", "kind": "attribute_reader", "return_type": "Integer"},
                {"name": "rows", "kind": "attribute_writer",
                 "parameters": [{"name": "value", "type": "Integer"}]},
                {"name": "initialize", "kind": "method"},
                {"name": "empty?", "kind": "method", "return_type": "TrueClass"},
                {"name": "zeros", "kind": "function", "return_type": "Cv::Mat"}
             ]},
            {"name": "Cv", "kind": "module"},
            {"name": "Cv::Mat::Depth", "kind": "class", "native_type": "enum cv::Mat::Depth",
             "values": ["U8", "F32"]},
            {"name": "Cv::Flags", "kind": "class", "native_type": "enum cv::Flags"},
            {"name": "GlobalFlags", "kind": "class", "native_type": "enum GlobalFlags"},
            {"name": "Other::Thing", "kind": "class", "native_type": "other::Thing"}
        ]
    }"#;

    #[test]
    fn test_artifacts_sorted_by_name() {
        let registry = Registry::from_json(DUMP).unwrap();
        let names: Vec<&str> = registry.artifacts().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Cv",
                "Cv::Flags",
                "Cv::Mat",
                "Cv::Mat::Depth",
                "GlobalFlags",
                "Other::Thing"
            ]
        );
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_enclosing_kind_derived() {
        let registry = Registry::from_json(DUMP).unwrap();
        let kind = |name: &str| registry.get(name).unwrap().enclosing_kind();
        assert_eq!(kind("Cv::Mat::Depth"), EnclosingKind::Class);
        assert_eq!(kind("Cv::Flags"), EnclosingKind::Namespace);
        assert_eq!(kind("GlobalFlags"), EnclosingKind::Global);
        assert_eq!(kind("Other::Thing"), EnclosingKind::Namespace);
    }

    #[test]
    fn test_declared_enclosing_kind_kept() {
        let artifacts = vec![
            Artifact::module("Ns"),
            Artifact::class("Ns::Color", "enum Color").with_enclosing(EnclosingKind::Global),
        ];
        let registry = Registry::new(artifacts).unwrap();
        assert_eq!(
            registry.get("Ns::Color").unwrap().enclosing_kind(),
            EnclosingKind::Global
        );
    }

    #[test]
    fn test_member_views() {
        let registry = Registry::from_json(DUMP).unwrap();
        let mat = registry.get("Cv::Mat").unwrap();

        let attributes = registry.attributes(mat);
        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes[0].members.len(), 2);

        let methods: Vec<&str> = registry.methods(mat).iter().map(|g| g.name).collect();
        assert_eq!(methods, vec!["initialize", "empty?"]);

        let functions: Vec<&str> = registry
            .singleton_functions(mat)
            .iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(functions, vec!["zeros"]);
    }

    #[test]
    fn test_type_artifact_falls_back_to_managed() {
        let registry = Registry::from_json(DUMP).unwrap();
        assert_eq!(registry.type_artifact("Cv::Mat").native_type.as_deref(), Some("cv::Mat"));

        let integer = registry.type_artifact("Integer");
        assert_eq!(integer.name, "Integer");
        assert!(integer.native_type.is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let artifacts = vec![Artifact::module("Cv"), Artifact::module("Cv")];
        let err = Registry::new(artifacts).unwrap_err();
        assert!(matches!(err, RegistryError::Duplicate(ref name) if name == "Cv"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("registry.json");
        std::fs::write(&path, DUMP).unwrap();

        let registry = Registry::load(&path).unwrap();
        assert!(registry.get("Cv::Mat").is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Registry::load(Path::new("/nonexistent/registry.json")).unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
        assert!(err.to_string().contains("registry.json"));
    }
}
