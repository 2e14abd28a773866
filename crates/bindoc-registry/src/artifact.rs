//! Artifacts exposed by the binding layer.

use serde::Deserialize;

use crate::member::NativeMember;

/// Separator between qualified name segments.
pub const SEPARATOR: &str = "::";

/// Kind of object the managed runtime reports for an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeKind {
    /// A module (namespace).
    Module,
    /// A class. Enums and unions are classes at runtime.
    Class,
}

/// Documentation kind, derived from the runtime kind and native type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Module,
    Class,
    Enum,
    Union,
}

/// Kind of the entity enclosing an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnclosingKind {
    /// Top-level artifact.
    Global,
    /// Nested inside a class.
    Class,
    /// Nested inside a module.
    Namespace,
}

/// A class, module, enum or union exposed by the binding layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artifact {
    /// Managed-language qualified name (e.g. `Cv::Mat`).
    pub name: String,
    /// Runtime kind.
    #[serde(rename = "kind")]
    pub runtime_kind: RuntimeKind,
    /// Native declared type (e.g. `cv::Mat`, `enum cv::Flags`, `std::vector<int>`).
    #[serde(default)]
    pub native_type: Option<String>,
    /// Enum values, in declaration order.
    #[serde(default)]
    pub values: Vec<String>,
    /// Native members attached to this artifact.
    #[serde(default)]
    pub members: Vec<NativeMember>,
    /// Enclosing entity kind. Derived by the registry when not declared.
    #[serde(default)]
    pub enclosing: Option<EnclosingKind>,
}

impl Artifact {
    /// Create a class artifact.
    #[must_use]
    pub fn class(name: impl Into<String>, native_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runtime_kind: RuntimeKind::Class,
            native_type: Some(native_type.into()),
            values: Vec::new(),
            members: Vec::new(),
            enclosing: None,
        }
    }

    /// Create a module artifact.
    #[must_use]
    pub fn module(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runtime_kind: RuntimeKind::Module,
            native_type: None,
            values: Vec::new(),
            members: Vec::new(),
            enclosing: None,
        }
    }

    /// Create an artifact for a managed-runtime type that has no native counterpart.
    #[must_use]
    pub fn managed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runtime_kind: RuntimeKind::Class,
            native_type: None,
            values: Vec::new(),
            members: Vec::new(),
            enclosing: Some(EnclosingKind::Global),
        }
    }

    /// Add enum values.
    #[must_use]
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Add a native member.
    #[must_use]
    pub fn with_member(mut self, member: NativeMember) -> Self {
        self.members.push(member);
        self
    }

    /// Declare the enclosing entity kind.
    #[must_use]
    pub fn with_enclosing(mut self, enclosing: EnclosingKind) -> Self {
        self.enclosing = Some(enclosing);
        self
    }

    /// Documentation kind of this artifact.
    #[must_use]
    pub fn kind(&self) -> ArtifactKind {
        if self.runtime_kind == RuntimeKind::Module {
            return ArtifactKind::Module;
        }
        match self.native_type.as_deref() {
            Some(native) if strip_keyword(native, "enum").is_some() => ArtifactKind::Enum,
            Some(native) if strip_keyword(native, "union").is_some() => ArtifactKind::Union,
            _ => ArtifactKind::Class,
        }
    }

    /// Whether this artifact is a module.
    #[must_use]
    pub fn is_module(&self) -> bool {
        self.runtime_kind == RuntimeKind::Module
    }

    /// Qualified name segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.name.split(SEPARATOR)
    }

    /// First name segment (the top-level namespace for nested artifacts).
    #[must_use]
    pub fn top_level(&self) -> &str {
        self.segments().next().unwrap_or(&self.name)
    }

    /// Last name segment.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name.rsplit(SEPARATOR).next().unwrap_or(&self.name)
    }

    /// Segments of the enclosing namespace chain (all but the last).
    #[must_use]
    pub fn enclosing_segments(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = self.segments().collect();
        segments.pop();
        segments
    }

    /// Qualified name of the enclosing entity, if any.
    #[must_use]
    pub fn enclosing_name(&self) -> Option<&str> {
        self.name.rfind(SEPARATOR).map(|pos| &self.name[..pos])
    }

    /// Enclosing kind, defaulting to [`EnclosingKind::Global`] for top-level names.
    #[must_use]
    pub fn enclosing_kind(&self) -> EnclosingKind {
        match self.enclosing {
            Some(kind) => kind,
            None if self.enclosing_name().is_none() => EnclosingKind::Global,
            None => EnclosingKind::Namespace,
        }
    }
}

/// Remainder of a native type after a leading `keyword` (case-insensitive),
/// or `None` unless the keyword is followed by whitespace.
///
/// `strip_keyword("enum cv::Flags", "enum")` is `Some("cv::Flags")`, while
/// `Enumerator` carries no keyword at all.
#[must_use]
pub fn strip_keyword<'a>(native: &'a str, keyword: &str) -> Option<&'a str> {
    let native = native.trim_start();
    let head = native.get(..keyword.len())?;
    let rest = &native[keyword.len()..];
    (head.eq_ignore_ascii_case(keyword) && rest.starts_with(char::is_whitespace))
        .then(|| rest.trim_start())
}
