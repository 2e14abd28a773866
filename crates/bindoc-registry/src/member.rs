//! Native members attached to artifacts.

use std::cmp::Ordering;

use serde::Deserialize;

/// Name of the managed-language constructor.
pub const CONSTRUCTOR: &str = "initialize";

/// Kind of native member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeKind {
    /// Instance method (including constructors).
    Method,
    /// Singleton (class-level or module-level) function.
    Function,
    /// Attribute getter.
    AttributeReader,
    /// Attribute setter.
    AttributeWriter,
}

/// A declared parameter of a native member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameter {
    /// Display name.
    pub name: String,
    /// Managed-language name of the declared type.
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Parameter {
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A function, method or attribute accessor exposed on an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NativeMember {
    /// Managed-language name (e.g. `is_ready?`, `[]=`, `initialize`).
    pub name: String,
    /// Member kind.
    pub kind: NativeKind,
    /// Declared parameters, in order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Managed-language name of the return type.
    #[serde(default = "default_return_type")]
    pub return_type: String,
}

fn default_return_type() -> String {
    "NilClass".to_owned()
}

impl NativeMember {
    /// Create a member without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NativeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parameters: Vec::new(),
            return_type: default_return_type(),
        }
    }

    /// Create an instance method.
    #[must_use]
    pub fn method(name: impl Into<String>) -> Self {
        Self::new(name, NativeKind::Method)
    }

    /// Create a singleton function.
    #[must_use]
    pub fn function(name: impl Into<String>) -> Self {
        Self::new(name, NativeKind::Function)
    }

    /// Add a parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: &str, type_name: &str) -> Self {
        self.parameters.push(Parameter::new(name, type_name));
        self
    }

    /// Set the return type.
    #[must_use]
    pub fn returning(mut self, type_name: impl Into<String>) -> Self {
        self.return_type = type_name.into();
        self
    }

    /// Whether this member is the constructor.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR
    }

    /// Whether this member is an attribute reader or writer.
    #[must_use]
    pub fn is_attribute(&self) -> bool {
        matches!(
            self.kind,
            NativeKind::AttributeReader | NativeKind::AttributeWriter
        )
    }

    /// Managed-language type of the attribute value.
    ///
    /// Readers report their return type; writers their first parameter type.
    #[must_use]
    pub fn attribute_type(&self) -> &str {
        match (self.kind, self.parameters.first()) {
            (NativeKind::AttributeWriter, Some(parameter)) => &parameter.type_name,
            _ => &self.return_type,
        }
    }

    /// Documentation ordering: constructors first, then by name and arity.
    #[must_use]
    pub fn doc_order(&self, other: &Self) -> Ordering {
        (!self.is_constructor(), &self.name, self.parameters.len()).cmp(&(
            !other.is_constructor(),
            &other.name,
            other.parameters.len(),
        ))
    }
}

/// Members sharing a managed-language name, in documentation order.
#[derive(Debug, PartialEq, Eq)]
pub struct MemberGroup<'a> {
    pub name: &'a str,
    pub members: Vec<&'a NativeMember>,
}

/// Sort members into documentation order and merge same-named overloads.
///
/// Group order follows the first member of each group, so `initialize`
/// always leads.
#[must_use]
pub fn group_by_name<'a, I>(members: I) -> Vec<MemberGroup<'a>>
where
    I: IntoIterator<Item = &'a NativeMember>,
{
    let mut sorted: Vec<&NativeMember> = members.into_iter().collect();
    sorted.sort_by(|a, b| a.doc_order(b));

    let mut groups: Vec<MemberGroup<'a>> = Vec::new();
    for member in sorted {
        match groups.last_mut() {
            Some(group) if group.name == member.name => group.members.push(member),
            _ => groups.push(MemberGroup {
                name: &member.name,
                members: vec![member],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_sorts_first() {
        let members = [
            NativeMember::method("apply"),
            NativeMember::method("initialize").with_parameter("size", "Integer"),
            NativeMember::method("initialize"),
            NativeMember::method("zero"),
        ];

        let groups = group_by_name(&members);
        let names: Vec<&str> = groups.iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["initialize", "apply", "zero"]);
        assert_eq!(groups[0].members[0].parameters.len(), 0);
        assert_eq!(groups[0].members[1].parameters.len(), 1);
    }

    #[test]
    fn test_overloads_sorted_by_arity() {
        let members = [
            NativeMember::method("resize")
                .with_parameter("w", "Integer")
                .with_parameter("h", "Integer"),
            NativeMember::method("resize").with_parameter("size", "Cv::Size"),
        ];

        let groups = group_by_name(&members);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].members[0].parameters.len(), 1);
        assert_eq!(groups[0].members[1].parameters.len(), 2);
    }

    #[test]
    fn test_attribute_type() {
        let reader = NativeMember::new("width", NativeKind::AttributeReader).returning("Integer");
        let writer =
            NativeMember::new("width", NativeKind::AttributeWriter).with_parameter("value", "Float");
        assert_eq!(reader.attribute_type(), "Integer");
        assert_eq!(writer.attribute_type(), "Float");
        assert!(reader.is_attribute());
        assert!(!NativeMember::method("width").is_attribute());
    }

    #[test]
    fn test_deserialize_member_defaults() {
        let member: NativeMember =
            serde_json::from_str(r#"{"name": "empty?", "kind": "method"}"#).unwrap();
        assert_eq!(member.kind, NativeKind::Method);
        assert!(member.parameters.is_empty());
        assert_eq!(member.return_type, "NilClass");
    }
}
