//! Resolver for Ruby core classes.

use bindoc_registry::{Artifact, NativeMember};

use crate::Resolver;
use crate::naming::upper_first;

/// Documentation site root.
pub const ROOT: &str = "https://docs.ruby-lang.org/en/master";

/// Links core classes such as `String` or `Integer` to their class pages.
///
/// Used for types that have no native counterpart, e.g. parameter types that
/// are not registered artifacts.
#[derive(Debug, Default, Clone, Copy)]
pub struct RubyCore;

impl Resolver for RubyCore {
    fn class_url(&self, artifact: &Artifact) -> Option<String> {
        Some(format!("{ROOT}/{}.html", upper_first(artifact.short_name())))
    }

    fn module_url(&self, _artifact: &Artifact) -> Option<String> {
        None
    }

    fn union_url(&self, _artifact: &Artifact) -> Option<String> {
        None
    }

    fn enum_url(&self, _artifact: &Artifact) -> Option<String> {
        None
    }

    fn enum_value_url(&self, _artifact: &Artifact, _value: &str) -> Option<String> {
        None
    }

    fn singleton_method_url(&self, _artifact: &Artifact, _member: &NativeMember) -> Option<String> {
        None
    }

    fn method_url(&self, _artifact: &Artifact, _member: &NativeMember) -> Option<String> {
        None
    }

    fn attribute_url(&self, _artifact: &Artifact, _member: &NativeMember) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_url() {
        assert_eq!(
            RubyCore.class_url(&Artifact::managed("Integer")),
            Some("https://docs.ruby-lang.org/en/master/Integer.html".to_owned())
        );
        assert_eq!(
            RubyCore.class_url(&Artifact::managed("File::Stat")),
            Some("https://docs.ruby-lang.org/en/master/Stat.html".to_owned())
        );
    }

    #[test]
    fn test_only_classes_link() {
        let string = Artifact::managed("String");
        assert_eq!(RubyCore.method_url(&string, &NativeMember::method("size")), None);
        assert_eq!(RubyCore.module_url(&Artifact::module("Kernel")), None);
    }
}
