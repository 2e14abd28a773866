//! Resolver for types provided by the Rice binding library itself.

use std::sync::LazyLock;

use bindoc_registry::{Artifact, NativeMember};
use regex::Regex;

use crate::Resolver;

/// Documentation site root.
pub const ROOT: &str = "https://ruby-rice.github.io/4.x";

static PAGES: LazyLock<[(Regex, &'static str); 2]> = LazyLock::new(|| {
    [
        (Regex::new(r"^Rice::Buffer").unwrap(), "reference/buffer.html"),
        (Regex::new(r"^Rice::Pointer").unwrap(), "reference/pointer.html"),
    ]
});

/// Links `Rice::Buffer` and `Rice::Pointer` instantiations to their reference pages.
#[derive(Debug, Default, Clone, Copy)]
pub struct RiceDocs;

impl Resolver for RiceDocs {
    fn class_url(&self, artifact: &Artifact) -> Option<String> {
        PAGES
            .iter()
            .find(|(pattern, _)| pattern.is_match(&artifact.name))
            .map(|(_, page)| format!("{ROOT}/{page}"))
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

    fn method_url(&self, artifact: &Artifact, _member: &NativeMember) -> Option<String> {
        self.class_url(artifact)
    }

    fn attribute_url(&self, _artifact: &Artifact, _member: &NativeMember) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_and_pointer() {
        let buffer = Artifact::class("Rice::Buffer≺int≻", "Rice::Buffer<int>");
        let pointer = Artifact::class("Rice::Pointer≺double≻", "Rice::Pointer<double>");

        assert_eq!(
            RiceDocs.class_url(&buffer),
            Some("https://ruby-rice.github.io/4.x/reference/buffer.html".to_owned())
        );
        assert_eq!(
            RiceDocs.method_url(&pointer, &NativeMember::method("to_ary")),
            Some("https://ruby-rice.github.io/4.x/reference/pointer.html".to_owned())
        );
    }

    #[test]
    fn test_other_types_unlinked() {
        let arg = Artifact::class("Rice::Arg", "Rice::Arg");
        assert_eq!(RiceDocs.class_url(&arg), None);
        assert_eq!(RiceDocs.method_url(&arg, &NativeMember::method("name")), None);
        assert_eq!(RiceDocs.module_url(&Artifact::module("Rice")), None);
    }
}
