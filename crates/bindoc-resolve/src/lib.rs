//! Documentation URL resolvers for bindoc.
//!
//! A [`Resolver`] maps artifacts and their native members to URLs in one
//! external reference source. Four implementations exist:
//!
//! - [`CppReference`]: the C++ standard library reference (cppreference.com)
//! - [`Doxygen`]: project documentation described by a Doxygen tag file
//! - [`RubyCore`]: Ruby core classes
//! - [`RiceDocs`]: the Rice binding library's own documentation
//!
//! A [`NamespaceResolverMap`] selects the resolver for an artifact from its
//! top-level namespace.
//!
//! Every lookup returns `Option<String>`. `None` means no documentation is
//! available and is an expected outcome, not an error.

mod cache;
mod cppreference;
mod doxygen;
mod map;
pub mod naming;
mod rice;
mod ruby;

use bindoc_registry::{Artifact, ArtifactKind, NativeMember};

pub use cppreference::CppReference;
pub use doxygen::Doxygen;
pub use map::{NamespaceKey, NamespaceResolverMap, ResolveError};
pub use rice::RiceDocs;
pub use ruby::RubyCore;

/// Maps artifacts and members to documentation URLs.
pub trait Resolver {
    /// URL of a class or struct.
    fn class_url(&self, artifact: &Artifact) -> Option<String>;

    /// URL of a module (namespace).
    fn module_url(&self, artifact: &Artifact) -> Option<String>;

    /// URL of a union.
    fn union_url(&self, artifact: &Artifact) -> Option<String>;

    /// URL of an enum.
    fn enum_url(&self, artifact: &Artifact) -> Option<String>;

    /// URL of one enum value.
    fn enum_value_url(&self, artifact: &Artifact, value: &str) -> Option<String>;

    /// URL of a singleton (static) function.
    fn singleton_method_url(&self, artifact: &Artifact, member: &NativeMember) -> Option<String>;

    /// URL of an instance method or constructor, or of a module function.
    fn method_url(&self, artifact: &Artifact, member: &NativeMember) -> Option<String>;

    /// URL of an attribute.
    fn attribute_url(&self, artifact: &Artifact, member: &NativeMember) -> Option<String>;

    /// URL of an artifact used as a type, dispatched on its kind.
    fn type_url(&self, artifact: &Artifact) -> Option<String> {
        match artifact.kind() {
            ArtifactKind::Module => self.module_url(artifact),
            ArtifactKind::Enum => self.enum_url(artifact),
            ArtifactKind::Union => self.union_url(artifact),
            ArtifactKind::Class => self.class_url(artifact),
        }
    }
}
