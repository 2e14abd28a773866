//! Resolver for the C++ standard library reference.
//!
//! Uses the cppreference function index, where each class is a `class`
//! element with a `link` attribute relative to the site root and members are
//! `function` and `variable` children:
//!
//! ```xml
//! <class name="std::vector" link="cpp/container/vector">
//!     <function name="push_back"/>
//!     <function name="operator[]" link="operator_at"/>
//! </class>
//! ```

use std::collections::HashMap;

use bindoc_index::{DocIndex, IndexError, IndexSource, NodeId, Path};
use bindoc_registry::{Artifact, NativeMember};

use crate::Resolver;
use crate::cache::NodeCache;
use crate::naming::{attribute_candidates, bare_type_name, method_candidates};

/// Documentation site root.
pub const ROOT: &str = "https://en.cppreference.com/w";

/// Default function index location.
pub const INDEX: &str = "https://raw.githubusercontent.com/p12tic/cppreference-doc/refs/heads/master/index-functions-cpp.xml";

/// Managed method names that differ from the standard library's, per class.
const METHOD_MAPPINGS: &[(&str, &[(&str, &str)])] = &[
    ("std::exception", &[("message", "what")]),
    ("std::runtime_error", &[("message", "what")]),
    ("std::map", &[("delete", "erase"), ("include?", "find")]),
    ("std::multimap", &[("delete", "erase"), ("include?", "find")]),
    ("std::unordered_map", &[("delete", "erase"), ("include?", "find")]),
    (
        "std::vector",
        &[
            ("delete_at", "erase"),
            ("first", "front"),
            ("last", "back"),
            ("pop", "pop_back"),
            ("push", "push_back"),
        ],
    ),
];

/// cppreference.com resolver.
#[derive(Debug)]
pub struct CppReference {
    index: DocIndex,
    method_mappings: HashMap<String, HashMap<String, String>>,
    classes: NodeCache,
}

impl CppReference {
    /// Create a resolver over a parsed function index.
    #[must_use]
    pub fn new(index: DocIndex) -> Self {
        let method_mappings = METHOD_MAPPINGS
            .iter()
            .map(|(class, mappings)| {
                let mappings = mappings
                    .iter()
                    .map(|(managed, native)| ((*managed).to_owned(), (*native).to_owned()))
                    .collect();
                ((*class).to_owned(), mappings)
            })
            .collect();

        Self {
            index,
            method_mappings,
            classes: NodeCache::default(),
        }
    }

    /// Fetch the function index and create a resolver.
    ///
    /// # Errors
    ///
    /// Returns an error if the index cannot be fetched or parsed.
    pub fn load(index: Option<&str>) -> Result<Self, IndexError> {
        let source = IndexSource::from_location(index.unwrap_or(INDEX));
        Ok(Self::new(DocIndex::load(&source)?))
    }

    fn native_name(artifact: &Artifact) -> String {
        bare_type_name(artifact.native_type.as_deref().unwrap_or(&artifact.name))
    }

    fn class_node(&self, artifact: &Artifact) -> Option<NodeId> {
        self.classes.get_or_query(&artifact.name, || {
            let path = Path::descendant("class").attr("name", &Self::native_name(artifact));
            let node = self.index.find(&path);
            tracing::debug!(%path, found = node.is_some(), "cppreference class lookup");
            node
        })
    }

    fn class_base(&self, node: NodeId) -> Option<String> {
        self.index
            .attr(node, "link")
            .map(|link| format!("{ROOT}/{link}"))
    }

    /// URL of a member node, relative to its class page.
    fn member_url(&self, class: NodeId, member: NodeId) -> Option<String> {
        let base = self.class_base(class)?;
        match self.index.attr(member, "link") {
            Some(".") => Some(format!("{base}.html")),
            Some(link) => Some(format!("{base}/{link}.html")),
            None => self
                .index
                .attr(member, "name")
                .map(|name| format!("{base}/{name}.html")),
        }
    }

    fn find_member(&self, class: NodeId, tag: &str, candidates: &[String]) -> Option<NodeId> {
        candidates.iter().find_map(|candidate| {
            self.index
                .find_from(class, &Path::children(tag).attr("name", candidate))
        })
    }

    fn function_url(&self, artifact: &Artifact, member: &NativeMember) -> Option<String> {
        if matches!(member.name.as_str(), "initialize" | "initialize_copy") {
            return self.class_url(artifact);
        }

        let class = self.class_node(artifact)?;
        let overrides = self.method_mappings.get(&Self::native_name(artifact));
        let candidates = method_candidates(&member.name, overrides);
        let node = self.find_member(class, "function", &candidates)?;
        self.member_url(class, node)
    }
}

impl Resolver for CppReference {
    fn class_url(&self, artifact: &Artifact) -> Option<String> {
        let node = self.class_node(artifact)?;
        self.class_base(node).map(|base| format!("{base}.html"))
    }

    fn module_url(&self, _artifact: &Artifact) -> Option<String> {
        None
    }

    fn union_url(&self, artifact: &Artifact) -> Option<String> {
        self.class_url(artifact)
    }

    fn enum_url(&self, artifact: &Artifact) -> Option<String> {
        self.class_url(artifact)
    }

    fn enum_value_url(&self, _artifact: &Artifact, _value: &str) -> Option<String> {
        None
    }

    fn singleton_method_url(&self, artifact: &Artifact, member: &NativeMember) -> Option<String> {
        self.function_url(artifact, member)
    }

    fn method_url(&self, artifact: &Artifact, member: &NativeMember) -> Option<String> {
        self.function_url(artifact, member)
    }

    fn attribute_url(&self, artifact: &Artifact, member: &NativeMember) -> Option<String> {
        let class = self.class_node(artifact)?;
        let node = self.find_member(class, "variable", &attribute_candidates(&member.name))?;
        self.member_url(class, node)
    }
}
