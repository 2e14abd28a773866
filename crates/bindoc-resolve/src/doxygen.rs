//! Resolver for project documentation generated by Doxygen.
//!
//! Lookups run against the project's tag file. Compounds (classes, structs,
//! unions, namespaces, groups) carry a `filename`; members carry an
//! `anchorfile` and `anchor`:
//!
//! ```xml
//! <compound kind="class">
//!   <name>cv::Mat</name>
//!   <filename>classcv_1_1Mat.html</filename>
//!   <member kind="function">
//!     <type>bool</type>
//!     <name>empty</name>
//!     <anchorfile>classcv_1_1Mat.html</anchorfile>
//!     <anchor>abbec3a0a</anchor>
//!     <arglist>() const</arglist>
//!   </member>
//! </compound>
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use bindoc_config::{DoxygenConfig, TypeMapping};
use bindoc_index::{DocIndex, IndexError, IndexSource, NodeId, Path};
use bindoc_registry::{Artifact, EnclosingKind, NativeMember, SEPARATOR};

use crate::Resolver;
use crate::cache::NodeCache;
use crate::naming::{
    attribute_candidates, bare_type_name, method_candidates, strip_template_args,
};

/// Compound kinds that document a class-like type.
const CLASS_KINDS: &[&str] = &["class", "struct", "union"];

/// Alias name -> underlying type name.
type AliasTable = HashMap<String, String>;

/// Doxygen tag file resolver.
#[derive(Debug)]
pub struct Doxygen {
    root: String,
    index: DocIndex,
    type_mappings: Vec<TypeMapping>,
    method_mappings: HashMap<String, HashMap<String, String>>,
    compounds: NodeCache,
    enums: NodeCache,
    /// Typedef tables keyed by top-level native namespace, built on first visit.
    aliases: RefCell<HashMap<String, AliasTable>>,
}

impl Doxygen {
    /// Create a resolver over a parsed tag file.
    #[must_use]
    pub fn new(
        root: &str,
        index: DocIndex,
        type_mappings: Vec<TypeMapping>,
        method_mappings: HashMap<String, HashMap<String, String>>,
    ) -> Self {
        Self {
            root: root.trim_end_matches('/').to_owned(),
            index,
            type_mappings,
            method_mappings,
            compounds: NodeCache::default(),
            enums: NodeCache::default(),
            aliases: RefCell::new(HashMap::new()),
        }
    }

    /// Fetch the configured tag file and create a resolver.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag file cannot be fetched or parsed.
    pub fn load(config: &DoxygenConfig) -> Result<Self, IndexError> {
        let index = DocIndex::load(&IndexSource::from_location(&config.tagfile))?;
        Ok(Self::new(
            &config.root,
            index,
            config.type_mappings.clone(),
            config.method_mappings.clone(),
        ))
    }

    /// Native name after prefix/template stripping and configured rewrites.
    fn native_name(&self, artifact: &Artifact) -> String {
        let native = artifact.native_type.as_deref().unwrap_or(&artifact.name);
        self.type_mappings
            .iter()
            .fold(bare_type_name(native), |name, mapping| mapping.apply(&name))
    }

    /// Native class name with a typedef in the last segment replaced.
    fn class_name(&self, artifact: &Artifact) -> String {
        let name = self.native_name(artifact);
        let Some((namespace, _)) = name.split_once(SEPARATOR) else {
            return name;
        };
        let Some((prefix, last)) = name.rsplit_once(SEPARATOR) else {
            return name;
        };

        let mut aliases = self.aliases.borrow_mut();
        let table = aliases
            .entry(namespace.to_owned())
            .or_insert_with(|| self.alias_table(namespace));
        match table.get(last) {
            Some(target) if target.contains(SEPARATOR) => target.clone(),
            Some(target) => format!("{prefix}{SEPARATOR}{target}"),
            None => name,
        }
    }

    /// Scan a namespace compound's typedef members.
    fn alias_table(&self, namespace: &str) -> AliasTable {
        let path = Path::descendant("compound")
            .attr("kind", "namespace")
            .child_text("name", namespace)
            .child("member")
            .attr("kind", "typedef");

        let table: AliasTable = self
            .index
            .find_all(&path)
            .into_iter()
            .filter_map(|member| {
                let alias = self.index.child_text(member, "name")?;
                let target = clean_alias_target(self.index.child_text(member, "type")?);
                (!target.is_empty() && target != alias).then(|| (alias.to_owned(), target))
            })
            .collect();

        tracing::debug!(namespace, aliases = table.len(), "Built typedef table");
        table
    }

    fn class_node(&self, artifact: &Artifact) -> Option<NodeId> {
        self.compounds.get_or_query(&artifact.name, || {
            let path = Path::descendant("compound")
                .attr_in("kind", CLASS_KINDS)
                .child_text("name", &self.class_name(artifact));
            let node = self.index.find(&path);
            tracing::debug!(%path, found = node.is_some(), "Doxygen compound lookup");
            node
        })
    }

    fn module_node(&self, artifact: &Artifact) -> Option<NodeId> {
        self.compounds.get_or_query(&artifact.name, || {
            let path = Path::descendant("compound")
                .attr("kind", "namespace")
                .child_text("name", &artifact.name.to_lowercase());
            self.index.find(&path)
        })
    }

    fn enum_node(&self, artifact: &Artifact) -> Option<NodeId> {
        self.enums.get_or_query(&artifact.name, || {
            let native = self.native_name(artifact);
            let (parent, leaf) = native
                .rsplit_once(SEPARATOR)
                .unwrap_or(("", native.as_str()));

            let compound = match artifact.enclosing_kind() {
                EnclosingKind::Global => Path::descendant("compound").attr("kind", "group"),
                EnclosingKind::Class => Path::descendant("compound")
                    .attr_in("kind", &["class", "struct"])
                    .child_text("name", parent),
                EnclosingKind::Namespace => Path::descendant("compound")
                    .attr("kind", "namespace")
                    .child_text("name", parent),
            };
            let path = compound
                .child("member")
                .attr("kind", "enumeration")
                .child_text("name", leaf);
            let node = self.index.find(&path);
            tracing::debug!(%path, found = node.is_some(), "Doxygen enum lookup");
            node
        })
    }

    /// `root/anchorfile#anchor` for a member node.
    fn member_url(&self, member: NodeId) -> Option<String> {
        let file = self.index.child_text(member, "anchorfile")?;
        let anchor = self.index.child_text(member, "anchor")?;
        Some(format!("{}/{file}#{anchor}", self.root))
    }

    /// `root/filename` for a compound node.
    fn compound_url(&self, compound: NodeId) -> Option<String> {
        self.index
            .child_text(compound, "filename")
            .map(|file| format!("{}/{file}", self.root))
    }

    /// Resolve a function member by candidate name, then by arity.
    ///
    /// The first candidate with any matching member decides the outcome.
    fn function_node(
        &self,
        compound: NodeId,
        candidates: &[String],
        member: &NativeMember,
        singleton: bool,
    ) -> Option<NodeId> {
        candidates.iter().find_map(|candidate| {
            let mut path = Path::children("member").attr("kind", "function");
            if singleton {
                path = path.attr("static", "yes");
            }
            let nodes = self
                .index
                .find_all_from(compound, &path.child_text("name", candidate));
            (!nodes.is_empty()).then(|| self.pick_overload(&nodes, member))
        })
        .flatten()
    }

    /// Pick among same-named overloads by declared parameter count.
    ///
    /// When several overloads share the arity the first one is used.
    fn pick_overload(&self, nodes: &[NodeId], member: &NativeMember) -> Option<NodeId> {
        if let [only] = nodes {
            return Some(*only);
        }

        let arity = member.parameters.len();
        let survivors: Vec<NodeId> = nodes
            .iter()
            .copied()
            .filter(|&node| {
                self.index
                    .child_text(node, "arglist")
                    .and_then(arglist_arity)
                    == Some(arity)
            })
            .collect();

        if survivors.len() > 1 {
            tracing::debug!(
                member = %member.name,
                arity,
                overloads = survivors.len(),
                "Ambiguous overload, using first"
            );
        }
        survivors.first().copied()
    }
}

impl Resolver for Doxygen {
    fn class_url(&self, artifact: &Artifact) -> Option<String> {
        self.compound_url(self.class_node(artifact)?)
    }

    fn module_url(&self, artifact: &Artifact) -> Option<String> {
        self.compound_url(self.module_node(artifact)?)
    }

    fn union_url(&self, artifact: &Artifact) -> Option<String> {
        self.class_url(artifact)
    }

    fn enum_url(&self, artifact: &Artifact) -> Option<String> {
        self.member_url(self.enum_node(artifact)?)
    }

    fn enum_value_url(&self, artifact: &Artifact, value: &str) -> Option<String> {
        let enumeration = self.enum_node(artifact)?;
        let compound = self.index.parent(enumeration)?;
        let values = self.index.find_all_from(
            compound,
            &Path::children("member")
                .attr("kind", "enumvalue")
                .child_text("name", value),
        );
        // Values follow their enumeration; prefer those over same-named
        // values of another enum in the compound.
        let node = values
            .iter()
            .find(|&&node| node > enumeration)
            .or_else(|| values.first())?;
        self.member_url(*node)
    }

    fn singleton_method_url(&self, artifact: &Artifact, member: &NativeMember) -> Option<String> {
        let class = self.class_node(artifact)?;
        let overrides = self.method_mappings.get(&self.native_name(artifact));
        let candidates = method_candidates(&member.name, overrides);
        self.member_url(self.function_node(class, &candidates, member, true)?)
    }

    fn method_url(&self, artifact: &Artifact, member: &NativeMember) -> Option<String> {
        let compound = if artifact.is_module() {
            self.module_node(artifact)
        } else {
            self.class_node(artifact)
        }?;

        let candidates = if member.is_constructor() {
            let class_name = self.class_name(artifact);
            let short = class_name
                .rsplit(SEPARATOR)
                .next()
                .unwrap_or(&class_name)
                .to_owned();
            vec![short]
        } else {
            let overrides = self.method_mappings.get(&self.native_name(artifact));
            method_candidates(&member.name, overrides)
        };

        match self.function_node(compound, &candidates, member, false) {
            Some(node) => self.member_url(node),
            None if member.is_constructor() => self.class_url(artifact),
            None => None,
        }
    }

    fn attribute_url(&self, artifact: &Artifact, member: &NativeMember) -> Option<String> {
        let class = self.class_node(artifact)?;
        let node = attribute_candidates(&member.name)
            .iter()
            .find_map(|candidate| {
                self.index.find_from(
                    class,
                    &Path::children("member")
                        .attr("kind", "variable")
                        .child_text("name", candidate),
                )
            })?;
        self.member_url(node)
    }
}

/// Underlying type of a typedef with qualifiers, pointer and reference
/// markers and template arguments removed.
fn clean_alias_target(target: &str) -> String {
    let unqualified = target
        .split_whitespace()
        .filter(|token| !matches!(*token, "const" | "volatile"))
        .collect::<Vec<_>>()
        .join(" ");
    let unmarked: String = unqualified.chars().filter(|c| !matches!(c, '&' | '*')).collect();
    strip_template_args(&unmarked)
}

/// Number of declared arguments in a tag file `arglist`, e.g. `(int a, int b) const`.
fn arglist_arity(arglist: &str) -> Option<usize> {
    let open = arglist.find('(')?;
    let close = arglist.rfind(')')?;
    if close < open {
        return None;
    }
    let inner = arglist[open + 1..close].trim();
    if inner.is_empty() || inner == "void" {
        Some(0)
    } else {
        Some(inner.split(',').count())
    }
}

#[cfg(test)]
mod tests {
    use bindoc_registry::NativeKind;

    use super::*;

    const ROOT: &str = "https://docs.example.com";

    const TAGFILE: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='yes' ?>
<tagfile>
  <compound kind="class">
    <name>Widget</name>
    <filename>classWidget.html</filename>
    <member kind="function">
      <type>bool</type>
      <name>isReady</name>
      <anchorfile>classWidget.html</anchorfile>
      <anchor>a01</anchor>
      <arglist>() const</arglist>
    </member>
    <member kind="function">
      <type>bool</type>
      <name>IsReady</name>
      <anchorfile>classWidget.html</anchorfile>
      <anchor>a02</anchor>
      <arglist>()</arglist>
    </member>
  </compound>
  <compound kind="namespace">
    <name>ns</name>
    <filename>namespacens.html</filename>
    <member kind="typedef">
      <type>Point_&lt; int &gt;</type>
      <name>Point2i</name>
      <anchorfile>namespacens.html</anchorfile>
      <anchor>t01</anchor>
      <arglist></arglist>
    </member>
    <member kind="typedef">
      <type>const Widget &amp;</type>
      <name>WidgetRef</name>
      <anchorfile>namespacens.html</anchorfile>
      <anchor>t02</anchor>
      <arglist></arglist>
    </member>
    <member kind="enumeration">
      <type></type>
      <name>Flags</name>
      <anchorfile>namespacens.html</anchorfile>
      <anchor>e01</anchor>
      <arglist></arglist>
    </member>
    <member kind="enumvalue">
      <name>FLAG_A</name>
      <anchorfile>namespacens.html</anchorfile>
      <anchor>e01a</anchor>
      <arglist></arglist>
    </member>
    <member kind="function">
      <type>void</type>
      <name>initModule</name>
      <anchorfile>namespacens.html</anchorfile>
      <anchor>f01</anchor>
      <arglist>()</arglist>
    </member>
  </compound>
  <compound kind="class">
    <name>ns::Point_</name>
    <filename>classns_1_1Point__.html</filename>
    <member kind="function">
      <type></type>
      <name>Point_</name>
      <anchorfile>classns_1_1Point__.html</anchorfile>
      <anchor>c01</anchor>
      <arglist>()</arglist>
    </member>
    <member kind="function">
      <type></type>
      <name>Point_</name>
      <anchorfile>classns_1_1Point__.html</anchorfile>
      <anchor>c02</anchor>
      <arglist>(int x, int y)</arglist>
    </member>
    <member kind="function">
      <type>double</type>
      <name>dot</name>
      <anchorfile>classns_1_1Point__.html</anchorfile>
      <anchor>m01</anchor>
      <arglist>(const Point_ &amp;pt) const</arglist>
    </member>
    <member kind="function">
      <type>double</type>
      <name>dot</name>
      <anchorfile>classns_1_1Point__.html</anchorfile>
      <anchor>m02</anchor>
      <arglist>(const Point_ &amp;pt, int scale) const</arglist>
    </member>
    <member kind="function">
      <type>double</type>
      <name>norm</name>
      <anchorfile>classns_1_1Point__.html</anchorfile>
      <anchor>m03</anchor>
      <arglist>(int type)</arglist>
    </member>
    <member kind="function">
      <type>double</type>
      <name>norm</name>
      <anchorfile>classns_1_1Point__.html</anchorfile>
      <anchor>m04</anchor>
      <arglist>(double type)</arglist>
    </member>
    <member kind="function" static="yes">
      <type>Point_</type>
      <name>zero</name>
      <anchorfile>classns_1_1Point__.html</anchorfile>
      <anchor>s01</anchor>
      <arglist>()</arglist>
    </member>
    <member kind="variable">
      <type>int</type>
      <name>x</name>
      <anchorfile>classns_1_1Point__.html</anchorfile>
      <anchor>v01</anchor>
      <arglist></arglist>
    </member>
    <member kind="variable">
      <type>int</type>
      <name>rowCount</name>
      <anchorfile>classns_1_1Point__.html</anchorfile>
      <anchor>v02</anchor>
      <arglist></arglist>
    </member>
    <member kind="function">
      <type>bool</type>
      <name>operator==</name>
      <anchorfile>classns_1_1Point__.html</anchorfile>
      <anchor>o01</anchor>
      <arglist>(const Point_ &amp;other) const</arglist>
    </member>
  </compound>
  <compound kind="class">
    <name>ns::Widget</name>
    <filename>classns_1_1Widget.html</filename>
    <member kind="enumeration">
      <type></type>
      <name>Color</name>
      <anchorfile>classns_1_1Widget.html</anchorfile>
      <anchor>w01</anchor>
      <arglist></arglist>
    </member>
    <member kind="enumvalue">
      <name>RED</name>
      <anchorfile>classns_1_1Widget.html</anchorfile>
      <anchor>w01a</anchor>
      <arglist></arglist>
    </member>
  </compound>
  <compound kind="group">
    <name>core</name>
    <filename>group__core.html</filename>
    <member kind="enumeration">
      <type></type>
      <name>Border</name>
      <anchorfile>group__core.html</anchorfile>
      <anchor>g01</anchor>
      <arglist></arglist>
    </member>
  </compound>
</tagfile>"#;

    fn resolver() -> Doxygen {
        resolver_with(Vec::new(), HashMap::new())
    }

    fn resolver_with(
        type_mappings: Vec<TypeMapping>,
        method_mappings: HashMap<String, HashMap<String, String>>,
    ) -> Doxygen {
        Doxygen::new(
            ROOT,
            DocIndex::parse(TAGFILE).unwrap(),
            type_mappings,
            method_mappings,
        )
    }

    fn point() -> Artifact {
        Artifact::class("Ns::Point2i", "ns::Point2i")
    }

    fn url(anchor_file: &str, anchor: &str) -> Option<String> {
        Some(format!("{ROOT}/{anchor_file}#{anchor}"))
    }

    #[test]
    fn test_predicate_resolves_first_candidate() {
        let widget = Artifact::class("Ns::Widget", "Widget");
        let member = NativeMember::method("is_ready?");

        // Both isReady and IsReady exist; the lower camel candidate wins.
        assert_eq!(
            resolver().method_url(&widget, &member),
            url("classWidget.html", "a01")
        );
    }

    #[test]
    fn test_class_url_through_typedef() {
        assert_eq!(
            resolver().class_url(&point()),
            Some(format!("{ROOT}/classns_1_1Point__.html"))
        );
    }

    #[test]
    fn test_typedef_strips_qualifiers() {
        let widget_ref = Artifact::class("Ns::WidgetRef", "ns::WidgetRef");
        assert_eq!(
            resolver().class_url(&widget_ref),
            Some(format!("{ROOT}/classns_1_1Widget.html"))
        );
    }

    #[test]
    fn test_unknown_class() {
        let resolver = resolver();
        let artifact = Artifact::class("Ns::Missing", "ns::Missing");
        assert_eq!(resolver.class_url(&artifact), None);
        assert_eq!(
            resolver.method_url(&artifact, &NativeMember::method("size")),
            None
        );
        assert_eq!(
            resolver.attribute_url(
                &artifact,
                &NativeMember::new("x", NativeKind::AttributeReader)
            ),
            None
        );
    }

    #[test]
    fn test_overload_filtered_by_arity() {
        let resolver = resolver();
        let one = NativeMember::method("dot").with_parameter("pt", "Ns::Point2i");
        let two = NativeMember::method("dot")
            .with_parameter("pt", "Ns::Point2i")
            .with_parameter("scale", "Integer");

        assert_eq!(
            resolver.method_url(&point(), &one),
            url("classns_1_1Point__.html", "m01")
        );
        assert_eq!(
            resolver.method_url(&point(), &two),
            url("classns_1_1Point__.html", "m02")
        );
    }

    #[test]
    fn test_ambiguous_overload_uses_first() {
        let member = NativeMember::method("norm").with_parameter("type", "Integer");
        assert_eq!(
            resolver().method_url(&point(), &member),
            url("classns_1_1Point__.html", "m03")
        );
    }

    #[test]
    fn test_no_overload_with_matching_arity() {
        let member = NativeMember::method("norm");
        assert_eq!(resolver().method_url(&point(), &member), None);
    }

    #[test]
    fn test_constructor_by_class_name_and_arity() {
        let resolver = resolver();
        let default = NativeMember::method("initialize");
        let xy = NativeMember::method("initialize")
            .with_parameter("x", "Integer")
            .with_parameter("y", "Integer");

        assert_eq!(
            resolver.method_url(&point(), &default),
            url("classns_1_1Point__.html", "c01")
        );
        assert_eq!(
            resolver.method_url(&point(), &xy),
            url("classns_1_1Point__.html", "c02")
        );
    }

    #[test]
    fn test_constructor_falls_back_to_class() {
        let widget = Artifact::class("Ns::Widget", "ns::Widget");
        assert_eq!(
            resolver().method_url(&widget, &NativeMember::method("initialize")),
            Some(format!("{ROOT}/classns_1_1Widget.html"))
        );
    }

    #[test]
    fn test_operator_method() {
        let member = NativeMember::method("==").with_parameter("other", "Ns::Point2i");
        assert_eq!(
            resolver().method_url(&point(), &member),
            url("classns_1_1Point__.html", "o01")
        );
    }

    #[test]
    fn test_method_mapping() {
        let mappings = HashMap::from([(
            "ns::Point2i".to_owned(),
            HashMap::from([("magnitude".to_owned(), "norm".to_owned())]),
        )]);
        let resolver = resolver_with(Vec::new(), mappings);
        let member = NativeMember::method("magnitude").with_parameter("type", "Integer");

        assert_eq!(
            resolver.method_url(&point(), &member),
            url("classns_1_1Point__.html", "m03")
        );
    }

    #[test]
    fn test_type_mapping() {
        let mapping = TypeMapping::new("^ns::Point\\d\\w$", "ns::Point_").unwrap();
        let resolver = resolver_with(vec![mapping], HashMap::new());
        let artifact = Artifact::class("Ns::Point3f", "ns::Point3f");

        assert_eq!(
            resolver.class_url(&artifact),
            Some(format!("{ROOT}/classns_1_1Point__.html"))
        );
    }

    #[test]
    fn test_singleton_requires_static() {
        let resolver = resolver();
        assert_eq!(
            resolver.singleton_method_url(&point(), &NativeMember::function("zero")),
            url("classns_1_1Point__.html", "s01")
        );
        assert_eq!(
            resolver.singleton_method_url(&point(), &NativeMember::function("dot")),
            None
        );
    }

    #[test]
    fn test_attribute_candidates() {
        let resolver = resolver();
        let x = NativeMember::new("x", NativeKind::AttributeReader);
        let row_count = NativeMember::new("row_count", NativeKind::AttributeWriter);

        assert_eq!(
            resolver.attribute_url(&point(), &x),
            url("classns_1_1Point__.html", "v01")
        );
        assert_eq!(
            resolver.attribute_url(&point(), &row_count),
            url("classns_1_1Point__.html", "v02")
        );
    }

    #[test]
    fn test_enum_under_class() {
        let resolver = resolver();
        let color = Artifact::class("Ns::Widget::Color", "enum ns::Widget::Color")
            .with_enclosing(EnclosingKind::Class);

        assert_eq!(
            resolver.enum_url(&color),
            url("classns_1_1Widget.html", "w01")
        );
        assert_eq!(
            resolver.enum_value_url(&color, "RED"),
            url("classns_1_1Widget.html", "w01a")
        );
        assert_eq!(resolver.enum_value_url(&color, "BLUE"), None);
    }

    #[test]
    fn test_enum_under_namespace() {
        let flags =
            Artifact::class("Ns::Flags", "enum ns::Flags").with_enclosing(EnclosingKind::Namespace);
        assert_eq!(
            resolver().enum_url(&flags),
            url("namespacens.html", "e01")
        );
        assert_eq!(
            resolver().enum_value_url(&flags, "FLAG_A"),
            url("namespacens.html", "e01a")
        );
    }

    #[test]
    fn test_enum_in_group() {
        let border =
            Artifact::class("Border", "enum Border").with_enclosing(EnclosingKind::Global);
        assert_eq!(resolver().enum_url(&border), url("group__core.html", "g01"));
    }

    #[test]
    fn test_enum_wrong_parent_kind() {
        // Declared as nested in a namespace, but documented under a class
        let color = Artifact::class("Ns::Widget::Color", "enum ns::Widget::Color")
            .with_enclosing(EnclosingKind::Namespace);
        assert_eq!(resolver().enum_url(&color), None);
    }

    #[test]
    fn test_module_urls() {
        let resolver = resolver();
        let module = Artifact::module("Ns");

        assert_eq!(
            resolver.module_url(&module),
            Some(format!("{ROOT}/namespacens.html"))
        );
        assert_eq!(
            resolver.method_url(&module, &NativeMember::function("init_module")),
            url("namespacens.html", "f01")
        );
    }

    #[test]
    fn test_arglist_arity() {
        assert_eq!(arglist_arity("()"), Some(0));
        assert_eq!(arglist_arity("(void)"), Some(0));
        assert_eq!(arglist_arity("(int a)"), Some(1));
        assert_eq!(arglist_arity("(int a, int b) const"), Some(2));
        assert_eq!(arglist_arity(""), None);
    }

    #[test]
    fn test_clean_alias_target() {
        assert_eq!(clean_alias_target("const std::string &"), "std::string");
        assert_eq!(clean_alias_target("Point_< int >"), "Point_");
        assert_eq!(clean_alias_target("volatile int *"), "int");
    }
}
