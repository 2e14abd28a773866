//! Markdown rendering of artifact pages.

use std::borrow::Cow;

use bindoc_registry::{
    Artifact, ArtifactKind, CONSTRUCTOR, MemberGroup, NativeKind, NativeMember, Registry,
};
use bindoc_resolve::{NamespaceResolverMap, Resolver};

use crate::page::{LinkCounts, Page, page_path};

/// Characters escaped in operator method names.
const MARKDOWN_SPECIAL: &[char] = &['\\', '*', '+', '-', '.', '!', '|', '[', ']', '_'];

/// Renders one Markdown page per artifact.
///
/// Rendering is pure: the only side effects are resolver cache fills.
pub struct PageRenderer<'a> {
    registry: &'a Registry,
    resolvers: &'a NamespaceResolverMap,
}

impl<'a> PageRenderer<'a> {
    /// Create a renderer over a registry and its resolvers.
    #[must_use]
    pub fn new(registry: &'a Registry, resolvers: &'a NamespaceResolverMap) -> Self {
        Self {
            registry,
            resolvers,
        }
    }

    /// Render an artifact's page.
    #[must_use]
    pub fn render(&self, artifact: &Artifact) -> Page {
        let mut markup = Markup::default();
        match artifact.kind() {
            ArtifactKind::Module => self.write_module(&mut markup, artifact),
            ArtifactKind::Class => self.write_class(&mut markup, artifact),
            ArtifactKind::Enum => self.write_enum(&mut markup, artifact),
            ArtifactKind::Union => self.write_union(&mut markup, artifact),
        }

        let Markup { content, links } = markup;
        Page {
            path: page_path(artifact),
            content: format!("{}\n", content.trim_end()),
            links,
        }
    }

    fn resolver(&self, artifact: &Artifact) -> Option<&'a dyn Resolver> {
        self.resolvers.resolver_for(artifact)
    }

    fn write_module(&self, out: &mut Markup, module: &Artifact) {
        let resolver = self.resolver(module);
        out.heading(&module.name, resolver.and_then(|r| r.module_url(module)));

        // Module functions are documented as namespace-level functions.
        let mut entries = Vec::new();
        for group in self.registry.singleton_functions(module) {
            for member in group.members {
                let url = resolver.and_then(|r| r.method_url(module, member));
                entries.push(self.member_line(out, member, url));
            }
        }
        out.section("Singleton Methods", &entries);
    }

    fn write_class(&self, out: &mut Markup, class: &Artifact) {
        let resolver = self.resolver(class);
        out.heading(class.short_name(), resolver.and_then(|r| r.class_url(class)));

        let mut singletons = Vec::new();
        for group in self.registry.singleton_functions(class) {
            for member in group.members {
                let url = resolver.and_then(|r| r.singleton_method_url(class, member));
                singletons.push(self.member_line(out, member, url));
            }
        }
        out.section("Singleton Methods", &singletons);

        self.write_attributes(out, class, resolver);

        let (constructors, methods): (Vec<_>, Vec<_>) = self
            .registry
            .methods(class)
            .into_iter()
            .partition(|group| group.name == CONSTRUCTOR);

        let mut entries = Vec::new();
        for member in constructors.iter().flat_map(|group| &group.members) {
            let url = resolver.and_then(|r| {
                r.method_url(class, member)
                    .or_else(|| r.class_url(class))
            });
            entries.push(self.member_line(out, member, url));
        }
        out.section("Constructors", &entries);

        let mut entries = Vec::new();
        for member in methods.iter().flat_map(|group| &group.members) {
            let url = resolver.and_then(|r| r.method_url(class, member));
            entries.push(self.member_line(out, member, url));
        }
        out.section("Methods", &entries);
    }

    fn write_enum(&self, out: &mut Markup, artifact: &Artifact) {
        let resolver = self.resolver(artifact);
        out.heading(
            &format!("{} Enum", artifact.short_name()),
            resolver.and_then(|r| r.enum_url(artifact)),
        );

        let values: Vec<String> = artifact
            .values
            .iter()
            .map(|value| {
                let url = resolver.and_then(|r| r.enum_value_url(artifact, value));
                out.link(value, url)
            })
            .collect();
        out.bullets("Values", &values);
    }

    fn write_union(&self, out: &mut Markup, union: &Artifact) {
        let resolver = self.resolver(union);
        out.heading(
            &format!("{} Union", union.short_name()),
            resolver.and_then(|r| r.union_url(union)),
        );
        self.write_attributes(out, union, resolver);
    }

    fn write_attributes(
        &self,
        out: &mut Markup,
        artifact: &Artifact,
        resolver: Option<&dyn Resolver>,
    ) {
        let entries: Vec<String> = self
            .registry
            .attributes(artifact)
            .iter()
            .filter_map(|group| self.attribute_line(out, artifact, group, resolver))
            .collect();
        out.section("Attributes", &entries);
    }

    /// `[name](url): [Type](url) (access)`
    fn attribute_line(
        &self,
        out: &mut Markup,
        artifact: &Artifact,
        group: &MemberGroup<'_>,
        resolver: Option<&dyn Resolver>,
    ) -> Option<String> {
        let first = group.members.first()?;
        let readable = group
            .members
            .iter()
            .any(|m| m.kind == NativeKind::AttributeReader);
        let writable = group
            .members
            .iter()
            .any(|m| m.kind == NativeKind::AttributeWriter);
        let access = match (readable, writable) {
            (true, true) => "read/write",
            (true, false) => "read",
            _ => "write",
        };

        let name = out.link(
            group.name,
            resolver.and_then(|r| r.attribute_url(artifact, first)),
        );
        let type_name = self.type_link(out, first.attribute_type());
        Some(format!("{name}: {type_name} ({access})"))
    }

    /// `[name](url)(param: [Type](url), ...)`
    fn member_line(&self, out: &mut Markup, member: &NativeMember, url: Option<String>) -> String {
        let name = out.link(&escape_name(&member.name), url);
        let parameters: Vec<String> = member
            .parameters
            .iter()
            .map(|parameter| {
                format!(
                    "{}: {}",
                    parameter.name,
                    self.type_link(out, &parameter.type_name)
                )
            })
            .collect();
        format!("{name}({})", parameters.join(", "))
    }

    fn type_link(&self, out: &mut Markup, type_name: &str) -> String {
        let artifact = self.registry.type_artifact(type_name);
        let url = self
            .resolver(&artifact)
            .and_then(|r| r.type_url(&artifact));
        out.link(type_name, url)
    }
}

/// Page text under construction, with link outcomes.
#[derive(Debug, Default)]
struct Markup {
    content: String,
    links: LinkCounts,
}

impl Markup {
    /// `[text](url)`, or plain `text` without a URL.
    fn link(&mut self, text: &str, url: Option<String>) -> String {
        match url {
            Some(url) => {
                self.links.linked += 1;
                format!("[{text}]({url})")
            }
            None => {
                self.links.unlinked += 1;
                text.to_owned()
            }
        }
    }

    fn heading(&mut self, text: &str, url: Option<String>) {
        let title = self.link(text, url);
        self.content.push_str("# ");
        self.content.push_str(&title);
        self.content.push('\n');
    }

    /// Section of blank-line separated entries. Empty sections are omitted.
    fn section(&mut self, title: &str, entries: &[String]) {
        if entries.is_empty() {
            return;
        }
        self.content.push_str("## ");
        self.content.push_str(title);
        self.content.push('\n');
        self.content.push_str(&entries.join("\n\n"));
        self.content.push_str("\n\n");
    }

    /// Bulleted list. The heading is written even when there are no items.
    fn bullets(&mut self, title: &str, items: &[String]) {
        self.content.push_str("## ");
        self.content.push_str(title);
        self.content.push('\n');
        for item in items {
            self.content.push_str("* ");
            self.content.push_str(item);
            self.content.push('\n');
        }
        self.content.push('\n');
    }
}

/// Escape Markdown syntax in operator names such as `[]=` or `*`.
///
/// Names containing any alphanumeric character are returned unchanged.
fn escape_name(name: &str) -> Cow<'_, str> {
    if name.chars().any(char::is_alphanumeric) {
        return Cow::Borrowed(name);
    }
    let mut escaped = String::with_capacity(name.len() * 2);
    for c in name.chars() {
        if MARKDOWN_SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}
