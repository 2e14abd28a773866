//! In-memory documentation index.
//!
//! Elements are stored in an arena in document order. Each node records the id
//! of its last descendant, so "is X below Y" is a range check and descendant
//! queries over the per-tag lists stay cheap on large tag files.

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::IndexError;
use crate::path::{Axis, Filter, Path, Step};

/// Identifier of an element in a [`DocIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// Synthetic document node that owns the root element.
const DOCUMENT: NodeId = NodeId(0);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Id of the last node in this node's subtree.
    last: usize,
}

/// Parsed reference document queryable by structural [`Path`].
#[derive(Debug)]
pub struct DocIndex {
    nodes: Vec<Node>,
    by_tag: HashMap<String, Vec<NodeId>>,
}

impl DocIndex {
    /// Parse an XML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not well-formed XML.
    pub fn parse(xml: &str) -> Result<Self, IndexError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut nodes = vec![Node::default()];
        let mut stack = vec![DOCUMENT];
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let id = push_node(&mut nodes, &reader, &e, &stack);
                    stack.push(id);
                }
                Event::Empty(e) => {
                    let id = push_node(&mut nodes, &reader, &e, &stack);
                    nodes[id.0].last = id.0;
                }
                Event::Text(e) => {
                    let text = reader.decoder().decode(&e)?;
                    append_text(&mut nodes, &stack, &text);
                }
                Event::GeneralRef(e) => {
                    // Entity references (e.g. &lt; in `std::map&lt;K, V&gt;`)
                    let entity = reader.decoder().decode(&e)?;
                    append_text(&mut nodes, &stack, &decode_entity(&entity));
                }
                Event::CData(e) => {
                    append_text(&mut nodes, &stack, &String::from_utf8_lossy(&e));
                }
                Event::End(_) => {
                    if let Some(id) = stack.pop() {
                        nodes[id.0].last = nodes.len() - 1;
                    }
                }
                Event::Eof => break,
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            }
            buf.clear();
        }

        if let Some(&open) = stack.last()
            && open != DOCUMENT
        {
            return Err(IndexError::Unclosed(nodes[open.0].tag.clone()));
        }
        nodes[DOCUMENT.0].last = nodes.len() - 1;

        let mut by_tag: HashMap<String, Vec<NodeId>> = HashMap::new();
        for (index, node) in nodes.iter().enumerate().skip(1) {
            by_tag.entry(node.tag.clone()).or_default().push(NodeId(index));
        }

        tracing::debug!(elements = nodes.len() - 1, "Parsed documentation index");
        Ok(Self { nodes, by_tag })
    }

    /// Number of elements in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Whether the index has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First element matching `path` from the document root, in document order.
    #[must_use]
    pub fn find(&self, path: &Path) -> Option<NodeId> {
        self.find_from(DOCUMENT, path)
    }

    /// All elements matching `path` from the document root, in document order.
    #[must_use]
    pub fn find_all(&self, path: &Path) -> Vec<NodeId> {
        self.find_all_from(DOCUMENT, path)
    }

    /// First element matching `path` relative to `context`.
    #[must_use]
    pub fn find_from(&self, context: NodeId, path: &Path) -> Option<NodeId> {
        self.find_all_from(context, path).into_iter().next()
    }

    /// All elements matching `path` relative to `context`, in document order.
    #[must_use]
    pub fn find_all_from(&self, context: NodeId, path: &Path) -> Vec<NodeId> {
        let mut current = vec![context];
        for step in &path.steps {
            let mut next: Vec<NodeId> = current
                .iter()
                .flat_map(|&node| self.select(node, step))
                .collect();
            next.sort_unstable();
            next.dedup();
            if next.is_empty() {
                return next;
            }
            current = next;
        }
        current
    }

    /// Tag name of an element.
    #[must_use]
    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    /// Attribute value of an element.
    #[must_use]
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0]
            .attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Trimmed text content directly inside an element.
    #[must_use]
    pub fn text(&self, node: NodeId) -> &str {
        self.nodes[node.0].text.trim()
    }

    /// Trimmed text of the first child element named `name`.
    #[must_use]
    pub fn child_text(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0]
            .children
            .iter()
            .find(|&&child| self.nodes[child.0].tag == name)
            .map(|&child| self.text(child))
    }

    /// Parent element, or `None` for the root element.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent.filter(|&parent| parent != DOCUMENT)
    }

    /// Child elements in document order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    fn select(&self, context: NodeId, step: &Step) -> Vec<NodeId> {
        let candidates: Vec<NodeId> = match step.axis {
            Axis::Child => self.nodes[context.0]
                .children
                .iter()
                .copied()
                .filter(|&child| self.nodes[child.0].tag == step.tag)
                .collect(),
            Axis::Descendant => {
                let Some(tagged) = self.by_tag.get(&step.tag) else {
                    return Vec::new();
                };
                let first = context.0 + 1;
                let last = self.nodes[context.0].last;
                let start = tagged.partition_point(|id| id.0 < first);
                let end = tagged.partition_point(|id| id.0 <= last);
                tagged[start..end].to_vec()
            }
        };

        candidates
            .into_iter()
            .filter(|&node| step.filters.iter().all(|filter| self.matches(node, filter)))
            .collect()
    }

    fn matches(&self, node: NodeId, filter: &Filter) -> bool {
        match filter {
            Filter::Attr { name, values } => self
                .attr(node, name)
                .is_some_and(|value| values.iter().any(|v| v == value)),
            Filter::ChildText { name, values } => {
                self.nodes[node.0].children.iter().any(|&child| {
                    self.nodes[child.0].tag == *name
                        && values.iter().any(|v| v == self.text(child))
                })
            }
        }
    }
}

fn push_node(
    nodes: &mut Vec<Node>,
    reader: &Reader<&[u8]>,
    e: &BytesStart,
    stack: &[NodeId],
) -> NodeId {
    let id = NodeId(nodes.len());
    let parent = stack.last().copied().unwrap_or(DOCUMENT);
    nodes.push(Node {
        tag: decode_bytes(reader, e.name().as_ref()),
        attrs: decode_attrs(reader, e),
        text: String::new(),
        parent: Some(parent),
        children: Vec::new(),
        last: id.0,
    });
    nodes[parent.0].children.push(id);
    id
}

fn append_text(nodes: &mut [Node], stack: &[NodeId], text: &str) {
    if let Some(&top) = stack.last()
        && top != DOCUMENT
    {
        nodes[top.0].text.push_str(text);
    }
}

fn decode_bytes(reader: &Reader<&[u8]>, bytes: &[u8]) -> String {
    reader.decoder().decode(bytes).map_or_else(
        |_| String::from_utf8_lossy(bytes).into_owned(),
        std::borrow::Cow::into_owned,
    )
}

fn decode_attrs(reader: &Reader<&[u8]>, e: &BytesStart) -> Vec<(String, String)> {
    e.attributes()
        .flatten()
        .map(|attr| {
            let key = decode_bytes(reader, attr.key.as_ref());
            let value = attr.unescape_value().map_or_else(
                |_| String::from_utf8_lossy(&attr.value).into_owned(),
                std::borrow::Cow::into_owned,
            );
            (key, value)
        })
        .collect()
}

/// Decode XML entity references to their character values.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_owned(),
        "gt" => ">".to_owned(),
        "amp" => "&".to_owned(),
        "apos" => "'".to_owned(),
        "quot" => "\"".to_owned(),
        s if s.starts_with('#') => {
            let code = if s.starts_with("#x") || s.starts_with("#X") {
                u32::from_str_radix(&s[2..], 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            code.and_then(char::from_u32)
                .map_or_else(|| format!("&{entity};"), |c| c.to_string())
        }
        _ => format!("&{entity};"),
    }
}
