//! RBS type signature generation for bindoc.
//!
//! [`SignatureEmitter`] writes one `.rbs` file per registry artifact, declaring
//! its singleton functions, attributes and methods with the parameter and
//! return types recorded by the binding layer:
//!
//! ```text
//! module Ns
//!   class Widget
//!     def self.create: () -> Ns::Widget
//!                    | (size: Integer) -> Ns::Widget
//!
//!     attr_accessor width: Integer
//!
//!     def resize: (w: Integer, h: Integer) -> NilClass
//!   end
//! end
//! ```
//!
//! No documentation index is consulted.

use std::fs;
use std::path::PathBuf;

use bindoc_registry::{Artifact, EnclosingKind, MemberGroup, NativeKind, NativeMember, Registry};

/// Indentation per nesting level.
const INDENT: &str = "  ";

/// Error writing signature files.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RbsError {
    /// A directory or file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders and writes RBS declarations for every artifact in a registry.
pub struct SignatureEmitter<'a> {
    registry: &'a Registry,
    output_dir: PathBuf,
}

impl<'a> SignatureEmitter<'a> {
    /// Create an emitter writing below `output_dir`.
    #[must_use]
    pub fn new(registry: &'a Registry, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            output_dir: output_dir.into(),
        }
    }

    /// Write a signature file per artifact. Returns the number of files written.
    ///
    /// # Errors
    ///
    /// Returns [`RbsError::Io`] if a directory or file cannot be written.
    pub fn emit(&self) -> Result<usize, RbsError> {
        tracing::info!(
            artifacts = self.registry.len(),
            output = %self.output_dir.display(),
            "Writing RBS signatures"
        );

        let mut written = 0;
        for artifact in self.registry.artifacts() {
            let path = self.output_dir.join(signature_path(artifact));
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| RbsError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&path, self.render(artifact))
                .map_err(|source| RbsError::Io {
                    path: path.clone(),
                    source,
                })?;
            tracing::debug!(artifact = %artifact.name, path = %path.display(), "Wrote signature");
            written += 1;
        }

        tracing::info!(files = written, "RBS signatures written");
        Ok(written)
    }

    /// RBS declaration of an artifact.
    #[must_use]
    pub fn render(&self, artifact: &Artifact) -> String {
        let mut out = String::new();

        if artifact.is_module() {
            out.push_str(&format!("module {}\n", artifact.name));
            let blocks = [self.singleton_block(artifact, 1)];
            push_blocks(&mut out, &blocks);
            out.push_str("end\n");
            return out;
        }

        let wrapper = artifact.enclosing_name().map(|parent| {
            let keyword = match artifact.enclosing_kind() {
                EnclosingKind::Class => "class",
                EnclosingKind::Global | EnclosingKind::Namespace => "module",
            };
            format!("{keyword} {parent}")
        });
        let depth = usize::from(wrapper.is_some());
        let pad = INDENT.repeat(depth);

        if let Some(wrapper) = &wrapper {
            out.push_str(wrapper);
            out.push('\n');
        }
        out.push_str(&format!("{pad}class {}\n", artifact.short_name()));
        let blocks = [
            self.singleton_block(artifact, depth + 1),
            self.attribute_block(artifact, depth + 1),
            self.method_block(artifact, depth + 1),
        ];
        push_blocks(&mut out, &blocks);
        out.push_str(&format!("{pad}end\n"));
        if wrapper.is_some() {
            out.push_str("end\n");
        }
        out
    }

    fn singleton_block(&self, artifact: &Artifact, depth: usize) -> Vec<String> {
        self.registry
            .singleton_functions(artifact)
            .iter()
            .map(|group| method_declaration(&format!("def self.{}", group.name), group, depth))
            .collect()
    }

    fn attribute_block(&self, artifact: &Artifact, depth: usize) -> Vec<String> {
        let pad = INDENT.repeat(depth);
        self.registry
            .attributes(artifact)
            .iter()
            .filter_map(|group| {
                let first = group.members.first()?;
                Some(format!(
                    "{pad}{} {}: {}",
                    attribute_keyword(group),
                    group.name,
                    first.attribute_type()
                ))
            })
            .collect()
    }

    fn method_block(&self, artifact: &Artifact, depth: usize) -> Vec<String> {
        self.registry
            .methods(artifact)
            .iter()
            .map(|group| method_declaration(&format!("def {}", group.name), group, depth))
            .collect()
    }
}

/// Output location of an artifact's signature file, relative to the output directory.
fn signature_path(artifact: &Artifact) -> PathBuf {
    let mut path: PathBuf = artifact.enclosing_segments().into_iter().collect();
    path.push(format!("{}.rbs", artifact.short_name()));
    path
}

/// Declaration lines of one overload group, continuations aligned under the `:`.
fn method_declaration(head: &str, group: &MemberGroup<'_>, depth: usize) -> String {
    let head = format!("{}{head}", INDENT.repeat(depth));
    let continuation = format!("\n{}| ", " ".repeat(head.chars().count()));
    let overloads: Vec<String> = group.members.iter().copied().map(method_type).collect();
    format!("{head}: {}", overloads.join(&continuation))
}

/// `(name: Type, ...) -> Return`
fn method_type(member: &NativeMember) -> String {
    let parameters: Vec<String> = member
        .parameters
        .iter()
        .map(|p| format!("{}: {}", p.name, p.type_name))
        .collect();
    format!("({}) -> {}", parameters.join(", "), member.return_type)
}

fn attribute_keyword(group: &MemberGroup<'_>) -> &'static str {
    let readable = group
        .members
        .iter()
        .any(|m| m.kind == NativeKind::AttributeReader);
    let writable = group
        .members
        .iter()
        .any(|m| m.kind == NativeKind::AttributeWriter);
    match (readable, writable) {
        (true, true) => "attr_accessor",
        (true, false) => "attr_reader",
        _ => "attr_writer",
    }
}

/// Append non-empty blocks of lines, separated by a blank line.
fn push_blocks(out: &mut String, blocks: &[Vec<String>]) {
    let mut first = true;
    for block in blocks.iter().filter(|block| !block.is_empty()) {
        if !first {
            out.push('\n');
        }
        first = false;
        for line in block {
            out.push_str(line);
            out.push('\n');
        }
    }
}
