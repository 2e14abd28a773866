//! Rendered pages and their output locations.

use std::ops::AddAssign;
use std::path::PathBuf;

use bindoc_registry::Artifact;

/// Number of names rendered as links and as plain text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinkCounts {
    pub linked: usize,
    pub unlinked: usize,
}

impl AddAssign for LinkCounts {
    fn add_assign(&mut self, other: Self) {
        self.linked += other.linked;
        self.unlinked += other.unlinked;
    }
}

/// A rendered documentation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Location relative to the output directory.
    pub path: PathBuf,
    /// Markdown content.
    pub content: String,
    /// Link outcomes while rendering.
    pub links: LinkCounts,
}

/// Output location of an artifact's page, relative to the output directory.
///
/// Modules own a directory and are written as its `index.md`; everything else
/// is `<Short>.md` inside the directory of its enclosing name.
pub(crate) fn page_path(artifact: &Artifact) -> PathBuf {
    if artifact.is_module() {
        let mut path: PathBuf = artifact.segments().collect();
        path.push("index.md");
        path
    } else {
        let mut path: PathBuf = artifact.enclosing_segments().into_iter().collect();
        path.push(format!("{}.md", artifact.short_name()));
        path
    }
}
