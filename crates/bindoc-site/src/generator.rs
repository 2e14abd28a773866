//! Site generation: render every artifact and write the pages.

use std::fs;
use std::path::{Path, PathBuf};

use bindoc_registry::{Artifact, Registry};
use bindoc_resolve::NamespaceResolverMap;

use crate::SiteError;
use crate::page::{LinkCounts, Page};
use crate::render::PageRenderer;

/// Outcome of a site generation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Pages written.
    pub pages: usize,
    /// Names rendered as links.
    pub linked: usize,
    /// Names rendered as plain text.
    pub unlinked: usize,
}

/// Writes one Markdown page per registry artifact.
pub struct SiteGenerator<'a> {
    registry: &'a Registry,
    renderer: PageRenderer<'a>,
    output_dir: PathBuf,
}

impl<'a> SiteGenerator<'a> {
    /// Create a generator writing below `output_dir`.
    #[must_use]
    pub fn new(
        registry: &'a Registry,
        resolvers: &'a NamespaceResolverMap,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            renderer: PageRenderer::new(registry, resolvers),
            output_dir: output_dir.into(),
        }
    }

    /// Output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render a single artifact without writing it.
    #[must_use]
    pub fn render(&self, artifact: &Artifact) -> Page {
        self.renderer.render(artifact)
    }

    /// Render and write every artifact, in qualified-name order.
    ///
    /// Every run rewrites all pages; existing files are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Io`] if a directory or page cannot be written.
    pub fn generate(&self) -> Result<GenerateSummary, SiteError> {
        tracing::info!(
            artifacts = self.registry.len(),
            output = %self.output_dir.display(),
            "Generating documentation site"
        );
        create_dir(&self.output_dir)?;

        let mut links = LinkCounts::default();
        let mut pages = 0;
        for artifact in self.registry.artifacts() {
            let page = self.renderer.render(artifact);
            let path = self.output_dir.join(&page.path);
            if let Some(parent) = path.parent() {
                create_dir(parent)?;
            }
            fs::write(&path, &page.content).map_err(|source| SiteError::Io {
                path: path.clone(),
                source,
            })?;

            tracing::debug!(
                artifact = %artifact.name,
                path = %page.path.display(),
                linked = page.links.linked,
                unlinked = page.links.unlinked,
                "Wrote page"
            );
            links += page.links;
            pages += 1;
        }

        let summary = GenerateSummary {
            pages,
            linked: links.linked,
            unlinked: links.unlinked,
        };
        tracing::info!(
            pages = summary.pages,
            linked = summary.linked,
            unlinked = summary.unlinked,
            "Documentation site generated"
        );
        Ok(summary)
    }
}

fn create_dir(path: &Path) -> Result<(), SiteError> {
    fs::create_dir_all(path).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::render::tests::{registry, resolvers};

    #[test]
    fn test_generate_writes_every_page() {
        let registry = registry();
        let resolvers = resolvers();
        let dir = TempDir::new().unwrap();
        let generator = SiteGenerator::new(&registry, &resolvers, dir.path().join("api"));

        let summary = generator.generate().unwrap();

        assert_eq!(summary.pages, 4);
        for relative in [
            "api/Ns/index.md",
            "api/Ns/Widget.md",
            "api/Ns/Widget/Mode.md",
            "api/Ns/Value.md",
        ] {
            assert!(dir.path().join(relative).is_file(), "missing {relative}");
        }

        let widget = registry.get("Ns::Widget").unwrap();
        let written = fs::read_to_string(dir.path().join("api/Ns/Widget.md")).unwrap();
        assert_eq!(written, generator.render(widget).content);
    }

    #[test]
    fn test_summary_counts_links() {
        let registry = registry();
        let resolvers = resolvers();
        let dir = TempDir::new().unwrap();

        let summary = SiteGenerator::new(&registry, &resolvers, dir.path())
            .generate()
            .unwrap();

        // resize and MODE_B have no documentation
        assert_eq!(summary.unlinked, 2);
        assert!(summary.linked > summary.unlinked);
    }

    #[test]
    fn test_generate_without_resolvers() {
        let registry = registry();
        let resolvers = NamespaceResolverMap::new();
        let dir = TempDir::new().unwrap();

        let summary = SiteGenerator::new(&registry, &resolvers, dir.path())
            .generate()
            .unwrap();

        assert_eq!(summary.pages, 4);
        assert_eq!(summary.linked, 0);
        let widget = fs::read_to_string(dir.path().join("Ns/Widget.md")).unwrap();
        assert!(widget.starts_with("# Widget\n"));
    }

    #[test]
    fn test_unwritable_output() {
        let registry = registry();
        let resolvers = resolvers();
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        let err = SiteGenerator::new(&registry, &resolvers, blocker.join("api"))
            .generate()
            .unwrap_err();

        assert!(matches!(err, SiteError::Io { .. }));
    }
}
