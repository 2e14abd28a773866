//! Markdown documentation site generation for bindoc.
//!
//! [`SiteGenerator`] walks every artifact in a [`Registry`](bindoc_registry::Registry),
//! resolves documentation links through a
//! [`NamespaceResolverMap`](bindoc_resolve::NamespaceResolverMap) and writes
//! one Markdown page per artifact:
//!
//! ```text
//! site/api/
//! ├── Cv/
//! │   ├── index.md        # module Cv
//! │   ├── Mat.md          # class Cv::Mat
//! │   └── Mat/
//! │       └── Flags.md    # enum Cv::Mat::Flags
//! └── Std/
//!     └── Vector≺int≻.md
//! ```
//!
//! Unresolved names are written as plain text, so a page is produced for every
//! artifact even when no resolver knows about it.

mod generator;
mod page;
mod render;

use std::path::PathBuf;

pub use generator::{GenerateSummary, SiteGenerator};
pub use page::{LinkCounts, Page};
pub use render::PageRenderer;

/// Error writing the site.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SiteError {
    /// A directory or page could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
