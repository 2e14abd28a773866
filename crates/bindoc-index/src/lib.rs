//! Documentation indices for bindoc.
//!
//! A documentation index is an external reference document (a Doxygen tag
//! file, the cppreference function index) parsed once into memory and queried
//! by structural [`Path`]. Loading happens at startup; a source that cannot be
//! fetched or parsed is a fatal error, there is no partial index.

mod error;
mod index;
mod path;
mod source;

pub use error::IndexError;
pub use index::{DocIndex, NodeId};
pub use path::Path;
pub use source::IndexSource;

impl DocIndex {
    /// Fetch and parse an index.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or is not well-formed XML.
    pub fn load(source: &IndexSource) -> Result<Self, IndexError> {
        tracing::info!(%source, "Loading documentation index");
        let xml = source.read()?;
        Self::parse(&xml)
    }
}
