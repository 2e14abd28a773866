//! Error types for documentation index loading.

use std::path::PathBuf;

/// Error fetching or parsing a documentation index.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum IndexError {
    /// HTTP request failed (network error, invalid URL, body too large).
    #[error("failed to fetch {url}")]
    HttpRequest {
        url: String,
        #[source]
        source: ureq::Error,
    },

    /// Server returned an error status.
    #[error("HTTP error fetching {url}: {status}")]
    HttpResponse {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Local index file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML parsing error.
    #[error("XML parse error")]
    XmlParse(#[from] quick_xml::Error),

    /// Encoding error during XML parsing.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// Document ended inside an element.
    #[error("unclosed element <{0}>")]
    Unclosed(String),
}
