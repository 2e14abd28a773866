//! Locations documentation indices are loaded from.

use std::path::PathBuf;

use ureq::Agent;

use crate::error::IndexError;

/// Upper bound on a downloaded index body. Doxygen tag files of large
/// projects run to tens of megabytes.
const MAX_INDEX_SIZE: u64 = 256 * 1024 * 1024;

/// Where a documentation index lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSource {
    /// Remote document fetched over HTTP(S).
    Url(String),
    /// Local file.
    File(PathBuf),
}

impl IndexSource {
    /// Classify a location string: `http://` and `https://` are URLs,
    /// everything else is a file path with a leading `~` expanded.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_owned())
        } else {
            Self::File(PathBuf::from(shellexpand::tilde(location).as_ref()))
        }
    }

    /// Read the whole document.
    ///
    /// Remote documents are fetched once with a single synchronous request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with an
    /// error status, or the file cannot be read.
    pub fn read(&self) -> Result<String, IndexError> {
        match self {
            Self::Url(url) => fetch(url),
            Self::File(path) => std::fs::read_to_string(path).map_err(|source| IndexError::Io {
                path: path.clone(),
                source,
            }),
        }
    }
}

impl std::fmt::Display for IndexSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn fetch(url: &str) -> Result<String, IndexError> {
    let agent: Agent = Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .into();

    let http_error = |source| IndexError::HttpRequest {
        url: url.to_owned(),
        source,
    };

    let response = agent.get(url).call().map_err(http_error)?;
    let status = response.status().as_u16();
    if status >= 400 {
        return Err(IndexError::HttpResponse {
            url: url.to_owned(),
            status,
        });
    }

    let mut body = response.into_body();
    body.with_config()
        .limit(MAX_INDEX_SIZE)
        .read_to_string()
        .map_err(http_error)
}
