use thiserror::Error;

/// Errors that can occur while loading a mesh asset.
///
/// The loader never retries; retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode geometry: {0}")]
    Parse(String),

    #[error("asset contains no geometry")]
    EmptyGeometry,
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Network(err.to_string())
    }
}
