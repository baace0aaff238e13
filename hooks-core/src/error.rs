/// Reasons a request lifecycle can end up `Errored`.
///
/// The display string is what consumers see in `RequestState::error`.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The target could not be turned into a URL.
    #[error("Invalid request target {0:?}: {1}")]
    InvalidTarget(String, String),
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
    /// The response body was not valid JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Network(e)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Durable storage is not available")]
    Unavailable,
    #[error("Failed to write {key:?} to durable storage: {reason}")]
    Write { key: String, reason: String },
}
