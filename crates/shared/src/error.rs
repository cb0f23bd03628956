//! Error types for the HTTP query layer.

use thiserror::Error;

/// Failure modes of a weather/geocoding API call.
///
/// Carries owned strings rather than the underlying `reqwest` errors so the
/// type stays `Clone` and can live inside cached query results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Deserialize(String),
}
