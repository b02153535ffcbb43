// crates/citygeo-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading datasets or talking to the geocoding provider.
///
/// Searching the static index never fails. The online path only surfaces
/// these through [`crate::RemoteResolver::try_search_online`];
/// [`crate::RemoteResolver::search_online`] degrades every variant to an
/// empty list.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("provider did not answer within {0:?}")]
    Timeout(std::time::Duration),

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
