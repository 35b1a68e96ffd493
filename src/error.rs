use thiserror::Error;

/// Single generic failure reported when the user has not granted sufficient
/// library access. The specific denial reason is deliberately not
/// distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    #[error("access to the media library is restricted")]
    RestrictedAccess,
}

/// Failure modes of a single fetch. Each fetch resolves to exactly one
/// payload or exactly one of these; nothing is retried internally.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("no library asset matches the given identifier")]
    AssetNotFound,
    #[error("the request was cancelled before it completed")]
    Cancelled,
    #[error("media store error: {0}")]
    Underlying(anyhow::Error),
}
