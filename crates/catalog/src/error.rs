//! Catalog error types.

/// Errors produced by a catalog client implementation.
///
/// `Auth` and `Http` are deliberately not distinguished by the consumers
/// of this crate: a rejected token and an unreachable store both force a
/// fresh interactive login. The variants exist so implementations can
/// report what actually happened.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("authentication rejected: {0}")]
    Auth(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
