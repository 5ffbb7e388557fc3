//! Configuration error types.

/// Errors produced by the configuration store.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("home directory could not be resolved")]
    NoHome,
}
