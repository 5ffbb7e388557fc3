//! Authentication error types.

use starshelf_config::ConfigError;

/// Errors produced during sign-in and sign-out.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The user dismissed the login surface. Terminal — the session
    /// cannot make progress without credentials, so the embedding
    /// process is expected to exit rather than retry.
    #[error("login cancelled by user")]
    Cancelled,

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
