//! Sync error types.

use starshelf_auth::AuthError;
use starshelf_config::ConfigError;
use starshelf_scanner::ScanError;

/// Errors produced during library synchronization.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}
