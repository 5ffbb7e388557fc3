//! Scanner error types.

/// Errors produced while scanning the install root.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
