//! Store catalog capability: client trait and wire types.
//!
//! This crate defines the abstract interface to the remote store — token
//! exchange, login URLs, account identity, and the owned-games list. It is
//! a library crate with no transport dependencies; the embedding
//! application provides a [`CatalogClient`] implementation that bridges to
//! the actual HTTP client.

pub mod client;
pub mod error;
pub mod types;

// Re-export primary types for convenience.
pub use client::CatalogClient;
pub use error::CatalogError;
pub use types::CatalogGame;
