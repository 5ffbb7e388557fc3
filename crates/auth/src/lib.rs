//! Authentication session: token exchange and the interactive login loop.
//!
//! This crate implements the sign-in state machine. It is a library crate
//! with no UI dependencies — the embedding application provides a
//! [`LoginSurface`] implementation (typically an embedded browser dialog)
//! and a [`starshelf_catalog::CatalogClient`] for the actual exchange.
//!
//! # Flow
//!
//! 1. **Exchange** — try the stored refresh token
//! 2. **Prompt** — on failure, present the login surface for a code
//! 3. **Retry** — exchange again with the code; repeat until success
//! 4. **Persist** — store the fresh token and account name
//!
//! Cancelling the login surface is terminal: the session cannot proceed
//! without credentials, and the embedding process is expected to exit.

pub mod error;
pub mod session;
pub mod surface;

pub use error::AuthError;
pub use session::{AuthSession, AuthState};
pub use surface::{LoginOutcome, LoginSurface};
