//! Sync orchestration.
//!
//! Coordinates one full library refresh on the control thread: scan the
//! install root, fetch the owned-games catalog, reconcile into the view.
//! A catalog failure is an explicit switch to offline mode (installed
//! games only), not an error the caller sees.
//!
//! # Pipeline
//!
//! 1. **Sign in** — run the interactive auth loop (startup and re-login)
//! 2. **Scan** — detect installed games under the configured root
//! 3. **Fetch** — request the owned-games catalog, or go offline
//! 4. **Reconcile** — grow-only merge into the library view

pub mod engine;
pub mod error;

pub use engine::{SyncEngine, SyncMode, SyncReport};
pub use error::SyncError;
