//! Library reconciliation and the filterable, sortable library view.
//!
//! This crate implements the **business logic** for merging the remote
//! catalog with locally detected installations. It is a library crate with
//! no UI or transport dependencies — the presentation surface renders the
//! sequence returned by [`LibraryView::visible`] and owns no logic of its
//! own.
//!
//! # Merge policy
//!
//! - **Grow-only** — reconciliation adds entries and updates install
//!   state; it never removes an entry the view already holds, even when a
//!   title disappears from the catalog. Transient catalog blips therefore
//!   never cause visual churn.
//! - **In-place** — entries are mutated, never recreated, so per-entry
//!   presentation state keyed on [`EntryId`] survives refreshes.

pub mod entry;
pub mod view;

pub use entry::{EntryId, LibraryEntry, resolve_identity};
pub use view::LibraryView;
