//! The sync engine.

use std::fs;

use starshelf_auth::{AuthSession, LoginSurface};
use starshelf_catalog::CatalogClient;
use starshelf_config::ConfigStore;
use starshelf_library::LibraryView;
use starshelf_scanner::scan_install_root;
use tracing::{info, warn};

use crate::error::SyncError;

/// Which source fed the last reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// The catalog answered; remote and local state were merged.
    Online,
    /// The catalog was unreachable; only installed games were merged.
    Offline,
}

/// Outcome of one library sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub mode: SyncMode,
    /// Entries the reconciliation added.
    pub added: usize,
    /// Entry count after the reconciliation.
    pub total: usize,
}

/// Orchestrates library synchronization against the configured install
/// root and the remote catalog.
#[derive(Debug, Default)]
pub struct SyncEngine;

impl SyncEngine {
    pub fn new() -> Self {
        Self
    }

    /// Runs one full sync: scan, fetch, reconcile.
    ///
    /// A catalog failure is logged and downgrades the pass to offline
    /// mode; it is never surfaced as an error. The install root is
    /// created if absent so a first launch scans cleanly.
    pub async fn sync_library(
        &self,
        view: &mut LibraryView,
        catalog: &dyn CatalogClient,
        config: &ConfigStore,
    ) -> Result<SyncReport, SyncError> {
        let install_root = config.install_dir()?;
        fs::create_dir_all(&install_root)?;
        let installed = scan_install_root(&install_root)?;

        let (mode, games) = match catalog.owned_games().await {
            Ok(games) => (SyncMode::Online, Some(games)),
            Err(error) => {
                warn!(%error, "catalog fetch failed, syncing offline");
                (SyncMode::Offline, None)
            }
        };

        let added = view.reconcile(&installed, games.as_deref());
        info!(added, total = view.len(), mode = ?mode, "library synced");

        Ok(SyncReport {
            mode,
            added,
            total: view.len(),
        })
    }

    /// Full startup sequence: interactive sign-in, then a library sync.
    ///
    /// Also the re-entry point after [`AuthSession::sign_out`] — the
    /// previous session state is gone and the whole flow runs again.
    pub async fn sign_in_and_sync(
        &self,
        session: &mut AuthSession,
        view: &mut LibraryView,
        catalog: &dyn CatalogClient,
        surface: &dyn LoginSurface,
        config: &mut ConfigStore,
    ) -> Result<SyncReport, SyncError> {
        session.sign_in(catalog, surface, config).await?;
        self.sync_library(view, catalog, config).await
    }

    /// Re-scans the install root and refreshes install state on the
    /// existing entries. `path_changed` marks an install-root move, which
    /// invalidates every previously recorded directory.
    pub fn refresh_install_states(
        &self,
        view: &mut LibraryView,
        config: &ConfigStore,
        path_changed: bool,
    ) -> Result<(), SyncError> {
        let install_root = config.install_dir()?;
        fs::create_dir_all(&install_root)?;
        let installed = scan_install_root(&install_root)?;
        view.refresh_install_state(&installed, path_changed);
        Ok(())
    }
}
