//! The library view: entry set, reconciliation, filter and sort.

use starshelf_catalog::CatalogGame;
use starshelf_scanner::InstalledGameRecord;
use tracing::debug;

use crate::entry::{EntryId, LibraryEntry, resolve_identity};

/// Ordered set of library entries plus the current filter state.
///
/// Mutated only by [`reconcile`](Self::reconcile) and
/// [`refresh_install_state`](Self::refresh_install_state); the embedding
/// application drives both from a single control thread.
#[derive(Debug, Default)]
pub struct LibraryView {
    entries: Vec<LibraryEntry>,
    search_text: String,
    installed_only: bool,
}

impl LibraryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn installed_only(&self) -> bool {
        self.installed_only
    }

    pub fn set_installed_only(&mut self, installed_only: bool) {
        self.installed_only = installed_only;
    }

    /// Merges a catalog snapshot (`Some` when online) and the scanned
    /// installations into the view. Returns the number of entries added.
    ///
    /// Grow-only: entries are appended for unseen identities and existing
    /// entries are left untouched — a title missing from this snapshot
    /// stays in the view. When two installed records share a name, the
    /// first match wins and later collisions are ignored.
    pub fn reconcile(
        &mut self,
        installed: &[InstalledGameRecord],
        catalog: Option<&[CatalogGame]>,
    ) -> usize {
        let before = self.entries.len();

        match catalog {
            Some(games) => {
                for game in games {
                    let matched = installed.iter().find(|record| record.name == game.name);
                    let Some(id) = resolve_identity(Some(game), matched) else {
                        continue;
                    };
                    if self.contains(&id) {
                        continue;
                    }
                    if let Some(record) = matched {
                        debug!(game = %game.name, directory = %record.directory.display(), "found local install");
                    }
                    self.entries.push(LibraryEntry::new(
                        id,
                        game.name.clone(),
                        matched.map(|record| record.directory.clone()),
                    ));
                }
            }
            None => {
                for record in installed {
                    let Some(id) = resolve_identity(None, Some(record)) else {
                        continue;
                    };
                    if self.contains(&id) {
                        continue;
                    }
                    self.entries.push(LibraryEntry::new(
                        id,
                        record.name.clone(),
                        Some(record.directory.clone()),
                    ));
                }
            }
        }

        self.entries.len() - before
    }

    /// Refreshes install state on the existing entries from a fresh scan.
    ///
    /// `path_changed` clears every recorded directory first: when the
    /// install root itself moved, previously recorded paths are stale even
    /// if the scan no longer reports the game. Never creates or removes
    /// entries.
    pub fn refresh_install_state(
        &mut self,
        installed: &[InstalledGameRecord],
        path_changed: bool,
    ) {
        for entry in &mut self.entries {
            if path_changed {
                entry.install_directory = None;
            }
            if let Some(record) = installed.iter().find(|record| record.name == entry.name) {
                entry.install_directory = Some(record.directory.clone());
            }
        }
    }

    /// The filtered, sorted sequence the presentation surface renders.
    ///
    /// Idempotent: reapplying with unchanged state yields the same
    /// sequence.
    pub fn visible(&self) -> Vec<&LibraryEntry> {
        let mut visible: Vec<&LibraryEntry> =
            self.entries.iter().filter(|entry| self.matches(entry)).collect();
        visible.sort();
        visible
    }

    /// Filter predicate. The installed-only condition hides an entry
    /// outright before the search text is consulted.
    fn matches(&self, entry: &LibraryEntry) -> bool {
        if self.installed_only && !entry.installed() {
            return false;
        }
        if self.search_text.is_empty() {
            return true;
        }
        entry
            .display_text()
            .to_lowercase()
            .contains(&self.search_text.to_lowercase())
    }

    fn contains(&self, id: &EntryId) -> bool {
        self.entries.iter().any(|entry| entry.id == *id)
    }
}
