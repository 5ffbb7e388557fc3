//! Library entries and identity resolution.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use starshelf_catalog::CatalogGame;
use starshelf_scanner::InstalledGameRecord;

/// Stable join key for a library entry.
///
/// Catalog ids only exist online; entries synthesized from installed
/// records in offline mode are keyed by their scanned name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryId {
    Catalog(u64),
    Local(String),
}

/// Resolves the join key for a (remote, installed) pair.
///
/// The catalog id wins whenever a remote entry is present; an installed
/// record alone is keyed by its name. Pure, so the key rules are testable
/// apart from the merge loop.
pub fn resolve_identity(
    remote: Option<&CatalogGame>,
    installed: Option<&InstalledGameRecord>,
) -> Option<EntryId> {
    match (remote, installed) {
        (Some(game), _) => Some(EntryId::Catalog(game.id)),
        (None, Some(record)) => Some(EntryId::Local(record.name.clone())),
        (None, None) => None,
    }
}

/// One game in the library view: a merged catalog/installed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEntry {
    pub id: EntryId,
    pub name: String,
    /// `None` means not installed.
    pub install_directory: Option<PathBuf>,
}

impl LibraryEntry {
    pub fn new(id: EntryId, name: impl Into<String>, install_directory: Option<PathBuf>) -> Self {
        Self {
            id,
            name: name.into(),
            install_directory,
        }
    }

    /// Whether a local installation is recorded for this entry.
    pub fn installed(&self) -> bool {
        self.install_directory.is_some()
    }

    pub fn install_directory(&self) -> Option<&Path> {
        self.install_directory.as_deref()
    }

    /// Text the view matches search input against.
    pub fn display_text(&self) -> &str {
        &self.name
    }
}

/// Total order for display: ascending lowercased name, ties broken by the
/// raw name, then by identity.
impl Ord for LibraryEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .to_lowercase()
            .cmp(&other.name.to_lowercase())
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for LibraryEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(id: u64, name: &str) -> CatalogGame {
        CatalogGame {
            id,
            name: name.into(),
        }
    }

    fn installed(name: &str) -> InstalledGameRecord {
        InstalledGameRecord {
            name: name.into(),
            directory: PathBuf::from("/games").join(name),
        }
    }

    // -----------------------------------------------------------------------
    // resolve_identity
    // -----------------------------------------------------------------------

    #[test]
    fn identity_prefers_catalog_id() {
        let game = remote(7, "Game A");
        let record = installed("Game A");

        assert_eq!(
            resolve_identity(Some(&game), Some(&record)),
            Some(EntryId::Catalog(7))
        );
        assert_eq!(
            resolve_identity(Some(&game), None),
            Some(EntryId::Catalog(7))
        );
    }

    #[test]
    fn identity_falls_back_to_installed_name() {
        let record = installed("Game A");
        assert_eq!(
            resolve_identity(None, Some(&record)),
            Some(EntryId::Local("Game A".into()))
        );
    }

    #[test]
    fn identity_of_nothing_is_none() {
        assert_eq!(resolve_identity(None, None), None);
    }

    #[test]
    fn identity_kinds_never_collide() {
        // A numeric local name is still a Local key, distinct from the
        // catalog id with the same digits.
        let record = installed("42");
        assert_ne!(
            resolve_identity(None, Some(&record)),
            Some(EntryId::Catalog(42))
        );
    }

    // -----------------------------------------------------------------------
    // entry ordering
    // -----------------------------------------------------------------------

    #[test]
    fn installed_is_derived_from_directory() {
        let mut entry = LibraryEntry::new(EntryId::Catalog(1), "Game A", None);
        assert!(!entry.installed());

        entry.install_directory = Some(PathBuf::from("/games/a"));
        assert!(entry.installed());
    }

    #[test]
    fn ordering_is_case_insensitive_first() {
        let a = LibraryEntry::new(EntryId::Catalog(1), "alpha", None);
        let b = LibraryEntry::new(EntryId::Catalog(2), "Beta", None);
        let c = LibraryEntry::new(EntryId::Catalog(3), "gamma", None);

        let mut entries = vec![&c, &a, &b];
        entries.sort();

        let names: Vec<&str> = entries.iter().map(|e| e.display_text()).collect();
        assert_eq!(names, vec!["alpha", "Beta", "gamma"]);
    }

    #[test]
    fn ordering_breaks_case_ties_deterministically() {
        let upper = LibraryEntry::new(EntryId::Catalog(1), "Game", None);
        let lower = LibraryEntry::new(EntryId::Catalog(2), "game", None);

        // "Game" < "game" on raw byte order once the lowercased keys tie.
        assert!(upper < lower);
        assert_eq!(upper.cmp(&upper.clone()), Ordering::Equal);
    }

    #[test]
    fn ordering_breaks_full_name_ties_by_identity() {
        let first = LibraryEntry::new(EntryId::Catalog(1), "Same Name", None);
        let second = LibraryEntry::new(EntryId::Catalog(2), "Same Name", None);

        assert!(first < second);
    }
}
