//! Scanner output types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A locally detected game installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledGameRecord {
    /// Canonical game name, taken from the marker file's first line.
    /// May be blank when the marker is empty or unreadable.
    pub name: String,
    /// Full path of the game's directory under the install root.
    pub directory: PathBuf,
}
