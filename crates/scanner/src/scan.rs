//! Install-root scanning.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ScanError;
use crate::types::InstalledGameRecord;

/// File whose presence marks a directory as a valid game installation.
pub const MARKER_FILE: &str = "gameinfo";

/// Scans the install root and returns a record per installed game.
///
/// Only immediate children are considered; a child without a readable
/// `gameinfo` marker directly inside it is skipped as a partial or
/// foreign directory. The root itself must exist — callers create it
/// if absent. Read-only: nothing is written or deleted.
pub fn scan_install_root(root: &Path) -> Result<Vec<InstalledGameRecord>, ScanError> {
    let mut records = Vec::new();

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let marker = path.join(MARKER_FILE);
        if !marker.is_file() {
            continue;
        }

        records.push(InstalledGameRecord {
            name: read_marker_name(&marker),
            directory: path,
        });
    }

    Ok(records)
}

/// Reads the first line of a marker file, trimmed of surrounding
/// whitespace. Unreadable content degrades to a blank name — the
/// directory still counts as an installation.
fn read_marker_name(marker: &Path) -> String {
    let file = match File::open(marker) {
        Ok(file) => file,
        Err(_) => return String::new(),
    };

    let mut first_line = String::new();
    if BufReader::new(file).read_line(&mut first_line).is_err() {
        return String::new();
    }
    first_line.trim().to_string()
}
