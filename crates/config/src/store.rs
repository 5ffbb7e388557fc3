//! JSON-backed configuration store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::ConfigError;

/// Well-known configuration keys.
pub mod keys {
    /// Root directory game installations live under.
    pub const INSTALL_DIR: &str = "install_dir";
    /// Refresh token from the last successful sign-in. Short-lived.
    pub const REFRESH_TOKEN: &str = "refresh_token";
    /// Display name of the signed-in account.
    pub const USERNAME: &str = "username";
}

/// Directory name under the games root used when `install_dir` is unset.
const DEFAULT_INSTALL_DIR_NAME: &str = "Games";

/// Persistent key/value configuration, flushed to disk on every mutation.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl ConfigStore {
    /// Opens the store at an explicit path.
    ///
    /// A missing file yields an empty store; the parent directory is
    /// created so the first mutation can flush.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let values = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    /// Opens the store at the platform's user configuration location.
    pub fn open_default() -> Result<Self, ConfigError> {
        let base = BaseDirs::new().ok_or(ConfigError::NoHome)?;
        Self::open(base.config_dir().join("starshelf").join("config.json"))
    }

    /// Path this store reads from and flushes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up a raw value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Sets a value and flushes.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<(), ConfigError> {
        self.values.insert(key.into(), value.into());
        self.flush()
    }

    /// Removes a value and flushes. Removing an absent key still flushes.
    pub fn unset(&mut self, key: &str) -> Result<(), ConfigError> {
        self.values.remove(key);
        self.flush()
    }

    /// The install root, falling back to `~/Games` when unset.
    pub fn install_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = self.get(keys::INSTALL_DIR) {
            return Ok(PathBuf::from(dir));
        }
        let base = BaseDirs::new().ok_or(ConfigError::NoHome)?;
        Ok(base.home_dir().join(DEFAULT_INSTALL_DIR_NAME))
    }

    /// The stored refresh token, if any.
    pub fn refresh_token(&self) -> Option<&str> {
        self.get(keys::REFRESH_TOKEN)
    }

    /// The stored account display name, if any.
    pub fn username(&self) -> Option<&str> {
        self.get(keys::USERNAME)
    }

    fn flush(&self) -> Result<(), ConfigError> {
        let raw = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
