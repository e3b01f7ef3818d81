// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent key-value preferences
//!
//! The site keeps exactly one preference, the selected language, in the
//! browser's local storage. [`PreferenceStore`] is that storage seam:
//! [`MemoryStore`] for sessions that should not outlive the process and
//! [`FileStore`] for a flat JSON object on disk with the same shape as
//! local storage (`{"language": "id"}`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Preference key holding the selected language code.
pub const LANGUAGE_KEY: &str = "language";

/// String key → string value persistence with overwrite semantics.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` when nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &mut T {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

/// Backend chosen by the `storage_mode` config key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    #[serde(alias = "ephemeral", alias = "none")]
    Memory,
    #[serde(alias = "disk", alias = "local", alias = "file")]
    Filesystem,
}

impl StorageMode {
    /// Open a store for this mode. `path` is only used by the filesystem mode.
    pub fn open(self, path: &Path) -> Box<dyn PreferenceStore> {
        match self {
            StorageMode::Memory => Box::new(MemoryStore::new()),
            StorageMode::Filesystem => Box::new(FileStore::new(path)),
        }
    }
}

/// Process-lifetime preferences.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `key = value`, as if a previous session wrote it.
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences in a JSON object file.
///
/// Non-string values are treated as absent. Other keys in the file are
/// kept on write; a file that does not parse is replaced wholesale, but a
/// file that cannot be read at all fails the write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Raw file contents, `None` when the file does not exist.
    fn read_bytes(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("reading {}", self.path.display())),
        }
    }

    fn parse(&self, bytes: &[u8]) -> Result<Map<String, Value>> {
        serde_json::from_slice(bytes).with_context(|| format!("parsing {}", self.path.display()))
    }
}

impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let map = match self.read_bytes()? {
            Some(bytes) => self.parse(&bytes)?,
            None => return Ok(None),
        };
        Ok(map.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = match self.read_bytes()? {
            Some(bytes) => self.parse(&bytes).unwrap_or_else(|err| {
                warn!(error = %format!("{:#}", err), "replacing unparsable preference file");
                Map::new()
            }),
            None => Map::new(),
        };
        map.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let payload = serde_json::to_string_pretty(&map)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}
