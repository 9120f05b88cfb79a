//! Key-value persistence backends for search history
//!
//! The history store only needs `get`/`set` of a string under a fixed key.
//! `FileStore` keeps one JSON file per key under a directory; `MemoryStore`
//! keeps everything in a map and is used for tests and when persistence is
//! switched off.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::OmniboxError;

const CONFIG_DIR: &str = "omnibox";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage IO error: {0}")]
    Io(String),

    #[error("Could not encode value: {0}")]
    Encode(String),
}

impl From<io::Error> for StorageError {
    fn from(err: io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<StorageError> for OmniboxError {
    fn from(err: StorageError) -> Self {
        OmniboxError::PersistenceUnavailable(err.to_string())
    }
}

pub trait KeyValueStore {
    /// Stored value for `key`, `None` if nothing was ever stored
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Default directory for persisted state (`~/.config/omnibox`)
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR))
}

/// One `<key>.json` file per key inside `dir`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `value` under `key`
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Decode a persisted history blob (JSON array of strings)
///
/// Anything that is not a JSON array of strings decodes to an empty list.
pub fn parse_history(contents: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(contents).unwrap_or_default()
}

pub fn encode_history(entries: &[String]) -> Result<String, StorageError> {
    serde_json::to_string(entries).map_err(|e| StorageError::Encode(e.to_string()))
}

/// Drop exact repeats, keeping the first (most recent) occurrence
pub fn deduplicate(entries: &[String]) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::with_capacity(entries.len());
    let mut result = Vec::with_capacity(entries.len());
    for entry in entries {
        if !seen.contains(&entry.as_str()) {
            seen.push(entry);
            result.push(entry.clone());
        }
    }
    result
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
