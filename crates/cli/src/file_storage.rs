//! JSON file backed key/value store.
//!
//! The whole map is read on open and written back on [`FileStorage::save`],
//! one flat JSON object per file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bebek_core::{MemoryStorage, Storage};
use thiserror::Error;

/// Errors reading or writing the store file.
#[derive(Debug, Error)]
pub enum FileStorageError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not a valid store file: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A [`Storage`] persisted to a JSON file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: MemoryStorage,
    dirty: bool,
}

impl FileStorage {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FileStorageError> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| FileStorageError::Json {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Store file not found, starting empty");
                MemoryStorage::new()
            }
            Err(source) => return Err(FileStorageError::Io { path, source }),
        };

        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    /// Write the store back if anything changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&mut self) -> Result<(), FileStorageError> {
        if !self.dirty {
            return Ok(());
        }

        let contents =
            serde_json::to_string_pretty(&self.entries).map_err(|source| FileStorageError::Json {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, contents).map_err(|source| FileStorageError::Io {
            path: self.path.clone(),
            source,
        })?;

        self.dirty = false;
        tracing::debug!(path = %self.path.display(), entries = self.entries.len(), "Store saved");
        Ok(())
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.set(key, value);
        self.dirty = true;
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.dirty = true;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bebek_core::storage::keys;

    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("store.json")).unwrap();
        assert!(storage.get(keys::CART).is_none());
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set(keys::PAYMENT_METHOD, "fpx".to_string());
        storage.set(keys::PAYMENT_BANK, "Public Bank".to_string());
        storage.save().unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get(keys::PAYMENT_METHOD).as_deref(), Some("fpx"));
        assert_eq!(reopened.get(keys::PAYMENT_BANK).as_deref(), Some("Public Bank"));
    }

    #[test]
    fn test_clean_store_does_not_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut storage = FileStorage::open(&path).unwrap();
        storage.save().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStorage::open(&path).unwrap_err();
        assert!(matches!(err, FileStorageError::Json { .. }));
    }
}
