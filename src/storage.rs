//! Blob-store backends the tracker document is persisted in.
//!
//! The host environment is only expected to provide one primitive: a
//! synchronous key-value store of strings, behind the [`BlobStore`] trait.
//! This module ships a file-backed implementation for regular use and an
//! in-memory one for tests and demos.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Blob-store failures, split by direction.
///
/// Reads are handled fail-open by the [`Store`](crate::store::Store);
/// writes are surfaced to the caller.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("unable to read stored key {key:?}: {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("unable to write stored key {key:?}: {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },
}

/// The persistence primitive supplied by the host environment: one string
/// key, one string value, synchronous get/set.
///
/// Implementations only provide raw storage. Serialization and the
/// fail-open policy live in [`Store`](crate::store::Store).
pub trait BlobStore {
    /// Returns the value stored under `key`, or `None` if the key was never set
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Stores `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// A blob store that keeps each key in a JSON file under a base directory
#[derive(Debug, PartialEq)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Get the default location for tracker data
    pub fn default_dir() -> PathBuf {
        PathBuf::from(String::from("~/.config/fridge-magnet"))
    }

    /// A blob store writing under the given directory.
    /// The directory is created lazily, at the first write.
    pub fn new(base_dir: &Path) -> Self {
        Self {
            base_dir: PathBuf::from(base_dir),
        }
    }

    fn file_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.file_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read {
                key: key.to_string(),
                source: err,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_dir)
            .and_then(|()| fs::write(self.file_for(key), value))
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                source: err,
            })
    }
}

/// An in-memory blob store, for tests and demos
#[derive(Debug, Default, PartialEq)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
