//! Durable local storage: a small key-value capability for preset
//! persistence, and a media store for downloaded generation results.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Get/set of string values under a namespaced key. The preset store is
/// written against this trait so it can run on a temp directory in tests.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key has never been set.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Key-value store backed by one JSON file per key in a base directory.
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Store rooted at the platform config directory, e.g.
    /// `~/.config/promptforge` on Linux.
    pub fn in_config_dir(app_name: &str) -> Result<Self, StorageError> {
        let base = dirs::config_dir()
            .ok_or(StorageError::NoDataDirectory)?
            .join(app_name);
        Ok(Self::new(base))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFile { path, source: e }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_dir).map_err(|e| StorageError::CreateDirectory {
            path: self.base_dir.clone(),
            source: e,
        })?;

        let path = self.path_for(key);
        fs::write(&path, value).map_err(|e| StorageError::WriteFile { path, source: e })
    }
}

/// Writes downloaded binary assets into a local directory and returns the
/// resulting path, the locally addressable handle handed back to the UI.
pub struct MediaStore {
    output_dir: PathBuf,
}

impl MediaStore {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Store rooted at the platform cache directory.
    pub fn in_cache_dir(app_name: &str) -> Result<Self, StorageError> {
        let base = dirs::cache_dir()
            .ok_or(StorageError::NoDataDirectory)?
            .join(app_name);
        Ok(Self::new(base))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `content` under a fresh unique filename with the given
    /// extension and returns the full path.
    pub fn store(&self, content: &[u8], extension: &str) -> Result<PathBuf, StorageError> {
        fs::create_dir_all(&self.output_dir).map_err(|e| StorageError::CreateDirectory {
            path: self.output_dir.clone(),
            source: e,
        })?;

        let filename = format!("{}.{}", uuid::Uuid::new_v4(), extension);
        let path = self.output_dir.join(filename);
        fs::write(&path, content).map_err(|e| StorageError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }
}
