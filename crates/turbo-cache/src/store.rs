//! Raw byte stores backing [`Cache`](crate::Cache).

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::CacheError;

/// A byte-oriented Key-Value store.
///
/// Implementations only move bytes around; JSON encoding lives in
/// [`Cache`](crate::Cache).
pub trait KvStore: Send + Sync {
    /// Get the raw value for a key.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store a raw value, replacing any previous one.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }

    /// List all keys, sorted.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

/// In-memory store. Contents are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> CacheError {
        CacheError::StoreError("memory store lock poisoned".to_string())
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.keys().cloned().collect())
    }
}

/// Directory-backed store: one `<base64url(key)>.json` file per key.
///
/// Writes go to a temporary file first and are renamed into place, so a
/// crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

const FILE_EXTENSION: &str = "json";

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| CacheError::OpenError(format!("{}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    /// Root directory of the store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name = URL_SAFE_NO_PAD.encode(key.as_bytes());
        self.dir.join(format!("{}.{}", name, FILE_EXTENSION))
    }

    fn key_from_path(path: &Path) -> Option<String> {
        if path.extension()? != FILE_EXTENSION {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        let bytes = URL_SAFE_NO_PAD.decode(stem).ok()?;
        String::from_utf8(bytes).ok()
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::trace!(key, bytes = value.len(), "wrote cache entry");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.path_for(key).is_file())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if let Some(key) = Self::key_from_path(&path) {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.set("a", b"1").unwrap();

        assert_eq!(store.get("a").unwrap(), Some(b"1".to_vec()));
        assert!(store.exists("a").unwrap());
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_memory_store_delete_missing_is_ok() {
        let store = MemoryStore::new();
        assert!(store.delete("nope").is_ok());
    }

    #[test]
    fn test_file_store_persists_across_handles() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileStore::open(dir.path()).unwrap();
        store.set("persist:cart", b"{}").unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("persist:cart").unwrap(), Some(b"{}".to_vec()));
    }

    #[test]
    fn test_file_store_keys_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("persist:cart", b"1").unwrap();
        store.set("prefs/theme", b"2").unwrap();
        std::fs::write(dir.path().join("README"), "not a cache entry").unwrap();

        assert_eq!(
            store.keys().unwrap(),
            vec!["persist:cart".to_string(), "prefs/theme".to_string()]
        );
    }

    #[test]
    fn test_file_store_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("k", b"v").unwrap();
        store.delete("k").unwrap();

        assert!(!store.exists("k").unwrap());
        assert!(store.delete("k").is_ok());
    }

    #[test]
    fn test_file_store_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let store = FileStore::open(&nested).unwrap();
        assert!(store.dir().is_dir());
    }
}
