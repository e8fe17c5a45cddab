//! # Blob Store
//!
//! The key-value snapshot seam the managers persist through.
//!
//! ## Snapshot Model
//! ```text
//!   SessionManager ──┐
//!   CartManager    ──┼──► BlobStore ──► JsonFileStore  (<dir>/<key>.json)
//!   OrderManager   ──┘       │
//!                            └────────► MemoryStore    (tests, demo)
//! ```
//!
//! Every write replaces the whole blob for its key; there is no partial
//! update and no corruption recovery beyond "unparseable reads count as
//! absent" (handled by the typed loaders in [`crate::snapshot`]).

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::error::StoreResult;

/// Key-value store of whole-object JSON snapshots.
///
/// Object-safe so managers can share an `Arc<dyn BlobStore>`.
pub trait BlobStore: Send + Sync {
    /// Loads the blob stored under `key`, or `None` when absent.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `blob` under `key`, replacing any previous value.
    fn save(&self, key: &str, blob: &str) -> StoreResult<()>;

    /// Removes the blob under `key`; no-op when absent.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

// =============================================================================
// File-Backed Store
// =============================================================================

/// Blob store keeping one `<key>.json` file per key under a directory.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens (and creates if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "opened json file store");
        Ok(JsonFileStore { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl BlobStore for JsonFileStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, blob: &str) -> StoreResult<()> {
        debug!(key, bytes = blob.len(), "saving blob");
        fs::write(self.path_for(key), blob)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// Blob store backed by a HashMap. Used by tests and the demo binary.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let blobs = self.blobs.lock().expect("blob map mutex poisoned");
        Ok(blobs.get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> StoreResult<()> {
        let mut blobs = self.blobs.lock().expect("blob map mutex poisoned");
        blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut blobs = self.blobs.lock().expect("blob map mutex poisoned");
        blobs.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "namma-store-test-{}-{}-{}",
            tag,
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();

        assert!(store.load("k").unwrap().is_none());
        store.save("k", "{\"a\":1}").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("{\"a\":1}"));

        store.remove("k").unwrap();
        assert!(store.load("k").unwrap().is_none());
        // Removing again stays a no-op.
        store.remove("k").unwrap();
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = temp_store_dir("roundtrip");
        let store = JsonFileStore::open(&dir).unwrap();

        assert!(store.load("cart").unwrap().is_none());
        store.save("cart", "{\"items\":[]}").unwrap();
        assert_eq!(
            store.load("cart").unwrap().as_deref(),
            Some("{\"items\":[]}")
        );

        // A second write replaces the whole blob.
        store.save("cart", "{\"items\":[1]}").unwrap();
        assert_eq!(
            store.load("cart").unwrap().as_deref(),
            Some("{\"items\":[1]}")
        );

        store.remove("cart").unwrap();
        assert!(store.load("cart").unwrap().is_none());
        store.remove("cart").unwrap();

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = temp_store_dir("reopen");
        {
            let store = JsonFileStore::open(&dir).unwrap();
            store.save("user", "{\"id\":\"1\"}").unwrap();
        }
        let store = JsonFileStore::open(&dir).unwrap();
        assert_eq!(
            store.load("user").unwrap().as_deref(),
            Some("{\"id\":\"1\"}")
        );

        fs::remove_dir_all(&dir).unwrap();
    }
}
