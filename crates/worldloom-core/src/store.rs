//! Store Capabilities - seams toward the persistence and image collaborators
//!
//! The core never does I/O itself. The UI shell hands in a [`BlobStore`]
//! (browser-side this is IndexedDB-backed) and an [`ImageSource`] that maps
//! stored keys to displayable sources. Keys and URLs are opaque strings to
//! everything in this crate.
//!
//! `load_entity`/`save_entity` own the load/save discipline around
//! [`EntityRecord`]: tolerant parse on the way in, sanitize-before-write and
//! an equality gate on the way out.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::error::{WorldloomError, WorldloomResult};
use crate::types::EntityRecord;

/// Persisted key-value blob store capability
pub trait BlobStore {
    /// Fetch the blob stored under `key`, if any
    fn get(&self, key: &str) -> WorldloomResult<Option<Vec<u8>>>;

    /// Store `bytes` under `key`, replacing any previous value
    fn put(&mut self, key: &str, bytes: Vec<u8>) -> WorldloomResult<()>;

    /// Remove the blob stored under `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> WorldloomResult<()>;

    /// Whether a blob is stored under `key`
    fn contains(&self, key: &str) -> WorldloomResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Resolved image source capability
pub trait ImageSource {
    /// Map a stored image key to a displayable source, `None` when unknown
    fn resolve(&self, image: &str) -> WorldloomResult<Option<String>>;
}

/// In-memory [`BlobStore`], used by tests and UI previews
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no blobs
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> WorldloomResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, bytes: Vec<u8>) -> WorldloomResult<()> {
        self.entries.insert(key.to_string(), bytes);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> WorldloomResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> WorldloomResult<bool> {
        Ok(self.entries.contains_key(key))
    }
}

/// Image source that treats every key as an already-usable URL
///
/// Sufficient for records that only reference external URLs; stores backed by
/// uploaded blobs provide their own resolver.
#[derive(Debug, Default)]
pub struct PassthroughImages;

impl ImageSource for PassthroughImages {
    fn resolve(&self, image: &str) -> WorldloomResult<Option<String>> {
        if image.is_empty() {
            return Ok(None);
        }
        Ok(Some(image.to_string()))
    }
}

/// Load an entity record from the store, tolerant of legacy shapes
///
/// Returns `Ok(None)` when nothing is stored under `key`. Stored bytes that
/// are not valid JSON at all surface as a `Serialization` error; valid JSON
/// of any shape loads through the tolerant [`EntityRecord::from_value`] path.
pub fn load_entity(store: &impl BlobStore, key: &str) -> WorldloomResult<Option<EntityRecord>> {
    let Some(bytes) = store.get(key)? else {
        return Ok(None);
    };
    let raw: Value = serde_json::from_slice(&bytes)
        .map_err(|e| WorldloomError::Serialization(e.to_string()))?;
    Ok(Some(EntityRecord::from_value(&raw)))
}

/// Sanitize and persist an entity record
///
/// Skips the write and returns `false` when the stored record already has
/// the same content, so editors can save unconditionally without churning
/// the store.
pub fn save_entity(
    store: &mut impl BlobStore,
    key: &str,
    record: &EntityRecord,
) -> WorldloomResult<bool> {
    let clean = record.sanitized();

    let existing = store
        .get(key)?
        .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).ok())
        .map(|raw| EntityRecord::from_value(&raw));
    if existing.is_some_and(|prior| prior.content_equals(&clean)) {
        debug!(key, "entity unchanged, skipping write");
        return Ok(false);
    }

    let bytes =
        serde_json::to_vec(&clean).map_err(|e| WorldloomError::Serialization(e.to_string()))?;
    store.put(key, bytes)?;
    debug!(key, kind = %clean.kind, "entity written");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntityKind;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        store.put("k", b"data".to_vec()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("k").unwrap().unwrap(), b"data");
        assert!(store.contains("k").unwrap());
        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
        assert!(store.is_empty());
        // Removing again is fine
        store.remove("k").unwrap();
    }

    /// Store backends report failures as `Storage` errors; both entry points
    /// must propagate them instead of degrading
    struct OfflineStore;

    impl BlobStore for OfflineStore {
        fn get(&self, _key: &str) -> WorldloomResult<Option<Vec<u8>>> {
            Err(WorldloomError::Storage("backend offline".to_string()))
        }

        fn put(&mut self, _key: &str, _bytes: Vec<u8>) -> WorldloomResult<()> {
            Err(WorldloomError::Storage("backend offline".to_string()))
        }

        fn remove(&mut self, _key: &str) -> WorldloomResult<()> {
            Err(WorldloomError::Storage("backend offline".to_string()))
        }
    }

    #[test]
    fn test_backend_errors_propagate() {
        let mut store = OfflineStore;
        assert!(matches!(
            load_entity(&store, "w1"),
            Err(WorldloomError::Storage(_))
        ));
        let record = EntityRecord::new(EntityKind::World, "Aether");
        assert!(matches!(
            save_entity(&mut store, "w1", &record),
            Err(WorldloomError::Storage(_))
        ));
    }

    #[test]
    fn test_passthrough_images() {
        let source = PassthroughImages;
        assert_eq!(
            source.resolve("https://x/a.png").unwrap(),
            Some("https://x/a.png".to_string())
        );
        assert_eq!(source.resolve("").unwrap(), None);
    }

    #[test]
    fn test_load_missing_entity() {
        let store = MemoryStore::new();
        assert!(load_entity(&store, "nope").unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let record = EntityRecord::new(EntityKind::World, "Aether");
        assert!(save_entity(&mut store, "w1", &record).unwrap());

        let loaded = load_entity(&store, "w1").unwrap().unwrap();
        assert_eq!(loaded.name, "Aether");
        assert_eq!(loaded.id, record.id);
    }

    #[test]
    fn test_save_skips_unchanged() {
        let mut store = MemoryStore::new();
        let mut record = EntityRecord::new(EntityKind::World, "Aether");
        assert!(save_entity(&mut store, "w1", &record).unwrap());
        // Same content, touched timestamp: still a skip
        record.touch();
        assert!(!save_entity(&mut store, "w1", &record).unwrap());

        record.name = "Aether Prime".to_string();
        assert!(save_entity(&mut store, "w1", &record).unwrap());
    }

    #[test]
    fn test_load_rejects_non_json_bytes() {
        let mut store = MemoryStore::new();
        store.put("bad", vec![0xFF, 0xFE]).unwrap();
        let err = load_entity(&store, "bad").unwrap_err();
        assert!(matches!(err, WorldloomError::Serialization(_)));
    }

    #[test]
    fn test_load_tolerates_legacy_json_shapes() {
        let mut store = MemoryStore::new();
        store
            .put("legacy", br##"{"name":"Old","symbolColors":["#a1b2c3"]}"##.to_vec())
            .unwrap();
        let loaded = load_entity(&store, "legacy").unwrap().unwrap();
        assert_eq!(loaded.name, "Old");
        assert_eq!(loaded.symbol_colors[0].hex, "#A1B2C3");
    }
}
