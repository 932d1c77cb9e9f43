//! Namespaced key-value persistence.
//!
//! Every container mirrors its slice of state here after each mutation. The
//! backing store is an injected capability so tests run against
//! [`MemoryStore`] while a real session uses [`DirStore`]. Failures are
//! deliberately quiet: a failed save is logged and the in-memory state keeps
//! going; a corrupt or absent entry loads as `None` and the caller falls back
//! to defaults.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Prefix every persisted key lives under.
const STORAGE_PREFIX: &str = "family-fridge";

/// Current persisted schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Persisted slice names.
///
/// These match the conceptual key layout: one key per container slice.
pub mod keys {
    pub const FAMILY: &str = "family";
    pub const VALUES: &str = "values";
    pub const ONBOARDING: &str = "onboarding";
    pub const ACTIVE_USER: &str = "activeUser";
    pub const FRIDGE: &str = "fridge";
    pub const SPOTLIGHT: &str = "spotlight";
    pub const TURNS: &str = "turns";
    pub const TONIGHTS_QUESTION: &str = "tonightsQuestion";
    pub const QUESTION_HISTORY: &str = "questionHistory";
    pub const QUEST_LIBRARY: &str = "questLibrary";
    pub const WEEKLY_QUEST: &str = "weeklyQuest";
    pub const WEEKLY_HISTORY: &str = "weeklyHistory";
    pub const EXPERIMENTS: &str = "experiments";
    pub const TIME_CAPSULES: &str = "timeCapsules";
    pub const EARNED_BADGES: &str = "earnedBadges";
    pub const SCHEMA_VERSION: &str = "schema-version";
}

/// Error from a backing store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying I/O failure
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Injected persistence capability.
///
/// Implementations hold raw serialized strings; namespacing and JSON
/// encoding live in [`Storage`].
pub trait KeyValueStore: Send + Sync {
    /// Read a raw value, `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a raw value.
    fn put(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Delete one key. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Every key currently present.
    fn keys(&self) -> Vec<String>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.keys().cloned().collect()
    }
}

/// Durable store: one JSON file per key under a directory.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    // Keys carry a `prefix:name` shape; ':' is awkward in file names on some
    // filesystems, so it is flattened to "__" on disk.
    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key.replace(':', "__")))
    }
}

impl KeyValueStore for DirStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return Vec::new();
        };
        entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                name.strip_suffix(".json").map(|stem| stem.replace("__", ":"))
            })
            .collect()
    }
}

/// Namespaced JSON persistence over an injected [`KeyValueStore`].
#[derive(Clone)]
pub struct Storage {
    store: Arc<dyn KeyValueStore>,
}

impl Storage {
    /// Wrap a backing store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn namespaced(key: &str) -> String {
        format!("{STORAGE_PREFIX}:{key}")
    }

    /// Serialize and store a value. Never fails: serialization or store
    /// errors are logged and the previously stored value is left untouched.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let serialized = match serde_json::to_string(value) {
            Ok(serialized) => serialized,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize state");
                return;
            }
        };
        if let Err(e) = self.store.put(&Self::namespaced(key), serialized) {
            tracing::warn!(key, error = %e, "failed to save state");
        }
    }

    /// Load and deserialize a value. Absent and corrupt entries both yield
    /// `None`; corruption is logged.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let serialized = self.store.get(&Self::namespaced(key))?;
        match serde_json::from_str(&serialized) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to parse stored state, treating as absent");
                None
            }
        }
    }

    /// Whether a raw entry exists for this key.
    pub fn contains(&self, key: &str) -> bool {
        self.store.get(&Self::namespaced(key)).is_some()
    }

    /// Delete one namespaced key.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.store.remove(&Self::namespaced(key)) {
            tracing::warn!(key, error = %e, "failed to remove state");
        }
    }

    /// Delete every key under the namespace. Keys outside it are untouched.
    pub fn clear_all(&self) {
        let prefix = format!("{STORAGE_PREFIX}:");
        for key in self.store.keys() {
            if key.starts_with(&prefix) {
                if let Err(e) = self.store.remove(&key) {
                    tracing::warn!(key, error = %e, "failed to remove state");
                }
            }
        }
    }

    /// Stored schema version, 0 if never stamped.
    pub fn schema_version(&self) -> u32 {
        self.load(keys::SCHEMA_VERSION).unwrap_or(0)
    }

    /// Stamp the current schema version.
    pub fn stamp_schema_version(&self) {
        self.save(keys::SCHEMA_VERSION, &SCHEMA_VERSION);
    }

    /// A first run has no schema stamp and no saved family.
    pub fn is_first_run(&self) -> bool {
        self.schema_version() == 0 && !self.contains(keys::FAMILY)
    }

    /// Probabilistically-unique id: prefix, millisecond timestamp, random
    /// fragment. Best-effort uniqueness is enough for a single writer.
    pub fn generate_id(&self, prefix: &str) -> String {
        let fragment = uuid::Uuid::new_v4().simple().to_string();
        format!("{}-{}-{}", prefix, Utc::now().timestamp_millis(), &fragment[..6])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn memory_storage() -> Storage {
        Storage::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn save_load_round_trip() {
        let storage = memory_storage();
        let value = Sample { name: "fridge".into(), count: 3 };
        storage.save("sample", &value);
        assert_eq!(storage.load::<Sample>("sample"), Some(value));
    }

    #[test]
    fn load_of_absent_key_is_none() {
        let storage = memory_storage();
        assert_eq!(storage.load::<Sample>("never-saved"), None);
    }

    #[test]
    fn corrupt_entry_loads_as_absent() {
        let store = Arc::new(MemoryStore::new());
        store.put("family-fridge:broken", "{not json".to_string()).unwrap();
        let storage = Storage::new(store);
        assert_eq!(storage.load::<Sample>("broken"), None);
    }

    #[test]
    fn clear_all_only_touches_namespace() {
        let store = Arc::new(MemoryStore::new());
        store.put("other-app:data", "keep".to_string()).unwrap();
        let storage = Storage::new(store.clone());
        storage.save("mine", &1u32);
        storage.clear_all();
        assert_eq!(storage.load::<u32>("mine"), None);
        assert_eq!(store.get("other-app:data"), Some("keep".to_string()));
    }

    #[test]
    fn generated_ids_carry_prefix_and_differ() {
        let storage = memory_storage();
        let a = storage.generate_id("fridge");
        let b = storage.generate_id("fridge");
        assert!(a.starts_with("fridge-"));
        assert_ne!(a, b);
    }

    #[test]
    fn first_run_flips_after_family_save_and_stamp() {
        let storage = memory_storage();
        assert!(storage.is_first_run());
        storage.save(keys::FAMILY, &vec!["dad".to_string()]);
        storage.stamp_schema_version();
        assert!(!storage.is_first_run());
        assert_eq!(storage.schema_version(), SCHEMA_VERSION);
    }

    #[test]
    fn dir_store_round_trips_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(Arc::new(DirStore::open(dir.path()).unwrap()));
        let value = Sample { name: "disk".into(), count: 7 };
        storage.save("sample", &value);

        // A fresh store over the same directory sees the same data.
        let reopened = Storage::new(Arc::new(DirStore::open(dir.path()).unwrap()));
        assert_eq!(reopened.load::<Sample>("sample"), Some(value));

        reopened.remove("sample");
        assert_eq!(reopened.load::<Sample>("sample"), None);
    }

    #[test]
    fn dir_store_keys_restore_namespace_separator() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::open(dir.path()).unwrap();
        store.put("family-fridge:fridge", "[]".to_string()).unwrap();
        assert_eq!(store.keys(), vec!["family-fridge:fridge".to_string()]);
    }
}
