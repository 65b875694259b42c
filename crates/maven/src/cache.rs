//! Descriptor-cache capability and the enable/fallback policy.
//!
//! The cache is handed to the external descriptor parser as an opaque
//! key/value store; entry content is the parser's business. This module only
//! decides which backing implementation a run gets: disabled callers get an
//! always-miss handle, enabled callers get persistent storage when it can be
//! constructed and a volatile in-memory store otherwise. Construction
//! failure is never an error to the caller.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

const DEFAULT_CACHE_DIR_NAME: &str = ".pedigree-cache";

/// Pure key→value store with last-writer-wins semantics on conflicting
/// writes. Implementations must be safe under concurrent access; this crate
/// adds no locking of its own beyond what each implementation needs.
pub trait PomCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    fn put(&self, key: &str, value: Vec<u8>);
}

/// Caching disabled: every lookup misses, every write is dropped.
pub struct NoopPomCache;

impl PomCache for NoopPomCache {
    fn get(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }

    fn put(&self, _key: &str, _value: Vec<u8>) {}
}

/// Volatile fallback used when persistent storage cannot be constructed.
#[derive(Default)]
pub struct InMemoryPomCache {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryPomCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PomCache for InMemoryPomCache {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn put(&self, key: &str, value: Vec<u8>) {
        self.entries.write().unwrap().insert(key.to_string(), value);
    }
}

#[derive(Serialize, Deserialize)]
struct DiskEntry {
    key: String,
    value: Vec<u8>,
}

/// Persistent cache rooted at a directory, one JSON file per entry named by
/// the sha256 of its key. Unreadable or corrupt entries are misses; failed
/// writes are logged and dropped.
pub struct DiskPomCache {
    root: PathBuf,
}

impl DiskPomCache {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create cache directory {:?}", root))?;

        // Surface permission faults now, while the fallback policy applies.
        let probe = root.join(".probe");
        fs::write(&probe, b"")
            .with_context(|| format!("Cache directory {:?} is not writable", root))?;
        let _ = fs::remove_file(&probe);

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.root.join(format!("{}.json", hex::encode(digest)))
    }
}

impl PomCache for DiskPomCache {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.entry_path(key);
        let bytes = fs::read(&path).ok()?;
        match serde_json::from_slice::<DiskEntry>(&bytes) {
            Ok(entry) if entry.key == key => Some(entry.value),
            Ok(_) => None,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Discarding corrupt cache entry");
                None
            }
        }
    }

    fn put(&self, key: &str, value: Vec<u8>) {
        let entry = DiskEntry {
            key: key.to_string(),
            value,
        };
        let path = self.entry_path(key);
        match serde_json::to_vec(&entry) {
            Ok(bytes) => {
                if let Err(e) = fs::write(&path, bytes) {
                    warn!(path = %path.display(), error = %e, "Failed to persist cache entry");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize cache entry"),
        }
    }
}

/// Chooses the backing cache for one run.
///
/// `directory = None` means the conventional location under `user_home`.
/// Every failure path degrades to the in-memory cache with a warning; the
/// returned handle is the run's cache for its whole duration.
pub fn initialize_pom_cache(
    enabled: bool,
    directory: Option<&Path>,
    user_home: Option<&Path>,
) -> Box<dyn PomCache> {
    if !enabled {
        debug!("POM caching disabled");
        return Box::new(NoopPomCache);
    }

    let root = directory
        .map(Path::to_path_buf)
        .or_else(|| user_home.map(|home| home.join(DEFAULT_CACHE_DIR_NAME)));

    let constructed = root
        .ok_or_else(|| anyhow!("User home directory is unknown and no cache directory was given"))
        .and_then(DiskPomCache::new);

    match constructed {
        Ok(cache) => {
            debug!(root = %cache.root().display(), "Using persistent POM cache");
            Box::new(cache)
        }
        Err(e) => {
            warn!(
                error = format!("{:#}", e).as_str(),
                "Unable to initialize persistent POM cache, falling back to in-memory cache"
            );
            Box::new(InMemoryPomCache::new())
        }
    }
}
