use crate::error::Result;
use crate::fingerprint;
use crate::io;
use crate::paths;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// NameStore
// ---------------------------------------------------------------------------

/// Persistent mapping from prompt fingerprints to project names.
///
/// Backed by `name_cache.json` in the base directory: a flat JSON object,
/// fingerprint hex string → project name. Loaded once at open and written
/// through on every insert. Single-writer: two processes sharing a base
/// directory race on the cache file and the last writer wins.
pub struct NameStore {
    cache_path: PathBuf,
    entries: HashMap<String, String>,
}

impl NameStore {
    /// Open the store for a base directory. A missing cache file yields an
    /// empty store; an unreadable or corrupt one is logged and treated as
    /// empty (the next `store` produces a fresh, valid file). Never fails.
    pub fn open(base_dir: &Path) -> Self {
        let cache_path = paths::name_cache_path(base_dir);
        let entries = Self::load(&cache_path);
        Self { cache_path, entries }
    }

    fn load(path: &Path) -> HashMap<String, String> {
        if !path.exists() {
            return HashMap::new();
        }
        let parsed: std::result::Result<HashMap<String, String>, String> =
            std::fs::read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|data| serde_json::from_str(&data).map_err(|e| e.to_string()));
        match parsed {
            Ok(mut map) => {
                // Hand-edited caches can hold values that are not usable as
                // directory names; drop those rather than propagate them.
                map.retain(|key, name| {
                    let ok = paths::validate_name(name).is_ok();
                    if !ok {
                        tracing::warn!(%key, %name, "dropping malformed name cache entry");
                    }
                    ok
                });
                map
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "unreadable name cache, starting empty"
                );
                HashMap::new()
            }
        }
    }

    /// Project name previously assigned to this prompt, if any.
    /// Pure function of in-memory state.
    pub fn lookup(&self, prompt: &str) -> Option<&str> {
        self.entries
            .get(&fingerprint::fingerprint(prompt))
            .map(String::as_str)
    }

    pub fn has_name(&self, prompt: &str) -> bool {
        self.entries
            .contains_key(&fingerprint::fingerprint(prompt))
    }

    /// Record `name` for `prompt` and persist the whole mapping immediately.
    /// The write goes through a sibling tempfile and rename, so a crash never
    /// leaves a truncated cache behind.
    pub fn store(&mut self, prompt: &str, name: &str) -> Result<()> {
        self.entries
            .insert(fingerprint::fingerprint(prompt), name.to_string());
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let data = serde_json::to_string_pretty(&self.entries)?;
        io::atomic_write(&self.cache_path, data.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_cache_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = NameStore::open(dir.path());
        assert!(store.is_empty());
        assert_eq!(store.lookup("anything"), None);
    }

    #[test]
    fn store_then_lookup_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut store = NameStore::open(dir.path());
        store.store("Swarm Robotics", "swarm_robotics_231004").unwrap();

        assert_eq!(store.lookup("Swarm Robotics"), Some("swarm_robotics_231004"));
        assert!(store.has_name("Swarm Robotics"));

        // fresh load sees the persisted entry
        let reopened = NameStore::open(dir.path());
        assert_eq!(reopened.lookup("Swarm Robotics"), Some("swarm_robotics_231004"));
    }

    #[test]
    fn lookup_is_whitespace_and_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let mut store = NameStore::open(dir.path());
        store.store("Swarm   Robotics", "swarm_robotics_231004").unwrap();
        assert_eq!(store.lookup("  swarm robotics "), Some("swarm_robotics_231004"));
    }

    #[test]
    fn repeat_store_keeps_one_entry() {
        let dir = TempDir::new().unwrap();
        let mut store = NameStore::open(dir.path());
        store.store("swarm robotics", "swarm_robotics_231004").unwrap();
        store.store("SWARM ROBOTICS", "swarm_robotics_231004").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn corrupt_cache_recovers_to_empty_and_stores_cleanly() {
        let dir = TempDir::new().unwrap();
        std::fs::write(paths::name_cache_path(dir.path()), "{not json!").unwrap();

        let mut store = NameStore::open(dir.path());
        assert_eq!(store.lookup("anything"), None);

        store.store("anything", "anything_231004").unwrap();
        let reopened = NameStore::open(dir.path());
        assert_eq!(reopened.lookup("anything"), Some("anything_231004"));
    }

    #[test]
    fn malformed_entries_are_dropped_on_load() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            paths::name_cache_path(dir.path()),
            r#"{"aaaa": "valid_name_231004", "bbbb": "NOT A NAME"}"#,
        )
        .unwrap();

        let store = NameStore::open(dir.path());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn cache_file_is_valid_pretty_json() {
        let dir = TempDir::new().unwrap();
        let mut store = NameStore::open(dir.path());
        store.store("graph rewriting", "graph_rewriting_231004").unwrap();

        let raw = std::fs::read_to_string(paths::name_cache_path(dir.path())).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_object());
    }
}
