//! Session-scoped key-value store
//!
//! Durable within one client session, not across devices. The staging store
//! and the identity accessor both sit on top of this trait; tests use
//! `MemorySession`, a client binary that wants staged edits to survive a
//! restart uses `FileSession`.

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// String key-value store scoped to one client session
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Purely in-memory session store
#[derive(Debug, Default)]
pub struct MemorySession {
    entries: DashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

/// Session store persisted to a JSON file on every mutation
///
/// Writes go to a temp file which is then renamed over the target, so a
/// reader never observes a partial write. A missing or corrupt file loads
/// as an empty session.
pub struct FileSession {
    path: PathBuf,
    entries: DashMap<String, String>,
}

impl FileSession {
    /// Open (or create) a session backed by the given file
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = DashMap::new();

        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(map) => {
                    for (key, value) in map {
                        entries.insert(key, value);
                    }
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "corrupt session file, starting empty");
                }
            },
            // Missing file is the normal first-run case
            Err(_) => {}
        }

        Self { path, entries }
    }

    fn persist(&self) {
        let mut map = BTreeMap::new();
        for entry in self.entries.iter() {
            map.insert(entry.key().clone(), entry.value().clone());
        }

        let raw = match serde_json::to_string(&map) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(%err, "failed to serialize session");
                return;
            }
        };

        let tmp = self.path.with_extension("tmp");
        if let Err(err) = fs::write(&tmp, raw).and_then(|_| fs::rename(&tmp, &self.path)) {
            warn!(path = %self.path.display(), %err, "failed to persist session");
        }
    }
}

impl SessionStore for FileSession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn remove(&self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.persist();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_session_roundtrip() {
        let session = MemorySession::new();

        assert_eq!(session.get("userId"), None);
        session.set("userId", "42");
        assert_eq!(session.get("userId"), Some("42".to_string()));
        session.remove("userId");
        assert_eq!(session.get("userId"), None);
    }

    #[test]
    fn test_file_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let session = FileSession::open(&path);
            session.set("userName", "Ada");
            session.set("userId", "7");
        }

        let reopened = FileSession::open(&path);
        assert_eq!(reopened.get("userName"), Some("Ada".to_string()));
        assert_eq!(reopened.get("userId"), Some("7".to_string()));
    }

    #[test]
    fn test_file_session_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let session = FileSession::open(&path);
        assert_eq!(session.get("userId"), None);

        // And the store is still writable afterwards
        session.set("userId", "1");
        assert_eq!(session.get("userId"), Some("1".to_string()));
    }
}
