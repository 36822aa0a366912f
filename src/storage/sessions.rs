//! The persisted session collection.
//!
//! [`SessionStore`] keeps the ordered list of recorded sessions in memory and
//! mirrors it into a single key-value slot as a JSON array. Loading is
//! fail-soft: a missing, unreadable or malformed slot yields an empty list and
//! a warning in the trace log. Appending rewrites the whole slot, so an append
//! before any successful load reads the slot first.

use crate::domain::error::{PalancasError, Result};
use crate::domain::Session;
use crate::storage::backend::KeyValueStore;

/// Slot holding the session array.
pub const SESSIONS_KEY: &str = "4palancas_sessions";

/// Ordered, append-only session collection over a [`KeyValueStore`].
///
/// # Examples
///
/// ```
/// use palancas::storage::{MemoryKeyValueStore, SessionStore};
///
/// let mut store = SessionStore::new(MemoryKeyValueStore::default());
/// assert!(store.load().is_empty());
/// ```
#[derive(Debug)]
pub struct SessionStore<K> {
    backend: K,
    sessions: Vec<Session>,
    /// Set once the slot has been read, even if it held malformed text.
    loaded: bool,
}

impl<K: KeyValueStore> SessionStore<K> {
    /// Wraps a backend. Nothing is read until [`SessionStore::load`].
    pub fn new(backend: K) -> Self {
        Self {
            backend,
            sessions: Vec::new(),
            loaded: false,
        }
    }

    /// Reads the persisted collection, replacing the in-memory copy.
    ///
    /// Never fails: read and parse errors are logged and produce an empty list.
    pub fn load(&mut self) -> &[Session] {
        let _span = tracing::debug_span!("session_store_load", key = SESSIONS_KEY).entered();

        self.sessions = match self.backend.get(SESSIONS_KEY) {
            Ok(Some(text)) => {
                self.loaded = true;
                match serde_json::from_str::<Vec<Session>>(&text) {
                    Ok(sessions) => sessions,
                    Err(e) => {
                        tracing::warn!(error = %e, "stored sessions are malformed, starting empty");
                        Vec::new()
                    }
                }
            }
            Ok(None) => {
                self.loaded = true;
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored sessions, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(count = self.sessions.len(), "sessions loaded");
        &self.sessions
    }

    /// Appends one session and persists the whole collection.
    ///
    /// Reads the slot first if it has not been loaded yet, so records written
    /// by earlier runs are kept. The in-memory list keeps the new record even if
    /// persisting fails.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub fn append(&mut self, session: Session) -> Result<&[Session]> {
        let _span = tracing::debug_span!("session_store_append",
            id = %session.id,
            lever = %session.lever
        ).entered();

        if !self.loaded {
            let unsaved = std::mem::take(&mut self.sessions);
            self.load();
            self.sessions.extend(unsaved);
        }
        self.sessions.push(session);

        let text = serde_json::to_string(&self.sessions)
            .map_err(|e| PalancasError::Storage(format!("failed to serialize sessions: {e}")))?;
        self.backend.set(SESSIONS_KEY, &text)?;

        tracing::debug!(count = self.sessions.len(), "session appended");
        Ok(&self.sessions)
    }

    /// The in-memory collection as of the last load or append.
    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Whether the slot has been read since this store was created.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Lever, Mood};
    use crate::storage::MemoryKeyValueStore;

    fn session(id: &str, timestamp: i64) -> Session {
        Session {
            id: id.to_string(),
            date: "2024-01-01T00:00:00.000Z".to_string(),
            timestamp,
            lever: Lever::Focus,
            exercise_name: "Cambio de Enfoque".to_string(),
            mood_before: Mood::new(4).unwrap(),
            mood_after: Mood::new(6).unwrap(),
        }
    }

    #[derive(Debug)]
    struct FailingWrites(MemoryKeyValueStore);

    impl KeyValueStore for FailingWrites {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(PalancasError::Storage("disk full".to_string()))
        }
    }

    #[test]
    fn append_then_load_keeps_order() {
        let mut store = SessionStore::new(MemoryKeyValueStore::default());
        store.load();
        store.append(session("a", 1)).unwrap();
        store.append(session("b", 2)).unwrap();

        let ids: Vec<&str> = store.load().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn malformed_slot_loads_empty() {
        let backend = MemoryKeyValueStore::with_value(SESSIONS_KEY, "{not json");
        let mut store = SessionStore::new(backend);
        assert!(store.load().is_empty());
    }

    #[test]
    fn out_of_range_mood_in_slot_loads_empty() {
        let text = r#"[{"id":"x","date":"d","timestamp":1,"lever":"focus",
            "exerciseName":"e","moodBefore":5,"moodAfter":12}]"#;
        let mut store = SessionStore::new(MemoryKeyValueStore::with_value(SESSIONS_KEY, text));
        assert!(store.load().is_empty());
    }

    #[test]
    fn failed_write_keeps_record_in_memory() {
        let mut store = SessionStore::new(FailingWrites(MemoryKeyValueStore::default()));
        store.load();

        assert!(store.append(session("a", 1)).is_err());
        assert_eq!(store.sessions().len(), 1);
    }

    #[test]
    fn append_without_load_keeps_stored_records() {
        let seeded = serde_json::to_string(&[session("a", 1), session("b", 2)]).unwrap();
        let mut store = SessionStore::new(MemoryKeyValueStore::with_value(SESSIONS_KEY, &seeded));
        assert!(!store.is_loaded());

        store.append(session("c", 3)).unwrap();
        assert!(store.is_loaded());

        let ids: Vec<&str> = store.load().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn unreadable_slot_does_not_count_as_loaded() {
        #[derive(Debug)]
        struct FailingReads;

        impl KeyValueStore for FailingReads {
            fn get(&self, _key: &str) -> Result<Option<String>> {
                Err(PalancasError::Storage("not mounted".to_string()))
            }

            fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
                Ok(())
            }
        }

        let mut store = SessionStore::new(FailingReads);
        assert!(store.load().is_empty());
        assert!(!store.is_loaded());
    }

    #[test]
    fn persists_plain_json_array() {
        let mut store = SessionStore::new(MemoryKeyValueStore::default());
        store.append(session("a", 1)).unwrap();

        let text = store.backend().get(SESSIONS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["exerciseName"], "Cambio de Enfoque");
    }
}
