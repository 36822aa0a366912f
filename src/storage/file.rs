//! File-backed key-value storage.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a temporary sibling first
//! and are then renamed over the target, so a crash mid-write leaves either the
//! old value or the new one on disk, never a truncated file.

use crate::domain::error::{PalancasError, Result};
use crate::storage::backend::KeyValueStore;
use std::path::{Path, PathBuf};

/// A [`KeyValueStore`] writing one file per key.
///
/// # Examples
///
/// ```no_run
/// use palancas::storage::{FileKeyValueStore, KeyValueStore};
/// use std::path::PathBuf;
///
/// let mut store = FileKeyValueStore::new(PathBuf::from("/tmp/palancas"))?;
/// store.set("4palancas_sessions", "[]")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: PathBuf) -> Result<Self> {
        tracing::debug!(dir = ?dir, "initializing file storage");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    ///
    /// # Errors
    ///
    /// Rejects keys that would escape the store directory.
    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(PalancasError::Storage(format!("invalid key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        let _span = tracing::debug_span!("file_get", path = ?path).entered();

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(bytes = contents.len(), "slot read");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("slot empty");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        let _span = tracing::debug_span!("file_set", path = ?path, bytes = value.len()).entered();

        let tmp_path = path.with_extension("json.tmp");
        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, value)?;

        if let Err(e) = std::fs::rename(&tmp_path, &path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        tracing::debug!("slot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn set_then_get_returns_latest_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileKeyValueStore::new(dir.path().to_path_buf()).unwrap();

        store.set("slot", "first").unwrap();
        store.set("slot", "second").unwrap();

        assert_eq!(store.get("slot").unwrap().as_deref(), Some("second"));
        assert!(dir.path().join("slot.json").exists());
        assert!(!dir.path().join("slot.json.tmp").exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileKeyValueStore::new(nested.clone()).unwrap();
        store.set("k", "v").unwrap();
        assert!(nested.join("k.json").exists());
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileKeyValueStore::new(dir.path().to_path_buf()).unwrap();
        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());
    }
}
