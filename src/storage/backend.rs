//! Key-value persistence abstraction.
//!
//! This module defines the [`KeyValueStore`] trait: a string key addressing a
//! UTF-8 text value. The session store only ever needs "read the whole value"
//! and "overwrite the whole value", so that is all the trait offers.

use crate::domain::error::Result;

/// A key-addressed text slot.
///
/// # Implementations
///
/// - [`crate::storage::FileKeyValueStore`]: one file per key (default)
/// - [`crate::storage::MemoryKeyValueStore`]: in-process map
///
/// # Examples
///
/// ```
/// use palancas::storage::{KeyValueStore, MemoryKeyValueStore};
///
/// let mut store = MemoryKeyValueStore::default();
/// assert_eq!(store.get("greeting")?, None);
///
/// store.set("greeting", "hola")?;
/// assert_eq!(store.get("greeting")?.as_deref(), Some("hola"));
/// # Ok::<(), palancas::domain::PalancasError>(())
/// ```
pub trait KeyValueStore: std::fmt::Debug {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. Implementations must leave the
    /// previous value intact in that case.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
