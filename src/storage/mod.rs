//! Storage layer for the recorded session history.
//!
//! Persistence is split into a dumb key-addressed text slot
//! ([`KeyValueStore`]) and the [`SessionStore`] that owns the in-memory session
//! list and mirrors it into a single slot as a JSON array.
//!
//! # Modules
//!
//! - `backend`: Key-value slot abstraction
//! - `file`: One-file-per-key backend with atomic writes
//! - `memory`: In-process backend for tests and degraded startup
//! - `sessions`: The session collection and its JSON encoding

pub mod backend;
pub mod file;
pub mod memory;
pub mod sessions;

pub use backend::KeyValueStore;
pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use sessions::{SessionStore, SESSIONS_KEY};
