//! Error types for the Palancas plugin.
//!
//! This module defines the centralized error type [`PalancasError`] and a type alias
//! [`Result`] used throughout the plugin. None of these errors ever reach the
//! user: the runtime logs them and carries on as if nothing happened.

use thiserror::Error;

/// The main error type for Palancas plugin operations.
///
/// # Examples
///
/// ```
/// use palancas::domain::PalancasError;
///
/// fn read_slot() -> Result<(), PalancasError> {
///     Err(PalancasError::Storage("slot is locked".to_string()))
/// }
///
/// assert!(read_slot().is_err());
/// ```
#[derive(Debug, Error)]
pub enum PalancasError {
    /// Reading or writing a persistence slot failed.
    ///
    /// Also covers JSON (de)serialization of the stored session list.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Palancas operations.
pub type Result<T> = std::result::Result<T, PalancasError>;
