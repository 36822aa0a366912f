//! Domain layer for the Palancas plugin.
//!
//! Core types independent of Zellij APIs and storage: levers, mood ratings,
//! recorded sessions and the crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`lever`]: The four exercise categories
//! - [`mood`]: Mood ratings and their display bands
//! - [`session`]: Recorded sessions and staged drafts

pub mod error;
pub mod lever;
pub mod mood;
pub mod session;

pub use error::{PalancasError, Result};
pub use lever::Lever;
pub use mood::{Mood, MoodBand};
pub use session::{Session, SessionDraft};
