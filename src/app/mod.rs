//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin shim (main.rs) and the domain, exercise
//! and storage layers.
//!
//! # Architecture
//!
//! ```text
//! Key / Timer → Event → handle_event → ControllerEvent → reduce
//!                            │                              │
//!                            ▼                              ▼
//!                      Exercise::handle                  Actions
//!                                                           │
//!                                   Runtime::execute_action ┘ → storage, confetti, host
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the controller
//! - [`celebration`]: Confetti overlay
//! - [`controller`]: Pure navigation reducer
//! - [`handler`]: Per-view key semantics
//! - [`modes`]: The four top-level views
//! - [`runtime`]: Action execution and tick scheduling
//! - [`scheduler`]: Single outstanding timeout bookkeeping
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod celebration;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod runtime;
pub mod scheduler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::View;
pub use runtime::{HostAction, Runtime};
pub use scheduler::TICK_SECONDS;
pub use state::AppState;
