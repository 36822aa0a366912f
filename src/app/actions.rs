//! Side effects requested by the session controller and event handler.
//!
//! Handlers never touch storage or the host directly. They return [`Action`]s
//! and the runtime executes them in order after the state transition.

use super::celebration::CelebrationConfig;
use crate::domain::SessionDraft;

/// Commands executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Stamp the draft with an id and the current time, then append it to the
    /// session store.
    RecordSession(SessionDraft),

    /// Start the confetti overlay.
    Celebrate(CelebrationConfig),

    /// Hide the plugin pane.
    CloseFocus,
}
