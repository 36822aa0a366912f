//! Top-level screens of the application.
//!
//! The session controller moves between these four views:
//!
//! ```text
//!   Home ──select lever──▶ LeverActive ──complete──▶ PostCheck
//!    ▲ │                       │                        │
//!    │ └──open history──▶ History                       │
//!    │                        │ back                    │
//!    ├────────────────────────┘                         │
//!    ├──────────────── back ◀── LeverActive             │
//!    └──────────── finish / try another ◀───────────────┘
//! ```

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Mood-before rating and lever cards.
    #[default]
    Home,
    /// An exercise for the selected lever is running.
    LeverActive,
    /// Mood-after rating for the exercise just completed.
    PostCheck,
    /// Statistics and the list of recorded sessions.
    History,
}

impl View {
    /// Name shown in the header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "4 Palancas",
            Self::LeverActive => "Ejercicio",
            Self::PostCheck => "Chequeo",
            Self::History => "Historial",
        }
    }
}
