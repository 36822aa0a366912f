//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data: strings already formatted,
//! colors already resolved against the theme and selection already decided.
//!
//! # Example
//!
//! ```rust
//! use palancas::ui::viewmodel::{FooterInfo, HeaderInfo};
//!
//! let header = HeaderInfo {
//!     title: "4 Palancas".to_string(),
//!     subtitle: Some("Gestión de Estado".to_string()),
//! };
//! let footer = FooterInfo { keybindings: "q: salir".to_string() };
//! assert_eq!(header.title, "4 Palancas");
//! # let _ = footer;
//! ```

use crate::exercises::ExerciseView;
use crate::history::TrendPoint;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub footer: FooterInfo,
    /// The body of the current view.
    pub screen: Screen,
    /// Confetti particles drawn over everything else. Empty when no
    /// celebration is running.
    pub confetti: Vec<ConfettiCell>,
}

/// Body content, one variant per top-level view.
#[derive(Debug, Clone)]
pub enum Screen {
    Home(HomeScreen),
    Exercise(ExerciseScreen),
    PostCheck(PostCheckScreen),
    History(HistoryScreen),
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "enter: elegir · q: salir").
    pub keybindings: String,
}

/// A mood rating widget.
#[derive(Debug, Clone)]
pub struct MoodWidget {
    pub label: Option<String>,
    pub value: u8,
    pub emoji: &'static str,
    /// Band color as a hex string.
    pub color: String,
    /// Drawn dimmed and never receives input.
    pub disabled: bool,
}

#[derive(Debug, Clone)]
pub struct HomeScreen {
    pub mood: MoodWidget,
    pub prompt: String,
    pub cards: Vec<LeverCard>,
    pub tagline: String,
}

/// One of the four lever cards on the home screen.
#[derive(Debug, Clone)]
pub struct LeverCard {
    /// 1-based number shown on the card and accepted as a shortcut.
    pub index: usize,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub color: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone)]
pub struct ExerciseScreen {
    /// Lever color used for headings and the progress bar.
    pub accent: String,
    pub view: ExerciseView,
}

#[derive(Debug, Clone)]
pub struct PostCheckScreen {
    pub mood: MoodWidget,
    pub before: MoodWidget,
    pub improved: bool,
    pub message: String,
    pub exercise_name: String,
    pub can_try_another: bool,
}

#[derive(Debug, Clone)]
pub struct HistoryScreen {
    /// Signed average improvement, e.g. `+1.5`.
    pub average: String,
    /// Title of the most used lever, `-` when there is none.
    pub favorite: String,
    pub trend: Option<Vec<TrendPoint>>,
    /// Newest first.
    pub rows: Vec<HistoryRow>,
    /// Index of the first row to draw.
    pub offset: usize,
}

/// One entry of the session list.
#[derive(Debug, Clone)]
pub struct HistoryRow {
    pub lever: String,
    pub lever_color: String,
    /// `dd/mm/yyyy`.
    pub date: String,
    pub exercise: String,
    pub before: u8,
    pub after: u8,
    pub delta: i32,
}

/// A single confetti glyph at an absolute 1-based screen position.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiCell {
    pub row: usize,
    pub col: usize,
    pub glyph: char,
    pub color: String,
}
