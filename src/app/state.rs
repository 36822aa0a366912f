//! Application state and view model computation.
//!
//! [`AppState`] is the single owner of everything the UI shows: the navigation
//! state driven by the session controller, the cached session history, the
//! running exercise machine and a few cursors. View models are computed from it
//! on demand and never stored.
//!
//! # State Components
//!
//! - **Navigation**: Current view, selected lever and staged mood ratings
//! - **Sessions**: Copy of the store's collection, refreshed after each append
//! - **Exercise**: Step machine for the selected lever while it runs
//! - **Cursors**: Home lever cursor and history scroll offset
//! - **Celebration**: Confetti overlay while it is alive

use super::celebration::Celebration;
use super::controller::{reduce, ControllerEvent, NavigationState};
use super::modes::View;
use super::Action;
use crate::domain::{Lever, Mood, Session};
use crate::exercises::Exercise;
use crate::history;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ConfettiCell, ExerciseScreen, FooterInfo, HeaderInfo, HistoryRow, HistoryScreen, HomeScreen, LeverCard,
    MoodWidget, PostCheckScreen, Screen, UIViewModel,
};

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub nav: NavigationState,

    /// Recorded sessions in insertion order.
    pub sessions: Vec<Session>,

    /// Present exactly while the view is [`View::LeverActive`].
    pub exercise: Option<Exercise>,

    /// Highlighted lever card on the home screen.
    pub home_cursor: usize,

    /// First visible row of the history list.
    pub history_offset: usize,

    pub theme: Theme,

    pub celebration: Option<Celebration>,
}

impl AppState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            nav: NavigationState::default(),
            sessions: Vec::new(),
            exercise: None,
            home_cursor: 0,
            history_offset: 0,
            theme,
            celebration: None,
        }
    }

    /// Runs an event through the session controller and syncs the exercise
    /// machine with the resulting view.
    pub fn apply(&mut self, event: &ControllerEvent) -> Vec<Action> {
        let (nav, actions) = reduce(&self.nav, event);
        if nav.view != self.nav.view {
            tracing::debug!(from = ?self.nav.view, to = ?nav.view, "view changed");
        }
        self.nav = nav;
        self.sync_exercise();
        actions
    }

    /// Starts a machine on entering an exercise and tears it down on leaving.
    fn sync_exercise(&mut self) {
        match (self.nav.view, self.nav.selected_lever) {
            (View::LeverActive, Some(lever)) => {
                if self.exercise.as_ref().map(Exercise::lever) != Some(lever) {
                    self.exercise = Some(Exercise::for_lever(lever));
                }
            }
            _ => {
                if self.exercise.take().is_some() {
                    tracing::debug!("exercise torn down");
                }
            }
        }
        if self.nav.view != View::History {
            self.history_offset = 0;
        }
    }

    /// Whether typed characters belong to a text field.
    #[must_use]
    pub fn accepts_text(&self) -> bool {
        self.nav.view == View::LeverActive && self.exercise.as_ref().is_some_and(Exercise::accepts_text)
    }

    /// Whether anything is waiting on the one-second tick.
    #[must_use]
    pub fn has_tick_consumer(&self) -> bool {
        self.exercise_needs_tick() || self.celebration.as_ref().is_some_and(Celebration::is_alive)
    }

    /// Whether the running exercise has a timer going.
    #[must_use]
    pub fn exercise_needs_tick(&self) -> bool {
        self.exercise.as_ref().is_some_and(Exercise::needs_tick)
    }

    /// Advances the confetti by one tick, clearing it once it has settled.
    /// Returns `true` if there was a celebration to advance.
    pub fn tick_celebration(&mut self) -> bool {
        let Some(celebration) = self.celebration.as_mut() else {
            return false;
        };
        if !celebration.tick() {
            tracing::debug!("celebration finished");
            self.celebration = None;
        }
        true
    }

    #[must_use]
    pub fn selected_card(&self) -> Lever {
        Lever::ALL[self.home_cursor.min(Lever::ALL.len() - 1)]
    }

    pub fn move_home_cursor_down(&mut self) {
        self.home_cursor = (self.home_cursor + 1) % Lever::ALL.len();
    }

    pub fn move_home_cursor_up(&mut self) {
        self.home_cursor = self.home_cursor.checked_sub(1).unwrap_or(Lever::ALL.len() - 1);
    }

    pub fn scroll_history_down(&mut self) {
        if self.history_offset + 1 < self.sessions.len() {
            self.history_offset += 1;
        }
    }

    pub fn scroll_history_up(&mut self) {
        self.history_offset = self.history_offset.saturating_sub(1);
    }

    /// Builds the view model for a pane of `rows` by `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", view = ?self.nav.view, rows, cols).entered();

        let screen = match self.nav.view {
            View::Home => Screen::Home(self.home_screen()),
            View::LeverActive => match &self.exercise {
                Some(exercise) => Screen::Exercise(ExerciseScreen {
                    accent: self.theme.lever_color(exercise.lever()).to_string(),
                    view: exercise.view(),
                }),
                None => Screen::Home(self.home_screen()),
            },
            View::PostCheck => Screen::PostCheck(self.post_check_screen()),
            View::History => Screen::History(self.history_screen()),
        };

        UIViewModel {
            header: self.header(),
            footer: FooterInfo {
                keybindings: self.keybindings(),
            },
            screen,
            confetti: self.confetti_cells(rows, cols),
        }
    }

    fn header(&self) -> HeaderInfo {
        let subtitle = match self.nav.view {
            View::Home => Some("Gestión de Estado".to_string()),
            View::LeverActive => self.nav.selected_lever.map(|l| l.subtitle().to_string()),
            View::PostCheck => self.nav.exercise_name.clone(),
            View::History => Some(format!("{} sesiones", self.sessions.len())),
        };
        HeaderInfo {
            title: self.nav.view.title().to_string(),
            subtitle,
        }
    }

    fn keybindings(&self) -> String {
        match self.nav.view {
            View::Home => "←/→: ánimo · ↑/↓: palanca · enter: elegir · h: historial · q: salir".to_string(),
            View::LeverActive => {
                let button = self
                    .exercise
                    .as_ref()
                    .and_then(|e| e.view().button())
                    .map(|(label, _)| label.to_lowercase());
                let mut hints = Vec::new();
                if self.accepts_text() {
                    hints.push("escribe tu respuesta".to_string());
                } else {
                    hints.push("↑/↓: elegir".to_string());
                }
                if let Some(button) = button {
                    hints.push(format!("enter: {button}"));
                }
                hints.push("esc: volver".to_string());
                hints.join(" · ")
            }
            View::PostCheck => {
                let mut hints = "←/→: ánimo · enter: terminar y guardar".to_string();
                if !self.nav.improved() {
                    hints.push_str(" · tab: probar otra palanca");
                }
                hints
            }
            View::History => "↑/↓: desplazar · esc: volver · q: salir".to_string(),
        }
    }

    fn mood_widget(label: Option<&str>, mood: Mood, disabled: bool) -> MoodWidget {
        let band = mood.band();
        MoodWidget {
            label: label.map(ToString::to_string),
            value: mood.value(),
            emoji: band.emoji(),
            color: band.color().to_string(),
            disabled,
        }
    }

    fn home_screen(&self) -> HomeScreen {
        HomeScreen {
            mood: Self::mood_widget(Some("¿Cómo te sientes ahora?"), self.nav.mood_before, false),
            prompt: "Selecciona una palanca para cambiar tu estado".to_string(),
            cards: Lever::ALL
                .iter()
                .enumerate()
                .map(|(i, lever)| LeverCard {
                    index: i + 1,
                    title: lever.title().to_string(),
                    subtitle: lever.subtitle().to_string(),
                    description: lever.description().to_string(),
                    color: self.theme.lever_color(*lever).to_string(),
                    is_selected: i == self.home_cursor,
                })
                .collect(),
            tagline: "Tu estado determina tu realidad.".to_string(),
        }
    }

    fn post_check_screen(&self) -> PostCheckScreen {
        let delta = self.nav.mood_after.delta_from(self.nav.mood_before);
        let message = match delta {
            d if d > 0 => format!("¡Mejoró tu estado! (+{d}) 🎉"),
            0 => "Tu estado se mantuvo estable.".to_string(),
            _ => "Parece que bajó un poco. ¿Intentamos otra?".to_string(),
        };
        PostCheckScreen {
            mood: Self::mood_widget(Some("¿Cómo te sientes AHORA?"), self.nav.mood_after, false),
            before: Self::mood_widget(Some("Antes"), self.nav.mood_before, true),
            improved: delta > 0,
            message,
            exercise_name: self.nav.exercise_name.clone().unwrap_or_default(),
            can_try_another: delta <= 0,
        }
    }

    fn history_screen(&self) -> HistoryScreen {
        let summary = history::summarize(&self.sessions);
        let rows = summary
            .recent
            .iter()
            .map(|s| HistoryRow {
                lever: s.lever.title().to_string(),
                lever_color: self.theme.lever_color(s.lever).to_string(),
                date: history::session_date(s),
                exercise: s.exercise_name.clone(),
                before: s.mood_before.value(),
                after: s.mood_after.value(),
                delta: s.delta(),
            })
            .collect();

        HistoryScreen {
            average: average_label(summary.total, summary.average_improvement),
            favorite: summary.favorite.map_or_else(|| "-".to_string(), |l| l.title().to_string()),
            trend: summary.trend,
            rows,
            offset: self.history_offset,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn confetti_cells(&self, rows: usize, cols: usize) -> Vec<ConfettiCell> {
        let Some(celebration) = self.celebration.as_ref().filter(|c| c.is_alive()) else {
            return Vec::new();
        };
        celebration
            .particles
            .iter()
            .map(|p| ConfettiCell {
                row: 1 + (p.y * rows.saturating_sub(1) as f32) as usize,
                col: 1 + (p.x * cols.saturating_sub(1) as f32) as usize,
                glyph: p.glyph,
                color: celebration.color_of(p).unwrap_or("#ffffff").to_string(),
            })
            .collect()
    }
}

/// The "Mejora promedio" figure: `+0` with no sessions, one decimal otherwise.
fn average_label(total: usize, average: f64) -> String {
    if total == 0 {
        "+0".to_string()
    } else {
        format!("{average:+.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Theme::default())
    }

    #[test]
    fn exercise_exists_only_while_lever_active() {
        let mut state = state();
        assert!(state.exercise.is_none());

        state.apply(&ControllerEvent::SelectLever(Lever::Imagination));
        assert_eq!(state.exercise.as_ref().map(Exercise::lever), Some(Lever::Imagination));

        state.apply(&ControllerEvent::ExerciseAbandoned);
        assert!(state.exercise.is_none());
    }

    #[test]
    fn text_entry_only_in_text_steps() {
        let mut state = state();
        assert!(!state.accepts_text());

        state.apply(&ControllerEvent::SelectLever(Lever::Focus));
        assert!(state.accepts_text());

        state.apply(&ControllerEvent::ExerciseAbandoned);
        state.apply(&ControllerEvent::SelectLever(Lever::Physiology));
        assert!(!state.accepts_text());
    }

    #[test]
    fn home_cursor_wraps() {
        let mut state = state();
        state.move_home_cursor_up();
        assert_eq!(state.selected_card(), Lever::Imagination);
        state.move_home_cursor_down();
        assert_eq!(state.selected_card(), Lever::Physiology);
    }

    #[test]
    fn post_check_viewmodel_reflects_delta() {
        let mut state = state();
        state.apply(&ControllerEvent::SelectLever(Lever::Focus));
        state.apply(&ControllerEvent::ExerciseCompleted("Cambio de Enfoque".to_string()));

        let Screen::PostCheck(screen) = state.compute_viewmodel(30, 80).screen else {
            panic!("expected post-check screen");
        };
        assert!(screen.can_try_another);
        assert!(screen.before.disabled);
        assert_eq!(screen.message, "Tu estado se mantuvo estable.");

        state.apply(&ControllerEvent::SetMoodAfter(Mood::new(8).unwrap()));
        let Screen::PostCheck(screen) = state.compute_viewmodel(30, 80).screen else {
            panic!("expected post-check screen");
        };
        assert!(!screen.can_try_another);
        assert_eq!(screen.message, "¡Mejoró tu estado! (+3) 🎉");
    }

    #[test]
    fn empty_history_viewmodel() {
        let mut state = state();
        state.apply(&ControllerEvent::OpenHistory);

        let Screen::History(screen) = state.compute_viewmodel(30, 80).screen else {
            panic!("expected history screen");
        };
        assert_eq!(screen.average, "+0");
        assert_eq!(screen.favorite, "-");
        assert!(screen.trend.is_none());
        assert!(screen.rows.is_empty());
    }

    #[test]
    fn average_label_keeps_one_decimal_once_sessions_exist() {
        assert_eq!(average_label(0, 0.0), "+0");
        assert_eq!(average_label(3, 0.0), "+0.0");
        assert_eq!(average_label(2, 1.0), "+1.0");
        assert_eq!(average_label(1, -0.5), "-0.5");
    }
}
