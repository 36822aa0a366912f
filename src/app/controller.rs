//! Session controller: navigation between screens as a pure reducer.
//!
//! [`reduce`] takes the current [`NavigationState`] and a [`ControllerEvent`]
//! and returns the next state plus the actions to run. It never performs I/O;
//! recording a session and starting the celebration are expressed as
//! [`Action::RecordSession`] and [`Action::Celebrate`].
//!
//! Events that do not apply to the current view leave the state unchanged and
//! produce no actions.
//!
//! # Example
//!
//! ```rust
//! use palancas::app::controller::{reduce, ControllerEvent, NavigationState};
//! use palancas::app::View;
//! use palancas::domain::Lever;
//!
//! let state = NavigationState::default();
//! let (state, actions) = reduce(&state, &ControllerEvent::SelectLever(Lever::Focus));
//! assert_eq!(state.view, View::LeverActive);
//! assert!(actions.is_empty());
//! ```

use super::actions::Action;
use super::celebration::CelebrationConfig;
use super::modes::View;
use crate::domain::{Lever, Mood, SessionDraft};

/// Ephemeral navigation state.
///
/// Created fresh on load and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub view: View,
    pub selected_lever: Option<Lever>,
    pub mood_before: Mood,
    pub mood_after: Mood,
    /// Label of the exercise completed in this session, set on entering post-check.
    pub exercise_name: Option<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            view: View::Home,
            selected_lever: None,
            mood_before: Mood::MIDPOINT,
            mood_after: Mood::MIDPOINT,
            exercise_name: None,
        }
    }
}

impl NavigationState {
    /// `true` when the staged after-rating beats the before-rating.
    #[must_use]
    pub fn improved(&self) -> bool {
        self.mood_after > self.mood_before
    }

    /// Staged fields as a draft, `None` if no lever is selected.
    fn draft(&self) -> Option<SessionDraft> {
        let lever = self.selected_lever?;
        Some(SessionDraft {
            lever,
            exercise_name: self.exercise_name.clone().unwrap_or_default(),
            mood_before: self.mood_before,
            mood_after: self.mood_after,
        })
    }

    /// Back to home with the session-specific fields cleared.
    ///
    /// The before-rating is kept so the next lever starts from it.
    fn reset(&self) -> Self {
        Self {
            view: View::Home,
            selected_lever: None,
            mood_before: self.mood_before,
            mood_after: self.mood_before,
            exercise_name: None,
        }
    }
}

/// Inputs to the session controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    SelectLever(Lever),
    /// The running exercise finished with this label.
    ExerciseCompleted(String),
    /// The user backed out of the running exercise.
    ExerciseAbandoned,
    SetMoodBefore(Mood),
    SetMoodAfter(Mood),
    /// "Terminar y Guardar" on the post-check screen.
    Finish,
    /// "Probar otra palanca", offered only when the mood did not improve.
    TryAnotherLever,
    OpenHistory,
    CloseHistory,
}

/// Computes the next navigation state.
#[must_use]
pub fn reduce(state: &NavigationState, event: &ControllerEvent) -> (NavigationState, Vec<Action>) {
    use ControllerEvent as E;

    match (state.view, event) {
        (View::Home, E::SelectLever(lever)) => (
            NavigationState {
                view: View::LeverActive,
                selected_lever: Some(*lever),
                exercise_name: None,
                ..state.clone()
            },
            vec![],
        ),
        (View::Home, E::SetMoodBefore(mood)) => (
            NavigationState {
                mood_before: *mood,
                ..state.clone()
            },
            vec![],
        ),
        (View::Home, E::OpenHistory) => (
            NavigationState {
                view: View::History,
                ..state.clone()
            },
            vec![],
        ),

        (View::LeverActive, E::ExerciseCompleted(name)) => (
            NavigationState {
                view: View::PostCheck,
                mood_after: state.mood_before,
                exercise_name: Some(name.clone()),
                ..state.clone()
            },
            vec![],
        ),
        (View::LeverActive, E::ExerciseAbandoned) => (state.reset(), vec![]),

        (View::PostCheck, E::SetMoodAfter(mood)) => (
            NavigationState {
                mood_after: *mood,
                ..state.clone()
            },
            vec![],
        ),
        (View::PostCheck, E::Finish) => (state.reset(), record(state)),
        (View::PostCheck, E::TryAnotherLever) if !state.improved() => (state.reset(), record(state)),

        (View::History, E::CloseHistory) => (
            NavigationState {
                view: View::Home,
                ..state.clone()
            },
            vec![],
        ),

        _ => (state.clone(), vec![]),
    }
}

/// Actions that persist the staged session and celebrate an improvement.
fn record(state: &NavigationState) -> Vec<Action> {
    let Some(draft) = state.draft() else {
        tracing::warn!("finish without a selected lever, nothing recorded");
        return vec![];
    };

    let mut actions = vec![Action::RecordSession(draft)];
    if state.improved() {
        actions.push(Action::Celebrate(CelebrationConfig::default()));
    }
    actions
}
