//! Event handling and state transition logic.
//!
//! This module translates user input and timer ticks into session controller
//! events and exercise inputs, mutating [`AppState`] and collecting the
//! [`Action`]s the runtime must execute.
//!
//! # Event Types
//!
//! - **Navigation**: `Up`, `Down`, `Left`, `Right`, `Confirm`, `Back`
//! - **Text entry**: `Char`, `Backspace`
//! - **Commands**: `Secondary`, `OpenHistory`, `Quit`
//! - **Time**: `Tick`
//!
//! The meaning of each key depends on the current view. Keys that mean nothing
//! in the current view are ignored and do not trigger a re-render.
//!
//! # Example
//!
//! ```rust
//! use palancas::app::{handle_event, AppState, Event, View};
//! use palancas::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Confirm)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! assert_eq!(state.nav.view, View::LeverActive);
//! # Ok::<(), palancas::domain::PalancasError>(())
//! ```

use super::controller::ControllerEvent;
use super::modes::View;
use super::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Lever;
use crate::exercises::{ExerciseInput, StepOutcome};

/// Library-level input events produced by the plugin shim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Up,
    Down,
    Left,
    Right,
    /// Enter: press the primary button of the current screen.
    Confirm,
    /// Esc: leave the current screen.
    Back,
    Char(char),
    Backspace,
    /// Tab: secondary button ("Probar otra palanca").
    Secondary,
    OpenHistory,
    /// One second elapsed.
    Tick,
    /// Hide the plugin.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` when the event did
/// not change anything visible.
///
/// # Errors
///
/// Reserved for handlers that can fail; none of the current ones do.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, view = ?state.nav.view).entered();

    match event {
        Event::Tick => return Ok(handle_tick(state)),
        Event::Quit => return Ok((false, vec![Action::CloseFocus])),
        _ => {}
    }

    let result = match state.nav.view {
        View::Home => handle_home(state, *event),
        View::LeverActive => handle_exercise(state, *event),
        View::PostCheck => handle_post_check(state, *event),
        View::History => handle_history(state, *event),
    };
    Ok(result)
}

fn ignored() -> (bool, Vec<Action>) {
    (false, vec![])
}

fn handle_home(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    match event {
        Event::Left => {
            let mood = state.nav.mood_before.decrement();
            (true, state.apply(&ControllerEvent::SetMoodBefore(mood)))
        }
        Event::Right => {
            let mood = state.nav.mood_before.increment();
            (true, state.apply(&ControllerEvent::SetMoodBefore(mood)))
        }
        Event::Up => {
            state.move_home_cursor_up();
            (true, vec![])
        }
        Event::Down => {
            state.move_home_cursor_down();
            (true, vec![])
        }
        Event::Confirm => {
            let lever = state.selected_card();
            tracing::debug!(lever = %lever, "lever selected");
            (true, state.apply(&ControllerEvent::SelectLever(lever)))
        }
        Event::Char(c @ '1'..='4') => {
            let index = (c as usize) - ('1' as usize);
            state.home_cursor = index;
            let lever = Lever::ALL[index];
            tracing::debug!(lever = %lever, "lever selected by number");
            (true, state.apply(&ControllerEvent::SelectLever(lever)))
        }
        Event::OpenHistory => (true, state.apply(&ControllerEvent::OpenHistory)),
        _ => ignored(),
    }
}

fn handle_exercise(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    let input = match event {
        Event::Back => {
            tracing::debug!("exercise abandoned");
            return (true, state.apply(&ControllerEvent::ExerciseAbandoned));
        }
        Event::Up | Event::Left => ExerciseInput::Prev,
        Event::Down | Event::Right => ExerciseInput::Next,
        Event::Confirm => ExerciseInput::Confirm,
        Event::Char(c) => ExerciseInput::Char(c),
        Event::Backspace => ExerciseInput::Backspace,
        _ => return ignored(),
    };
    feed_exercise(state, input)
}

fn feed_exercise(state: &mut AppState, input: ExerciseInput) -> (bool, Vec<Action>) {
    let Some(exercise) = state.exercise.as_mut() else {
        tracing::debug!("no running exercise");
        return ignored();
    };
    match exercise.handle(input) {
        StepOutcome::Pending => (true, vec![]),
        StepOutcome::Complete(label) => (true, state.apply(&ControllerEvent::ExerciseCompleted(label))),
    }
}

fn handle_post_check(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    match event {
        Event::Left => {
            let mood = state.nav.mood_after.decrement();
            (true, state.apply(&ControllerEvent::SetMoodAfter(mood)))
        }
        Event::Right => {
            let mood = state.nav.mood_after.increment();
            (true, state.apply(&ControllerEvent::SetMoodAfter(mood)))
        }
        Event::Confirm => (true, state.apply(&ControllerEvent::Finish)),
        Event::Secondary if !state.nav.improved() => (true, state.apply(&ControllerEvent::TryAnotherLever)),
        _ => ignored(),
    }
}

fn handle_history(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    match event {
        Event::Up => {
            state.scroll_history_up();
            (true, vec![])
        }
        Event::Down => {
            state.scroll_history_down();
            (true, vec![])
        }
        Event::Back | Event::OpenHistory => (true, state.apply(&ControllerEvent::CloseHistory)),
        _ => ignored(),
    }
}

/// Delivers one tick to the running exercise and the confetti overlay.
fn handle_tick(state: &mut AppState) -> (bool, Vec<Action>) {
    let mut render = state.tick_celebration();
    let mut actions = Vec::new();

    if state.exercise_needs_tick() {
        let (_, exercise_actions) = feed_exercise(state, ExerciseInput::Tick);
        actions.extend(exercise_actions);
        render = true;
    }

    (render, actions)
}
