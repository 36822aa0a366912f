//! Guided exercises, one step machine per lever.
//!
//! Every exercise is a finite-step machine advanced strictly forward. A step is
//! a variant of a tagged enum carrying exactly the data that step needs, and
//! [`StepMachine::transition`] consumes the current step and returns the next
//! one. Free-text steps gate advancing on non-blank input; timed steps consume
//! the shared one-second tick. Reaching the end yields
//! [`StepOutcome::Complete`] with the exercise label exactly once, after which
//! the controller drops the machine.
//!
//! Aborting is not a step transition: the controller simply drops the machine,
//! discarding any work in progress.
//!
//! # Modules
//!
//! - [`physiology`]: Breathing, power posture and shake-it-off drills
//! - [`focus`]: Redirecting attention
//! - [`language`]: Re-labeling a limiting phrase
//! - [`imagination`]: Mental rehearsal of a goal
//! - [`timer`]: Countdown and phase table primitives
//! - [`text`]: Text entry buffer
//! - [`view`]: Display description consumed by the UI

pub mod focus;
pub mod imagination;
pub mod language;
pub mod physiology;
pub mod text;
pub mod timer;
pub mod view;

use crate::domain::Lever;
use focus::FocusStep;
use imagination::ImaginationStep;
use language::LanguageStep;
use physiology::PhysiologyStep;
pub use view::{Block, ExerciseView, OptionItem};

/// Input delivered to the active exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseInput {
    /// Move the selection backwards (Up/Left).
    Prev,
    /// Move the selection forwards (Down/Right).
    Next,
    /// Press the step's primary button.
    Confirm,
    Char(char),
    Backspace,
    /// One second elapsed.
    Tick,
}

/// What a transition produced besides the next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Pending,
    /// The exercise finished with this label.
    Complete(String),
}

/// A forward-only exercise step machine.
///
/// `Default` is the initial step.
pub trait StepMachine: Default {
    /// Consumes the current step and returns the next one.
    fn transition(self, input: ExerciseInput) -> (Self, StepOutcome);

    /// Whether the step is waiting on the one-second tick.
    fn needs_tick(&self) -> bool;

    /// Whether typed characters go into a text field.
    fn accepts_text(&self) -> bool;

    fn view(&self) -> ExerciseView;
}

fn advance<M: StepMachine>(slot: &mut M, input: ExerciseInput) -> StepOutcome {
    let (next, outcome) = std::mem::take(slot).transition(input);
    *slot = next;
    outcome
}

/// The running exercise for the selected lever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exercise {
    Physiology(PhysiologyStep),
    Focus(FocusStep),
    Language(LanguageStep),
    Imagination(ImaginationStep),
}

impl Exercise {
    /// Fresh machine for `lever`, positioned at its first step.
    #[must_use]
    pub fn for_lever(lever: Lever) -> Self {
        match lever {
            Lever::Physiology => Self::Physiology(PhysiologyStep::default()),
            Lever::Focus => Self::Focus(FocusStep::default()),
            Lever::Language => Self::Language(LanguageStep::default()),
            Lever::Imagination => Self::Imagination(ImaginationStep::default()),
        }
    }

    #[must_use]
    pub const fn lever(&self) -> Lever {
        match self {
            Self::Physiology(_) => Lever::Physiology,
            Self::Focus(_) => Lever::Focus,
            Self::Language(_) => Lever::Language,
            Self::Imagination(_) => Lever::Imagination,
        }
    }

    /// Feeds one input to the machine.
    pub fn handle(&mut self, input: ExerciseInput) -> StepOutcome {
        let _span = tracing::trace_span!("exercise_input", lever = %self.lever(), input = ?input).entered();

        let outcome = match self {
            Self::Physiology(step) => advance(step, input),
            Self::Focus(step) => advance(step, input),
            Self::Language(step) => advance(step, input),
            Self::Imagination(step) => advance(step, input),
        };

        if let StepOutcome::Complete(label) = &outcome {
            tracing::debug!(label = %label, "exercise complete");
        }
        outcome
    }

    #[must_use]
    pub fn needs_tick(&self) -> bool {
        match self {
            Self::Physiology(step) => step.needs_tick(),
            Self::Focus(step) => step.needs_tick(),
            Self::Language(step) => step.needs_tick(),
            Self::Imagination(step) => step.needs_tick(),
        }
    }

    #[must_use]
    pub fn accepts_text(&self) -> bool {
        match self {
            Self::Physiology(step) => step.accepts_text(),
            Self::Focus(step) => step.accepts_text(),
            Self::Language(step) => step.accepts_text(),
            Self::Imagination(step) => step.accepts_text(),
        }
    }

    #[must_use]
    pub fn view(&self) -> ExerciseView {
        match self {
            Self::Physiology(step) => step.view(),
            Self::Focus(step) => step.view(),
            Self::Language(step) => step.view(),
            Self::Imagination(step) => step.view(),
        }
    }
}
