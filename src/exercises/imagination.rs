//! Imagination lever: rehearse a goal with all the senses.
//!
//! Seven steps with a progress indicator: goal, a 30 second visualization,
//! what you see, hear and feel, a resilience plan, and the closing screen.
//! Only the goal is required; the sensory notes and the resilience plan may be
//! left empty.

use super::text::TextField;
use super::timer::Countdown;
use super::view::{Block, ExerciseView};
use super::{ExerciseInput, StepMachine, StepOutcome};

pub const LABEL: &str = "Ensayo Mental";

pub const VISUALIZATION_SECONDS: u32 = 30;

pub const STEP_COUNT: usize = 7;

/// The three sensory prompts, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    See,
    Hear,
    Feel,
}

impl Sense {
    const fn question(self) -> &'static str {
        match self {
            Self::See => "¿Qué VES?",
            Self::Hear => "¿Qué ESCUCHAS?",
            Self::Feel => "¿Qué SIENTES?",
        }
    }

    const fn hint(self) -> &'static str {
        match self {
            Self::See => "Colores, brillo, personas, entorno...",
            Self::Hear => "Voces, sonidos, música, silencio...",
            Self::Feel => "Sensaciones físicas en tu cuerpo, emociones...",
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::See => Some(Self::Hear),
            Self::Hear => Some(Self::Feel),
            Self::Feel => None,
        }
    }

    const fn step_number(self) -> usize {
        match self {
            Self::See => 3,
            Self::Hear => 4,
            Self::Feel => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImaginationStep {
    Goal { text: TextField },
    Visualize { goal: String, countdown: Countdown },
    Sense { sense: Sense, notes: TextField },
    Resilience { plan: TextField },
    Done,
}

impl Default for ImaginationStep {
    fn default() -> Self {
        Self::Goal {
            text: TextField::default(),
        }
    }
}

impl ImaginationStep {
    /// One-based position shown in the progress indicator.
    #[must_use]
    pub const fn number(&self) -> usize {
        match self {
            Self::Goal { .. } => 1,
            Self::Visualize { .. } => 2,
            Self::Sense { sense, .. } => sense.step_number(),
            Self::Resilience { .. } => 6,
            Self::Done => 7,
        }
    }
}

fn edit(field: &mut TextField, input: ExerciseInput) {
    match input {
        ExerciseInput::Char(c) => field.push(c),
        ExerciseInput::Backspace => field.pop(),
        _ => {}
    }
}

impl StepMachine for ImaginationStep {
    fn transition(self, input: ExerciseInput) -> (Self, StepOutcome) {
        use ExerciseInput as In;

        let next = match (self, input) {
            (Self::Goal { text }, In::Confirm) if !text.is_blank() => Self::Visualize {
                goal: text.into_string(),
                countdown: Countdown::new(VISUALIZATION_SECONDS),
            },
            (Self::Goal { mut text }, input) => {
                edit(&mut text, input);
                Self::Goal { text }
            }

            (Self::Visualize { goal, mut countdown }, In::Confirm) => {
                if countdown.is_finished() {
                    Self::Sense {
                        sense: Sense::See,
                        notes: TextField::default(),
                    }
                } else {
                    countdown.start();
                    Self::Visualize { goal, countdown }
                }
            }
            (Self::Visualize { goal, mut countdown }, In::Tick) => {
                countdown.tick();
                Self::Visualize { goal, countdown }
            }

            (Self::Sense { sense, .. }, In::Confirm) => match sense.next() {
                Some(sense) => Self::Sense {
                    sense,
                    notes: TextField::default(),
                },
                None => Self::Resilience {
                    plan: TextField::default(),
                },
            },
            (Self::Sense { sense, mut notes }, input) => {
                edit(&mut notes, input);
                Self::Sense { sense, notes }
            }

            (Self::Resilience { .. }, In::Confirm) => Self::Done,
            (Self::Resilience { mut plan }, input) => {
                edit(&mut plan, input);
                Self::Resilience { plan }
            }

            (Self::Done, In::Confirm) => return (Self::Done, StepOutcome::Complete(LABEL.to_string())),

            (step, _) => step,
        };
        (next, StepOutcome::Pending)
    }

    fn needs_tick(&self) -> bool {
        matches!(self, Self::Visualize { countdown, .. } if countdown.is_running())
    }

    fn accepts_text(&self) -> bool {
        matches!(
            self,
            Self::Goal { .. } | Self::Sense { .. } | Self::Resilience { .. }
        )
    }

    fn view(&self) -> ExerciseView {
        let view = ExerciseView::new("Imaginación").progress(self.number(), STEP_COUNT);
        match self {
            Self::Goal { text } => view
                .block(Block::Heading("Piensa en algo que quieres lograr:".to_string()))
                .block(Block::Muted("Una presentación, una conversación, un proyecto...".to_string()))
                .block(Block::Input {
                    value: text.as_str().to_string(),
                    placeholder: "Escribe aquí...",
                })
                .block(Block::Button { label: "Siguiente", enabled: !text.is_blank() }),
            Self::Visualize { goal, countdown } if countdown.is_idle() => view
                .block(Block::Text(format!(
                    "Cierra los ojos e imagina que \"{goal}\" ya está sucediendo y sale perfecto."
                )))
                .block(Block::Button {
                    label: "Comenzar Visualización (30s)",
                    enabled: true,
                }),
            Self::Visualize { countdown, .. } => {
                let view = view
                    .block(Block::Countdown {
                        remaining: countdown.remaining(),
                        total: countdown.total(),
                    })
                    .block(Block::Muted("Visualiza los detalles...".to_string()));
                if countdown.is_finished() {
                    view.block(Block::Button { label: "Continuar", enabled: true })
                } else {
                    view
                }
            }
            Self::Sense { sense, notes } => view
                .block(Block::Heading(sense.question().to_string()))
                .block(Block::Muted(sense.hint().to_string()))
                .block(Block::Input {
                    value: notes.as_str().to_string(),
                    placeholder: "Detalla tu experiencia...",
                })
                .block(Block::Button { label: "Siguiente", enabled: true }),
            Self::Resilience { plan } => view
                .block(Block::Heading("Plan de Resiliencia".to_string()))
                .block(Block::Text(
                    "Imagina un pequeño contratiempo. ¿Cómo te recuperas con calma?".to_string(),
                ))
                .block(Block::Input {
                    value: plan.as_str().to_string(),
                    placeholder: "Yo respiro y...",
                })
                .block(Block::Button { label: "Terminar", enabled: true }),
            Self::Done => view
                .block(Block::Heading("¡Mapa Mental Creado!".to_string()))
                .block(Block::Text(
                    "Tu cerebro ahora tiene una referencia clara de cómo se ve, suena y se siente el éxito."
                        .to_string(),
                ))
                .block(Block::Button { label: "Finalizar", enabled: true }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visualize() -> ImaginationStep {
        ImaginationStep::Visualize {
            goal: "Mi presentación".to_string(),
            countdown: Countdown::new(VISUALIZATION_SECONDS),
        }
    }

    #[test]
    fn goal_is_required() {
        let (step, _) = ImaginationStep::default().transition(ExerciseInput::Confirm);
        assert_eq!(step.number(), 1);

        let (step, _) = step.transition(ExerciseInput::Char('x'));
        let (step, _) = step.transition(ExerciseInput::Confirm);
        assert_eq!(step.number(), 2);
    }

    #[test]
    fn visualization_is_idle_until_started() {
        let (step, _) = visualize().transition(ExerciseInput::Tick);
        assert_eq!(step, visualize());
        assert!(!step.needs_tick());

        let (step, _) = step.transition(ExerciseInput::Confirm);
        assert!(step.needs_tick());
    }

    #[test]
    fn continue_unlocks_only_at_zero() {
        let (mut step, _) = visualize().transition(ExerciseInput::Confirm);
        for _ in 0..29 {
            step = step.transition(ExerciseInput::Tick).0;
        }
        step = step.transition(ExerciseInput::Confirm).0;
        assert_eq!(step.number(), 2, "confirm before zero must not advance");

        step = step.transition(ExerciseInput::Tick).0;
        assert!(!step.needs_tick());
        assert_eq!(step.view().button(), Some(("Continuar", true)));

        step = step.transition(ExerciseInput::Confirm).0;
        assert_eq!(step.number(), 3);
    }

    #[test]
    fn senses_and_resilience_are_not_gated() {
        let mut step = ImaginationStep::Sense {
            sense: Sense::See,
            notes: TextField::default(),
        };
        for expected in [4, 5, 6, 7] {
            step = step.transition(ExerciseInput::Confirm).0;
            assert_eq!(step.number(), expected);
        }

        let (_, outcome) = step.transition(ExerciseInput::Confirm);
        assert_eq!(outcome, StepOutcome::Complete(LABEL.to_string()));
    }
}
