//! Focus lever: notice where attention has been and point it somewhere useful.

use super::text::TextField;
use super::view::{Block, ExerciseView, OptionItem};
use super::{ExerciseInput, StepMachine, StepOutcome};

pub const LABEL: &str = "Cambio de Enfoque";

pub const SUGGESTIONS: [&str; 5] = [
    "Oportunidades que tengo",
    "Lo que sí puedo controlar",
    "Mis fortalezas",
    "Soluciones posibles",
    "Momentos de calma",
];

/// Answer to "does this focus help or limit you?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Limits,
    Helps,
}

impl Verdict {
    const fn label(self) -> &'static str {
        match self {
            Self::Limits => "Me limita",
            Self::Helps => "Me ayuda",
        }
    }

    const fn toggled(self) -> Self {
        match self {
            Self::Limits => Self::Helps,
            Self::Helps => Self::Limits,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusStep {
    CurrentFocus { text: TextField },
    Evaluate { current: String, verdict: Verdict },
    /// Pick a suggestion (copied into the field) or type a custom focus.
    Reframe {
        suggestion: Option<usize>,
        custom: TextField,
    },
    Affirm { focus: String },
}

impl Default for FocusStep {
    fn default() -> Self {
        Self::CurrentFocus {
            text: TextField::default(),
        }
    }
}

/// The closing affirmation for a chosen focus.
#[must_use]
pub fn affirmation(focus: &str) -> String {
    format!("Hoy elijo enfocarme en {}", focus.to_lowercase())
}

impl StepMachine for FocusStep {
    fn transition(self, input: ExerciseInput) -> (Self, StepOutcome) {
        use ExerciseInput as In;

        let next = match (self, input) {
            (Self::CurrentFocus { mut text }, In::Char(c)) => {
                text.push(c);
                Self::CurrentFocus { text }
            }
            (Self::CurrentFocus { mut text }, In::Backspace) => {
                text.pop();
                Self::CurrentFocus { text }
            }
            (Self::CurrentFocus { text }, In::Confirm) if !text.is_blank() => Self::Evaluate {
                current: text.into_string(),
                verdict: Verdict::Limits,
            },

            (Self::Evaluate { current, verdict }, In::Prev | In::Next) => Self::Evaluate {
                current,
                verdict: verdict.toggled(),
            },
            (Self::Evaluate { verdict: Verdict::Limits, .. }, In::Confirm) => Self::Reframe {
                suggestion: None,
                custom: TextField::default(),
            },
            (Self::Evaluate { current, verdict: Verdict::Helps }, In::Confirm) => {
                Self::Affirm { focus: current }
            }

            (Self::Reframe { suggestion, mut custom }, In::Prev | In::Next) => {
                let index = match (suggestion, input) {
                    (None, In::Prev) => SUGGESTIONS.len() - 1,
                    (None, _) => 0,
                    (Some(i), In::Prev) => i.checked_sub(1).unwrap_or(SUGGESTIONS.len() - 1),
                    (Some(i), _) => (i + 1) % SUGGESTIONS.len(),
                };
                custom.set(SUGGESTIONS[index]);
                Self::Reframe {
                    suggestion: Some(index),
                    custom,
                }
            }
            (Self::Reframe { mut custom, .. }, In::Char(c)) => {
                custom.push(c);
                Self::Reframe {
                    suggestion: None,
                    custom,
                }
            }
            (Self::Reframe { mut custom, .. }, In::Backspace) => {
                custom.pop();
                Self::Reframe {
                    suggestion: None,
                    custom,
                }
            }
            (Self::Reframe { custom, .. }, In::Confirm) if !custom.is_blank() => Self::Affirm {
                focus: custom.into_string(),
            },

            (Self::Affirm { focus }, In::Confirm) => {
                return (Self::Affirm { focus }, StepOutcome::Complete(LABEL.to_string()));
            }

            (step, _) => step,
        };
        (next, StepOutcome::Pending)
    }

    fn needs_tick(&self) -> bool {
        false
    }

    fn accepts_text(&self) -> bool {
        matches!(self, Self::CurrentFocus { .. } | Self::Reframe { .. })
    }

    fn view(&self) -> ExerciseView {
        let view = ExerciseView::new("Palanca de Enfoque");
        match self {
            Self::CurrentFocus { text } => view
                .block(Block::Heading("¿En qué has estado enfocándote últimamente?".to_string()))
                .block(Block::Muted("Tu mente encuentra lo que busca. Sé honesto contigo mismo.".to_string()))
                .block(Block::Input {
                    value: text.as_str().to_string(),
                    placeholder: "Escribe aquí...",
                })
                .block(Block::Button { label: "Siguiente", enabled: !text.is_blank() }),
            Self::Evaluate { current, verdict } => view
                .block(Block::Muted("Lo que escribiste:".to_string()))
                .block(Block::Quote(current.clone()))
                .block(Block::Heading("¿Este enfoque te ayuda o te limita?".to_string()))
                .block(Block::Options {
                    items: vec![
                        OptionItem::new(Verdict::Limits.label()),
                        OptionItem::new(Verdict::Helps.label()),
                    ],
                    selected: Some(match verdict {
                        Verdict::Limits => 0,
                        Verdict::Helps => 1,
                    }),
                })
                .block(Block::Button { label: "Elegir", enabled: true }),
            Self::Reframe { suggestion, custom } => view
                .block(Block::Heading("¿Hacia dónde QUIERES dirigir tu atención?".to_string()))
                .block(Block::Muted("Elige una dirección constructiva.".to_string()))
                .block(Block::Options {
                    items: SUGGESTIONS.iter().map(|s| OptionItem::new(*s)).collect(),
                    selected: *suggestion,
                })
                .block(Block::Text("O escribe el tuyo:".to_string()))
                .block(Block::Input {
                    value: custom.as_str().to_string(),
                    placeholder: "Mi nuevo enfoque...",
                })
                .block(Block::Button { label: "Confirmar", enabled: !custom.is_blank() }),
            Self::Affirm { focus } => view
                .block(Block::Muted("TU NUEVO ENFOQUE".to_string()))
                .block(Block::Highlight(format!("\"{}\"", affirmation(focus))))
                .block(Block::Muted(
                    "Repite esto para ti mismo/a y observa cómo cambia tu percepción.".to_string(),
                ))
                .block(Block::Button { label: "Finalizar", enabled: true }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(mut step: FocusStep, inputs: impl IntoIterator<Item = ExerciseInput>) -> (FocusStep, StepOutcome) {
        let mut last = StepOutcome::Pending;
        for input in inputs {
            let (next, outcome) = step.transition(input);
            step = next;
            last = outcome;
        }
        (step, last)
    }

    fn typed(text: &str) -> Vec<ExerciseInput> {
        text.chars().map(ExerciseInput::Char).collect()
    }

    #[test]
    fn blank_focus_does_not_advance() {
        let (step, _) = feed(FocusStep::default(), [ExerciseInput::Char(' '), ExerciseInput::Confirm]);
        assert!(matches!(step, FocusStep::CurrentFocus { .. }));
    }

    #[test]
    fn helpful_focus_is_reinforced() {
        let mut inputs = typed("Mi Familia");
        inputs.extend([ExerciseInput::Confirm, ExerciseInput::Next, ExerciseInput::Confirm]);
        let (step, _) = feed(FocusStep::default(), inputs);

        assert_eq!(step, FocusStep::Affirm { focus: "Mi Familia".to_string() });
        assert_eq!(affirmation("Mi Familia"), "Hoy elijo enfocarme en mi familia");
    }

    #[test]
    fn limiting_focus_goes_through_reframe() {
        let mut inputs = typed("errores");
        inputs.extend([ExerciseInput::Confirm, ExerciseInput::Confirm]);
        let (step, _) = feed(FocusStep::default(), inputs);
        assert!(matches!(step, FocusStep::Reframe { suggestion: None, .. }));

        let (step, _) = feed(step, [ExerciseInput::Confirm]);
        assert!(matches!(step, FocusStep::Reframe { .. }), "empty reframe must not advance");

        let (step, _) = feed(step, [ExerciseInput::Next, ExerciseInput::Next, ExerciseInput::Confirm]);
        assert_eq!(step, FocusStep::Affirm { focus: SUGGESTIONS[1].to_string() });

        let (_, outcome) = feed(step, [ExerciseInput::Confirm]);
        assert_eq!(outcome, StepOutcome::Complete(LABEL.to_string()));
    }

    #[test]
    fn typing_after_suggestion_edits_it() {
        let step = FocusStep::Reframe {
            suggestion: None,
            custom: TextField::default(),
        };
        let mut inputs = vec![ExerciseInput::Prev];
        inputs.extend(typed(" y paz"));
        let (step, _) = feed(step, inputs);

        let FocusStep::Reframe { suggestion, custom } = step else {
            panic!("expected reframe step");
        };
        assert_eq!(suggestion, None);
        assert_eq!(custom.as_str(), "Momentos de calma y paz");
    }
}
