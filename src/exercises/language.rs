//! Language lever: swap a limiting phrase for an empowering one.

use super::text::TextField;
use super::view::{Block, ExerciseView};
use super::{ExerciseInput, StepMachine, StepOutcome};

pub const LABEL: &str = "Transformación de Lenguaje";

/// Example re-labelings shown on the intro step.
pub const EXAMPLES: [(&str, &str); 4] = [
    ("Estoy ansioso", "Estoy activado"),
    ("Tengo un problema", "Tengo un desafío"),
    ("No puedo", "Todavía no sé cómo"),
    ("Tengo que...", "Elijo..."),
];

/// Keyword rules checked in order; the first keyword found wins.
const REFRAMINGS: [(&str, &str); 5] = [
    ("no puedo", "Todavía estoy aprendiendo a..."),
    ("siempre", "A veces sucede que..."),
    ("odio", "Prefiero otra cosa..."),
    ("nunca", "Hasta ahora..."),
    ("problema", "Es un reto que puedo manejar..."),
];

/// Suggests an opening for the empowering version of `phrase`.
///
/// # Examples
///
/// ```
/// use palancas::exercises::language::suggest_reframing;
///
/// assert_eq!(suggest_reframing("Siempre llego tarde"), Some("A veces sucede que..."));
/// assert_eq!(suggest_reframing("Estoy cansado"), None);
/// ```
#[must_use]
pub fn suggest_reframing(phrase: &str) -> Option<&'static str> {
    let lower = phrase.to_lowercase();
    REFRAMINGS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, suggestion)| *suggestion)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageStep {
    Intro,
    LimitingPhrase { text: TextField },
    EmpoweringPhrase { limiting: String, text: TextField },
    Compare { limiting: String, empowering: String },
}

impl Default for LanguageStep {
    fn default() -> Self {
        Self::Intro
    }
}

impl StepMachine for LanguageStep {
    fn transition(self, input: ExerciseInput) -> (Self, StepOutcome) {
        use ExerciseInput as In;

        let next = match (self, input) {
            (Self::Intro, In::Confirm) => Self::LimitingPhrase {
                text: TextField::default(),
            },

            (Self::LimitingPhrase { mut text }, In::Char(c)) => {
                text.push(c);
                Self::LimitingPhrase { text }
            }
            (Self::LimitingPhrase { mut text }, In::Backspace) => {
                text.pop();
                Self::LimitingPhrase { text }
            }
            (Self::LimitingPhrase { text }, In::Confirm) if !text.is_blank() => {
                let suggestion = suggest_reframing(text.as_str());
                tracing::debug!(suggested = suggestion.is_some(), "limiting phrase submitted");
                Self::EmpoweringPhrase {
                    limiting: text.into_string(),
                    text: TextField::with_value(suggestion.unwrap_or_default()),
                }
            }

            (Self::EmpoweringPhrase { limiting, mut text }, In::Char(c)) => {
                text.push(c);
                Self::EmpoweringPhrase { limiting, text }
            }
            (Self::EmpoweringPhrase { limiting, mut text }, In::Backspace) => {
                text.pop();
                Self::EmpoweringPhrase { limiting, text }
            }
            (Self::EmpoweringPhrase { limiting, text }, In::Confirm) if !text.is_blank() => Self::Compare {
                limiting,
                empowering: text.into_string(),
            },

            (Self::Compare { limiting, empowering }, In::Confirm) => {
                return (
                    Self::Compare { limiting, empowering },
                    StepOutcome::Complete(LABEL.to_string()),
                );
            }

            (step, _) => step,
        };
        (next, StepOutcome::Pending)
    }

    fn needs_tick(&self) -> bool {
        false
    }

    fn accepts_text(&self) -> bool {
        matches!(self, Self::LimitingPhrase { .. } | Self::EmpoweringPhrase { .. })
    }

    fn view(&self) -> ExerciseView {
        let view = ExerciseView::new("Palanca de Lenguaje");
        match self {
            Self::Intro => {
                let view = view
                    .block(Block::Text(
                        "\"Las palabras crean bioquímica. Cambiar tus palabras cambia tu experiencia.\"".to_string(),
                    ))
                    .block(Block::Spacer)
                    .block(Block::Heading("Re-etiquetados Poderosos".to_string()));
                EXAMPLES
                    .iter()
                    .fold(view, |view, (from, to)| {
                        view.block(Block::Rewrite {
                            from: (*from).to_string(),
                            to: (*to).to_string(),
                        })
                    })
                    .block(Block::Button { label: "Probar ahora", enabled: true })
            }
            Self::LimitingPhrase { text } => view
                .block(Block::Heading("Escribe una frase limitante que uses:".to_string()))
                .block(Block::Input {
                    value: text.as_str().to_string(),
                    placeholder: "Ej: Nunca voy a poder...",
                })
                .block(Block::Button { label: "Siguiente", enabled: !text.is_blank() }),
            Self::EmpoweringPhrase { limiting, text } => view
                .block(Block::Muted("Dijiste:".to_string()))
                .block(Block::Struck(format!("\"{limiting}\"")))
                .block(Block::Spacer)
                .block(Block::Heading("Ahora, re-etiquétala de manera útil:".to_string()))
                .block(Block::Input {
                    value: text.as_str().to_string(),
                    placeholder: "Escribe la versión potenciadora...",
                })
                .block(Block::Button { label: "Transformar", enabled: !text.is_blank() }),
            Self::Compare { limiting, empowering } => view
                .block(Block::Muted("ANTES (LIMITANTE)".to_string()))
                .block(Block::Struck(limiting.clone()))
                .block(Block::Spacer)
                .block(Block::Muted("AHORA (POTENCIADOR)".to_string()))
                .block(Block::Highlight(empowering.clone()))
                .block(Block::Spacer)
                .block(Block::Text(
                    "Repite la nueva versión en voz alta 3 veces para integrarla.".to_string(),
                ))
                .block(Block::Button { label: "Hecho", enabled: true }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(mut step: LanguageStep, inputs: impl IntoIterator<Item = ExerciseInput>) -> (LanguageStep, StepOutcome) {
        let mut last = StepOutcome::Pending;
        for input in inputs {
            let (next, outcome) = step.transition(input);
            step = next;
            last = outcome;
        }
        (step, last)
    }

    fn typed(text: &str) -> impl Iterator<Item = ExerciseInput> + '_ {
        text.chars().map(ExerciseInput::Char)
    }

    #[test]
    fn first_matching_keyword_wins() {
        assert_eq!(
            suggest_reframing("No puedo, siempre me pasa"),
            Some("Todavía estoy aprendiendo a...")
        );
        assert_eq!(suggest_reframing("ODIO los lunes"), Some("Prefiero otra cosa..."));
        assert_eq!(suggest_reframing("un PROBLEMA"), Some("Es un reto que puedo manejar..."));
    }

    #[test]
    fn empowering_step_is_prefilled_from_suggestion() {
        let (step, _) = feed(LanguageStep::default(), [ExerciseInput::Confirm]);
        let (step, _) = feed(step, typed("Nunca termino nada").chain([ExerciseInput::Confirm]));

        let LanguageStep::EmpoweringPhrase { limiting, text } = &step else {
            panic!("expected empowering step, got {step:?}");
        };
        assert_eq!(limiting, "Nunca termino nada");
        assert_eq!(text.as_str(), "Hasta ahora...");
    }

    #[test]
    fn no_suggestion_leaves_field_empty_and_gated() {
        let (step, _) = feed(
            LanguageStep::LimitingPhrase { text: TextField::default() },
            typed("Estoy cansado").chain([ExerciseInput::Confirm, ExerciseInput::Confirm]),
        );
        assert!(matches!(step, LanguageStep::EmpoweringPhrase { .. }));
    }

    #[test]
    fn full_run_completes_with_label() {
        let inputs = [ExerciseInput::Confirm]
            .into_iter()
            .chain(typed("Tengo un problema"))
            .chain([ExerciseInput::Confirm])
            .chain(typed(" hoy"))
            .chain([ExerciseInput::Confirm, ExerciseInput::Confirm]);
        let (step, outcome) = feed(LanguageStep::default(), inputs);

        assert_eq!(outcome, StepOutcome::Complete(LABEL.to_string()));
        assert_eq!(
            step,
            LanguageStep::Compare {
                limiting: "Tengo un problema".to_string(),
                empowering: "Es un reto que puedo manejar... hoy".to_string(),
            }
        );
    }
}
