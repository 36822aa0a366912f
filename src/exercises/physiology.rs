//! Physiology lever: short body-based drills.
//!
//! The user picks one of three drills from a menu. Breathing runs a 4-7-8 phase
//! table for four cycles; the posture and shake drills are one-minute
//! countdowns whose instruction changes with elapsed time. Timed drills move to
//! their completion screen on their own, and "Continuar" there completes the
//! exercise with the drill's name.

use super::timer::{Countdown, Phase, PhaseSchedule};
use super::view::{Block, ExerciseView, OptionItem};
use super::{ExerciseInput, StepMachine, StepOutcome};

/// Inhale, hold, exhale.
pub const BREATHING_PHASES: [Phase; 3] = [
    Phase { label: "INHALA (4s)", seconds: 4, expanded: true },
    Phase { label: "RETÉN (7s)", seconds: 7, expanded: true },
    Phase { label: "EXHALA (8s)", seconds: 8, expanded: false },
];

pub const BREATHING_CYCLES: u32 = 4;

/// Length of the posture and shake drills.
pub const TIMED_DRILL_SECONDS: u32 = 60;

const POSTURE_INSTRUCTIONS: [&str; 4] = [
    "Ponte de pie. Pies separados al ancho de hombros.",
    "Hombros hacia atrás. Pecho abierto.",
    "Manos en la cintura o brazos arriba en V.",
    "Barbilla ligeramente arriba. Respira profundo.",
];
const POSTURE_THRESHOLDS: [u32; 3] = [15, 30, 45];

const SHAKE_INSTRUCTIONS: [&str; 3] = [
    "Sacude tus manos y brazos. Suelta la tensión.",
    "Sacude las piernas. Rebota suavemente.",
    "Sacude todo el cuerpo. Deja salir cualquier sonido.",
];
const SHAKE_THRESHOLDS: [u32; 2] = [20, 40];

/// The three drills offered on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drill {
    Breathing,
    PowerPosture,
    Shake,
}

impl Drill {
    pub const ALL: [Self; 3] = [Self::Breathing, Self::PowerPosture, Self::Shake];

    /// Label recorded with the session.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Breathing => "Respiración 4-7-8",
            Self::PowerPosture => "Postura de Poder",
            Self::Shake => "Sacudir y Soltar",
        }
    }

    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::Breathing => "2 min • Activa tu sistema de calma",
            Self::PowerPosture => "1 min • Expansión física = mental",
            Self::Shake => "1 min • Libera la energía atrapada",
        }
    }

    const fn done_heading(self) -> &'static str {
        match self {
            Self::Breathing => "¡Completado!",
            Self::PowerPosture | Self::Shake => "¡Energía Cambiada!",
        }
    }
}

/// Instruction shown for a timed drill after `elapsed` seconds.
#[must_use]
pub fn instruction_for(drill: Drill, elapsed: u32) -> &'static str {
    let (instructions, thresholds): (&[&str], &[u32]) = match drill {
        Drill::PowerPosture => (&POSTURE_INSTRUCTIONS[..], &POSTURE_THRESHOLDS[..]),
        Drill::Shake => (&SHAKE_INSTRUCTIONS[..], &SHAKE_THRESHOLDS[..]),
        Drill::Breathing => return "",
    };
    let index = thresholds.iter().take_while(|t| elapsed >= **t).count();
    instructions[index.min(instructions.len() - 1)]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhysiologyStep {
    Menu { cursor: usize },
    Breathing(PhaseSchedule),
    Timed { drill: Drill, countdown: Countdown },
    Done(Drill),
}

impl Default for PhysiologyStep {
    fn default() -> Self {
        Self::Menu { cursor: 0 }
    }
}

impl PhysiologyStep {
    fn start(drill: Drill) -> Self {
        tracing::debug!(drill = drill.name(), "starting drill");
        match drill {
            Drill::Breathing => Self::Breathing(PhaseSchedule::new(&BREATHING_PHASES, BREATHING_CYCLES)),
            Drill::PowerPosture | Drill::Shake => Self::Timed {
                drill,
                countdown: Countdown::started(TIMED_DRILL_SECONDS),
            },
        }
    }
}

impl StepMachine for PhysiologyStep {
    fn transition(self, input: ExerciseInput) -> (Self, StepOutcome) {
        use ExerciseInput as In;

        let next = match (self, input) {
            (Self::Menu { cursor }, In::Prev) => Self::Menu {
                cursor: cursor.saturating_sub(1),
            },
            (Self::Menu { cursor }, In::Next) => Self::Menu {
                cursor: (cursor + 1).min(Drill::ALL.len() - 1),
            },
            (Self::Menu { cursor }, In::Confirm) => Self::start(Drill::ALL[cursor]),

            (Self::Breathing(mut schedule), In::Tick) => {
                schedule.tick();
                if schedule.is_finished() {
                    Self::Done(Drill::Breathing)
                } else {
                    Self::Breathing(schedule)
                }
            }

            (Self::Timed { drill, mut countdown }, In::Tick) => {
                if countdown.tick() {
                    Self::Done(drill)
                } else {
                    Self::Timed { drill, countdown }
                }
            }

            (Self::Done(drill), In::Confirm) => {
                return (Self::Done(drill), StepOutcome::Complete(drill.name().to_string()));
            }

            (step, _) => step,
        };
        (next, StepOutcome::Pending)
    }

    fn needs_tick(&self) -> bool {
        matches!(self, Self::Breathing(_) | Self::Timed { .. })
    }

    fn accepts_text(&self) -> bool {
        false
    }

    fn view(&self) -> ExerciseView {
        let view = ExerciseView::new("Fisiología");
        match self {
            Self::Menu { cursor } => view
                .block(Block::Muted(
                    "\"Tu cuerpo y tu mente son un sistema integrado. Cambiar tu fisiología cambia tu estado inmediatamente.\""
                        .to_string(),
                ))
                .block(Block::Spacer)
                .block(Block::Heading("Elige un ejercicio".to_string()))
                .block(Block::Options {
                    items: Drill::ALL
                        .iter()
                        .map(|d| OptionItem::with_detail(d.name(), d.blurb()))
                        .collect(),
                    selected: Some(*cursor),
                })
                .block(Block::Button { label: "Comenzar", enabled: true }),
            Self::Breathing(schedule) => {
                let phase = schedule.current().unwrap_or(BREATHING_PHASES[0]);
                let cycle = (schedule.cycle() + 1).min(schedule.cycles());
                view.block(Block::Heading(phase.label.to_string()))
                    .block(Block::Bubble { expanded: phase.expanded })
                    .block(Block::Countdown {
                        remaining: schedule.remaining_in_phase(),
                        total: phase.seconds,
                    })
                    .block(Block::Muted(format!("Ciclo {cycle} de {}", schedule.cycles())))
            }
            Self::Timed { drill, countdown } => view
                .block(Block::Heading(drill.name().to_string()))
                .block(Block::Countdown {
                    remaining: countdown.remaining(),
                    total: countdown.total(),
                })
                .block(Block::Spacer)
                .block(Block::Highlight(instruction_for(*drill, countdown.elapsed()).to_string())),
            Self::Done(drill) => view
                .block(Block::Heading(drill.done_heading().to_string()))
                .block(Block::Button { label: "Continuar", enabled: true }),
        }
    }
}
