//! Tick-driven timing primitives for timed exercise phases.
//!
//! Both types are advanced by the shared one-second tick and never look at the
//! wall clock. A consumer that is dropped simply stops receiving ticks.

/// A one-shot countdown in whole seconds.
///
/// A countdown is created idle; [`Countdown::start`] arms it and each
/// [`Countdown::tick`] removes one second until it reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    running: bool,
}

impl Countdown {
    #[must_use]
    pub const fn new(total: u32) -> Self {
        Self {
            total,
            remaining: total,
            running: false,
        }
    }

    /// Creates a countdown that is already running.
    #[must_use]
    pub const fn started(total: u32) -> Self {
        Self {
            total,
            remaining: total,
            running: total > 0,
        }
    }

    pub fn start(&mut self) {
        if self.remaining > 0 {
            self.running = true;
        }
    }

    /// Removes one second. Returns `true` on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return true;
        }
        false
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Not yet started.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        !self.running && self.remaining == self.total && self.total > 0
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub const fn elapsed(&self) -> u32 {
        self.total - self.remaining
    }
}

/// One entry of a phase table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub label: &'static str,
    pub seconds: u32,
    /// Whether the breathing bubble is drawn expanded during this phase.
    pub expanded: bool,
}

/// Result of advancing a [`PhaseSchedule`] by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleTick {
    /// Still inside the same phase.
    Holding,
    /// Moved on to the next phase (possibly of the next cycle).
    PhaseChanged,
    /// The last phase of the last cycle just ended.
    Finished,
    /// The schedule had already finished; the tick was ignored.
    Idle,
}

/// A phase table repeated a fixed number of cycles.
///
/// The cycle count is an explicit counter: the schedule finishes exactly when
/// `cycles` full passes over the table have elapsed.
///
/// # Examples
///
/// ```
/// use palancas::exercises::timer::{Phase, PhaseSchedule, ScheduleTick};
///
/// const TABLE: [Phase; 2] = [
///     Phase { label: "in", seconds: 1, expanded: true },
///     Phase { label: "out", seconds: 2, expanded: false },
/// ];
/// let mut schedule = PhaseSchedule::new(&TABLE, 2);
/// assert_eq!(schedule.total_ticks(), 6);
///
/// let ticks: Vec<ScheduleTick> = (0..6).map(|_| schedule.tick()).collect();
/// assert_eq!(ticks.last(), Some(&ScheduleTick::Finished));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSchedule {
    phases: &'static [Phase],
    cycles: u32,
    cycle: u32,
    index: usize,
    remaining: u32,
}

impl PhaseSchedule {
    #[must_use]
    pub fn new(phases: &'static [Phase], cycles: u32) -> Self {
        Self {
            phases,
            cycles,
            cycle: 0,
            index: 0,
            remaining: phases.first().map_or(0, |p| p.seconds),
        }
    }

    /// Advances by one second.
    pub fn tick(&mut self) -> ScheduleTick {
        if self.is_finished() {
            return ScheduleTick::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return ScheduleTick::Holding;
        }

        self.index += 1;
        if self.index == self.phases.len() {
            self.index = 0;
            self.cycle += 1;
            if self.cycle >= self.cycles {
                return ScheduleTick::Finished;
            }
        }
        self.remaining = self.phases[self.index].seconds;
        ScheduleTick::PhaseChanged
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phases.is_empty() || self.cycle >= self.cycles
    }

    /// The phase currently running, `None` once finished.
    #[must_use]
    pub fn current(&self) -> Option<Phase> {
        if self.is_finished() {
            None
        } else {
            self.phases.get(self.index).copied()
        }
    }

    /// Zero-based index of the running cycle.
    #[must_use]
    pub const fn cycle(&self) -> u32 {
        self.cycle
    }

    #[must_use]
    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Seconds left in the current phase.
    #[must_use]
    pub const fn remaining_in_phase(&self) -> u32 {
        self.remaining
    }

    /// Ticks needed to run the full schedule from the start.
    #[must_use]
    pub fn total_ticks(&self) -> u32 {
        self.phases.iter().map(|p| p.seconds).sum::<u32>() * self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [Phase; 3] = [
        Phase { label: "a", seconds: 4, expanded: true },
        Phase { label: "b", seconds: 7, expanded: true },
        Phase { label: "c", seconds: 8, expanded: false },
    ];

    #[test]
    fn countdown_fires_once_at_zero() {
        let mut countdown = Countdown::started(3);
        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert!(countdown.tick());
        assert!(!countdown.tick());
        assert!(countdown.is_finished());
        assert_eq!(countdown.elapsed(), 3);
    }

    #[test]
    fn idle_countdown_ignores_ticks() {
        let mut countdown = Countdown::new(30);
        assert!(countdown.is_idle());
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 30);

        countdown.start();
        countdown.tick();
        assert_eq!(countdown.remaining(), 29);
        assert!(!countdown.is_idle());
    }

    #[test]
    fn schedule_walks_phases_in_order() {
        let mut schedule = PhaseSchedule::new(&TABLE, 1);
        let mut labels = vec![schedule.current().unwrap().label];

        while !schedule.is_finished() {
            if schedule.tick() == ScheduleTick::PhaseChanged {
                labels.push(schedule.current().unwrap().label);
            }
        }
        assert_eq!(labels, ["a", "b", "c"]);
    }

    #[test]
    fn schedule_finishes_after_exact_cycle_count() {
        let mut schedule = PhaseSchedule::new(&TABLE, 4);
        assert_eq!(schedule.total_ticks(), 76);

        for _ in 0..75 {
            assert_ne!(schedule.tick(), ScheduleTick::Finished);
        }
        assert_eq!(schedule.cycle(), 3);
        assert_eq!(schedule.tick(), ScheduleTick::Finished);
        assert_eq!(schedule.tick(), ScheduleTick::Idle);
        assert!(schedule.current().is_none());
    }

    #[test]
    fn empty_table_is_finished() {
        let schedule = PhaseSchedule::new(&[], 4);
        assert!(schedule.is_finished());
    }
}
