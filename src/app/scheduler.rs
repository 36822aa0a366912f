//! The single one-second tick source.
//!
//! The host timer cannot be cancelled, so instead of tracking timers per
//! consumer the scheduler keeps at most one timeout outstanding. Whoever
//! receives a tick checks whether a live consumer still exists; if not, the
//! tick is dropped and no new timeout is requested.
//!
//! Each timeout remembers the generation it was armed in. Starting an exercise
//! timer opens a new generation, so a timeout armed earlier is recognized on
//! delivery and does not count as that timer's first second.

/// Interval between ticks in seconds.
pub const TICK_SECONDS: f64 = 1.0;

/// Tracks the outstanding host timeout and the generation it belongs to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickScheduler {
    /// Generation the outstanding timeout was armed in.
    pending: Option<u64>,
    generation: u64,
}

impl TickScheduler {
    /// Asks for a tick. Returns `true` if the caller must arm a host timeout,
    /// `false` if one is already outstanding.
    pub fn request(&mut self) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(self.generation);
        true
    }

    /// Opens a new generation for a timer that just started.
    pub fn restart(&mut self) {
        self.generation += 1;
    }

    /// Records that the outstanding timeout fired.
    ///
    /// Returns `true` if it was armed in the current generation.
    pub fn delivered(&mut self) -> bool {
        self.pending.take() == Some(self.generation)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
