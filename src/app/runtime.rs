//! Executes the actions produced by event handling.
//!
//! [`Runtime`] owns the [`AppState`] together with everything that touches the
//! outside world: the session store, the clock, the id generator and the tick
//! scheduler. The plugin shim forwards library events to [`Runtime::dispatch`]
//! and performs the returned [`HostAction`]s with the Zellij API.
//!
//! Storage failures never surface to the user. They are logged and the
//! in-memory history stays authoritative for the rest of the plugin's life.

use super::celebration::Celebration;
use super::handler::{handle_event, Event};
use super::scheduler::TickScheduler;
use super::{Action, AppState};
use crate::domain::Session;
use crate::infrastructure::{Clock, IdGenerator};
use crate::storage::{KeyValueStore, SessionStore};

/// Host calls the shim performs after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Arm a one-shot timeout of [`super::scheduler::TICK_SECONDS`].
    ScheduleTick,
    /// Hide the plugin pane.
    Hide,
}

/// Application state plus its side-effecting collaborators.
#[derive(Debug)]
pub struct Runtime<K, C, I> {
    pub state: AppState,
    store: SessionStore<K>,
    clock: C,
    ids: I,
    scheduler: TickScheduler,
}

impl<K: KeyValueStore, C: Clock, I: IdGenerator> Runtime<K, C, I> {
    pub fn new(state: AppState, store: SessionStore<K>, clock: C, ids: I) -> Self {
        Self {
            state,
            store,
            clock,
            ids,
            scheduler: TickScheduler::default(),
        }
    }

    /// Reads the persisted history into the application state.
    pub fn load_history(&mut self) {
        let sessions = self.store.load();
        tracing::debug!(count = sessions.len(), "history loaded");
        self.state.sessions = sessions.to_vec();
    }

    /// Switches persistence to `backend` and reloads the history from it.
    ///
    /// Sessions recorded on the previous backend that the new slot does not
    /// hold yet are appended to it.
    pub fn attach_backend(&mut self, backend: K) {
        let _span = tracing::debug_span!("attach_backend").entered();

        let recorded = self.store.sessions().to_vec();
        self.store = SessionStore::new(backend);
        self.store.load();

        for session in recorded {
            if self.store.sessions().iter().any(|s| s.id == session.id) {
                continue;
            }
            if let Err(e) = self.store.append(session) {
                tracing::warn!(error = %e, "failed to carry session over to new backend");
            }
        }

        self.state.sessions = self.store.sessions().to_vec();
        tracing::debug!(count = self.state.sessions.len(), "backend attached");
    }

    /// Handles one event. Returns whether to re-render and the host calls to make.
    pub fn dispatch(&mut self, event: &Event) -> (bool, Vec<HostAction>) {
        if *event == Event::Tick {
            let current = self.scheduler.delivered();
            if !self.state.has_tick_consumer() {
                tracing::trace!("stale tick dropped");
                return (false, vec![]);
            }
            if !current {
                return self.defer_early_tick();
            }
        }

        let timer_was_running = self.state.exercise_needs_tick();
        let (should_render, actions) = match handle_event(&mut self.state, event) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                return (false, vec![]);
            }
        };

        tracing::debug!(action_count = actions.len(), should_render, "event handled");

        if !timer_was_running && self.state.exercise_needs_tick() {
            self.scheduler.restart();
        }

        let mut host = Vec::new();
        for action in actions {
            if let Some(call) = self.execute_action(action) {
                host.push(call);
            }
        }

        if self.state.has_tick_consumer() && self.scheduler.request() {
            host.push(HostAction::ScheduleTick);
        }

        (should_render, host)
    }

    /// Handles a timeout armed before the current exercise timer started.
    ///
    /// The confetti still advances; the exercise waits for a fresh timeout.
    fn defer_early_tick(&mut self) -> (bool, Vec<HostAction>) {
        tracing::trace!("early tick withheld from exercise timer");
        let render = self.state.tick_celebration();
        let host = if self.state.has_tick_consumer() && self.scheduler.request() {
            vec![HostAction::ScheduleTick]
        } else {
            vec![]
        };
        (render, host)
    }

    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        self.store.sessions()
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore<K> {
        &self.store
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub const fn tick_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    fn execute_action(&mut self, action: Action) -> Option<HostAction> {
        let _span = tracing::debug_span!("execute_action", action = ?action).entered();

        match action {
            Action::RecordSession(draft) => {
                let session = Session::from_draft(draft, self.ids.next_id(), self.clock.now());
                if let Err(e) = self.store.append(session) {
                    tracing::warn!(error = %e, "failed to persist session");
                }
                self.state.sessions = self.store.sessions().to_vec();
                None
            }
            Action::Celebrate(config) => {
                self.state.celebration = Some(Celebration::spawn(&config, &mut rand::thread_rng()));
                None
            }
            Action::CloseFocus => Some(HostAction::Hide),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controller::ControllerEvent;
    use crate::domain::{Lever, Mood};
    use crate::exercises::physiology::PhysiologyStep;
    use crate::exercises::Exercise;
    use crate::infrastructure::{FixedClock, SequentialIds};
    use crate::storage::MemoryKeyValueStore;
    use crate::ui::Theme;
    use chrono::{TimeZone, Utc};

    type TestRuntime = Runtime<MemoryKeyValueStore, FixedClock, SequentialIds>;

    fn runtime() -> TestRuntime {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap());
        Runtime::new(
            AppState::new(Theme::default()),
            SessionStore::new(MemoryKeyValueStore::default()),
            clock,
            SequentialIds::default(),
        )
    }

    fn send(runtime: &mut TestRuntime, events: &[Event]) -> Vec<HostAction> {
        events.iter().flat_map(|e| runtime.dispatch(e).1).collect()
    }

    #[test]
    fn finishing_stamps_and_stores_session() {
        let mut runtime = runtime();
        send(&mut runtime, &[Event::Char('2')]);
        runtime
            .state
            .apply(&ControllerEvent::ExerciseCompleted("Cambio de Enfoque".to_string()));
        send(&mut runtime, &[Event::Right, Event::Confirm]);

        let sessions = runtime.sessions();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, "session-1");
        assert_eq!(sessions[0].lever, Lever::Focus);
        assert_eq!(sessions[0].date, "2024-06-01T10:00:00.000Z");
        assert_eq!(sessions[0].mood_after, Mood::new(6).unwrap());
        assert_eq!(runtime.state.sessions.len(), 1);
    }

    #[test]
    fn celebration_requests_ticks_until_it_ends() {
        let mut runtime = runtime();
        send(&mut runtime, &[Event::Char('2')]);
        runtime
            .state
            .apply(&ControllerEvent::ExerciseCompleted("Cambio de Enfoque".to_string()));
        let host = send(&mut runtime, &[Event::Right, Event::Confirm]);

        assert!(runtime.state.celebration.is_some());
        assert_eq!(host, vec![HostAction::ScheduleTick]);

        for _ in 0..10 {
            send(&mut runtime, &[Event::Tick]);
        }
        assert!(runtime.state.celebration.is_none());
        assert!(!runtime.tick_pending());
    }

    #[test]
    fn only_one_timeout_outstanding() {
        let mut runtime = runtime();
        let host = send(&mut runtime, &[Event::Char('1'), Event::Confirm, Event::Down, Event::Up]);
        assert_eq!(host, vec![HostAction::ScheduleTick]);
        assert!(runtime.tick_pending());
    }

    #[test]
    fn stale_tick_is_dropped() {
        let mut runtime = runtime();
        send(&mut runtime, &[Event::Char('1'), Event::Confirm, Event::Back]);
        assert!(runtime.tick_pending());

        let (render, host) = runtime.dispatch(&Event::Tick);
        assert!(!render);
        assert!(host.is_empty());
        assert!(!runtime.tick_pending());
    }

    fn inhale_seconds_left(runtime: &TestRuntime) -> u32 {
        let Some(Exercise::Physiology(PhysiologyStep::Breathing(schedule))) = &runtime.state.exercise else {
            panic!("expected breathing");
        };
        schedule.remaining_in_phase()
    }

    #[test]
    fn timeout_armed_before_breathing_does_not_count_as_its_first_second() {
        let mut runtime = runtime();
        send(&mut runtime, &[Event::Char('1'), Event::Confirm, Event::Back]);
        assert!(runtime.tick_pending());

        let host = send(&mut runtime, &[Event::Char('1'), Event::Confirm]);
        assert!(host.is_empty());

        let (_, host) = runtime.dispatch(&Event::Tick);
        assert_eq!(host, vec![HostAction::ScheduleTick]);
        assert_eq!(inhale_seconds_left(&runtime), 4);

        runtime.dispatch(&Event::Tick);
        assert_eq!(inhale_seconds_left(&runtime), 3);
    }

    #[test]
    fn quit_hides_pane() {
        let mut runtime = runtime();
        assert_eq!(send(&mut runtime, &[Event::Quit]), vec![HostAction::Hide]);
    }
}
