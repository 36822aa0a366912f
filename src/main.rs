//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Palancas library and the Zellij plugin
//! system. It maps host events to library events, forwards them to the
//! runtime and performs the host calls the runtime asks for.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build the runtime
//! 2. **Subscribe**: Register for `Key`, `Timer` and `PermissionRequestResult`
//! 3. **Permission granted**: Open the on-disk store and load the recorded history
//! 4. **Update**: Map events, dispatch, arm timeouts, hide on quit
//! 5. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Timer` → `Event::Tick`
//! - `Key(Enter)` → `Event::Confirm`, `Key(Esc)` → `Event::Back`
//! - `Key(Tab)` → `Event::Secondary`
//! - Arrow keys → `Event::Up/Down/Left/Right`
//!
//! # Keybindings
//!
//! While a text field has focus every printable key is typed into it. Otherwise:
//! - `j`/`k`: Move down/up
//! - `h`: Open or close history
//! - `q`: Hide the plugin
//! - `1`–`4`: Pick a lever on the home screen

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use palancas::{Config, Event, HostAction, PluginRuntime};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    config: Config,
    runtime: PluginRuntime,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            runtime: palancas::initialize(&config),
            config,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `FullHdAccess` to read and write the session history under
    /// `/host`.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        palancas::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.runtime = palancas::initialize(&config);
        self.config = config;

        request_permission(&[PermissionType::FullHdAccess]);
        subscribe(&[EventType::Key, EventType::Timer, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_) => Event::Tick,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                return self.handle_permission_result(status);
            }
            _ => return false,
        };

        let (should_render, host_actions) = self.runtime.dispatch(&our_event);
        for action in host_actions {
            Self::execute_host_action(action);
        }
        should_render
    }

    fn render(&mut self, rows: usize, cols: usize) {
        palancas::ui::render(&self.runtime.state, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// Letters that double as commands are passed through as characters while
    /// a text field has focus.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let typing = self.runtime.state.accepts_text();
        tracing::trace!(bare_key = ?key.bare_key, typing, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) || key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        Some(match key.bare_key {
            BareKey::Up => Event::Up,
            BareKey::Down => Event::Down,
            BareKey::Left => Event::Left,
            BareKey::Right => Event::Right,
            BareKey::Enter => Event::Confirm,
            BareKey::Esc => Event::Back,
            BareKey::Tab => Event::Secondary,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if typing => Event::Char(c),
            BareKey::Char('k') => Event::Up,
            BareKey::Char('j') => Event::Down,
            BareKey::Char('h') => Event::OpenHistory,
            BareKey::Char('q') => Event::Quit,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn handle_permission_result(&mut self, status: PermissionStatus) -> bool {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - opening session store");
                self.runtime.attach_backend(palancas::open_backend(&self.config));
                true
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - sessions stay in memory");
                false
            }
        }
    }

    fn execute_host_action(action: HostAction) {
        tracing::trace!(action = ?action, "host action");
        match action {
            HostAction::ScheduleTick => set_timeout(palancas::app::TICK_SECONDS),
            HostAction::Hide => hide_self(),
        }
    }
}
