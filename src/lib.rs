//! Palancas: a Zellij plugin for shifting your state with four levers.
//!
//! The plugin walks the user through a short loop:
//! - Rate how they feel right now (1–10)
//! - Pick one of four levers (physiology, focus, language, imagination)
//! - Run a guided exercise for that lever
//! - Rate how they feel afterwards, and celebrate if it improved
//!
//! Every completed loop is recorded, and a history screen shows the average
//! improvement, the most used lever, a trend chart and the full session list.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Key handling per view                            │
//! │  - Session controller (pure reducer)                │
//! │  - Runtime: actions, tick scheduling                │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Exercises     │
//! │ (ui/)         │   │ (storage/)    │   │ (exercises/)  │
//! │ - Rendering   │   │ - Key-value   │   │ - Step        │
//! │ - Theming     │   │ - Sessions    │   │   machines    │
//! │ - Chart       │   │   as JSON     │   │ - Timers      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, History & Infrastructure                   │
//! │  - Levers, moods, sessions, errors (domain/)        │
//! │  - Statistics (history/)                            │
//! │  - Clock, ids, sandbox paths (infrastructure/)      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/palancas.wasm" {
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use palancas::app::{AppState, Event, Runtime};
//! use palancas::infrastructure::{SequentialIds, SystemClock};
//! use palancas::storage::{MemoryKeyValueStore, SessionStore};
//! use palancas::Theme;
//!
//! let mut runtime = Runtime::new(
//!     AppState::new(Theme::default()),
//!     SessionStore::new(MemoryKeyValueStore::default()),
//!     SystemClock,
//!     SequentialIds::default(),
//! );
//! runtime.load_history();
//!
//! let (should_render, _host_actions) = runtime.dispatch(&Event::Char('3'));
//! assert!(should_render);
//! ```

pub mod app;
pub mod domain;
pub mod exercises;
pub mod history;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, HostAction, Runtime, View};
pub use domain::{Lever, Mood, PalancasError, Result, Session};
pub use ui::Theme;

use infrastructure::{expand_tilde, get_data_dir, SystemClock, UuidGenerator};
use std::collections::BTreeMap;
use std::path::PathBuf;
use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, SessionStore};

/// The runtime the plugin shim drives.
pub type PluginRuntime = Runtime<Box<dyn KeyValueStore>, SystemClock, UuidGenerator>;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/palancas.wasm" {
///     theme "catppuccin-mocha"
///     theme_file "~/.config/palancas/theme.toml"
///     trace_level "debug"
///     data_dir "~/.local/share/palancas"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Built-in theme name: `catppuccin-mocha` (default) or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter. Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory for the session store and the trace file.
    pub data_dir: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset. A leading `~` in paths points at the
    /// `/host` mount.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use palancas::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("data_dir".to_string(), "~/palancas".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.data_dir().to_str(), Some("/host/palancas"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: get("theme"),
            theme_file: get("theme_file").map(|p| expand_tilde(&p)),
            trace_level: get("trace_level"),
            data_dir: get("data_dir").map(|p| expand_tilde(&p)),
        }
    }

    /// Configured data directory, or `~/.local/share/zellij/palancas`.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.as_ref().map_or_else(get_data_dir, PathBuf::from)
    }

    /// Resolves the theme: file first, then built-in name, then the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            match Theme::from_file(theme_file) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                }
            }
        }
        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the plugin runtime on an in-memory store.
///
/// The host mounts `/host` only after `FullHdAccess` is granted, so the file
/// store is opened later with [`open_backend`] and handed to
/// [`Runtime::attach_backend`].
pub fn initialize(config: &Config) -> PluginRuntime {
    tracing::debug!("initializing palancas plugin");

    Runtime::new(
        AppState::new(config.theme()),
        SessionStore::new(Box::new(MemoryKeyValueStore::default())),
        SystemClock,
        UuidGenerator,
    )
}

/// Opens the session backend under [`Config::data_dir`].
///
/// If that directory cannot be created the plugin keeps running on an
/// in-memory store and history is lost on unload.
pub fn open_backend(config: &Config) -> Box<dyn KeyValueStore> {
    match FileKeyValueStore::new(config.data_dir()) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "data directory unavailable, history will not persist");
            Box::new(MemoryKeyValueStore::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert!(config.theme_name.is_none());
        assert_eq!(config.data_dir(), get_data_dir());
        assert_eq!(config.theme().name, "catppuccin-mocha");
    }

    #[test]
    fn blank_values_are_unset() {
        let mut map = BTreeMap::new();
        map.insert("trace_level".to_string(), "  ".to_string());
        assert!(Config::from_zellij(&map).trace_level.is_none());
    }

    #[test]
    fn unknown_theme_falls_back() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(config.theme().name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_does_not_touch_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("palancas");
        let config = Config {
            data_dir: Some(data_dir.to_string_lossy().into_owned()),
            ..Config::default()
        };

        let runtime = initialize(&config);
        assert!(runtime.sessions().is_empty());
        assert!(!data_dir.exists());
    }

    #[test]
    fn attached_file_backend_keeps_earlier_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Config::default()
        };

        let mut runtime = initialize(&config);
        runtime.dispatch(&Event::Char('1'));
        runtime.dispatch(&Event::Down);
        runtime.dispatch(&Event::Confirm);
        for _ in 0..60 {
            runtime.dispatch(&Event::Tick);
        }
        runtime.dispatch(&Event::Confirm);
        runtime.dispatch(&Event::Confirm);
        assert_eq!(runtime.sessions().len(), 1);

        runtime.attach_backend(open_backend(&config));
        assert_eq!(runtime.state.sessions.len(), 1);

        let stored = runtime.store().backend().get(storage::SESSIONS_KEY).unwrap().unwrap();
        assert!(stored.contains("\"lever\":\"physiology\""));
    }
}
