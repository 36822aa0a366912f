//! Analytics over the recorded session history.
//!
//! Everything here is a pure projection of the session slice and is recomputed
//! on every render; nothing is cached or persisted.

pub mod stats;

pub use stats::{
    average_improvement, most_frequent_lever, recent_sessions, session_date, summarize, trend_series, HistorySummary,
    TrendPoint, TREND_WINDOW,
};
