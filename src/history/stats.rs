//! Aggregate statistics and chart series for the history screen.

use crate::domain::{Lever, Mood, Session};
use chrono::DateTime;

/// Number of sessions plotted in the trend chart.
pub const TREND_WINDOW: usize = 10;

/// One point of the trend chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    /// Day and month of the session, `dd/mm`.
    pub label: String,
    pub mood: Mood,
}

/// All derived values the history screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySummary<'a> {
    pub total: usize,
    pub average_improvement: f64,
    pub favorite: Option<Lever>,
    /// `None` when there are fewer than two sessions to plot.
    pub trend: Option<Vec<TrendPoint>>,
    /// Newest first.
    pub recent: Vec<&'a Session>,
}

/// Computes every history statistic in one pass over `sessions`.
#[must_use]
pub fn summarize(sessions: &[Session]) -> HistorySummary<'_> {
    let _span = tracing::trace_span!("summarize_history", count = sessions.len()).entered();

    HistorySummary {
        total: sessions.len(),
        average_improvement: average_improvement(sessions),
        favorite: most_frequent_lever(sessions),
        trend: trend_series(sessions),
        recent: recent_sessions(sessions),
    }
}

/// Mean of `moodAfter - moodBefore`, rounded to one decimal. `0.0` when empty.
///
/// # Examples
///
/// ```
/// use palancas::history::average_improvement;
///
/// assert_eq!(average_improvement(&[]), 0.0);
/// ```
#[must_use]
pub fn average_improvement(sessions: &[Session]) -> f64 {
    if sessions.is_empty() {
        return 0.0;
    }
    let total: i64 = sessions.iter().map(|s| i64::from(s.delta())).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = total as f64 / sessions.len() as f64;
    let rounded = (mean * 10.0).round() / 10.0;
    // Avoid showing "-0.0" for tiny negative means.
    if rounded.abs() < f64::EPSILON {
        0.0
    } else {
        rounded
    }
}

/// Lever used most often. Ties go to the lever that appears first.
#[must_use]
pub fn most_frequent_lever(sessions: &[Session]) -> Option<Lever> {
    let mut counts: Vec<(Lever, usize)> = Vec::with_capacity(Lever::ALL.len());
    for session in sessions {
        match counts.iter_mut().find(|(lever, _)| *lever == session.lever) {
            Some((_, count)) => *count += 1,
            None => counts.push((session.lever, 1)),
        }
    }

    // max_by_key keeps the last maximum, so scan in reverse to favor the first.
    counts
        .into_iter()
        .rev()
        .max_by_key(|(_, count)| *count)
        .map(|(lever, _)| lever)
}

/// The most recent [`TREND_WINDOW`] sessions in ascending time order.
///
/// Returns `None` if there are fewer than two sessions.
#[must_use]
pub fn trend_series(sessions: &[Session]) -> Option<Vec<TrendPoint>> {
    if sessions.len() < 2 {
        return None;
    }

    let mut ordered: Vec<&Session> = sessions.iter().collect();
    ordered.sort_by_key(|s| s.timestamp);
    let start = ordered.len().saturating_sub(TREND_WINDOW);

    Some(
        ordered[start..]
            .iter()
            .map(|s| TrendPoint {
                label: day_month(s.timestamp),
                mood: s.mood_after,
            })
            .collect(),
    )
}

/// Every session, newest first.
#[must_use]
pub fn recent_sessions(sessions: &[Session]) -> Vec<&Session> {
    let mut ordered: Vec<&Session> = sessions.iter().collect();
    ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    ordered
}

fn day_month(timestamp: i64) -> String {
    DateTime::from_timestamp_millis(timestamp)
        .map_or_else(|| "--/--".to_string(), |at| at.format("%d/%m").to_string())
}

/// Full calendar date of a session, `dd/mm/yyyy`.
#[must_use]
pub fn session_date(session: &Session) -> String {
    session
        .created_at()
        .map_or_else(|| session.date.clone(), |at| at.format("%d/%m/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 86_400_000;
    // 2024-01-01T12:00:00Z
    const BASE: i64 = 1_704_110_400_000;

    fn session(lever: Lever, before: u8, after: u8, timestamp: i64) -> Session {
        Session {
            id: format!("s{timestamp}"),
            date: String::new(),
            timestamp,
            lever,
            exercise_name: "Ejercicio".to_string(),
            mood_before: Mood::new(before).unwrap(),
            mood_after: Mood::new(after).unwrap(),
        }
    }

    #[test]
    fn average_of_mixed_deltas() {
        let sessions = [
            session(Lever::Focus, 5, 7, BASE),
            session(Lever::Focus, 6, 6, BASE + 1),
        ];
        assert!((average_improvement(&sessions) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let sessions = [
            session(Lever::Focus, 5, 6, BASE),
            session(Lever::Focus, 5, 6, BASE + 1),
            session(Lever::Focus, 5, 5, BASE + 2),
        ];
        assert!((average_improvement(&sessions) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn average_can_be_negative() {
        let sessions = [session(Lever::Language, 8, 5, BASE)];
        assert!((average_improvement(&sessions) + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn favorite_lever_by_count() {
        let sessions = [
            session(Lever::Physiology, 5, 6, BASE),
            session(Lever::Physiology, 5, 6, BASE + 1),
            session(Lever::Focus, 5, 6, BASE + 2),
        ];
        assert_eq!(most_frequent_lever(&sessions), Some(Lever::Physiology));
    }

    #[test]
    fn favorite_lever_tie_goes_to_first_seen() {
        let sessions = [
            session(Lever::Imagination, 5, 6, BASE),
            session(Lever::Focus, 5, 6, BASE + 1),
            session(Lever::Focus, 5, 6, BASE + 2),
            session(Lever::Imagination, 5, 6, BASE + 3),
        ];
        assert_eq!(most_frequent_lever(&sessions), Some(Lever::Imagination));
        assert_eq!(most_frequent_lever(&[]), None);
    }

    #[test]
    fn trend_needs_two_sessions() {
        assert!(trend_series(&[]).is_none());
        assert!(trend_series(&[session(Lever::Focus, 5, 6, BASE)]).is_none());
    }

    #[test]
    fn trend_keeps_ten_most_recent_ascending() {
        // Stored out of order on purpose.
        let sessions: Vec<Session> = (0..12)
            .rev()
            .map(|day| session(Lever::Focus, 5, (day % 10 + 1) as u8, BASE + day * DAY_MS))
            .collect();

        let trend = trend_series(&sessions).unwrap();
        assert_eq!(trend.len(), 10);
        assert_eq!(trend.first().unwrap().label, "03/01");
        assert_eq!(trend.last().unwrap().label, "12/01");
        assert_eq!(trend.last().unwrap().mood.value(), 2);
    }

    #[test]
    fn recent_list_is_newest_first() {
        let sessions = [
            session(Lever::Focus, 5, 6, BASE + 5),
            session(Lever::Language, 5, 6, BASE + 9),
            session(Lever::Imagination, 5, 6, BASE),
        ];
        let order: Vec<i64> = recent_sessions(&sessions).iter().map(|s| s.timestamp).collect();
        assert_eq!(order, [BASE + 9, BASE + 5, BASE]);
    }

    #[test]
    fn summary_of_empty_history() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.average_improvement.abs() < f64::EPSILON);
        assert_eq!(summary.favorite, None);
        assert!(summary.trend.is_none());
        assert!(summary.recent.is_empty());
    }

    #[test]
    fn session_date_formats_calendar_day() {
        let s = session(Lever::Focus, 5, 6, BASE);
        assert_eq!(session_date(&s), "01/01/2024");
    }
}
