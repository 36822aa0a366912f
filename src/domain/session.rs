//! Recorded sessions.
//!
//! A [`Session`] is one completed pass through a lever exercise with the mood
//! ratings captured before and after. Sessions are immutable once created and
//! are stored in creation order. The serialized field names (`exerciseName`,
//! `moodBefore`, ...) are the on-disk format and must not change.

use super::lever::Lever;
use super::mood::Mood;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One recorded session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Globally unique identifier.
    pub id: String,
    /// ISO-8601 creation time (UTC, millisecond precision).
    pub date: String,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
    pub lever: Lever,
    /// Label of the specific exercise that was completed.
    pub exercise_name: String,
    pub mood_before: Mood,
    pub mood_after: Mood,
}

/// The staged fields of a session that has not been stamped yet.
///
/// Produced by the session controller when the user finishes the post-check;
/// the runtime turns it into a [`Session`] by adding an id and the current time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDraft {
    pub lever: Lever,
    pub exercise_name: String,
    pub mood_before: Mood,
    pub mood_after: Mood,
}

impl SessionDraft {
    #[must_use]
    pub fn improved(&self) -> bool {
        self.mood_after > self.mood_before
    }
}

impl Session {
    /// Stamps a draft with an identifier and creation time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use palancas::domain::{Lever, Mood, Session, SessionDraft};
    ///
    /// let draft = SessionDraft {
    ///     lever: Lever::Focus,
    ///     exercise_name: "Cambio de Enfoque".to_string(),
    ///     mood_before: Mood::new(4).unwrap(),
    ///     mood_after: Mood::new(6).unwrap(),
    /// };
    /// let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
    /// let session = Session::from_draft(draft, "abc".to_string(), at);
    ///
    /// assert_eq!(session.date, "2023-11-14T22:13:20.000Z");
    /// assert_eq!(session.delta(), 2);
    /// ```
    #[must_use]
    pub fn from_draft(draft: SessionDraft, id: String, at: DateTime<Utc>) -> Self {
        Self {
            id,
            date: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            timestamp: at.timestamp_millis(),
            lever: draft.lever,
            exercise_name: draft.exercise_name,
            mood_before: draft.mood_before,
            mood_after: draft.mood_after,
        }
    }

    /// Signed mood change `moodAfter - moodBefore`.
    #[must_use]
    pub fn delta(&self) -> i32 {
        self.mood_after.delta_from(self.mood_before)
    }

    /// Creation time as a UTC datetime, `None` if the timestamp is out of range.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}
