//! Mood ratings and their display bands.
//!
//! A [`Mood`] is an integer rating clamped to `1..=10`. Every rating falls into
//! exactly one [`MoodBand`], which carries the emoji and color the mood widget
//! shows for it. The mapping is a pure function of the rating.

use serde::{Deserialize, Serialize};

/// Lowest valid rating.
pub const MOOD_MIN: u8 = 1;

/// Highest valid rating.
pub const MOOD_MAX: u8 = 10;

/// A mood rating in `1..=10`.
///
/// Deserialization rejects out-of-range values, so a stored session can never
/// carry an invalid rating into the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Mood(u8);

impl Mood {
    /// Midpoint rating used as the initial "before" value.
    pub const MIDPOINT: Self = Self(5);

    /// Creates a rating, returning `None` outside `1..=10`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= MOOD_MIN && value <= MOOD_MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a rating, clamping into `1..=10`.
    #[must_use]
    pub fn clamped(value: i32) -> Self {
        let clamped = value.clamp(i32::from(MOOD_MIN), i32::from(MOOD_MAX));
        Self(u8::try_from(clamped).unwrap_or(MOOD_MIN))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// One step up, saturating at 10.
    #[must_use]
    pub fn increment(self) -> Self {
        Self::clamped(i32::from(self.0) + 1)
    }

    /// One step down, saturating at 1.
    #[must_use]
    pub fn decrement(self) -> Self {
        Self::clamped(i32::from(self.0) - 1)
    }

    #[must_use]
    pub const fn band(self) -> MoodBand {
        MoodBand::for_value(self.0)
    }

    /// Signed difference `self - before`.
    #[must_use]
    pub fn delta_from(self, before: Self) -> i32 {
        i32::from(self.0) - i32::from(before.0)
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl TryFrom<u8> for Mood {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("mood {value} outside {MOOD_MIN}..={MOOD_MAX}"))
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> Self {
        mood.0
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Five discrete sentiment bands with boundaries at ≤2, ≤4, ≤6, ≤8 and >8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodBand {
    VeryBad,
    Bad,
    Neutral,
    Good,
    Excellent,
}

impl MoodBand {
    /// Maps a raw rating to its band.
    #[must_use]
    pub const fn for_value(value: u8) -> Self {
        match value {
            0..=2 => Self::VeryBad,
            3..=4 => Self::Bad,
            5..=6 => Self::Neutral,
            7..=8 => Self::Good,
            _ => Self::Excellent,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::VeryBad => "😫",
            Self::Bad => "😕",
            Self::Neutral => "😐",
            Self::Good => "🙂",
            Self::Excellent => "😄",
        }
    }

    /// Hex color used for the rating text.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::VeryBad => "#ef4444",
            Self::Bad => "#f97316",
            Self::Neutral => "#ca8a04",
            Self::Good => "#3b82f6",
            Self::Excellent => "#22c55e",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryBad => "Muy mal",
            Self::Bad => "Mal",
            Self::Neutral => "Regular",
            Self::Good => "Bien",
            Self::Excellent => "Excelente",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        let expected = [
            (1, MoodBand::VeryBad),
            (2, MoodBand::VeryBad),
            (3, MoodBand::Bad),
            (4, MoodBand::Bad),
            (5, MoodBand::Neutral),
            (6, MoodBand::Neutral),
            (7, MoodBand::Good),
            (8, MoodBand::Good),
            (9, MoodBand::Excellent),
            (10, MoodBand::Excellent),
        ];
        for (value, band) in expected {
            assert_eq!(Mood::new(value).unwrap().band(), band, "value {value}");
        }
    }

    #[test]
    fn band_mapping_is_deterministic() {
        for value in MOOD_MIN..=MOOD_MAX {
            let mood = Mood::new(value).unwrap();
            assert_eq!(mood.band(), mood.band());
            assert_eq!(mood.band().emoji(), MoodBand::for_value(value).emoji());
            assert_eq!(mood.band().color(), MoodBand::for_value(value).color());
        }
    }

    #[test]
    fn every_band_has_distinct_emoji_and_color() {
        let bands = [
            MoodBand::VeryBad,
            MoodBand::Bad,
            MoodBand::Neutral,
            MoodBand::Good,
            MoodBand::Excellent,
        ];
        for (i, a) in bands.iter().enumerate() {
            for b in &bands[i + 1..] {
                assert_ne!(a.emoji(), b.emoji());
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn stepping_saturates() {
        let top = Mood::new(10).unwrap();
        assert_eq!(top.increment(), top);

        let bottom = Mood::new(1).unwrap();
        assert_eq!(bottom.decrement(), bottom);

        assert_eq!(Mood::MIDPOINT.increment().value(), 6);
    }

    #[test]
    fn rejects_out_of_range_on_deserialize() {
        assert!(serde_json::from_str::<Mood>("0").is_err());
        assert!(serde_json::from_str::<Mood>("11").is_err());
        assert_eq!(serde_json::from_str::<Mood>("7").unwrap().value(), 7);
    }

    #[test]
    fn clamped_construction() {
        assert_eq!(Mood::clamped(-4).value(), 1);
        assert_eq!(Mood::clamped(42).value(), 10);
    }
}
