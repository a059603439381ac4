//! Journal record models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a chat user, as assigned by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A mood rating on the 1..=10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodScore(u8);

impl MoodScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Returns `None` when `value` is outside 1..=10.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Parses the leading token of a button label such as `"7 🌈"`.
    ///
    /// Only a token made entirely of ASCII digits is accepted, so `"+7"` or
    /// `"7.5"` are rejected just like out-of-range numbers.
    pub fn parse_label(label: &str) -> Option<Self> {
        let token = label.split_whitespace().next()?;
        if !token.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        token.parse::<u8>().ok().and_then(Self::new)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn emoji(self) -> &'static str {
        MOOD_EMOJI[usize::from(self.0 - 1)]
    }

    /// Iterates over every score from 1 to 10.
    pub fn all() -> impl DoubleEndedIterator<Item = MoodScore> {
        (Self::MIN..=Self::MAX).map(MoodScore)
    }

    /// Emoji for an averaged score; falls back to the neutral face.
    ///
    /// Halves round to the even score, so 6.5 shows the emoji of 6.
    pub fn emoji_for_mean(mean: f64) -> &'static str {
        let rounded = mean.round_ties_even();
        if (f64::from(Self::MIN)..=f64::from(Self::MAX)).contains(&rounded) {
            MOOD_EMOJI[rounded as usize - 1]
        } else {
            MOOD_EMOJI[2]
        }
    }
}

const MOOD_EMOJI: [&str; 10] = ["😔", "🙁", "😐", "🙂", "😊", "🤩", "🌈", "✨", "🌟", "💫"];

impl TryFrom<u8> for MoodScore {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("mood score {} is outside 1..=10", value))
    }
}

impl From<MoodScore> for u8 {
    fn from(score: MoodScore) -> Self {
        score.0
    }
}

impl fmt::Display for MoodScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed mood diary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub timestamp: NaiveDateTime,
    pub user_id: UserId,
    pub score: MoodScore,
    pub note: Option<String>,
    /// Tags in the order they were picked, without duplicates.
    pub tags: Vec<String>,
}

/// A committed gratitude record with three optional slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratitudeEntry {
    pub timestamp: NaiveDateTime,
    pub user_id: UserId,
    pub items: [Option<String>; 3],
}

impl GratitudeEntry {
    /// Number of slots the user actually filled in.
    pub fn filled_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_some()).count()
    }
}

/// A free-text feedback message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub timestamp: NaiveDateTime,
    pub user_id: UserId,
    pub username: Option<String>,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_button_label() {
        let labels = [
            "1 😔", "2 🙁", "3 😐", "4 🙂", "5 😊", "6 🤩", "7 🌈", "8 ✨", "9 🌟", "10 💫",
        ];
        for (index, label) in labels.iter().enumerate() {
            let score = MoodScore::parse_label(label).unwrap();
            assert_eq!(usize::from(score.value()), index + 1);
        }
    }

    #[test]
    fn test_parse_rejects_invalid_labels() {
        for label in ["", "0", "11", "+7", "-3", "seven", "7.5", "😊 5", "255", "1000"] {
            assert!(MoodScore::parse_label(label).is_none(), "accepted {:?}", label);
        }
    }

    #[test]
    fn test_parse_accepts_plain_digits() {
        assert_eq!(MoodScore::parse_label("07").map(MoodScore::value), Some(7));
        assert_eq!(MoodScore::parse_label("  4  ").map(MoodScore::value), Some(4));
    }

    #[test]
    fn test_emoji_for_mean() {
        assert_eq!(MoodScore::emoji_for_mean(6.6), "🌈");
        assert_eq!(MoodScore::emoji_for_mean(1.0), "😔");
        assert_eq!(MoodScore::emoji_for_mean(0.0), "😐");
    }

    #[test]
    fn test_emoji_for_mean_rounds_halves_to_even() {
        assert_eq!(MoodScore::emoji_for_mean(6.5), "🤩");
        assert_eq!(MoodScore::emoji_for_mean(7.5), "✨");
        assert_eq!(MoodScore::emoji_for_mean(6.51), "🌈");
    }

    #[test]
    fn test_filled_count() {
        let entry = GratitudeEntry {
            timestamp: chrono::NaiveDate::from_ymd_opt(2026, 10, 18)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            user_id: UserId(1),
            items: [Some("Sun".to_string()), None, Some("Tea".to_string())],
        };
        assert_eq!(entry.filled_count(), 2);
    }
}
