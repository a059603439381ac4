//! Entry store repository trait.

use async_trait::async_trait;

use super::model::{FeedbackEntry, GratitudeEntry, MoodEntry, UserId};
use crate::error::Result;

/// Append-only store for journal records.
///
/// Implementations must write every record as one complete unit so that
/// concurrent appends from different users never interleave inside a record.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Appends a mood record to the mood log.
    async fn append_mood(&self, entry: &MoodEntry) -> Result<()>;

    /// Appends a gratitude record to the gratitude log.
    async fn append_gratitude(&self, entry: &GratitudeEntry) -> Result<()>;

    /// Appends a feedback message to the feedback log.
    async fn append_feedback(&self, entry: &FeedbackEntry) -> Result<()>;

    /// Returns true if the mood log exists and is non-empty and, when
    /// `user_id` is given, holds at least one record of that user.
    async fn has_mood_entries(&self, user_id: Option<UserId>) -> Result<bool>;

    /// Returns up to `limit` mood records of `user_id`, newest first.
    ///
    /// Records that cannot be decoded are skipped.
    async fn recent_mood_entries(&self, user_id: UserId, limit: usize) -> Result<Vec<MoodEntry>>;
}
