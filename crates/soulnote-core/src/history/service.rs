use std::sync::Arc;

use super::statistics::{MoodStatistics, StatisticsResult};
use crate::entry::{EntryRepository, MoodEntry, UserId};
use crate::error::Result;

/// Read side of the mood log.
///
/// `HistoryService` is a thin layer over [`EntryRepository`]: the repository
/// does the scanning and decoding, this service turns the records into the
/// answers the analysis menu needs.
#[derive(Clone)]
pub struct HistoryService {
    repository: Arc<dyn EntryRepository>,
}

impl HistoryService {
    pub fn new(repository: Arc<dyn EntryRepository>) -> Self {
        Self { repository }
    }

    /// Returns true if the mood log holds at least one entry of `user_id`.
    pub async fn has_entries(&self, user_id: UserId) -> Result<bool> {
        self.repository.has_mood_entries(Some(user_id)).await
    }

    /// Returns up to `limit` entries of `user_id`, newest first.
    pub async fn list_entries(&self, user_id: UserId, limit: usize) -> Result<Vec<MoodEntry>> {
        self.repository.recent_mood_entries(user_id, limit).await
    }

    /// Computes statistics over the `window` most recent entries of `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the mood log cannot be read. A user without
    /// entries yields [`StatisticsResult::InsufficientData`].
    pub async fn compute_statistics(
        &self,
        user_id: UserId,
        window: usize,
    ) -> Result<StatisticsResult> {
        let entries = self.repository.recent_mood_entries(user_id, window).await?;
        Ok(MoodStatistics::compute(&entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{FeedbackEntry, GratitudeEntry, MoodScore};
    use async_trait::async_trait;
    use chrono::NaiveDate;

    /// Keeps mood entries in memory, oldest first.
    struct MemoryRepository {
        moods: Vec<MoodEntry>,
    }

    #[async_trait]
    impl EntryRepository for MemoryRepository {
        async fn append_mood(&self, _entry: &MoodEntry) -> Result<()> {
            Ok(())
        }

        async fn append_gratitude(&self, _entry: &GratitudeEntry) -> Result<()> {
            Ok(())
        }

        async fn append_feedback(&self, _entry: &FeedbackEntry) -> Result<()> {
            Ok(())
        }

        async fn has_mood_entries(&self, user_id: Option<UserId>) -> Result<bool> {
            Ok(self
                .moods
                .iter()
                .any(|entry| user_id.is_none_or(|id| entry.user_id == id)))
        }

        async fn recent_mood_entries(&self, user_id: UserId, limit: usize) -> Result<Vec<MoodEntry>> {
            Ok(self
                .moods
                .iter()
                .rev()
                .filter(|entry| entry.user_id == user_id)
                .take(limit)
                .cloned()
                .collect())
        }
    }

    fn entry(user: u64, day: u32, score: u8) -> MoodEntry {
        MoodEntry {
            timestamp: NaiveDate::from_ymd_opt(2026, 10, day)
                .unwrap()
                .and_hms_opt(20, 0, 0)
                .unwrap(),
            user_id: UserId(user),
            score: MoodScore::new(score).unwrap(),
            note: None,
            tags: Vec::new(),
        }
    }

    fn service(moods: Vec<MoodEntry>) -> HistoryService {
        HistoryService::new(Arc::new(MemoryRepository { moods }))
    }

    #[tokio::test]
    async fn test_statistics_use_only_the_window() {
        let service = service(vec![
            entry(1, 1, 1),
            entry(1, 2, 5),
            entry(2, 3, 10),
            entry(1, 4, 7),
        ]);
        match service.compute_statistics(UserId(1), 2).await.unwrap() {
            StatisticsResult::Ready(stats) => {
                assert_eq!(stats.total, 2);
                assert!((stats.mean - 6.0).abs() < f64::EPSILON);
            }
            StatisticsResult::InsufficientData => panic!("expected statistics"),
        }
    }

    #[tokio::test]
    async fn test_unknown_user_has_no_entries() {
        let service = service(vec![entry(1, 1, 4)]);
        assert!(service.has_entries(UserId(1)).await.unwrap());
        assert!(!service.has_entries(UserId(9)).await.unwrap());
        assert_eq!(
            service.compute_statistics(UserId(9), 100).await.unwrap(),
            StatisticsResult::InsufficientData
        );
        assert!(service.list_entries(UserId(9), 5).await.unwrap().is_empty());
    }
}
