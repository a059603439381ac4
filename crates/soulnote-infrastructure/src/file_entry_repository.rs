//! Flat-file EntryRepository implementation.
//!
//! Each record type has its own append-only log in the data directory. The
//! line layout is defined in `dto`; locking and single-write appends in
//! `storage::append_log`.

use async_trait::async_trait;
use soulnote_core::entry::{EntryRepository, FeedbackEntry, GratitudeEntry, MoodEntry, UserId};
use soulnote_core::error::{Result, SoulnoteError};
use std::path::{Path, PathBuf};
use tokio::task;

use crate::dto;
use crate::paths::JournalFiles;
use crate::storage::AppendLog;

/// Journal logs stored as UTF-8 text files.
///
/// # Features
///
/// - **Line atomicity**: one record is one `write_all` under an exclusive lock
/// - **Tolerant reads**: undecodable lines are skipped, never fatal
/// - **Async-safe**: all file access runs in `tokio::task::spawn_blocking`
#[derive(Debug, Clone)]
pub struct FileEntryRepository {
    data_dir: PathBuf,
    mood: AppendLog,
    gratitude: AppendLog,
    feedback: AppendLog,
}

impl FileEntryRepository {
    /// Creates a repository over `data_dir`. Files are created on first append.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        let files = JournalFiles::in_dir(&data_dir);
        Self {
            data_dir,
            mood: AppendLog::new(files.mood),
            gratitude: AppendLog::new(files.gratitude),
            feedback: AppendLog::new(files.feedback),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    async fn append(log: &AppendLog, line: String) -> Result<()> {
        let log = log.clone();
        task::spawn_blocking(move || log.append_line(&line).map_err(SoulnoteError::from))
            .await
            .map_err(|e| SoulnoteError::internal(format!("Blocking task failed: {}", e)))?
    }

    fn recent_mood_entries_sync(log: &AppendLog, user_id: UserId, limit: usize) -> Result<Vec<MoodEntry>> {
        let lines = log.read_lines()?;
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for line in lines.iter().rev() {
            if entries.len() >= limit {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            match dto::mood::decode(line) {
                Ok(entry) if entry.user_id == user_id => entries.push(entry),
                Ok(_) => {}
                Err(e) => {
                    skipped += 1;
                    tracing::trace!(error = %e, "Skipping undecodable mood line");
                }
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, path = %log.path().display(), "Skipped malformed mood lines");
        }
        Ok(entries)
    }

    fn has_mood_entries_sync(log: &AppendLog, user_id: Option<UserId>) -> Result<bool> {
        if !log.is_non_empty()? {
            return Ok(false);
        }
        let Some(user_id) = user_id else {
            return Ok(true);
        };
        let lines = log.read_lines()?;
        Ok(lines
            .iter()
            .any(|line| dto::mood::user_id_of(line) == Some(user_id)))
    }
}

#[async_trait]
impl EntryRepository for FileEntryRepository {
    async fn append_mood(&self, entry: &MoodEntry) -> Result<()> {
        Self::append(&self.mood, dto::mood::encode(entry)).await
    }

    async fn append_gratitude(&self, entry: &GratitudeEntry) -> Result<()> {
        Self::append(&self.gratitude, dto::gratitude::encode(entry)).await
    }

    async fn append_feedback(&self, entry: &FeedbackEntry) -> Result<()> {
        Self::append(&self.feedback, dto::feedback::encode(entry)).await
    }

    async fn has_mood_entries(&self, user_id: Option<UserId>) -> Result<bool> {
        let log = self.mood.clone();
        task::spawn_blocking(move || Self::has_mood_entries_sync(&log, user_id))
            .await
            .map_err(|e| SoulnoteError::internal(format!("Blocking task failed: {}", e)))?
    }

    async fn recent_mood_entries(&self, user_id: UserId, limit: usize) -> Result<Vec<MoodEntry>> {
        let log = self.mood.clone();
        task::spawn_blocking(move || Self::recent_mood_entries_sync(&log, user_id, limit))
            .await
            .map_err(|e| SoulnoteError::internal(format!("Blocking task failed: {}", e)))?
    }
}
