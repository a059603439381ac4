use async_trait::async_trait;
use soulnote_application::JournalService;
use soulnote_core::config::AppConfig;
use soulnote_core::entry::{
    EntryRepository, FeedbackEntry, GratitudeEntry, MoodEntry, UserId,
};
use soulnote_core::error::{Result, SoulnoteError};
use soulnote_core::menu::{keyboards, labels};
use soulnote_core::session::SessionState;
use soulnote_core::{IncomingMessage, Reply};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Fails writes while `failing` is set and counts successful feedback writes.
#[derive(Default)]
struct FlakyRepository {
    failing: AtomicBool,
    feedback_written: AtomicUsize,
}

impl FlakyRepository {
    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SoulnoteError::io("disk full"));
        }
        Ok(())
    }
}

#[async_trait]
impl EntryRepository for FlakyRepository {
    async fn append_mood(&self, _entry: &MoodEntry) -> Result<()> {
        self.check()
    }

    async fn append_gratitude(&self, _entry: &GratitudeEntry) -> Result<()> {
        self.check()
    }

    async fn append_feedback(&self, _entry: &FeedbackEntry) -> Result<()> {
        self.check()?;
        self.feedback_written.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn has_mood_entries(&self, _user_id: Option<UserId>) -> Result<bool> {
        self.check()?;
        Ok(false)
    }

    async fn recent_mood_entries(&self, _user_id: UserId, _limit: usize) -> Result<Vec<MoodEntry>> {
        self.check()?;
        Ok(Vec::new())
    }
}

fn setup(failing: bool) -> (Arc<FlakyRepository>, JournalService) {
    let repository = Arc::new(FlakyRepository::default());
    repository.failing.store(failing, Ordering::SeqCst);
    let service = JournalService::new(repository.clone(), &AppConfig::default());
    (repository, service)
}

async fn send(service: &JournalService, text: &str) -> Reply {
    service
        .handle(&IncomingMessage::new(UserId(1), "Bob", text))
        .await
}

#[tokio::test]
async fn test_mood_save_failure_reports_and_clears_session() {
    let (_repository, service) = setup(true);

    for text in [labels::DIARY, "5 😊", labels::SKIP, labels::NO_TAGS] {
        send(&service, text).await;
    }
    let reply = send(&service, labels::SAVE).await;

    assert!(reply.text.contains("Something went wrong while saving"));
    assert_eq!(reply.keyboard, Some(keyboards::main_menu()));
    assert_eq!(service.sessions().state_of(UserId(1)).await, SessionState::Idle);
}

#[tokio::test]
async fn test_gratitude_save_failure_reports_and_clears_session() {
    let (_repository, service) = setup(true);

    for text in [labels::GRATITUDE, "a", "b", "c"] {
        send(&service, text).await;
    }
    let reply = send(&service, labels::SAVE).await;

    assert!(reply.text.contains("Something went wrong while saving"));
    assert_eq!(service.sessions().state_of(UserId(1)).await, SessionState::Idle);
}

#[tokio::test]
async fn test_feedback_failure_keeps_mode_for_retry() {
    let (repository, service) = setup(true);

    send(&service, labels::LEAVE_FEEDBACK).await;
    let reply = send(&service, "Great bot").await;
    assert!(reply.text.contains("Something went wrong while saving your feedback"));
    assert_eq!(service.sessions().state_of(UserId(1)).await, SessionState::Feedback);

    repository.failing.store(false, Ordering::SeqCst);
    let reply = send(&service, "Great bot").await;
    assert!(reply.text.contains("Feedback saved"));
    assert_eq!(repository.feedback_written.load(Ordering::SeqCst), 1);
    assert_eq!(service.sessions().state_of(UserId(1)).await, SessionState::Idle);
}

#[tokio::test]
async fn test_history_failure_is_not_fatal() {
    let (_repository, service) = setup(true);

    for label in [labels::ANALYSIS, labels::RECENT_ENTRIES, labels::STATISTICS] {
        let reply = send(&service, label).await;
        assert!(reply.text.contains("Could not read your diary"), "for {}", label);
    }

    let reply = send(&service, "/start").await;
    assert!(reply.text.contains("Hi, Bob!"));
}
