//! Journal use case: one incoming message in, one reply out.
//!
//! `JournalService` owns the routing priority between navigation escapes,
//! active flows, menu actions and the feedback channel. Transports only
//! convert their payloads to [`IncomingMessage`] and render the [`Reply`].

use chrono::{Local, NaiveDateTime};
use soulnote_core::config::{AppConfig, HistoryConfig, SupportConfig};
use soulnote_core::dialogue::{Exit, Flow, GratitudeDraft, GratitudeFlow, MoodDraft, MoodFlow, Transition};
use soulnote_core::entry::{EntryRepository, FeedbackEntry, UserId};
use soulnote_core::history::{HistoryService, StatisticsResult};
use soulnote_core::menu::{route, MenuAction, Route};
use soulnote_core::session::{SessionManager, SessionState, UserSession};
use soulnote_core::{IncomingMessage, Reply, Result};
use std::sync::Arc;

use crate::responses;

/// Result of feeding one input into a flow.
enum FlowOutcome<D> {
    Reply(Reply),
    Commit(D),
}

/// Message-in/reply-out journal service shared by every transport.
///
/// # Thread Safety
///
/// Handling a message holds that user's session lock for the whole message,
/// so messages of one user are processed in order while different users
/// proceed in parallel.
pub struct JournalService {
    sessions: Arc<SessionManager>,
    repository: Arc<dyn EntryRepository>,
    history: HistoryService,
    history_config: HistoryConfig,
    support: SupportConfig,
}

impl JournalService {
    /// Creates a new `JournalService`.
    ///
    /// # Arguments
    ///
    /// * `repository` - Entry store for mood, gratitude and feedback records
    /// * `config` - Application config; only the `history` and `support`
    ///   sections are used here
    pub fn new(repository: Arc<dyn EntryRepository>, config: &AppConfig) -> Self {
        Self {
            sessions: Arc::new(SessionManager::new()),
            history: HistoryService::new(repository.clone()),
            repository,
            history_config: config.history.clone(),
            support: config.support.clone(),
        }
    }

    /// The session manager, for background pruning.
    pub fn sessions(&self) -> Arc<SessionManager> {
        self.sessions.clone()
    }

    /// Handles one message and returns the reply to send.
    pub async fn handle(&self, message: &IncomingMessage) -> Reply {
        let mut session = self.sessions.acquire(message.user_id).await;
        let route = route(&message.text);

        if let Some(action) = route.action().filter(|action| action.is_navigation()) {
            if !session.state.is_idle() {
                tracing::debug!(user_id = %message.user_id, "Navigation escape cleared session");
            }
            session.clear();
            return match action {
                MenuAction::Start => responses::welcome(&message.first_name),
                _ => responses::returning_home(),
            };
        }

        if session.state.in_flow() && !matches!(route, Route::Command(_)) {
            return self.advance_flow(&mut session, message).await;
        }

        match route {
            Route::Command(action) | Route::Label(action) => {
                // Informational actions leave feedback mode in place.
                if session.state.in_flow() || action.starts_flow() {
                    session.clear();
                }
                self.run_action(&mut session, action, message).await
            }
            Route::Text if session.state.in_feedback() => {
                self.save_feedback(&mut session, message).await
            }
            Route::Text => responses::fallback(),
        }
    }

    async fn run_action(
        &self,
        session: &mut UserSession,
        action: MenuAction,
        message: &IncomingMessage,
    ) -> Reply {
        let user_id = message.user_id;
        match action {
            MenuAction::Start => responses::welcome(&message.first_name),
            MenuAction::Home | MenuAction::Menu => responses::returning_home(),
            MenuAction::Diary => {
                let (flow, reply) = MoodFlow::start();
                session.state = SessionState::Mood(flow);
                tracing::debug!(%user_id, "Mood flow started");
                reply
            }
            MenuAction::Gratitude => {
                let (flow, reply) = GratitudeFlow::start();
                session.state = SessionState::Gratitude(flow);
                tracing::debug!(%user_id, "Gratitude flow started");
                reply
            }
            MenuAction::Help => responses::help(),
            MenuAction::Analysis => self.analysis_overview(user_id).await,
            MenuAction::RecentEntries => {
                match self
                    .history
                    .list_entries(user_id, self.history_config.recent_limit)
                    .await
                {
                    Ok(entries) => responses::recent_entries(&entries),
                    Err(e) => {
                        tracing::error!(%user_id, error = %e, "Failed to read recent entries");
                        responses::history_failed()
                    }
                }
            }
            MenuAction::Statistics => {
                match self
                    .history
                    .compute_statistics(user_id, self.history_config.statistics_window)
                    .await
                {
                    Ok(result) => responses::statistics(&result),
                    Err(e) => {
                        tracing::error!(%user_id, error = %e, "Failed to compute statistics");
                        responses::history_failed()
                    }
                }
            }
            MenuAction::Week => responses::week_coming_soon(),
            MenuAction::Chart => responses::chart_coming_soon(),
            MenuAction::Placeholder(section) => responses::placeholder(section),
            MenuAction::Support => responses::support_panel(&self.support),
            MenuAction::OpenSbp => responses::open_sbp(&self.support),
            MenuAction::OpenCard => responses::open_card(&self.support),
            MenuAction::Share => responses::share(&self.support),
            MenuAction::LeaveFeedback => {
                session.state = SessionState::Feedback;
                tracing::debug!(%user_id, "Feedback mode entered");
                responses::feedback_prompt()
            }
        }
    }

    async fn analysis_overview(&self, user_id: UserId) -> Reply {
        match self.overview_statistics(user_id).await {
            Ok(StatisticsResult::Ready(stats)) => responses::analysis_overview(&stats),
            Ok(StatisticsResult::InsufficientData) => responses::no_entries_yet(),
            Err(e) => {
                tracing::error!(%user_id, error = %e, "Failed to read mood history");
                responses::history_failed()
            }
        }
    }

    async fn overview_statistics(&self, user_id: UserId) -> Result<StatisticsResult> {
        if !self.history.has_entries(user_id).await? {
            return Ok(StatisticsResult::InsufficientData);
        }
        self.history
            .compute_statistics(user_id, self.history_config.statistics_window)
            .await
    }

    async fn advance_flow(&self, session: &mut UserSession, message: &IncomingMessage) -> Reply {
        let user_id = message.user_id;
        match session.take() {
            SessionState::Mood(flow) => {
                match Self::step(session, user_id, flow, &message.text, SessionState::Mood) {
                    FlowOutcome::Reply(reply) => reply,
                    FlowOutcome::Commit(draft) => self.commit_mood(user_id, draft).await,
                }
            }
            SessionState::Gratitude(flow) => {
                match Self::step(session, user_id, flow, &message.text, SessionState::Gratitude) {
                    FlowOutcome::Reply(reply) => reply,
                    FlowOutcome::Commit(draft) => self.commit_gratitude(user_id, draft).await,
                }
            }
            other => {
                session.state = other;
                responses::fallback()
            }
        }
    }

    /// Advances `flow`, storing the next state back into the session.
    /// Commit and exit leave the session idle.
    fn step<F: Flow>(
        session: &mut UserSession,
        user_id: UserId,
        flow: F,
        input: &str,
        wrap: fn(F) -> SessionState,
    ) -> FlowOutcome<F::Draft> {
        match flow.advance(input) {
            Transition::Next(next, reply) => {
                session.state = wrap(next);
                FlowOutcome::Reply(reply)
            }
            Transition::Commit(draft) => FlowOutcome::Commit(draft),
            Transition::Exit(Exit::Cancelled) => {
                tracing::debug!(%user_id, "Flow cancelled");
                FlowOutcome::Reply(F::cancelled_reply())
            }
            Transition::Exit(Exit::Home) => {
                tracing::debug!(%user_id, "Flow left via home");
                FlowOutcome::Reply(responses::returning_home())
            }
        }
    }

    async fn commit_mood(&self, user_id: UserId, draft: MoodDraft) -> Reply {
        let entry = draft.clone().into_entry(user_id, now());
        match self.repository.append_mood(&entry).await {
            Ok(()) => {
                tracing::debug!(%user_id, score = %entry.score, "Mood entry saved");
                MoodFlow::saved_reply(&draft)
            }
            Err(e) => {
                tracing::error!(%user_id, error = %e, "Failed to append mood entry");
                responses::save_failed()
            }
        }
    }

    async fn commit_gratitude(&self, user_id: UserId, draft: GratitudeDraft) -> Reply {
        let entry = draft.clone().into_entry(user_id, now());
        match self.repository.append_gratitude(&entry).await {
            Ok(()) => {
                tracing::debug!(%user_id, filled = entry.filled_count(), "Gratitude entry saved");
                GratitudeFlow::saved_reply(&draft)
            }
            Err(e) => {
                tracing::error!(%user_id, error = %e, "Failed to append gratitude entry");
                responses::save_failed()
            }
        }
    }

    async fn save_feedback(&self, session: &mut UserSession, message: &IncomingMessage) -> Reply {
        let entry = FeedbackEntry {
            timestamp: now(),
            user_id: message.user_id,
            username: message.username.clone(),
            text: message.text.clone(),
        };
        match self.repository.append_feedback(&entry).await {
            Ok(()) => {
                session.clear();
                tracing::info!(user_id = %message.user_id, "Feedback received");
                responses::feedback_saved()
            }
            Err(e) => {
                tracing::error!(user_id = %message.user_id, error = %e, "Failed to append feedback");
                responses::feedback_failed()
            }
        }
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
