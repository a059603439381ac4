use crate::dialogue::{GratitudeFlow, MoodFlow};

/// What a user is currently doing.
///
/// Feedback mode and the two flows share this enum, so a user can never be
/// inside a flow and in feedback mode at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    /// The next free-text message goes to the feedback log.
    Feedback,
    Mood(MoodFlow),
    Gratitude(GratitudeFlow),
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// True while a mood or gratitude flow is pending.
    pub fn in_flow(&self) -> bool {
        matches!(self, Self::Mood(_) | Self::Gratitude(_))
    }

    pub fn in_feedback(&self) -> bool {
        matches!(self, Self::Feedback)
    }
}

/// Per-user transient state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    pub state: SessionState,
}

impl UserSession {
    /// Takes the state out, leaving the session idle.
    pub fn take(&mut self) -> SessionState {
        std::mem::take(&mut self.state)
    }

    pub fn clear(&mut self) {
        self.state = SessionState::Idle;
    }
}
