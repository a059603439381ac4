//! Guided multi-step entry flows.
//!
//! Each flow is an explicit state enum with a pure transition function. The
//! flows never touch storage: a confirmed flow yields a draft through
//! [`Transition::Commit`] and the caller persists it.
//!
//! # Module Structure
//!
//! - `mood`: score → note → tags → confirm (`MoodFlow`, `MoodDraft`)
//! - `gratitude`: three gratitude slots → confirm (`GratitudeFlow`, `GratitudeDraft`)

mod gratitude;
mod mood;

pub use gratitude::{GratitudeDraft, GratitudeFlow};
pub use mood::{MoodDraft, MoodFlow};

use crate::reply::Reply;

/// How a flow left the conversation without saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user pressed cancel.
    Cancelled,
    /// The user pressed the home button.
    Home,
}

/// Outcome of feeding one input into a flow state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<S, D> {
    /// The flow continues in `S` (possibly unchanged) after sending the reply.
    Next(S, Reply),
    /// The user confirmed; `D` must be persisted and the session cleared.
    Commit(D),
    /// The flow ended without saving.
    Exit(Exit),
}

/// A guided flow: an initial prompt plus a transition per input.
pub trait Flow: Sized {
    /// Data collected by the time the user confirms.
    type Draft;

    /// Initial state and its prompt.
    fn start() -> (Self, Reply);

    /// Feeds one input into the current state.
    fn advance(self, input: &str) -> Transition<Self, Self::Draft>;

    /// Reply after the user cancelled.
    fn cancelled_reply() -> Reply;

    /// Reply after the draft was stored.
    fn saved_reply(draft: &Self::Draft) -> Reply;
}
