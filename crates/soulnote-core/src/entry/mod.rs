//! Journal entries: record models and the append-only store interface.

mod model;
mod repository;

pub use model::{FeedbackEntry, GratitudeEntry, MoodEntry, MoodScore, UserId};
pub use repository::EntryRepository;
