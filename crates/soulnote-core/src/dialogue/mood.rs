//! Mood diary flow: score → note → tags → confirm.

use chrono::NaiveDateTime;

use super::{Exit, Flow, Transition};
use crate::entry::{MoodEntry, MoodScore, UserId};
use crate::menu::{keyboards, labels};
use crate::reply::Reply;

/// Everything the mood flow collected before confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodDraft {
    pub score: MoodScore,
    pub note: Option<String>,
    pub tags: Vec<String>,
}

impl MoodDraft {
    pub fn into_entry(self, user_id: UserId, timestamp: NaiveDateTime) -> MoodEntry {
        MoodEntry {
            timestamp,
            user_id,
            score: self.score,
            note: self.note,
            tags: self.tags,
        }
    }

    fn preview(&self) -> Reply {
        let note = self.note.as_deref().unwrap_or("not specified");
        let tags = if self.tags.is_empty() {
            "none".to_string()
        } else {
            self.tags.join(", ")
        };
        Reply::text(format!(
            "✨ Check your entry:\n\n\
             {} Mood: {}/10\n\
             📝 Note: {}\n\
             🏷️ Tags: {}\n\n\
             Is everything correct?",
            self.score.emoji(),
            self.score,
            note,
            tags
        ))
        .with_keyboard(keyboards::confirm())
    }
}

/// States of the mood flow. Data collected so far travels inside the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodFlow {
    AwaitingMood,
    AwaitingNote {
        score: MoodScore,
    },
    AwaitingTags {
        score: MoodScore,
        note: Option<String>,
        tags: Vec<String>,
    },
    Confirming(MoodDraft),
}

impl MoodFlow {
    fn note_prompt(score: MoodScore) -> Reply {
        Reply::text(format!(
            "Mood recorded: {}/10\n\n\
             Would you like to describe your day?\n\
             (What happened, how you feel, your thoughts)",
            score
        ))
        .with_keyboard(keyboards::skip())
    }

    fn tags_prompt(tags: &[String]) -> Reply {
        let selected = if tags.is_empty() {
            "nothing yet".to_string()
        } else {
            tags.join(", ")
        };
        Reply::text(format!(
            "🏷️ Pick the topics that describe your day:\n\n\
             You can choose several, just tap the buttons.\n\
             Selected: {}\n\n\
             When you are finished, tap {}",
            selected,
            labels::TAGS_DONE
        ))
        .with_keyboard(keyboards::tags())
    }

    fn confirm(draft: MoodDraft) -> Transition<Self, MoodDraft> {
        let reply = draft.preview();
        Transition::Next(Self::Confirming(draft), reply)
    }
}

impl Flow for MoodFlow {
    type Draft = MoodDraft;

    fn start() -> (Self, Reply) {
        let reply = Reply::text(
            "📓 Mood entry\n\n\
             How are you feeling today?\n\
             Rate it on a scale from 1 to 10:",
        )
        .with_keyboard(keyboards::mood_scores());
        (Self::AwaitingMood, reply)
    }

    fn advance(self, input: &str) -> Transition<Self, MoodDraft> {
        if input == labels::HOME {
            return Transition::Exit(Exit::Home);
        }
        if labels::is_cancel(input) {
            return Transition::Exit(Exit::Cancelled);
        }

        match self {
            Self::AwaitingMood => match MoodScore::parse_label(input) {
                Some(score) => Transition::Next(Self::AwaitingNote { score }, Self::note_prompt(score)),
                None => Transition::Next(
                    Self::AwaitingMood,
                    Reply::text("Please pick a score from the keyboard"),
                ),
            },
            Self::AwaitingNote { score } => {
                let note = (input != labels::SKIP).then(|| input.to_string());
                let tags = Vec::new();
                let reply = Self::tags_prompt(&tags);
                Transition::Next(Self::AwaitingTags { score, note, tags }, reply)
            }
            Self::AwaitingTags {
                score,
                note,
                mut tags,
            } => {
                if input == labels::TAGS_DONE {
                    return Self::confirm(MoodDraft { score, note, tags });
                }
                if input == labels::NO_TAGS {
                    return Self::confirm(MoodDraft {
                        score,
                        note,
                        tags: Vec::new(),
                    });
                }
                if !tags.iter().any(|tag| tag == input) {
                    tags.push(input.to_string());
                }
                let reply = Self::tags_prompt(&tags);
                Transition::Next(Self::AwaitingTags { score, note, tags }, reply)
            }
            Self::Confirming(draft) => {
                if input == labels::SAVE {
                    Transition::Commit(draft)
                } else if input == labels::EDIT {
                    let (state, reply) = Self::start();
                    Transition::Next(state, reply)
                } else {
                    Self::confirm(draft)
                }
            }
        }
    }

    fn cancelled_reply() -> Reply {
        Reply::text("Mood entry cancelled.\nYou can always start again!")
            .with_keyboard(keyboards::main_menu())
    }

    fn saved_reply(_draft: &MoodDraft) -> Reply {
        Reply::text(
            "✅ Entry saved!\n\n\
             Thank you for paying attention to yourself!\n\
             This is an important step towards harmony.",
        )
        .with_keyboard(keyboards::main_menu())
    }
}
