//! Gratitude flow: three optional gratitude slots, then confirm.

use chrono::NaiveDateTime;

use super::{Exit, Flow, Transition};
use crate::entry::{GratitudeEntry, UserId};
use crate::menu::{keyboards, labels};
use crate::reply::Reply;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GratitudeDraft {
    pub items: [Option<String>; 3],
}

impl GratitudeDraft {
    pub fn filled_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_some()).count()
    }

    pub fn into_entry(self, user_id: UserId, timestamp: NaiveDateTime) -> GratitudeEntry {
        GratitudeEntry {
            timestamp,
            user_id,
            items: self.items,
        }
    }

    fn preview(&self) -> Reply {
        let lines: Vec<String> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Some(text) => format!("{}. {}", index + 1, text),
                None => format!("{}. (skipped)", index + 1),
            })
            .collect();
        Reply::text(format!(
            "✨ Your gratitudes for today:\n\n{}\n\nIs everything correct?",
            lines.join("\n")
        ))
        .with_keyboard(keyboards::confirm())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GratitudeFlow {
    AwaitingFirst,
    AwaitingSecond {
        first: Option<String>,
    },
    AwaitingThird {
        first: Option<String>,
        second: Option<String>,
    },
    Confirming(GratitudeDraft),
}

impl GratitudeFlow {
    fn slot(input: &str) -> Option<String> {
        (input != labels::SKIP).then(|| input.to_string())
    }
}

impl Flow for GratitudeFlow {
    type Draft = GratitudeDraft;

    fn start() -> (Self, Reply) {
        let reply = Reply::text(
            "✨ Gratitude journal\n\n\
             Finding moments of gratitude every day is a practice \
             that changes how you see the world.\n\n\
             What are you grateful for today? (First item):",
        )
        .with_keyboard(keyboards::skip());
        (Self::AwaitingFirst, reply)
    }

    fn advance(self, input: &str) -> Transition<Self, GratitudeDraft> {
        if input == labels::HOME {
            return Transition::Exit(Exit::Home);
        }
        if labels::is_cancel(input) {
            return Transition::Exit(Exit::Cancelled);
        }

        match self {
            Self::AwaitingFirst => Transition::Next(
                Self::AwaitingSecond {
                    first: Self::slot(input),
                },
                Reply::text("Great! What else? (Second item):").with_keyboard(keyboards::skip()),
            ),
            Self::AwaitingSecond { first } => Transition::Next(
                Self::AwaitingThird {
                    first,
                    second: Self::slot(input),
                },
                Reply::text("Wonderful! And the last one for today (Third item):")
                    .with_keyboard(keyboards::skip()),
            ),
            Self::AwaitingThird { first, second } => {
                let draft = GratitudeDraft {
                    items: [first, second, Self::slot(input)],
                };
                let reply = draft.preview();
                Transition::Next(Self::Confirming(draft), reply)
            }
            Self::Confirming(draft) => {
                if input == labels::SAVE {
                    Transition::Commit(draft)
                } else if input == labels::EDIT {
                    let (state, reply) = Self::start();
                    Transition::Next(state, reply)
                } else {
                    let reply = draft.preview();
                    Transition::Next(Self::Confirming(draft), reply)
                }
            }
        }
    }

    fn cancelled_reply() -> Reply {
        Reply::text("Gratitude entry cancelled.\nYou can always start again!")
            .with_keyboard(keyboards::main_menu())
    }

    fn saved_reply(draft: &GratitudeDraft) -> Reply {
        Reply::text(format!(
            "✨ Gratitudes saved!\n\n\
             Today you found {} reasons to be grateful.\n\n\
             Research suggests a regular gratitude practice:\n\
             • improves sleep\n\
             • lowers stress\n\
             • raises overall happiness\n\n\
             Thank you for making time for this practice! 💖",
            draft.filled_count()
        ))
        .with_keyboard(keyboards::main_menu())
    }
}
