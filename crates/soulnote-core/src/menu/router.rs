//! Static label and command table.
//!
//! The router only classifies input; deciding what a classified input means
//! for a user with an active flow or in feedback mode is the caller's job.

use super::labels;
use crate::slash_command::{parse_command, CommandKind};

/// Sections that only answer with a one-line placeholder for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Habits,
    Gps,
    Capsules,
    Settings,
    Export,
}

/// Something the router recognized in the user's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// The home button.
    Home,
    /// `/start`
    Start,
    /// `/menu`
    Menu,
    /// Start a mood entry (button or `/diary`).
    Diary,
    Gratitude,
    /// Help button or `/help`.
    Help,
    Analysis,
    RecentEntries,
    Statistics,
    Week,
    Chart,
    Placeholder(Placeholder),
    Support,
    OpenSbp,
    OpenCard,
    Share,
    LeaveFeedback,
}

impl MenuAction {
    /// Navigation escapes interrupt any flow and feedback mode.
    pub fn is_navigation(self) -> bool {
        matches!(self, Self::Home | Self::Start | Self::Menu)
    }

    /// Actions that begin a guided flow and so replace feedback mode.
    pub fn starts_flow(self) -> bool {
        matches!(self, Self::Diary | Self::Gratitude)
    }
}

/// How the input was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// A builtin slash command.
    Command(MenuAction),
    /// A known button label.
    Label(MenuAction),
    /// Anything else; free text for a flow or the feedback channel.
    Text,
}

impl Route {
    pub fn action(self) -> Option<MenuAction> {
        match self {
            Self::Command(action) | Self::Label(action) => Some(action),
            Self::Text => None,
        }
    }
}

const LABEL_TABLE: &[(&str, MenuAction)] = &[
    (labels::HOME, MenuAction::Home),
    (labels::DIARY, MenuAction::Diary),
    (labels::GRATITUDE, MenuAction::Gratitude),
    (labels::ANALYSIS, MenuAction::Analysis),
    (labels::RECENT_ENTRIES, MenuAction::RecentEntries),
    (labels::STATISTICS, MenuAction::Statistics),
    (labels::WEEK, MenuAction::Week),
    (labels::CHART, MenuAction::Chart),
    (labels::HABITS, MenuAction::Placeholder(Placeholder::Habits)),
    (labels::GPS, MenuAction::Placeholder(Placeholder::Gps)),
    (labels::CAPSULES, MenuAction::Placeholder(Placeholder::Capsules)),
    (labels::SETTINGS, MenuAction::Placeholder(Placeholder::Settings)),
    (labels::EXPORT, MenuAction::Placeholder(Placeholder::Export)),
    (labels::HELP, MenuAction::Help),
    (labels::SUPPORT, MenuAction::Support),
    (labels::OPEN_SBP, MenuAction::OpenSbp),
    (labels::OPEN_CARD, MenuAction::OpenCard),
    (labels::SHARE, MenuAction::Share),
    (labels::LEAVE_FEEDBACK, MenuAction::LeaveFeedback),
];

/// Every label the router knows, in table order.
pub fn known_labels() -> impl Iterator<Item = &'static str> {
    LABEL_TABLE.iter().map(|(label, _)| *label)
}

/// Classifies raw input by exact match against the label table and the
/// builtin slash commands.
pub fn route(text: &str) -> Route {
    if let Some(command) = parse_command(text) {
        let action = match command.kind {
            CommandKind::Start => MenuAction::Start,
            CommandKind::Menu => MenuAction::Menu,
            CommandKind::Diary => MenuAction::Diary,
            CommandKind::Help => MenuAction::Help,
        };
        return Route::Command(action);
    }

    LABEL_TABLE
        .iter()
        .find(|(label, _)| *label == text)
        .map(|(_, action)| Route::Label(*action))
        .unwrap_or(Route::Text)
}
