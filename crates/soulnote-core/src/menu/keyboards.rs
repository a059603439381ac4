//! Keyboard layouts.

use super::labels;
use crate::reply::Keyboard;

pub fn main_menu() -> Keyboard {
    Keyboard::new()
        .row([labels::DIARY, labels::ANALYSIS, labels::GRATITUDE])
        .row([labels::HABITS, labels::GPS, labels::CAPSULES])
        .row([labels::SETTINGS, labels::HELP, labels::EXPORT])
        .row([labels::SUPPORT])
        .placeholder("Choose an action...")
}

/// Score picker: two buttons per row, then cancel and home.
pub fn mood_scores() -> Keyboard {
    let keyboard = labels::MOOD_SCORES
        .chunks(2)
        .fold(Keyboard::new(), |keyboard, pair| keyboard.row(pair.iter().copied()));
    keyboard.row([labels::CANCEL]).row([labels::HOME])
}

/// Skip / cancel / home, used by the free-text steps.
pub fn skip() -> Keyboard {
    Keyboard::new()
        .row([labels::SKIP])
        .row([labels::CANCEL, labels::HOME])
}

pub fn tags() -> Keyboard {
    let keyboard = labels::TAG_ROWS
        .iter()
        .fold(Keyboard::new(), |keyboard, row| keyboard.row(row.iter().copied()));
    keyboard
        .row([labels::TAGS_DONE, labels::NO_TAGS])
        .row([labels::CANCEL, labels::HOME])
}

pub fn confirm() -> Keyboard {
    Keyboard::new()
        .row([labels::SAVE, labels::EDIT])
        .row([labels::DISCARD, labels::HOME])
}

pub fn history() -> Keyboard {
    Keyboard::new()
        .row([labels::WEEK, labels::CHART])
        .row([labels::RECENT_ENTRIES, labels::STATISTICS])
        .row([labels::HOME])
}

pub fn support() -> Keyboard {
    Keyboard::new()
        .row([labels::OPEN_SBP, labels::OPEN_CARD])
        .row([labels::SHARE, labels::LEAVE_FEEDBACK])
        .row([labels::HOME])
}
