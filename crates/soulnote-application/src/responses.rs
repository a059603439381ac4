//! Fixed replies and the formatting of history views.
//!
//! Every function here is pure: it only turns data into a [`Reply`].

use soulnote_core::config::SupportConfig;
use soulnote_core::entry::{MoodEntry, MoodScore};
use soulnote_core::history::{MoodStatistics, StatisticsResult};
use soulnote_core::menu::{keyboards, labels, Placeholder};
use soulnote_core::slash_command::builtin_commands;
use soulnote_core::Reply;

const NOTE_PREVIEW_CHARS: usize = 50;
const RECENT_DATE_FORMAT: &str = "%d.%m %H:%M";

pub fn welcome(first_name: &str) -> Reply {
    Reply::text(format!(
        "╭─────────────────────────────╮\n\
         │        🌿 SOULNOTE          │\n\
         │    Self-reflection diary    │\n\
         ╰─────────────────────────────╯\n\n\
         Hi, {}!\n\
         Your well-being is our priority.\n\n\
         What shall we explore today?",
        first_name
    ))
    .with_keyboard(keyboards::main_menu())
}

pub fn returning_home() -> Reply {
    Reply::text("Returning to the main menu...").with_keyboard(keyboards::main_menu())
}

pub fn fallback() -> Reply {
    Reply::text(
        "🤔 I did not quite understand that message.\n\n\
         Please use the menu buttons at the bottom of the screen,\n\
         or send /start to open the main menu.",
    )
    .with_keyboard(keyboards::main_menu())
}

pub fn help() -> Reply {
    let commands: Vec<String> = builtin_commands()
        .iter()
        .map(|command| format!("/{} - {}", command.name, command.description))
        .collect();
    Reply::text(format!(
        "🆘 How can I help?\n\n\
         Use the buttons below to keep your diary.\n\n\
         Commands:\n{}",
        commands.join("\n")
    ))
    .with_keyboard(keyboards::main_menu())
}

pub fn placeholder(section: Placeholder) -> Reply {
    let text = match section {
        Placeholder::Habits => "🔄 Opening the habit tracker...",
        Placeholder::Gps => "🧭 Starting the emotional GPS...",
        Placeholder::Capsules => "💌 Heading to the time capsules...",
        Placeholder::Settings => "⚙️ Opening settings...",
        Placeholder::Export => "📤 Preparing your data export...",
    };
    Reply::text(text)
}

pub fn week_coming_soon() -> Reply {
    Reply::text(
        "📅 This week\n\n\
         This section is coming soon!\n\
         It will show your mood over the last 7 days.",
    )
}

pub fn chart_coming_soon() -> Reply {
    Reply::text(
        "📊 Chart\n\n\
         A chart of your mood by day\n\
         is coming soon!",
    )
}

// ============================================================================
// History
// ============================================================================

pub fn no_entries_yet() -> Reply {
    Reply::text(format!(
        "📭 You have no diary entries yet.\n\n\
         Start with the {} button and make your first entry!",
        labels::DIARY
    ))
    .with_keyboard(keyboards::main_menu())
}

pub fn analysis_overview(stats: &MoodStatistics) -> Reply {
    Reply::text(format!(
        "📖 Your diary\n\n\
         Entries: {}\n\
         Average mood: {:.1}/10 {}\n\n\
         What would you like to see?",
        stats.total,
        stats.mean,
        MoodScore::emoji_for_mean(stats.mean)
    ))
    .with_keyboard(keyboards::history())
}

pub fn recent_entries(entries: &[MoodEntry]) -> Reply {
    if entries.is_empty() {
        return Reply::text("No entries found.").with_keyboard(keyboards::history());
    }

    let mut text = String::from("📝 Recent entries:\n\n");
    for (index, entry) in entries.iter().enumerate() {
        text.push_str(&format!(
            "{}. {}\n{} Mood: {}/10\n",
            index + 1,
            entry.timestamp.format(RECENT_DATE_FORMAT),
            entry.score.emoji(),
            entry.score
        ));
        if let Some(note) = entry.note.as_deref().filter(|note| !note.is_empty()) {
            text.push_str(&format!("📝 {}\n", truncate_note(note)));
        }
        if !entry.tags.is_empty() {
            text.push_str(&format!("🏷️ {}\n", entry.tags.join(", ")));
        }
        text.push('\n');
    }

    Reply::text(text.trim_end().to_string()).with_keyboard(keyboards::history())
}

pub fn statistics(result: &StatisticsResult) -> Reply {
    let stats = match result {
        StatisticsResult::Ready(stats) => stats,
        StatisticsResult::InsufficientData => {
            return Reply::text("Not enough data for statistics.")
                .with_keyboard(keyboards::history());
        }
    };

    let (mode_score, mode_count) = stats.mode;
    let mut text = format!(
        "📊 Your statistics\n\n\
         Entries: {}\n\
         Average mood: {:.1}/10 {}\n\
         Most often: {}/10 ({} times)\n\n\
         Distribution:\n",
        stats.total,
        stats.mean,
        MoodScore::emoji_for_mean(stats.mean),
        mode_score,
        mode_count
    );
    for row in stats.chart() {
        text.push_str(&format!(
            "{:>2}/10: {} {} entries\n",
            row.score.value(),
            "█".repeat(row.bar_length),
            row.count
        ));
    }

    Reply::text(text.trim_end().to_string()).with_keyboard(keyboards::history())
}

/// Shortens a note to at most 50 characters, ending in "..." when cut.
pub fn truncate_note(note: &str) -> String {
    if note.chars().count() <= NOTE_PREVIEW_CHARS {
        return note.to_string();
    }
    let kept: String = note.chars().take(NOTE_PREVIEW_CHARS - 3).collect();
    format!("{}...", kept)
}

// ============================================================================
// Failures
// ============================================================================

pub fn save_failed() -> Reply {
    Reply::text(
        "😔 Something went wrong while saving your entry.\n\
         Please try again later.",
    )
    .with_keyboard(keyboards::main_menu())
}

pub fn history_failed() -> Reply {
    Reply::text("😔 Could not read your diary right now. Please try again later.")
        .with_keyboard(keyboards::main_menu())
}

// ============================================================================
// Support and feedback
// ============================================================================

pub fn support_panel(support: &SupportConfig) -> Reply {
    let mut text = String::from(
        "❤️ Support SoulNote\n\n\
         This project is built with love and the belief that it helps people \
         find balance and understand themselves better.\n\n\
         Your support helps to:\n\
         • develop the bot and add new features\n\
         • create content about mental health\n\
         • keep the bot available to everyone\n\n",
    );

    if support.phone.is_some() || support.card.is_some() {
        text.push_str("Ways to support:\n");
        if let Some(phone) = &support.phone {
            text.push_str(&format!("📱 SBP transfer by phone: {}\n", phone));
        }
        if let Some(card) = &support.card {
            text.push_str(&format!("💳 Card transfer: {}\n", card));
        }
        text.push('\n');
    }

    text.push_str(
        "🎁 Free ways to help:\n\
         • tell your friends about the bot\n\
         • leave feedback and suggestions\n\n\
         Thank you for believing in this project! 🌱",
    );
    Reply::text(text).with_keyboard(keyboards::support())
}

pub fn open_sbp(support: &SupportConfig) -> Reply {
    match &support.phone {
        Some(phone) => Reply::text(format!(
            "📱 SBP transfer\n\n\
             1. Open your banking app\n\
             2. Choose \"Transfer by phone number\"\n\
             3. Enter the number: {}\n\
             4. Enter the amount and confirm\n\n\
             Thank you for your support! 💖",
            phone
        )),
        None => Reply::text("📱 SBP transfers are not configured yet."),
    }
}

pub fn open_card(support: &SupportConfig) -> Reply {
    match &support.card {
        Some(card) => Reply::text(format!(
            "💳 Card transfer\n\n\
             Card number: {}\n\n\
             You can transfer through your bank's website or mobile app.\n\n\
             Thank you for your trust and support! 🙏",
            card
        )),
        None => Reply::text("💳 Card transfers are not configured yet."),
    }
}

pub fn share(support: &SupportConfig) -> Reply {
    let try_line = support
        .bot_handle
        .as_deref()
        .map(|handle| format!("Try it: {}\n\n", handle))
        .unwrap_or_default();
    Reply::text(format!(
        "📢 Share with a friend\n\n\
         Here is a text you can forward:\n\n\
         ---\n\
         Hi! I want to share a great bot for tracking mood and mental health:\n\n\
         🌿 SoulNote, your personal harmony diary\n\n\
         What it can do:\n\
         • keep a mood diary with analytics\n\
         • track emotions and triggers\n\
         • practise gratitude every day\n\n\
         The bot is free and easy to use!\n\
         {}\
         ---\n\n\
         Just copy it and send it to a friend! 📲",
        try_line
    ))
}

pub fn feedback_prompt() -> Reply {
    Reply::text(format!(
        "📝 Leave feedback\n\n\
         Your opinion matters a lot!\n\n\
         Tell me what you like about the bot, what could be better, \
         or which features you would like to see.\n\n\
         Just send a message with your feedback.\n\n\
         (To cancel, send /start or tap {})",
        labels::HOME
    ))
}

pub fn feedback_saved() -> Reply {
    Reply::text(
        "💌 Feedback saved!\n\n\
         Thank you so much for your opinion! 🙏\n\
         It helps make SoulNote better every day. 🌱",
    )
    .with_keyboard(keyboards::main_menu())
}

pub fn feedback_failed() -> Reply {
    Reply::text(
        "😔 Something went wrong while saving your feedback.\n\
         Please send it again or try later.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use soulnote_core::entry::UserId;

    fn entry(score: u8, note: Option<&str>, tags: &[&str]) -> MoodEntry {
        MoodEntry {
            timestamp: NaiveDate::from_ymd_opt(2026, 10, 18)
                .unwrap()
                .and_hms_opt(21, 30, 0)
                .unwrap(),
            user_id: UserId(1),
            score: MoodScore::new(score).unwrap(),
            note: note.map(str::to_string),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    fn ready(values: &[u8]) -> MoodStatistics {
        let scores: Vec<MoodScore> = values.iter().map(|v| MoodScore::new(*v).unwrap()).collect();
        match MoodStatistics::from_scores(&scores) {
            StatisticsResult::Ready(stats) => stats,
            StatisticsResult::InsufficientData => panic!("expected statistics"),
        }
    }

    #[test]
    fn test_truncate_note() {
        assert_eq!(truncate_note("short"), "short");
        let exact = "x".repeat(50);
        assert_eq!(truncate_note(&exact), exact);
        let long = "é".repeat(60);
        let truncated = truncate_note(&long);
        assert_eq!(truncated.chars().count(), 50);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_recent_entries_format() {
        let reply = recent_entries(&[
            entry(7, Some("Productive day"), &["Work", "Growth"]),
            entry(3, None, &[]),
        ]);
        assert!(reply.text.contains("1. 18.10 21:30"));
        assert!(reply.text.contains("🌈 Mood: 7/10"));
        assert!(reply.text.contains("📝 Productive day"));
        assert!(reply.text.contains("🏷️ Work, Growth"));
        assert!(reply.text.contains("2. 18.10 21:30\n😐 Mood: 3/10"));
        assert_eq!(reply.keyboard, Some(keyboards::history()));
    }

    #[test]
    fn test_statistics_text() {
        let reply = statistics(&StatisticsResult::Ready(ready(&[5, 5, 7, 9])));
        assert!(reply.text.contains("Entries: 4"));
        assert!(reply.text.contains("Average mood: 6.5/10 🤩"));
        assert!(reply.text.contains("Most often: 5/10 (2 times)"));
        assert!(reply.text.contains(" 5/10: █████ 2 entries"));
        assert!(reply.text.contains("10/10:  0 entries"));
    }

    #[test]
    fn test_insufficient_statistics() {
        let reply = statistics(&StatisticsResult::InsufficientData);
        assert_eq!(reply.text, "Not enough data for statistics.");
    }

    #[test]
    fn test_support_details_come_from_config() {
        let empty = SupportConfig::default();
        assert!(open_sbp(&empty).text.contains("not configured"));
        assert!(open_card(&empty).text.contains("not configured"));
        assert!(!share(&empty).text.contains("Try it"));

        let configured = SupportConfig {
            phone: Some("+1 555 0100".to_string()),
            card: Some("0000 1111 2222 3333".to_string()),
            bot_handle: Some("@SoulNoteBot".to_string()),
        };
        assert!(open_sbp(&configured).text.contains("+1 555 0100"));
        assert!(open_card(&configured).text.contains("0000 1111 2222 3333"));
        assert!(share(&configured).text.contains("Try it: @SoulNoteBot"));
        let panel = support_panel(&configured);
        assert!(panel.text.contains("+1 555 0100"));
        assert_eq!(panel.keyboard, Some(keyboards::support()));
    }

    #[test]
    fn test_help_lists_commands() {
        let reply = help();
        for command in ["/start", "/menu", "/diary", "/help"] {
            assert!(reply.text.contains(command), "missing {}", command);
        }
    }
}
