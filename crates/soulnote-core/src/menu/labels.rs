//! Button labels. The client sends the label text back verbatim, so these
//! strings double as the router's input vocabulary.

// Main menu
pub const DIARY: &str = "📓 Diary";
pub const ANALYSIS: &str = "📊 Analysis";
pub const GRATITUDE: &str = "✨ Gratitude";
pub const HABITS: &str = "🔄 Habits";
pub const GPS: &str = "🧭 GPS";
pub const CAPSULES: &str = "💌 Capsules";
pub const SETTINGS: &str = "⚙️ Settings";
pub const HELP: &str = "🆘 Help";
pub const EXPORT: &str = "📤 Export";
pub const SUPPORT: &str = "❤️ Support the project";

// Navigation
pub const HOME: &str = "🏠 Main menu";
pub const CANCEL: &str = "🚫 Cancel";
pub const DISCARD: &str = "🚫 Discard";
pub const SKIP: &str = "⏭ Skip";

// Tag picking
pub const TAGS_DONE: &str = "✅ Done";
pub const NO_TAGS: &str = "⏭ No tags";

// Confirmation
pub const SAVE: &str = "✅ Yes, save";
pub const EDIT: &str = "✏️ Edit";

// Analysis menu
pub const WEEK: &str = "📅 This week";
pub const CHART: &str = "📊 Chart";
pub const RECENT_ENTRIES: &str = "📋 Recent entries";
pub const STATISTICS: &str = "📈 Statistics";

// Support panel
pub const OPEN_SBP: &str = "📱 Open SBP";
pub const OPEN_CARD: &str = "💳 Open card transfer";
pub const SHARE: &str = "📢 Share with a friend";
pub const LEAVE_FEEDBACK: &str = "📝 Leave feedback";

/// Mood score buttons, lowest first.
pub const MOOD_SCORES: [&str; 10] = [
    "1 😔", "2 🙁", "3 😐", "4 🙂", "5 😊", "6 🤩", "7 🌈", "8 ✨", "9 🌟", "10 💫",
];

/// Tag catalogue as laid out on the tag keyboard.
pub const TAG_ROWS: [[&str; 3]; 9] = [
    ["Work", "Study", "Finance"],
    ["Family", "Friends", "Relationships"],
    ["Health", "Sleep", "Sport"],
    ["Stress", "Anxiety", "Fatigue"],
    ["Joy", "Calm", "Inspiration"],
    ["Nature", "Hobby", "Creativity"],
    ["Success", "Goals", "Growth"],
    ["Loneliness", "Conflict", "Change"],
    ["Gratitude", "Love", "Hope"],
];

/// True for both cancel buttons (flow steps use `CANCEL`, previews use `DISCARD`).
pub fn is_cancel(text: &str) -> bool {
    text == CANCEL || text == DISCARD
}
