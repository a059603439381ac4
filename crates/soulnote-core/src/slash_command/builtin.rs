//! Builtin slash commands understood by the bot.
//!
//! The table is loaded once and shared by the router and the help text.

use serde::Serialize;
use std::sync::OnceLock;

/// What a builtin command does once recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    /// Show the welcome banner and the main menu.
    Start,
    /// Return to the main menu.
    Menu,
    /// Start a mood diary entry.
    Diary,
    /// List available commands.
    Help,
}

/// A builtin slash command provided by the system.
#[derive(Debug, Clone, Serialize)]
pub struct BuiltinSlashCommand {
    /// Command name (without the leading /)
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    pub kind: CommandKind,
}

impl BuiltinSlashCommand {
    /// Creates a new builtin slash command.
    pub const fn new(name: &'static str, description: &'static str, kind: CommandKind) -> Self {
        Self {
            name,
            description,
            kind,
        }
    }
}

/// Static storage for builtin commands (initialized once).
static BUILTIN_COMMANDS: OnceLock<Vec<BuiltinSlashCommand>> = OnceLock::new();

/// Returns a reference to all builtin slash commands.
pub fn builtin_commands() -> &'static [BuiltinSlashCommand] {
    BUILTIN_COMMANDS.get_or_init(|| {
        vec![
            BuiltinSlashCommand::new("start", "Open the main menu", CommandKind::Start),
            BuiltinSlashCommand::new("menu", "Return to the main menu", CommandKind::Menu),
            BuiltinSlashCommand::new("diary", "Record how you feel today", CommandKind::Diary),
            BuiltinSlashCommand::new("help", "Show this list of commands", CommandKind::Help),
        ]
    })
}

/// Finds a builtin command by name (without the leading /).
pub fn find_builtin_command(name: &str) -> Option<&'static BuiltinSlashCommand> {
    builtin_commands().iter().find(|cmd| cmd.name == name)
}

/// Parses `text` as a slash command invocation.
///
/// Accepts the `/name@botname` form some clients send in group chats and
/// ignores anything after the first whitespace.
pub fn parse_command(text: &str) -> Option<&'static BuiltinSlashCommand> {
    let invocation = text.trim().strip_prefix('/')?;
    let word = invocation.split_whitespace().next()?;
    let name = word.split('@').next().unwrap_or(word);
    find_builtin_command(name)
}
