//! Slash commands recognized by the menu router.

pub mod builtin;

pub use builtin::{builtin_commands, find_builtin_command, parse_command, BuiltinSlashCommand, CommandKind};
