pub mod config;
pub mod dialogue;
pub mod entry;
pub mod error;
pub mod history;
pub mod incoming;
pub mod menu;
pub mod reply;
pub mod session;
pub mod slash_command;

// Re-export common error type
pub use error::{Result, SoulnoteError};
pub use incoming::IncomingMessage;
pub use reply::{Keyboard, Reply};
