//! Unified path management for SoulNote files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/soulnote/          # Config directory
//! ├── config.toml              # Application configuration
//! └── logs/                    # Application logs
//!     └── soulnote.log.YYYY-MM-DD
//!
//! ~/.local/share/soulnote/     # Data directory (default storage.data_dir)
//! ├── mood_diary.txt
//! ├── gratitude_diary.txt
//! └── feedback.txt
//! ```

use soulnote_core::error::SoulnoteError;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "soulnote";

pub const MOOD_LOG_FILE: &str = "mood_diary.txt";
pub const GRATITUDE_LOG_FILE: &str = "gratitude_diary.txt";
pub const FEEDBACK_LOG_FILE: &str = "feedback.txt";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
    /// The platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for SoulnoteError {
    fn from(e: PathError) -> Self {
        SoulnoteError::config(e.to_string())
    }
}

pub struct SoulnotePaths;

impl SoulnotePaths {
    /// Returns the SoulNote configuration directory (e.g. `~/.config/soulnote/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the default journal directory (e.g. `~/.local/share/soulnote/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DataDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn log_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}

/// Locations of the three journal logs inside one data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalFiles {
    pub mood: PathBuf,
    pub gratitude: PathBuf,
    pub feedback: PathBuf,
}

impl JournalFiles {
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            mood: data_dir.join(MOOD_LOG_FILE),
            gratitude: data_dir.join(GRATITUDE_LOG_FILE),
            feedback: data_dir.join(FEEDBACK_LOG_FILE),
        }
    }
}
