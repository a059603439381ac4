//! Configuration service implementation.
//!
//! Loads `AppConfig` from `config.toml` (by default
//! `~/.config/soulnote/config.toml`) and applies the overrides that come
//! from outside the file: the bot token environment variable and the
//! `--data-dir` flag.

use crate::paths::SoulnotePaths;
use soulnote_core::config::AppConfig;
use soulnote_core::error::{Result, SoulnoteError};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `telegram.token`.
pub const TOKEN_ENV: &str = "SOULNOTE_BOT_TOKEN";

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// An explicitly requested file must exist.
    explicit: bool,
}

impl ConfigService {
    /// Uses `path` when given, otherwise the default config file location.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self {
                path,
                explicit: true,
            }),
            None => Ok(Self {
                path: SoulnotePaths::config_file()?,
                explicit: false,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration file.
    ///
    /// A missing or empty default file yields `AppConfig::default()`.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file does not exist, or if the
    /// file cannot be read or parsed.
    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            if self.explicit {
                return Err(SoulnoteError::config(format!(
                    "config file not found: {}",
                    self.path.display()
                )));
            }
            tracing::debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        let config: AppConfig = toml::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), "Loaded config");
        Ok(config)
    }

    /// Loads the file and applies the token from [`TOKEN_ENV`].
    pub fn load_with_env(&self) -> Result<AppConfig> {
        let mut config = self.load()?;
        apply_token_override(&mut config, std::env::var(TOKEN_ENV).ok());
        Ok(config)
    }
}

/// Replaces the configured token with `token` when it is non-blank.
pub fn apply_token_override(config: &mut AppConfig, token: Option<String>) {
    if let Some(token) = token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) {
        config.telegram.token = Some(token);
    }
}

/// Picks the journal directory: the override, then `storage.data_dir`, then
/// the platform default.
pub fn resolve_data_dir(config: &AppConfig, override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.or_else(|| config.storage.data_dir.clone()) {
        return Ok(dir);
    }
    Ok(SoulnotePaths::data_dir()?)
}
