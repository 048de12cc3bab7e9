//! Configuration management for comment-widget

use crate::error::{CwError, Result};
use crate::seed::{SeedData, DEFAULT_USERNAME};
use crate::types::{AvatarImage, User};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Identity of the person using the widget
    pub user: UserConfig,
    /// Where the initial comment tree comes from
    pub seed: SeedConfig,
    /// UI settings
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CwError::Config(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load `path` (or the default location); a missing file gives defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path(),
        };

        if path.exists() {
            Self::load(&path)
        } else {
            debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Write configuration as TOML, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Default config file location
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "comment-widget", "comment-widget")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| home_fallback().join("config.toml"))
    }

    /// Directory for log files and other runtime output
    pub fn data_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "comment-widget", "comment-widget")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(home_fallback)
    }

    /// Pick the current user
    ///
    /// Order: explicit override, `[user]` section, the seed's `currentUser`,
    /// then the built-in default.
    pub fn resolve_current_user(&self, username_override: Option<&str>, seed: &SeedData) -> User {
        if let Some(name) = username_override {
            return self.user.to_user(name);
        }
        if let Some(name) = &self.user.username {
            return self.user.to_user(name);
        }
        if let Some(user) = &seed.current_user {
            return user.clone();
        }
        User::with_conventional_avatar(DEFAULT_USERNAME)
    }
}

fn home_fallback() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".comment-widget")
}

/// `[user]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Username of the current user
    pub username: Option<String>,
    /// Avatar PNG path; derived from the username when unset
    pub avatar_png: Option<String>,
    /// Avatar WebP path; derived from the username when unset
    pub avatar_webp: Option<String>,
}

impl UserConfig {
    fn to_user(&self, username: &str) -> User {
        let conventional = AvatarImage::for_username(username);
        User::new(
            username,
            AvatarImage {
                png: self.avatar_png.clone().unwrap_or(conventional.png),
                webp: self.avatar_webp.clone().unwrap_or(conventional.webp),
            },
        )
    }
}

/// `[seed]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Seed JSON file; the built-in dataset is used when unset
    pub path: Option<PathBuf>,
}

/// `[ui]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme ("default" or "mono")
    pub theme: String,
    /// Input poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Indentation of replies, in columns
    pub reply_indent: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            tick_rate_ms: 100,
            reply_indent: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.user.username.is_none());
        assert!(config.seed.path.is_none());
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.reply_indent, 4);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.user.username = Some("bob".to_string());
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[user]"));
        assert!(toml.contains("[ui]"));

        let config2: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config2.user.username.as_deref(), Some("bob"));
        assert_eq!(config2.ui.theme, "default");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[ui]\ntheme = \"mono\"\n").unwrap();
        assert_eq!(config.ui.theme, "mono");
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.seed.path = Some(PathBuf::from("seed.json"));
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.seed.path, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui\n").unwrap();
        assert!(matches!(Config::load(&path), Err(CwError::Config(_))));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(Some(&dir.path().join("none.toml"))).unwrap();
        assert_eq!(config.ui.theme, "default");
    }

    #[test]
    fn test_resolve_current_user_order() {
        let seed = SeedData::builtin().unwrap();
        let mut config = Config::default();

        assert_eq!(config.resolve_current_user(None, &seed).username, "juliusomo");
        assert_eq!(
            config
                .resolve_current_user(None, &SeedData::default())
                .username,
            DEFAULT_USERNAME
        );

        config.user.username = Some("alice".to_string());
        config.user.avatar_png = Some("me.png".to_string());
        let user = config.resolve_current_user(None, &seed);
        assert_eq!(user.username, "alice");
        assert_eq!(user.avatar.png, "me.png");
        assert_eq!(user.avatar.webp, "./images/avatars/image-alice.webp");

        assert_eq!(config.resolve_current_user(Some("bob"), &seed).username, "bob");
    }
}
