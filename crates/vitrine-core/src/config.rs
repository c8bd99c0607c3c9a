//! Configuration management for vitrine.
//!
//! Loads configuration from ${VITRINE_HOME}/config.toml with sensible
//! defaults. The file is optional; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Animation timing knobs.
///
/// All values are milliseconds. Zero disables the animation in question:
/// counters complete instantly, copy feedback never shows, lines reveal
/// all at once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationConfig {
    /// How long a metric counter takes to reach its target.
    pub count_up_ms: u64,
    /// How long the "copied" indicator stays visible.
    pub copy_feedback_ms: u64,
    /// Delay between consecutive line reveals after a tab switch.
    pub reveal_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            count_up_ms: 2_000,
            copy_feedback_ms: 2_000,
            reveal_ms: 40,
        }
    }
}

impl AnimationConfig {
    pub fn count_up(&self) -> Duration {
        Duration::from_millis(self.count_up_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn reveal(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Optional path to a page-content TOML file.
    pub content: Option<PathBuf>,
    /// Animation timings.
    pub animation: AnimationConfig,
    /// Default tracing filter when RUST_LOG is not set.
    pub log_filter: Option<String>,
}

impl Config {
    /// Loads configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the default config template to the default location.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn init(force: bool) -> Result<PathBuf> {
        let path = paths::config_path();
        Self::init_at(&path, force)?;
        Ok(path)
    }

    /// Writes the default config template to a specific path.
    pub fn init_at(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            anyhow::bail!(
                "config already exists at {} (use --force to overwrite)",
                path.display()
            );
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, DEFAULT_TEMPLATE)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }
}

/// Template written by `vitrine config init`.
const DEFAULT_TEMPLATE: &str = r#"# vitrine configuration

# Path to a page-content TOML file (omit for the built-in page).
# content = "page.toml"

# Tracing filter used when RUST_LOG is not set.
# log_filter = "info"

[animation]
# Metric counter duration in milliseconds.
count_up_ms = 2000
# How long the "copied" indicator stays visible.
copy_feedback_ms = 2000
# Delay between consecutive line reveals after a tab switch.
reveal_ms = 40
"#;

pub mod paths {
    //! Path resolution for vitrine configuration and log directories.
    //!
    //! VITRINE_HOME resolution order:
    //! 1. VITRINE_HOME environment variable (if set)
    //! 2. ~/.config/vitrine (default)

    use std::path::PathBuf;

    /// Returns the vitrine home directory.
    pub fn vitrine_home() -> PathBuf {
        if let Ok(home) = std::env::var("VITRINE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("vitrine"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        vitrine_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn log_dir() -> PathBuf {
        vitrine_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.animation.count_up_ms, 2_000);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[animation]\ncount_up_ms = 500\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.animation.count_up_ms, 500);
        assert_eq!(config.animation.copy_feedback_ms, 2_000);
    }

    #[test]
    fn parse_error_carries_path_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not valid toml [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn template_round_trips() {
        let config: Config = toml::from_str(DEFAULT_TEMPLATE).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::init_at(&path, false).unwrap();
        assert!(Config::init_at(&path, false).is_err());
        assert!(Config::init_at(&path, true).is_ok());
    }
}
