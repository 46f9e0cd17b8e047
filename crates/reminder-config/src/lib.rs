//! Persisted settings for context-reminder
//!
//! Settings live in a TOML file under a `[contextReminder]` table:
//!
//! ```toml
//! [contextReminder]
//! model = "claude"
//! tokenLimit = 2000
//! ```
//!
//! Other tables in the same file are left untouched on write.

mod watch;

pub use watch::SettingsWatcher;

use reminder_core::{
    CONFIG_SECTION, ConfigurationChange, EstimationPolicy, ExtensionConfig, ModelId, SettingUpdate,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not write settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("`{0}` must be a table")]
    NotATable(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// The `[contextReminder]` table as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettings {
    #[serde(default)]
    pub model: ModelId,

    #[serde(default = "default_token_limit")]
    pub token_limit: i64,

    #[serde(default = "default_true")]
    pub claude_discount: bool,

    #[serde(default)]
    pub discount_fallback: bool,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            model: ModelId::default(),
            token_limit: default_token_limit(),
            claude_discount: true,
            discount_fallback: false,
        }
    }
}

impl From<ReminderSettings> for ExtensionConfig {
    fn from(settings: ReminderSettings) -> Self {
        Self {
            model: settings.model,
            token_limit: settings.token_limit,
            policy: EstimationPolicy {
                claude_discount: settings.claude_discount,
                discount_fallback: settings.discount_fallback,
            },
        }
    }
}

fn default_token_limit() -> i64 {
    reminder_core::config::DEFAULT_TOKEN_LIMIT
}

fn default_true() -> bool {
    true
}

/// File-backed settings store (the global settings scope)
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform config directory
    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    /// Get default settings file path
    pub fn default_path() -> PathBuf {
        if let Some(dirs) =
            directories::ProjectDirs::from("com", "context-reminder", "context-reminder")
        {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.context-reminder/config.toml")
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read both fields together. A missing file or key falls back to defaults.
    pub fn load(&self) -> Result<ExtensionConfig> {
        let table = self.read_table()?;
        let settings = match table.get(CONFIG_SECTION) {
            Some(section @ toml::Value::Table(_)) => {
                section.clone().try_into::<ReminderSettings>()?
            }
            Some(_) => return Err(ConfigError::NotATable(CONFIG_SECTION.to_string())),
            None => ReminderSettings::default(),
        };
        Ok(ExtensionConfig::from(settings))
    }

    /// Write one setting, keeping everything else in the file
    pub fn update(&self, update: &SettingUpdate) -> Result<ConfigurationChange> {
        let mut table = self.read_table()?;

        let section = table
            .entry(CONFIG_SECTION)
            .or_insert_with(|| toml::Value::Table(toml::Table::new()));
        let toml::Value::Table(section) = section else {
            return Err(ConfigError::NotATable(CONFIG_SECTION.to_string()));
        };

        let value = match update {
            SettingUpdate::Model(model) => toml::Value::String(model.as_str().to_string()),
            SettingUpdate::TokenLimit(limit) => toml::Value::Integer(*limit),
        };
        section.insert(update.key().name().to_string(), value);

        self.write_table(&table)?;
        tracing::debug!(path = %self.path.display(), key = %update.key(), "Setting updated");

        Ok(ConfigurationChange::new([update.key().qualified()]))
    }

    pub(crate) fn read_table(&self) -> Result<toml::Table> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.parse::<toml::Table>()?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(toml::Table::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_table(&self, table: &toml::Table) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(table)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
