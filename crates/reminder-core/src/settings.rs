//! Host-neutral names for settings and setting changes

use std::fmt;

use crate::CONFIG_SECTION;
use crate::model::ModelId;

/// Keys of the `contextReminder` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Model,
    TokenLimit,
    ClaudeDiscount,
    DiscountFallback,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::Model,
        SettingKey::TokenLimit,
        SettingKey::ClaudeDiscount,
        SettingKey::DiscountFallback,
    ];

    /// Key name inside the section, e.g. `tokenLimit`
    pub fn name(self) -> &'static str {
        match self {
            SettingKey::Model => "model",
            SettingKey::TokenLimit => "tokenLimit",
            SettingKey::ClaudeDiscount => "claudeDiscount",
            SettingKey::DiscountFallback => "discountFallback",
        }
    }

    /// Fully qualified name, e.g. `contextReminder.tokenLimit`
    pub fn qualified(self) -> String {
        format!("{}.{}", CONFIG_SECTION, self.name())
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A write to the global settings scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingUpdate {
    Model(ModelId),
    TokenLimit(i64),
}

impl SettingUpdate {
    pub fn key(&self) -> SettingKey {
        match self {
            SettingUpdate::Model(_) => SettingKey::Model,
            SettingUpdate::TokenLimit(_) => SettingKey::TokenLimit,
        }
    }
}

/// Set of fully qualified setting names touched by one change notification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationChange {
    keys: Vec<String>,
}

impl ConfigurationChange {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// True if `section` names a changed key or one of its parents
    pub fn affects_configuration(&self, section: &str) -> bool {
        self.keys.iter().any(|key| {
            key == section
                || key
                    .strip_prefix(section)
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }

    /// True if any key this component reads was touched
    pub fn affects_reminder(&self) -> bool {
        SettingKey::ALL
            .iter()
            .any(|key| self.affects_configuration(&key.qualified()))
    }
}
