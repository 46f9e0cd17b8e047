//! Change detection for the settings file

use std::collections::BTreeSet;

use reminder_core::{CONFIG_SECTION, ConfigurationChange};

use crate::{Result, SettingsStore};

/// Compares successive reads of the settings file and reports which keys moved.
///
/// Keys inside `[contextReminder]` are reported fully qualified
/// (`contextReminder.tokenLimit`); any other top-level entry is reported by
/// its own name.
pub struct SettingsWatcher {
    store: SettingsStore,
    last: toml::Table,
}

impl SettingsWatcher {
    /// Take an initial reading of the store
    pub fn new(store: SettingsStore) -> Result<Self> {
        let last = store.read_table()?;
        Ok(Self { store, last })
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Re-read the file; `None` when nothing changed since the last poll
    pub fn poll(&mut self) -> Result<Option<ConfigurationChange>> {
        let current = self.store.read_table()?;
        let keys = changed_keys(&self.last, &current);
        self.last = current;

        if keys.is_empty() {
            return Ok(None);
        }
        tracing::debug!(?keys, "Settings file changed");
        Ok(Some(ConfigurationChange::new(keys)))
    }
}

fn changed_keys(old: &toml::Table, new: &toml::Table) -> Vec<String> {
    let mut keys = BTreeSet::new();

    let empty = toml::Table::new();
    let old_section = section(old).unwrap_or(&empty);
    let new_section = section(new).unwrap_or(&empty);
    for key in old_section.keys().chain(new_section.keys()) {
        if old_section.get(key) != new_section.get(key) {
            keys.insert(format!("{CONFIG_SECTION}.{key}"));
        }
    }

    for key in old.keys().chain(new.keys()) {
        if key == CONFIG_SECTION {
            continue;
        }
        if old.get(key) != new.get(key) {
            keys.insert(key.clone());
        }
    }

    keys.into_iter().collect()
}

fn section(table: &toml::Table) -> Option<&toml::Table> {
    table.get(CONFIG_SECTION).and_then(toml::Value::as_table)
}
