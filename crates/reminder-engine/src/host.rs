//! Host services the reminder consumes

use anyhow::Result;
use reminder_core::{ConfigurationChange, DocumentSnapshot, ExtensionConfig, SettingUpdate};

/// Services provided by the editor (or whatever stands in for it)
pub trait Host {
    /// Read the `contextReminder` section from the settings store
    fn read_configuration(&mut self) -> Result<ExtensionConfig>;

    /// Persist a setting to the global scope
    fn update_setting(&mut self, update: SettingUpdate) -> Result<ConfigurationChange>;

    /// Current text of the active document, if there is one
    fn active_document(&mut self) -> Result<Option<DocumentSnapshot>>;

    fn show_warning(&mut self, message: &str);

    fn show_information(&mut self, message: &str);

    fn show_error(&mut self, message: &str);

    /// Ask the user for a new limit.
    ///
    /// Implementations validate input before returning it (positive integers
    /// only). `None` means the prompt was dismissed.
    fn prompt_token_limit(&mut self, current: i64) -> Result<Option<i64>>;
}
