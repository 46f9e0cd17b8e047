pub mod check;
pub mod settings;
pub mod watch;

use anyhow::Result;
use reminder_config::SettingsStore;
use reminder_engine::{Host, Reminder};
use reminder_tokens::TokenEstimator;

use crate::host::TerminalHost;

/// Build a reminder from the current settings without running the activation check
pub fn reminder_for(host: &mut TerminalHost) -> Result<Reminder> {
    let config = host.read_configuration()?;
    Ok(Reminder::new(config, TokenEstimator::new()))
}

pub fn terminal_host(store: &SettingsStore) -> TerminalHost {
    TerminalHost::new(store.clone())
}
