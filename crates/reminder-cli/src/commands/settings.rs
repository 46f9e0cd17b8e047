use anyhow::Result;
use reminder_config::SettingsStore;
use reminder_engine::Command;

use super::{reminder_for, terminal_host};

pub fn toggle_model(store: &SettingsStore) -> Result<()> {
    let mut host = terminal_host(store);
    let mut reminder = reminder_for(&mut host)?;
    reminder.dispatch(&mut host, Command::ToggleModel.into())?;
    Ok(())
}

pub fn set_limit(store: &SettingsStore, value: Option<String>) -> Result<()> {
    let mut host = terminal_host(store).with_limit_input(value);
    let mut reminder = reminder_for(&mut host)?;
    reminder.dispatch(&mut host, Command::SetTokenLimit.into())?;
    Ok(())
}

pub fn show(store: &SettingsStore) -> Result<()> {
    let config = store.load()?;

    println!("Settings: {}", store.path().display());
    println!("  model: {}", config.model);
    println!("  tokenLimit: {}", config.token_limit);
    println!("  claudeDiscount: {}", config.policy.claude_discount);
    println!("  discountFallback: {}", config.policy.discount_fallback);

    Ok(())
}
