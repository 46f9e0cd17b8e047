use anyhow::{Result, bail};
use reminder_config::SettingsStore;
use reminder_engine::{Command, Host};
use reminder_tokens::EstimateSource;
use std::path::PathBuf;

use super::{reminder_for, terminal_host};

/// `context-reminder.checkTokens` against `file`
pub fn check(store: &SettingsStore, file: PathBuf) -> Result<()> {
    run(store, Command::CheckTokens.id(), Some(file))
}

/// Run a registered command by id
pub fn run(store: &SettingsStore, id: &str, file: Option<PathBuf>) -> Result<()> {
    let Some(command) = Command::from_id(id) else {
        bail!("Unknown command: {id}");
    };

    let mut host = terminal_host(store);
    if let Some(file) = file {
        host = host.with_document(file);
    }

    let mut reminder = reminder_for(&mut host)?;
    reminder.dispatch(&mut host, command.into())?;
    Ok(())
}

pub fn count(store: &SettingsStore, file: PathBuf) -> Result<()> {
    let mut host = terminal_host(store).with_document(&file);
    let reminder = reminder_for(&mut host)?;
    let Some(document) = host.active_document()? else {
        bail!("Could not open {}", file.display());
    };

    let config = reminder.config();
    let estimate = reminder
        .estimator()
        .estimate_detailed(document.text(), &config.model, config.policy);

    let method = match estimate.source {
        EstimateSource::Tokenizer => "tokenizer",
        EstimateSource::CharacterFallback => "character estimate",
        EstimateSource::Empty => "empty",
    };

    println!("{}", document.id);
    println!("  Tokens: {} ({})", estimate.count, method);
    println!("  Model: {}", config.model);
    println!("  Limit: {}", config.token_limit);

    Ok(())
}
