mod cli;
mod commands;
mod host;

use anyhow::Result;
use clap::Parser;
use reminder_config::SettingsStore;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();

    // Watch mode logs its lifecycle; one-shot commands keep the terminal to the notifications
    let default_level = match cli.command {
        cli::Commands::Watch { .. } => "info",
        _ => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = match cli.config {
        Some(path) => SettingsStore::new(path),
        None => SettingsStore::open_default(),
    };

    match cli.command {
        cli::Commands::Check { file } => commands::check::check(&store, file)?,
        cli::Commands::Count { file } => commands::check::count(&store, file)?,
        cli::Commands::ToggleModel => commands::settings::toggle_model(&store)?,
        cli::Commands::SetLimit { value } => commands::settings::set_limit(&store, value)?,
        cli::Commands::Run { id, file } => commands::check::run(&store, &id, file)?,
        cli::Commands::Config => commands::settings::show(&store)?,
        cli::Commands::Watch { file, interval_ms } => {
            return commands::watch::handle(&store, file, interval_ms).await;
        }
    }

    Ok(ExitCode::SUCCESS)
}
