use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "context-reminder")]
#[command(about = "Warns when a document would overflow an LLM context window", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (default: platform config directory)
    #[arg(long, global = true, env = "CONTEXT_REMINDER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a document against the token limit
    Check {
        /// Document to check
        file: PathBuf,
    },

    /// Print the token estimate for a document
    Count {
        /// Document to count
        file: PathBuf,
    },

    /// Switch the model between claude and gpt
    ToggleModel,

    /// Set the token limit
    SetLimit {
        /// New limit (prompts when omitted)
        value: Option<String>,
    },

    /// Watch a document and warn whenever it goes over the limit
    Watch {
        /// Document to watch
        file: PathBuf,

        /// Polling interval in milliseconds
        #[arg(long, default_value = "500")]
        interval_ms: u64,
    },

    /// Run a command by its registered id (e.g. context-reminder.checkTokens)
    Run {
        /// Command id
        id: String,

        /// Active document
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Show the settings file and current values
    Config,
}
