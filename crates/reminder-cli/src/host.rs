//! Terminal stand-in for the editor host

use anyhow::Result;
use reminder_config::SettingsStore;
use reminder_core::{
    ConfigurationChange, DocumentId, DocumentSnapshot, ExtensionConfig, SettingUpdate,
    validate_token_limit,
};
use reminder_engine::Host;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Host whose active document is a file and whose notifications go to the terminal
pub struct TerminalHost {
    store: SettingsStore,
    document: Option<PathBuf>,
    limit_input: Option<String>,
}

impl TerminalHost {
    pub fn new(store: SettingsStore) -> Self {
        Self {
            store,
            document: None,
            limit_input: None,
        }
    }

    pub fn with_document(mut self, path: impl Into<PathBuf>) -> Self {
        self.document = Some(path.into());
        self
    }

    /// Answer the next limit prompt with `input` instead of asking on stdin
    pub fn with_limit_input(mut self, input: Option<String>) -> Self {
        self.limit_input = input;
        self
    }
}

pub fn document_id(path: &Path) -> DocumentId {
    DocumentId::new(path.display().to_string())
}

impl Host for TerminalHost {
    fn read_configuration(&mut self) -> Result<ExtensionConfig> {
        Ok(self.store.load()?)
    }

    fn update_setting(&mut self, update: SettingUpdate) -> Result<ConfigurationChange> {
        Ok(self.store.update(&update)?)
    }

    fn active_document(&mut self) -> Result<Option<DocumentSnapshot>> {
        let Some(path) = &self.document else {
            return Ok(None);
        };
        let bytes = std::fs::read(path)?;
        Ok(Some(DocumentSnapshot::from_bytes(document_id(path), bytes)))
    }

    fn show_warning(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn show_information(&mut self, message: &str) {
        println!("{message}");
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("✗ {message}");
    }

    fn prompt_token_limit(&mut self, current: i64) -> Result<Option<i64>> {
        if let Some(input) = self.limit_input.take() {
            return Ok(Some(validate_token_limit(&input)?));
        }

        let stdin = io::stdin();
        let stdout = io::stdout();
        Ok(prompt_limit(&mut stdin.lock(), &mut stdout.lock(), current)?)
    }
}

/// Ask until the answer is a positive integer. Empty input or EOF dismisses.
pub fn prompt_limit<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    current: i64,
) -> io::Result<Option<i64>> {
    loop {
        write!(output, "Digite o novo limite de tokens (atual: {current}): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim().is_empty() {
            return Ok(None);
        }

        match validate_token_limit(&line) {
            Ok(limit) => return Ok(Some(limit)),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}
