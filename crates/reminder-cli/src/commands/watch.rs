//! Watch loop: the terminal equivalent of the editor's event stream
//!
//! Polls the document and the settings file on one task and feeds the
//! resulting events to the reminder in arrival order.

use anyhow::Result;
use reminder_config::{SettingsStore, SettingsWatcher};
use reminder_engine::{Event, Reminder};
use reminder_tokens::TokenEstimator;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, SystemTime};
use tokio::time::MissedTickBehavior;

use crate::host::{TerminalHost, document_id};

/// Detects edits to a file by its modification time and length
pub struct FileWatcher {
    path: PathBuf,
    stamp: Option<(SystemTime, u64)>,
}

impl FileWatcher {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            stamp: stamp(path),
        }
    }

    /// True when the file changed since the last poll
    pub fn poll(&mut self) -> bool {
        let current = stamp(&self.path);
        let changed = current != self.stamp;
        self.stamp = current;
        changed
    }
}

fn stamp(path: &Path) -> Option<(SystemTime, u64)> {
    let metadata = std::fs::metadata(path).ok()?;
    Some((metadata.modified().ok()?, metadata.len()))
}

/// Collect pending events; settings changes come before document changes
pub fn poll_events(settings: &mut SettingsWatcher, document: &mut FileWatcher) -> Vec<Event> {
    let mut events = Vec::new();

    match settings.poll() {
        Ok(Some(change)) => events.push(Event::ConfigurationChanged(change)),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "Could not read settings"),
    }

    if document.poll() {
        events.push(Event::DocumentChanged(document_id(&document.path)));
    }

    events
}

pub async fn handle(store: &SettingsStore, file: PathBuf, interval_ms: u64) -> Result<ExitCode> {
    let mut host = TerminalHost::new(store.clone()).with_document(&file);

    // Activation already reported the failure to the user
    let Ok(mut reminder) = Reminder::activate(&mut host, TokenEstimator::new()) else {
        return Ok(ExitCode::FAILURE);
    };

    let mut settings = SettingsWatcher::new(store.clone())?;
    let mut document = FileWatcher::new(&file);

    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    tracing::info!(file = %file.display(), interval_ms, "Watching");

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = ticker.tick() => {
                for event in poll_events(&mut settings, &mut document) {
                    if let Err(e) = reminder.dispatch(&mut host, event) {
                        tracing::error!(error = %e, "Event handling failed");
                    }
                }
            }
        }
    }

    tracing::info!("Stopped watching");
    Ok(ExitCode::SUCCESS)
}
