use anyhow::{Context, Result};
use reminder_core::{
    ConfigurationChange, DocumentId, DocumentSnapshot, ExtensionConfig, SettingUpdate, maybe_warn,
};
use reminder_tokens::TokenEstimator;

use crate::event::{Command, Event};
use crate::host::Host;

pub const NO_ACTIVE_DOCUMENT: &str = "Nenhum documento ativo.";

/// Result of one token check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub document: DocumentId,
    pub count: usize,
    pub limit: i64,
    pub warned: bool,
}

/// Owns the live configuration and reacts to host events
pub struct Reminder {
    config: ExtensionConfig,
    estimator: TokenEstimator,
}

impl Reminder {
    pub fn new(config: ExtensionConfig, estimator: TokenEstimator) -> Self {
        Self { config, estimator }
    }

    /// Load configuration and check the active document.
    ///
    /// A failure is shown once through [`Host::show_error`] and returned; the
    /// caller decides what to do with an inert extension.
    pub fn activate<H: Host>(host: &mut H, estimator: TokenEstimator) -> Result<Self> {
        match Self::try_activate(host, estimator) {
            Ok(reminder) => Ok(reminder),
            Err(e) => {
                host.show_error(&format!("Falha ao ativar Context Reminder: {e:#}"));
                Err(e)
            }
        }
    }

    fn try_activate<H: Host>(host: &mut H, estimator: TokenEstimator) -> Result<Self> {
        let config = host
            .read_configuration()
            .context("Failed to read configuration")?;
        tracing::info!(model = %config.model, limit = config.token_limit, "Activated");

        let mut reminder = Self::new(config, estimator);
        reminder.dispatch(host, Event::Activated)?;
        Ok(reminder)
    }

    pub fn config(&self) -> &ExtensionConfig {
        &self.config
    }

    pub fn estimator(&self) -> &TokenEstimator {
        &self.estimator
    }

    /// Handle one event. Returns a report when a check ran.
    pub fn dispatch<H: Host>(&mut self, host: &mut H, event: Event) -> Result<Option<CheckReport>> {
        match event {
            Event::Activated => match host.active_document()? {
                Some(document) => Ok(Some(self.check(host, &document))),
                None => Ok(None),
            },
            Event::DocumentChanged(id) => {
                let Some(document) = host.active_document()? else {
                    return Ok(None);
                };
                if document.id != id {
                    tracing::trace!(changed = %id, active = %document.id, "Ignoring inactive document");
                    return Ok(None);
                }
                Ok(Some(self.check(host, &document)))
            }
            Event::ConfigurationChanged(change) => {
                self.on_configuration_changed(host, &change)?;
                Ok(None)
            }
            Event::Command(command) => self.run_command(host, command),
        }
    }

    fn run_command<H: Host>(&mut self, host: &mut H, command: Command) -> Result<Option<CheckReport>> {
        match command {
            Command::CheckTokens => match host.active_document()? {
                Some(document) => Ok(Some(self.check(host, &document))),
                None => {
                    host.show_information(NO_ACTIVE_DOCUMENT);
                    Ok(None)
                }
            },
            Command::ToggleModel => {
                let model = self.config.model.toggled();
                let change = host.update_setting(SettingUpdate::Model(model.clone()))?;
                host.show_information(&format!("Modelo alterado para: {model}"));
                self.on_configuration_changed(host, &change)?;
                Ok(None)
            }
            Command::SetTokenLimit => {
                let Some(limit) = host.prompt_token_limit(self.config.token_limit)? else {
                    return Ok(None);
                };
                let change = host.update_setting(SettingUpdate::TokenLimit(limit))?;
                host.show_information(&format!("Limite de tokens atualizado para: {limit}"));
                self.on_configuration_changed(host, &change)?;
                Ok(None)
            }
        }
    }

    /// Reload the whole config when a recognized key changed
    fn on_configuration_changed<H: Host>(
        &mut self,
        host: &mut H,
        change: &ConfigurationChange,
    ) -> Result<()> {
        if !change.affects_reminder() {
            return Ok(());
        }

        self.config = host.read_configuration()?;
        tracing::info!(
            model = %self.config.model,
            limit = self.config.token_limit,
            "Configuration reloaded"
        );
        Ok(())
    }

    /// Estimate the document and warn if it is over the limit
    fn check<H: Host>(&self, host: &mut H, document: &DocumentSnapshot) -> CheckReport {
        let count = self.estimator.estimate_snapshot(document, &self.config);
        let warning = maybe_warn(count, self.config.token_limit);
        tracing::debug!(
            document = %document.id,
            count,
            limit = self.config.token_limit,
            warned = warning.is_some(),
            "Checked tokens"
        );

        if let Some(warning) = &warning {
            host.show_warning(&warning.message());
        }

        CheckReport {
            document: document.id.clone(),
            count,
            limit: self.config.token_limit,
            warned: warning.is_some(),
        }
    }
}
