use std::sync::Arc;

use anyhow::Result;
use reminder_config::SettingsStore;
use reminder_core::{
    ConfigurationChange, DocumentId, DocumentSnapshot, ExtensionConfig, ModelId, SettingKey,
    SettingUpdate,
};
use reminder_engine::{Command, Event, Host, NO_ACTIVE_DOCUMENT, Reminder};
use reminder_tokens::{TokenEstimator, Tokenizer, TokenizerError};

struct FixedTokenizer(usize);

impl Tokenizer for FixedTokenizer {
    fn encode(&self, _text: &str) -> Result<Vec<u32>, TokenizerError> {
        Ok(vec![0; self.0])
    }
}

struct FailingTokenizer;

impl Tokenizer for FailingTokenizer {
    fn encode(&self, _text: &str) -> Result<Vec<u32>, TokenizerError> {
        Err(TokenizerError::Unavailable("Tokenizer error".to_string()))
    }
}

/// Host backed by a settings file that records every notification
struct RecordingHost {
    _dir: tempfile::TempDir,
    store: SettingsStore,
    document: Option<DocumentSnapshot>,
    prompt_answer: Option<i64>,
    config_unavailable: bool,
    warnings: Vec<String>,
    infos: Vec<String>,
    errors: Vec<String>,
}

impl RecordingHost {
    fn new(settings: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("config.toml"));
        std::fs::write(store.path(), settings).unwrap();
        Self {
            _dir: dir,
            store,
            document: None,
            prompt_answer: None,
            config_unavailable: false,
            warnings: Vec::new(),
            infos: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn with_document(mut self, id: &str, text: &str) -> Self {
        self.document = Some(DocumentSnapshot::new(DocumentId::new(id), text));
        self
    }
}

impl Host for RecordingHost {
    fn read_configuration(&mut self) -> Result<ExtensionConfig> {
        if self.config_unavailable {
            anyhow::bail!("settings store unavailable");
        }
        Ok(self.store.load()?)
    }

    fn update_setting(&mut self, update: SettingUpdate) -> Result<ConfigurationChange> {
        Ok(self.store.update(&update)?)
    }

    fn active_document(&mut self) -> Result<Option<DocumentSnapshot>> {
        Ok(self.document.clone())
    }

    fn show_warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn show_information(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn prompt_token_limit(&mut self, _current: i64) -> Result<Option<i64>> {
        Ok(self.prompt_answer)
    }
}

fn estimator(tokenizer: impl Tokenizer + 'static) -> TokenEstimator {
    TokenEstimator::with_tokenizer(Arc::new(tokenizer))
}

fn limit_settings(model: &str, limit: i64) -> String {
    format!("[contextReminder]\nmodel = \"{model}\"\ntokenLimit = {limit}\n")
}

#[test]
fn test_activation_checks_active_document() {
    let text = "a".repeat(200);

    let mut host = RecordingHost::new(&limit_settings("gpt", 40)).with_document("doc.md", &text);
    Reminder::activate(&mut host, estimator(FailingTokenizer)).unwrap();
    assert_eq!(host.warnings.len(), 1);
    assert!(host.warnings[0].contains("50 tokens"));
    assert!(host.warnings[0].contains("limite: 40"));

    let mut host = RecordingHost::new(&limit_settings("gpt", 60)).with_document("doc.md", &text);
    Reminder::activate(&mut host, estimator(FailingTokenizer)).unwrap();
    assert!(host.warnings.is_empty());
}

#[test]
fn test_activation_without_document_is_quiet() {
    let mut host = RecordingHost::new("");
    let reminder = Reminder::activate(&mut host, estimator(FixedTokenizer(10_000))).unwrap();

    assert_eq!(reminder.config(), &ExtensionConfig::default());
    assert!(host.warnings.is_empty());
    assert!(host.infos.is_empty());
    assert!(host.errors.is_empty());
}

#[test]
fn test_activation_failure_is_reported_once() {
    let mut host = RecordingHost::new("").with_document("doc.md", "text");
    host.config_unavailable = true;

    let result = Reminder::activate(&mut host, estimator(FixedTokenizer(1)));

    assert!(result.is_err());
    assert_eq!(host.errors.len(), 1);
    assert!(host.errors[0].contains("settings store unavailable"));
    assert!(host.warnings.is_empty());
}

#[test]
fn test_claude_discount_at_limit_boundary() {
    // 333 raw tokens: Claude counts floor(333 * 0.75) = 249
    let mut host = RecordingHost::new(&limit_settings("claude", 249)).with_document("doc", "x");
    let mut reminder = Reminder::activate(&mut host, estimator(FixedTokenizer(333))).unwrap();
    assert!(host.warnings.is_empty());

    let report = reminder
        .dispatch(&mut host, Command::CheckTokens.into())
        .unwrap()
        .unwrap();
    assert_eq!(report.count, 249);
    assert!(!report.warned);

    reminder
        .dispatch(&mut host, Command::ToggleModel.into())
        .unwrap();
    let report = reminder
        .dispatch(&mut host, Command::CheckTokens.into())
        .unwrap()
        .unwrap();
    assert_eq!(report.count, 333);
    assert!(report.warned);
    assert_eq!(
        host.warnings,
        ["⚠️ Seu prompt possui 333 tokens (limite: 249). Considere iniciar um novo chat!"]
    );
}

#[test]
fn test_changes_to_other_documents_are_ignored() {
    let mut host = RecordingHost::new(&limit_settings("gpt", 1)).with_document("active.md", "x");
    let mut reminder = Reminder::activate(&mut host, estimator(FixedTokenizer(5))).unwrap();
    host.warnings.clear();

    let report = reminder
        .dispatch(&mut host, Event::DocumentChanged(DocumentId::new("other.md")))
        .unwrap();
    assert!(report.is_none());
    assert!(host.warnings.is_empty());

    let report = reminder
        .dispatch(&mut host, Event::DocumentChanged(DocumentId::new("active.md")))
        .unwrap();
    assert!(report.is_some_and(|r| r.warned));
    assert_eq!(host.warnings.len(), 1);
}

#[test]
fn test_every_change_warns_again() {
    let mut host = RecordingHost::new(&limit_settings("gpt", 1)).with_document("doc.md", "x");
    let mut reminder = Reminder::activate(&mut host, estimator(FixedTokenizer(5))).unwrap();

    for _ in 0..3 {
        reminder
            .dispatch(&mut host, Event::DocumentChanged(DocumentId::new("doc.md")))
            .unwrap();
    }

    // One from activation, one per change
    assert_eq!(host.warnings.len(), 4);
}

#[test]
fn test_empty_document_never_warns() {
    for settings in [limit_settings("claude", 0), limit_settings("gpt", 2000)] {
        let mut host = RecordingHost::new(&settings).with_document("empty.md", "");
        let mut reminder = Reminder::activate(&mut host, estimator(FixedTokenizer(100))).unwrap();
        let report = reminder
            .dispatch(&mut host, Command::CheckTokens.into())
            .unwrap()
            .unwrap();

        assert_eq!(report.count, 0);
        assert!(host.warnings.is_empty());
    }
}

#[test]
fn test_unreadable_document_counts_as_empty() {
    let mut host = RecordingHost::new(&limit_settings("gpt", 0));
    host.document = Some(DocumentSnapshot::unreadable(DocumentId::new("blob.bin")));

    Reminder::activate(&mut host, estimator(FixedTokenizer(100))).unwrap();
    assert!(host.warnings.is_empty());
}

#[test]
fn test_negative_limit_warns_even_for_empty_document() {
    let mut host = RecordingHost::new(&limit_settings("gpt", -1)).with_document("empty.md", "");
    Reminder::activate(&mut host, estimator(FixedTokenizer(0))).unwrap();

    assert_eq!(host.warnings.len(), 1);
    assert!(host.warnings[0].contains("limite: -1"));
}

#[test]
fn test_configuration_reload_on_recognized_keys() {
    let mut host = RecordingHost::new(&limit_settings("gpt", 100)).with_document("doc.md", "x");
    let mut reminder = Reminder::activate(&mut host, estimator(FixedTokenizer(50))).unwrap();

    // File changes but the notification names an unrelated key
    std::fs::write(host.store.path(), limit_settings("gpt", 10)).unwrap();
    reminder
        .dispatch(
            &mut host,
            Event::ConfigurationChanged(ConfigurationChange::new(["editor.fontSize"])),
        )
        .unwrap();
    assert_eq!(reminder.config().token_limit, 100);

    reminder
        .dispatch(
            &mut host,
            Event::ConfigurationChanged(ConfigurationChange::new([
                SettingKey::TokenLimit.qualified()
            ])),
        )
        .unwrap();
    assert_eq!(reminder.config().token_limit, 10);

    reminder
        .dispatch(&mut host, Event::DocumentChanged(DocumentId::new("doc.md")))
        .unwrap();
    assert_eq!(host.warnings.len(), 1);
}

#[test]
fn test_reload_replaces_both_fields() {
    let mut host = RecordingHost::new(&limit_settings("gpt", 100));
    let mut reminder = Reminder::activate(&mut host, estimator(FixedTokenizer(1))).unwrap();

    std::fs::write(host.store.path(), limit_settings("claude", 7)).unwrap();
    reminder
        .dispatch(
            &mut host,
            Event::ConfigurationChanged(ConfigurationChange::new([SettingKey::Model.qualified()])),
        )
        .unwrap();

    assert_eq!(reminder.config().model, ModelId::Claude);
    assert_eq!(reminder.config().token_limit, 7);
}

#[test]
fn test_toggle_model_round_trip() {
    let mut host = RecordingHost::new("");
    let mut reminder = Reminder::activate(&mut host, estimator(FixedTokenizer(1))).unwrap();
    assert_eq!(reminder.config().model, ModelId::Claude);

    reminder
        .dispatch(&mut host, Command::ToggleModel.into())
        .unwrap();
    assert_eq!(reminder.config().model, ModelId::Gpt);
    assert_eq!(host.store.load().unwrap().model, ModelId::Gpt);

    reminder
        .dispatch(&mut host, Command::ToggleModel.into())
        .unwrap();
    assert_eq!(reminder.config().model, ModelId::Claude);
    assert_eq!(host.store.load().unwrap().model, ModelId::Claude);

    assert_eq!(
        host.infos,
        ["Modelo alterado para: gpt", "Modelo alterado para: claude"]
    );
}

#[test]
fn test_set_token_limit() {
    let mut host = RecordingHost::new(&limit_settings("gpt", 2000));
    let mut reminder = Reminder::activate(&mut host, estimator(FixedTokenizer(1))).unwrap();

    host.prompt_answer = Some(150);
    reminder
        .dispatch(&mut host, Command::SetTokenLimit.into())
        .unwrap();
    assert_eq!(reminder.config().token_limit, 150);
    assert_eq!(host.store.load().unwrap().token_limit, 150);
    assert_eq!(host.infos, ["Limite de tokens atualizado para: 150"]);
}

#[test]
fn test_dismissed_prompt_changes_nothing() {
    let mut host = RecordingHost::new(&limit_settings("gpt", 2000));
    let mut reminder = Reminder::activate(&mut host, estimator(FixedTokenizer(1))).unwrap();

    host.prompt_answer = None;
    reminder
        .dispatch(&mut host, Command::SetTokenLimit.into())
        .unwrap();

    assert_eq!(reminder.config().token_limit, 2000);
    assert!(host.infos.is_empty());
}

#[test]
fn test_check_without_document_informs() {
    let mut host = RecordingHost::new("");
    let mut reminder = Reminder::activate(&mut host, estimator(FixedTokenizer(1))).unwrap();

    let report = reminder
        .dispatch(&mut host, Command::CheckTokens.into())
        .unwrap();

    assert!(report.is_none());
    assert_eq!(host.infos, [NO_ACTIVE_DOCUMENT]);
    assert!(host.warnings.is_empty());
}
