//! Core domain models and logic for context-reminder
//!
//! This crate contains:
//! - Domain models (ModelId, ExtensionConfig, DocumentSnapshot)
//! - The reminder trigger (limit comparison and warning text)
//! - Setting names and change notifications shared with the host
//! - Token limit input validation

pub mod config;
pub mod document;
pub mod error;
pub mod model;
pub mod settings;
pub mod trigger;

pub use config::{EstimationPolicy, ExtensionConfig, validate_token_limit};
pub use document::{DocumentId, DocumentSnapshot};
pub use error::{CoreError, Result};
pub use model::ModelId;
pub use settings::{ConfigurationChange, SettingKey, SettingUpdate};
pub use trigger::{Warning, maybe_warn};

/// Name of the configuration section owned by this component
pub const CONFIG_SECTION: &str = "contextReminder";
