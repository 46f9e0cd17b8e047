//! Event dispatch for context-reminder
//!
//! A host adapter turns whatever its editor (or terminal) reports into
//! [`Event`]s and feeds them to a [`Reminder`] one at a time. The reminder owns
//! the current [`ExtensionConfig`] and talks back through the [`Host`] trait,
//! so the whole flow runs without any editor present.

mod event;
mod host;
mod reminder;

pub use event::{Command, Event};
pub use host::Host;
pub use reminder::{CheckReport, NO_ACTIVE_DOCUMENT, Reminder};

pub use reminder_core::ExtensionConfig;
