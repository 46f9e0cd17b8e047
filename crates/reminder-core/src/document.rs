//! Document snapshots

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a document as the host names it (usually a path or URI)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Full text of one document, read fresh for every check.
///
/// `text` is `None` when the host could not produce a string for the document
/// (for example bytes that are not valid UTF-8). Such a snapshot counts as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub id: DocumentId,
    pub text: Option<String>,
}

impl DocumentSnapshot {
    pub fn new(id: DocumentId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: Some(text.into()),
        }
    }

    pub fn unreadable(id: DocumentId) -> Self {
        Self { id, text: None }
    }

    /// Build a snapshot from raw bytes, treating invalid UTF-8 as absent text
    pub fn from_bytes(id: DocumentId, bytes: Vec<u8>) -> Self {
        Self {
            id,
            text: String::from_utf8(bytes).ok(),
        }
    }

    /// The document text, or `""` when absent
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}
