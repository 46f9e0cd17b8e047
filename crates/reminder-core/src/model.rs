//! Model identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which discount policy applies to a raw token count.
///
/// Only `Claude` is special-cased. Any tag other than `"claude"` or `"gpt"` is
/// kept verbatim in `Unknown` so it survives a config round trip, and is
/// counted exactly like `Gpt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelId {
    #[default]
    Claude,
    Gpt,
    Unknown(String),
}

impl ModelId {
    pub fn as_str(&self) -> &str {
        match self {
            ModelId::Claude => "claude",
            ModelId::Gpt => "gpt",
            ModelId::Unknown(tag) => tag,
        }
    }

    /// Whether the Claude discount applies to this model
    pub fn is_claude(&self) -> bool {
        matches!(self, ModelId::Claude)
    }

    /// The model `toggleModel` switches to: claude -> gpt, anything else -> claude
    pub fn toggled(&self) -> ModelId {
        match self {
            ModelId::Claude => ModelId::Gpt,
            ModelId::Gpt | ModelId::Unknown(_) => ModelId::Claude,
        }
    }
}

impl From<&str> for ModelId {
    fn from(tag: &str) -> Self {
        match tag {
            "claude" => ModelId::Claude,
            "gpt" => ModelId::Gpt,
            other => ModelId::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ModelId {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "claude" => ModelId::Claude,
            "gpt" => ModelId::Gpt,
            _ => ModelId::Unknown(tag),
        }
    }
}

impl From<ModelId> for String {
    fn from(model: ModelId) -> Self {
        match model {
            ModelId::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
