//! Reminder trigger: decide whether an estimate deserves a warning

use std::fmt;

pub const WARNING_GLYPH: &str = "⚠️";

/// A warning about a document over its token limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub count: usize,
    pub limit: i64,
}

impl Warning {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Seu prompt possui {} tokens (limite: {}). Considere iniciar um novo chat!",
            WARNING_GLYPH, self.count, self.limit
        )
    }
}

/// Returns a warning iff `count > limit`.
///
/// Stateless: the same inputs always produce the same answer, so a caller that
/// checks on every keystroke warns on every keystroke.
pub fn maybe_warn(count: usize, limit: i64) -> Option<Warning> {
    // A count too large for i64 is above every limit
    let exceeds = i64::try_from(count).map_or(true, |count| count > limit);
    exceeds.then_some(Warning { count, limit })
}
