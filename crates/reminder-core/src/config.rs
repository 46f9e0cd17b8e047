//! In-memory extension configuration

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::model::ModelId;

pub const DEFAULT_TOKEN_LIMIT: i64 = 2000;

/// Configuration every check runs against.
///
/// Replaced wholesale on reload. No validation happens here: any model tag and
/// any limit (including zero or negative) are taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionConfig {
    pub model: ModelId,
    pub token_limit: i64,
    pub policy: EstimationPolicy,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            model: ModelId::default(),
            token_limit: DEFAULT_TOKEN_LIMIT,
            policy: EstimationPolicy::default(),
        }
    }
}

/// Which variant of the Claude discount is in effect.
///
/// Past releases disagreed on this, so both switches are exposed. The default
/// discounts exact counts only and leaves the character fallback untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationPolicy {
    /// Apply `floor(count * 0.75)` to exact counts when the model is Claude
    pub claude_discount: bool,
    /// Also apply the discount to the character-based fallback
    pub discount_fallback: bool,
}

impl Default for EstimationPolicy {
    fn default() -> Self {
        Self {
            claude_discount: true,
            discount_fallback: false,
        }
    }
}

/// Validate user input for a new token limit.
///
/// Only used at the prompt. The estimator and trigger accept any limit.
pub fn validate_token_limit(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    let limit: i64 = trimmed
        .parse()
        .map_err(|_| CoreError::NotANumber(trimmed.to_string()))?;

    if limit <= 0 {
        return Err(CoreError::NonPositiveLimit(limit));
    }

    Ok(limit)
}
