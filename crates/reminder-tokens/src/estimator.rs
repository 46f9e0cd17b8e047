use std::sync::Arc;

use reminder_core::{DocumentSnapshot, EstimationPolicy, ExtensionConfig, ModelId};

use crate::tokenizer::{TiktokenTokenizer, Tokenizer};

/// How an estimate was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateSource {
    /// Counted by the tokenizer
    Tokenizer,
    /// Tokenizer failed, approximated from the character count
    CharacterFallback,
    /// Empty or absent text, tokenizer not called
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenEstimate {
    pub count: usize,
    pub source: EstimateSource,
}

/// Per-model token estimator over an exact tokenizer
#[derive(Clone)]
pub struct TokenEstimator {
    tokenizer: Arc<dyn Tokenizer>,
}

impl TokenEstimator {
    /// Create new estimator with cl100k_base encoding
    pub fn new() -> Self {
        Self::with_tokenizer(Arc::new(TiktokenTokenizer::new()))
    }

    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }

    /// Estimate token count for `text` under `model`. Never fails.
    pub fn estimate(&self, text: &str, model: &ModelId, policy: EstimationPolicy) -> usize {
        self.estimate_detailed(text, model, policy).count
    }

    /// Estimate the current text of a document under the given config
    pub fn estimate_snapshot(&self, document: &DocumentSnapshot, config: &ExtensionConfig) -> usize {
        self.estimate(document.text(), &config.model, config.policy)
    }

    pub fn estimate_detailed(
        &self,
        text: &str,
        model: &ModelId,
        policy: EstimationPolicy,
    ) -> TokenEstimate {
        if text.is_empty() {
            return TokenEstimate {
                count: 0,
                source: EstimateSource::Empty,
            };
        }

        match self.tokenizer.encode(text) {
            Ok(tokens) => {
                let raw = tokens.len();
                let count = if policy.claude_discount && model.is_claude() {
                    claude_discount(raw)
                } else {
                    raw
                };
                TokenEstimate {
                    count,
                    source: EstimateSource::Tokenizer,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Token counting failed, using character estimate");
                let raw = fallback_count(text);
                let count = if policy.discount_fallback && model.is_claude() {
                    claude_discount(raw)
                } else {
                    raw
                };
                TokenEstimate {
                    count,
                    source: EstimateSource::CharacterFallback,
                }
            }
        }
    }
}

impl Default for TokenEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// `floor(count * 0.75)` in exact integer arithmetic
pub fn claude_discount(count: usize) -> usize {
    count / 4 * 3 + count % 4 * 3 / 4
}

/// `ceil(len / 4)` where `len` is the UTF-16 length the editor reports
pub fn fallback_count(text: &str) -> usize {
    text.encode_utf16().count().div_ceil(4)
}
