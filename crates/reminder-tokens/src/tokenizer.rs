use std::sync::OnceLock;

use thiserror::Error;
use tiktoken_rs::CoreBPE;

/// Special-token literals of cl100k_base that are rejected in plain text
pub const SPECIAL_TOKENS: &[&str] = &[
    "<|endoftext|>",
    "<|fim_prefix|>",
    "<|fim_middle|>",
    "<|fim_suffix|>",
    "<|endofprompt|>",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    #[error("Tokenizer unavailable: {0}")]
    Unavailable(String),

    #[error("Disallowed special token in text: {0}")]
    DisallowedSpecialToken(String),
}

/// Sub-word tokenizer used for exact counts.
///
/// Implementations must be deterministic: the same text always encodes to the
/// same sequence.
pub trait Tokenizer: Send + Sync {
    fn encode(&self, text: &str) -> Result<Vec<u32>, TokenizerError>;
}

/// cl100k_base BPE (GPT-4, GPT-3.5-turbo), loaded on first use
pub struct TiktokenTokenizer {
    bpe: OnceLock<Result<CoreBPE, String>>,
}

impl TiktokenTokenizer {
    pub fn new() -> Self {
        Self {
            bpe: OnceLock::new(),
        }
    }

    fn bpe(&self) -> Result<&CoreBPE, TokenizerError> {
        self.bpe
            .get_or_init(|| tiktoken_rs::cl100k_base().map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|e| TokenizerError::Unavailable(e.clone()))
    }
}

impl Default for TiktokenTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for TiktokenTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<u32>, TokenizerError> {
        if let Some(special) = SPECIAL_TOKENS.iter().find(|s| text.contains(**s)) {
            return Err(TokenizerError::DisallowedSpecialToken(special.to_string()));
        }

        Ok(self.bpe()?.encode_ordinary(text))
    }
}
