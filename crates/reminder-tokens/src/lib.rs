//! Token estimation using tiktoken
//!
//! The exact count comes from a [`Tokenizer`]; [`TokenEstimator`] turns it into
//! the per-model estimate and falls back to a character heuristic when the
//! tokenizer fails.

mod estimator;
mod tokenizer;

pub use estimator::{EstimateSource, TokenEstimate, TokenEstimator, claude_discount, fallback_count};
pub use tokenizer::{SPECIAL_TOKENS, TiktokenTokenizer, Tokenizer, TokenizerError};
