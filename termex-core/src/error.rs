//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors
///
/// The extraction algorithms themselves are total; these errors guard the
/// construction of their inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Token, tag and chunk sequences are not index-aligned
    #[error("misaligned annotations: {tokens} tokens, {tags} tags, {chunks} chunks")]
    MisalignedAnnotations {
        /// Number of tokens
        tokens: usize,
        /// Number of POS tags
        tags: usize,
        /// Number of chunk tags
        chunks: usize,
    },

    /// A rule table failed to parse or validate
    #[error("invalid rule table: {0}")]
    InvalidRuleTable(String),

    /// No embedded rule preset with this name
    #[error("unknown rule preset '{0}'")]
    UnknownPreset(String),

    /// Maximum term length must be at least one token
    #[error("invalid maximum term length {0}: must be at least 1")]
    InvalidTermLength(usize),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
