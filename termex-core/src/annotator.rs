//! Seams to the external NLP toolkit
//!
//! Sentence detection, part-of-speech tagging, phrase chunking and stemming
//! are treated as black boxes. The core only relies on positional alignment
//! of tags and chunks with its own token sequence.

use std::error::Error as StdError;
use thiserror::Error;

/// Opaque failure reported by an annotator implementation
///
/// The core never inspects or retries these; they are forwarded to the
/// caller with the original error as `source`.
#[derive(Debug, Error)]
#[error("annotator failure: {source}")]
pub struct AnnotatorError {
    #[source]
    source: Box<dyn StdError + Send + Sync>,
}

impl AnnotatorError {
    /// Wrap an annotator failure
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Recover the wrapped error
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync> {
        self.source
    }
}

/// Word stemmer
pub trait Stemmer: Send + Sync {
    /// Reduce a word to its stem
    fn stem(&self, word: &str) -> String;
}

/// Sentence splitter, POS tagger and chunker
///
/// Implementations must be thread-safe so that sentences can be annotated
/// in parallel.
pub trait Annotator: Stemmer {
    /// Split text into sentences, in order
    fn detect_sentences(&self, text: &str) -> Result<Vec<String>, AnnotatorError>;

    /// Assign one Penn-Treebank-style POS tag per token
    fn tag(&self, tokens: &[String]) -> Result<Vec<String>, AnnotatorError>;

    /// Assign one begin/inside/outside chunk tag per token
    fn chunk(&self, tokens: &[String], tags: &[String]) -> Result<Vec<String>, AnnotatorError>;
}

impl<T: Stemmer + ?Sized> Stemmer for &T {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }
}

impl<T: Stemmer + ?Sized> Stemmer for std::sync::Arc<T> {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }
}

/// Stemmer that returns words unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}
