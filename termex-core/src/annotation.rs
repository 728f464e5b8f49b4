//! Index-aligned token annotations for one sentence

use crate::error::{CoreError, Result};

/// Chunk tag that opens a noun phrase
pub const NOUN_PHRASE_BEGIN: &str = "B-NP";
/// Chunk tag that continues a noun phrase
pub const NOUN_PHRASE_INSIDE: &str = "I-NP";
/// Chunk tag that opens a verb phrase
pub const VERB_PHRASE_BEGIN: &str = "B-VP";
/// Prefix shared by all inside-chunk tags
pub const INSIDE_PREFIX: &str = "I-";
/// Chunk tag for tokens outside any phrase
pub const OUTSIDE: &str = "O";

/// Tokens of one sentence with their POS and chunk tags
///
/// All three sequences are guaranteed to have equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSentence {
    tokens: Vec<String>,
    tags: Vec<String>,
    chunks: Vec<String>,
}

impl AnnotatedSentence {
    /// Build from aligned sequences
    pub fn new(tokens: Vec<String>, tags: Vec<String>, chunks: Vec<String>) -> Result<Self> {
        if tokens.len() != tags.len() || tokens.len() != chunks.len() {
            return Err(CoreError::MisalignedAnnotations {
                tokens: tokens.len(),
                tags: tags.len(),
                chunks: chunks.len(),
            });
        }

        Ok(Self {
            tokens,
            tags,
            chunks,
        })
    }

    /// Build from `(token, tag, chunk)` triples
    pub fn from_triples<'a>(triples: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>) -> Self {
        let mut tokens = Vec::new();
        let mut tags = Vec::new();
        let mut chunks = Vec::new();

        for (token, tag, chunk) in triples {
            tokens.push(token.to_string());
            tags.push(tag.to_string());
            chunks.push(chunk.to_string());
        }

        Self {
            tokens,
            tags,
            chunks,
        }
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token sequence
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// POS tag sequence
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Chunk tag sequence
    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    /// Token at `index`
    pub fn token(&self, index: usize) -> &str {
        &self.tokens[index]
    }

    /// POS tag at `index`
    pub fn tag(&self, index: usize) -> &str {
        &self.tags[index]
    }

    /// Chunk tag at `index`; one past the end reads as [`OUTSIDE`]
    pub fn chunk(&self, index: usize) -> &str {
        self.chunks.get(index).map_or(OUTSIDE, String::as_str)
    }
}
