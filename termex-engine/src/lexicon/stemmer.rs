//! Snowball English stemming

use rust_stemmers::{Algorithm, Stemmer as Snowball};
use std::sync::OnceLock;
use termex_core::Stemmer;

static ENGLISH: OnceLock<Snowball> = OnceLock::new();

/// Snowball (Porter 2) English stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct SnowballStemmer;

impl SnowballStemmer {
    /// Create a stemmer; the Snowball tables are shared process-wide
    pub fn new() -> Self {
        Self
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        ENGLISH
            .get_or_init(|| Snowball::create(Algorithm::English))
            .stem(word)
            .into_owned()
    }
}
