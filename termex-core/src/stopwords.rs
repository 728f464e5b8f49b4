//! Stopword membership and string canonicalization
//!
//! Lookups ignore case and any non-word characters, so `The`, `the,` and
//! `THE` are all the same stopword, and `don't` matches the entry `dont`.

use crate::annotator::Stemmer;
use std::collections::HashSet;
use std::io;
use std::sync::OnceLock;

static ENGLISH: OnceLock<StopwordIndex> = OnceLock::new();

/// Supplier of a stopword list
pub trait StopwordSource {
    /// Load the raw stopword entries
    fn load(&self) -> io::Result<Vec<String>>;
}

/// The English list compiled into the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedEnglish;

impl StopwordSource for EmbeddedEnglish {
    fn load(&self) -> io::Result<Vec<String>> {
        Ok(parse_list(include_str!("../configs/stopwords/english.txt")))
    }
}

/// Parse a stopword list: one entry per line, `#` starts a comment
pub fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(entry, _)| entry))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a word for stopword lookup
pub fn clean_for_stopword(word: &str) -> String {
    word.chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case and punctuation insensitive stopword set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordIndex {
    words: HashSet<String>,
}

impl StopwordIndex {
    /// Build an index from raw entries
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for word in words {
            index.insert(word.as_ref());
        }
        index
    }

    /// Build an index from a [`StopwordSource`]
    pub fn from_source(source: &dyn StopwordSource) -> io::Result<Self> {
        Ok(Self::new(source.load()?))
    }

    /// The embedded English stopword list
    pub fn english() -> Self {
        ENGLISH
            .get_or_init(|| Self::new(parse_list(include_str!("../configs/stopwords/english.txt"))))
            .clone()
    }

    /// Add an entry
    pub fn insert(&mut self, word: &str) {
        let cleaned = clean_for_stopword(word);
        if !cleaned.is_empty() {
            self.words.insert(cleaned);
        }
    }

    /// Whether `word` is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        let cleaned = clean_for_stopword(word);
        !cleaned.is_empty() && self.words.contains(&cleaned)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the index has no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reduce text to a comparison key
    ///
    /// Lower-cases, drops punctuation and stopwords, stems the remaining
    /// words and sorts them. Two strings that differ only in word order,
    /// case, punctuation or inflection produce the same key.
    pub fn canonicalize(&self, text: &str, stemmer: &dyn Stemmer) -> String {
        let lowered: String = text
            .to_lowercase()
            .chars()
            .map(|ch| {
                if ch.is_alphanumeric() || ch == '_' || ch.is_whitespace() {
                    ch
                } else {
                    ' '
                }
            })
            .collect();

        let mut stems: Vec<String> = lowered
            .split_whitespace()
            .filter(|word| !self.is_stopword(word))
            .map(|word| stemmer.stem(word))
            .collect();

        stems.sort();
        stems.join(" ")
    }
}
