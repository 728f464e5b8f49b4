//! Embedded word lists for the reference annotator

use crate::error::{EngineError, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

static ENGLISH: OnceLock<Lexicon> = OnceLock::new();

macro_rules! embed_lexicon {
    ($path:expr) => {
        include_str!($path)
    };
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    metadata: LexiconMetadata,
    #[serde(default)]
    abbreviations: WordList,
    #[serde(default)]
    closed: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    open: OpenClasses,
    #[serde(default)]
    irregular: IrregularForms,
}

#[derive(Debug, Deserialize)]
struct LexiconMetadata {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct WordList {
    #[serde(default)]
    words: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OpenClasses {
    verbs: Vec<String>,
    adjectives: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IrregularForms {
    past: Vec<String>,
    participles: Vec<String>,
}

/// Lower-case word lists used by sentence detection and tagging
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    name: String,
    abbreviations: HashSet<String>,
    closed: HashMap<String, String>,
    verbs: HashSet<String>,
    adjectives: HashSet<String>,
    past: HashSet<String>,
    participles: HashSet<String>,
}

impl Lexicon {
    /// The embedded English lexicon
    pub fn english() -> &'static Lexicon {
        ENGLISH.get_or_init(|| {
            Self::from_toml_str(embed_lexicon!("../../configs/lexicon/english.toml"))
                .expect("Failed to load embedded English lexicon")
        })
    }

    /// Parse a lexicon document
    ///
    /// A word may carry only one closed-class tag.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: LexiconFile = toml::from_str(content)
            .map_err(|e| EngineError::Configuration(format!("Failed to parse lexicon: {e}")))?;

        let mut closed = HashMap::new();
        for (tag, words) in file.closed {
            for word in words {
                let word = word.to_lowercase();
                if let Some(previous) = closed.insert(word.clone(), tag.clone()) {
                    return Err(EngineError::Configuration(format!(
                        "word {word:?} is listed under both {previous} and {tag}"
                    )));
                }
            }
        }

        let lexicon = Self {
            name: file.metadata.name,
            abbreviations: lowered(file.abbreviations.words),
            closed,
            verbs: lowered(file.open.verbs),
            adjectives: lowered(file.open.adjectives),
            past: lowered(file.irregular.past),
            participles: lowered(file.irregular.participles),
        };

        log::debug!(
            "Loaded lexicon {} ({} closed-class words, {} verbs, {} adjectives)",
            lexicon.name,
            lexicon.closed.len(),
            lexicon.verbs.len(),
            lexicon.adjectives.len()
        );
        Ok(lexicon)
    }

    /// Lexicon name from its metadata
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag of a closed-class word
    pub fn closed_tag(&self, lower: &str) -> Option<&str> {
        self.closed.get(lower).map(String::as_str)
    }

    /// Whether `lower` is a known abbreviation (without its final period)
    pub fn is_abbreviation(&self, lower: &str) -> bool {
        self.abbreviations.contains(lower)
    }

    /// Whether `lower` is the base form of a known verb
    pub fn is_verb(&self, lower: &str) -> bool {
        self.verbs.contains(lower)
    }

    /// Whether `lower` is a known adjective
    pub fn is_adjective(&self, lower: &str) -> bool {
        self.adjectives.contains(lower)
    }

    /// Whether `lower` is an irregular past tense
    pub fn is_irregular_past(&self, lower: &str) -> bool {
        self.past.contains(lower)
    }

    /// Whether `lower` is an irregular past participle
    pub fn is_irregular_participle(&self, lower: &str) -> bool {
        self.participles.contains(lower)
    }
}

fn lowered(words: Vec<String>) -> HashSet<String> {
    words.into_iter().map(|w| w.to_lowercase()).collect()
}
