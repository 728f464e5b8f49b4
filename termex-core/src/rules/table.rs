//! Rule table driving the boundary computer
//!
//! The stricter and looser rule variants are data, not code paths: every
//! switch and tag set the boundary rules consult lives here.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of POS tags matched by exact membership
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Build from tag names
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    /// Whether `tag` is a member
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Add a tag
    pub fn insert(&mut self, tag: impl Into<String>) {
        self.0.insert(tag.into());
    }

    /// Remove a tag
    pub fn remove(&mut self, tag: &str) -> bool {
        self.0.remove(tag)
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the tags in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// How purely numeric spans are recognized and rejected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericFilter {
    /// Reject terms whose text has no ASCII letter
    #[default]
    Text,
    /// Reject terms whose tokens are all tagged as numerals
    PosPath,
}

/// Descriptive metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMetadata {
    /// Preset name
    pub name: String,
    /// One-line description
    #[serde(default)]
    pub description: String,
}

/// Which tokens a term may pass through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingRules {
    /// Tags of comma-like separators
    pub comma_tags: TagSet,
    /// Tags of coordinating conjunctions
    pub conjunction_tags: TagSet,
    /// Whether conjunctions are uncrossable in the first crossing pass
    #[serde(default)]
    pub block_conjunctions: bool,
    /// Connective words that may not occur inside a term
    #[serde(default)]
    pub connectives: Vec<String>,
}

/// Which tokens a term may start on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartRules {
    /// Tags after which a start moves into the noun phrase
    pub shift_tags: TagSet,
    /// Tags a term may never start with
    pub proscribed_tags: TagSet,
    /// Tags of numerals
    pub numeral_tags: TagSet,
    /// Whether a numeral may itself start a term
    #[serde(default = "default_true")]
    pub allow_numeral_start: bool,
}

/// Which tokens a term may end on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndRules {
    /// Tags a term must end with
    pub required_tags: TagSet,
}

/// Final admissibility checks on emitted spans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFilter {
    /// Numeric-only rejection strategy
    #[serde(default)]
    pub numeric: NumericFilter,
    /// Maximum length of the term text in characters
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl Default for TermFilter {
    fn default() -> Self {
        Self {
            numeric: NumericFilter::default(),
            max_chars: default_max_chars(),
        }
    }
}

/// Complete rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    /// Descriptive metadata
    pub metadata: RuleMetadata,
    /// Crossing rules
    pub crossing: CrossingRules,
    /// Start rules
    pub start: StartRules,
    /// End rules
    pub end: EndRules,
    /// Post filter
    #[serde(default)]
    pub filter: TermFilter,
}

impl RuleTable {
    /// Parse and validate a rule table from TOML
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: RuleTable =
            toml::from_str(source).map_err(|e| CoreError::InvalidRuleTable(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.end.required_tags.is_empty() {
            return Err(CoreError::InvalidRuleTable(
                "end.required_tags must not be empty".into(),
            ));
        }

        if self.filter.max_chars == 0 {
            return Err(CoreError::InvalidRuleTable(
                "filter.max_chars must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Whether `token` is on the connective list
    pub fn is_connective(&self, token: &str) -> bool {
        self.crossing.connectives.iter().any(|word| word == token)
    }

    /// Whether a term may start on a token tagged `tag`
    pub fn start_permitted(&self, tag: &str) -> bool {
        if self.start.proscribed_tags.contains(tag) {
            return false;
        }
        self.start.allow_numeral_start || !self.start.numeral_tags.contains(tag)
    }

    /// Whether a term may end on a token tagged `tag`
    pub fn end_permitted(&self, tag: &str) -> bool {
        self.end.required_tags.contains(tag)
    }

    /// Whether a reconstructed span passes the post filter
    pub fn allowed_term<S: AsRef<str>>(&self, text: &str, tags: &[S]) -> bool {
        if text.chars().count() > self.filter.max_chars {
            return false;
        }

        match self.filter.numeric {
            NumericFilter::Text => text.chars().any(|ch| ch.is_ascii_alphabetic()),
            NumericFilter::PosPath => !tags
                .iter()
                .all(|tag| self.start.numeral_tags.contains(tag.as_ref())),
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        super::loader::standard()
    }
}

fn default_true() -> bool {
    true
}

fn default_max_chars() -> usize {
    255
}
