//! Span enumeration over boundary flags

use crate::annotation::AnnotatedSentence;
use crate::boundary::Boundaries;
use crate::error::{CoreError, Result};
use crate::rules::RuleTable;
use crate::text::recombobulate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default maximum number of tokens in a term
pub const DEFAULT_MAX_TERM_LENGTH: usize = 4;

/// A contiguous token span accepted as a term
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    /// Reconstructed surface text
    pub text: String,
    /// POS tags of the span joined by `-`
    pub pos_path: String,
    /// POS tags of the span, one per token
    pub pos_tags: Vec<String>,
    /// Chunk tags of the span
    pub chunk_path: Vec<String>,
    /// Tokens of the span
    pub tokens: Vec<String>,
    /// Index of the first token
    pub start: usize,
    /// Index of the last token (inclusive)
    pub end: usize,
    /// Zero-based index of the originating sentence
    pub sentence_index: usize,
}

impl Term {
    /// Number of tokens in the term
    pub fn token_count(&self) -> usize {
        self.end - self.start + 1
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Walks boundary flags and emits every admissible span
///
/// For a fixed start every valid end point is emitted, so overlapping
/// terms such as `big fan` and `big fan of kitties` both come out.
/// Duplicates across starts are kept.
#[derive(Debug, Clone, Copy)]
pub struct TermSpanEnumerator<'a> {
    rules: &'a RuleTable,
    max_term_length: usize,
}

impl<'a> TermSpanEnumerator<'a> {
    /// Create an enumerator; `max_term_length` must be at least 1
    pub fn new(rules: &'a RuleTable, max_term_length: usize) -> Result<Self> {
        if max_term_length == 0 {
            return Err(CoreError::InvalidTermLength(max_term_length));
        }

        Ok(Self {
            rules,
            max_term_length,
        })
    }

    /// Maximum number of tokens per term
    pub fn max_term_length(&self) -> usize {
        self.max_term_length
    }

    /// Enumerate terms in start order, then end order
    ///
    /// Every term is stamped with `sentence_index`.
    pub fn enumerate(
        &self,
        sentence: &AnnotatedSentence,
        boundaries: &Boundaries,
        sentence_index: usize,
    ) -> Vec<Term> {
        let n = sentence.len().min(boundaries.len());
        let mut terms = Vec::new();
        let mut i = 0;
        let mut j = 0;

        while i < n {
            if !boundaries[i].can_start || !boundaries[i].can_cross {
                i += 1;
                continue;
            }

            if j < i {
                j = i;
            }

            if j == n || !boundaries[j].can_cross || j >= i + self.max_term_length {
                i += 1;
                j = i;
                continue;
            }

            if !boundaries[j].can_end {
                j += 1;
                continue;
            }

            if let Some(term) = self.build(sentence, i, j, sentence_index) {
                terms.push(term);
            }
            j += 1;
        }

        log::trace!("Enumerated {} terms over {} tokens", terms.len(), n);
        terms
    }

    fn build(
        &self,
        sentence: &AnnotatedSentence,
        start: usize,
        end: usize,
        sentence_index: usize,
    ) -> Option<Term> {
        let tokens = &sentence.tokens()[start..=end];
        let tags = &sentence.tags()[start..=end];
        let text = recombobulate(tokens);

        if !self.rules.allowed_term(&text, tags) {
            return None;
        }

        Some(Term {
            text,
            pos_path: tags.join("-"),
            pos_tags: tags.to_vec(),
            chunk_path: sentence.chunks()[start..=end].to_vec(),
            tokens: tokens.to_vec(),
            start,
            end,
            sentence_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryComputer;
    use crate::stopwords::StopwordIndex;

    fn fan_of_kitties() -> AnnotatedSentence {
        AnnotatedSentence::from_triples([
            ("I", "PRP", "B-NP"),
            ("am", "VBP", "B-VP"),
            ("a", "DT", "B-NP"),
            ("big", "JJ", "I-NP"),
            ("fan", "NN", "I-NP"),
            ("of", "IN", "B-PP"),
            ("kitties", "NNS", "B-NP"),
        ])
    }

    fn terms_for(sentence: &AnnotatedSentence, max_term_length: usize) -> Vec<Term> {
        let rules = RuleTable::default();
        let stopwords = StopwordIndex::english();
        let boundaries = BoundaryComputer::new(&rules, &stopwords).compute(sentence);
        TermSpanEnumerator::new(&rules, max_term_length)
            .unwrap()
            .enumerate(sentence, &boundaries, 0)
    }

    #[test]
    fn test_nested_terms_from_one_start() {
        let terms = terms_for(&fan_of_kitties(), DEFAULT_MAX_TERM_LENGTH);
        let texts: Vec<&str> = terms.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["big fan", "big fan of kitties", "kitties"]);

        let long = &terms[1];
        assert_eq!((long.start, long.end), (3, 6));
        assert_eq!(long.pos_path, "JJ-NN-IN-NNS");
        assert_eq!(long.chunk_path, vec!["I-NP", "I-NP", "B-PP", "B-NP"]);
        assert_eq!(long.token_count(), 4);
    }

    #[test]
    fn test_hyphenated_tags_kept_whole() {
        let sentence = AnnotatedSentence::from_triples([
            ("big", "JJ", "B-NP"),
            ("(", "-LRB-", "O"),
            ("fan", "NN", "B-NP"),
        ]);
        let terms = terms_for(&sentence, DEFAULT_MAX_TERM_LENGTH);

        let bracketed = terms.iter().find(|t| t.start == 0).unwrap();
        assert_eq!(bracketed.pos_tags, vec!["JJ", "-LRB-", "NN"]);
        assert_eq!(bracketed.pos_path, "JJ--LRB--NN");
        for term in &terms {
            assert_eq!(term.pos_tags.len(), term.token_count());
        }
    }

    #[test]
    fn test_length_cap() {
        let terms = terms_for(&fan_of_kitties(), 3);
        let texts: Vec<&str> = terms.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["big fan", "kitties"]);
    }

    #[test]
    fn test_zero_length_rejected() {
        let rules = RuleTable::default();
        assert_eq!(
            TermSpanEnumerator::new(&rules, 0).err(),
            Some(CoreError::InvalidTermLength(0))
        );
    }

    #[test]
    fn test_display_is_text() {
        let terms = terms_for(&fan_of_kitties(), DEFAULT_MAX_TERM_LENGTH);
        assert_eq!(terms[0].to_string(), "big fan");
    }
}
