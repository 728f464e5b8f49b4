//! Per-token term boundary flags
//!
//! Flags are computed strictly left to right. Evaluating index `i` yields
//! the provisional flags for `i` together with at most a couple of
//! corrections to `i - 1`. Once those corrections are applied, index
//! `i - 1` is sealed: the stopword and part-of-speech gates run on it and
//! its flags never change again. Nothing is ever written ahead of the
//! current index.

use crate::annotation::{
    AnnotatedSentence, INSIDE_PREFIX, NOUN_PHRASE_BEGIN, NOUN_PHRASE_INSIDE, VERB_PHRASE_BEGIN,
};
use crate::rules::RuleTable;
use crate::stopwords::StopwordIndex;
use regex::Regex;
use smallvec::SmallVec;
use std::ops::Index;
use std::sync::OnceLock;

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder_pattern() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| Regex::new(r"<\w+>").expect("placeholder pattern is valid"))
}

/// How a term may relate to one token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryFlags {
    /// A term may begin on this token
    pub can_start: bool,
    /// A term may end on this token
    pub can_end: bool,
    /// This token may be part of a term at all
    pub can_cross: bool,
}

/// Finalized flags for every token of a sentence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boundaries(Vec<BoundaryFlags>);

impl Boundaries {
    /// Number of tokens covered
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sentence had no tokens
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flags at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&BoundaryFlags> {
        self.0.get(index)
    }

    /// Iterate over flags in token order
    pub fn iter(&self) -> std::slice::Iter<'_, BoundaryFlags> {
        self.0.iter()
    }

    /// Flags as a slice
    pub fn as_slice(&self) -> &[BoundaryFlags] {
        &self.0
    }
}

impl Index<usize> for Boundaries {
    type Output = BoundaryFlags;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Lookback correction issued while evaluating the next index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Correction {
    /// Overwrite `can_end` of the previous token
    SetEnd(bool),
}

type Corrections = SmallVec<[Correction; 2]>;

/// Computes [`Boundaries`] for annotated sentences
#[derive(Debug, Clone, Copy)]
pub struct BoundaryComputer<'a> {
    rules: &'a RuleTable,
    stopwords: &'a StopwordIndex,
}

impl<'a> BoundaryComputer<'a> {
    /// Create a computer over a rule table and stopword index
    pub fn new(rules: &'a RuleTable, stopwords: &'a StopwordIndex) -> Self {
        Self { rules, stopwords }
    }

    /// Compute flags for every token of `sentence`
    pub fn compute(&self, sentence: &AnnotatedSentence) -> Boundaries {
        let n = sentence.len();
        let mut sealed = Vec::with_capacity(n);
        let mut pending: Option<BoundaryFlags> = None;

        for i in 0..n {
            let (flags, corrections) = self.evaluate(sentence, i);

            if let Some(mut previous) = pending.take() {
                for correction in corrections {
                    match correction {
                        Correction::SetEnd(value) => previous.can_end = value,
                    }
                }
                sealed.push(self.seal(sentence, i - 1, previous));
            }

            pending = Some(flags);
        }

        if let Some(last) = pending {
            sealed.push(self.seal(sentence, n - 1, last));
        }

        Boundaries(sealed)
    }

    /// Provisional flags for `i` plus corrections for `i - 1`
    fn evaluate(&self, sentence: &AnnotatedSentence, i: usize) -> (BoundaryFlags, Corrections) {
        let crossing = &self.rules.crossing;
        let token = sentence.token(i);
        let tag = sentence.tag(i);
        let chunk = sentence.chunk(i);
        let previous_tag = if i > 0 { Some(sentence.tag(i - 1)) } else { None };
        let is_conjunction = crossing.conjunction_tags.contains(tag);
        let mut corrections = Corrections::new();

        // Separators, connectives, verb chunk openings and masked noise
        let mut can_cross = !crossing.comma_tags.contains(tag);
        if crossing.block_conjunctions && is_conjunction {
            can_cross = false;
        }
        if self.rules.is_connective(token) {
            can_cross = false;
        }
        if chunk == VERB_PHRASE_BEGIN {
            can_cross = false;
        }
        if placeholder_pattern().is_match(token) {
            can_cross = false;
        }

        let mut can_start = chunk == NOUN_PHRASE_BEGIN;
        if chunk == NOUN_PHRASE_INSIDE
            && previous_tag.is_some_and(|prev| self.rules.start.shift_tags.contains(prev))
        {
            can_start = true;
        }

        let can_end = !sentence.chunk(i + 1).starts_with(INSIDE_PREFIX);

        if is_conjunction {
            if i > 0 {
                corrections.push(Correction::SetEnd(true));
            }
            can_cross = false;
        }
        if previous_tag.is_some_and(|prev| crossing.conjunction_tags.contains(prev)) {
            can_start = true;
        }

        // Contraction pieces keep both halves together
        if token.starts_with('\'') {
            can_start = false;
            if i > 0 {
                corrections.push(Correction::SetEnd(false));
            }
        }

        let flags = BoundaryFlags {
            can_start,
            can_end,
            can_cross,
        };
        (flags, corrections)
    }

    /// Apply the stopword and part-of-speech gates to a finished index
    fn seal(
        &self,
        sentence: &AnnotatedSentence,
        i: usize,
        mut flags: BoundaryFlags,
    ) -> BoundaryFlags {
        let token = sentence.token(i);

        let joined_is_stopword = i + 1 < sentence.len() && {
            let joined = format!("{}{}", token, sentence.token(i + 1));
            self.stopwords.is_stopword(&joined)
        };
        if self.stopwords.is_stopword(token) || joined_is_stopword {
            flags.can_start = false;
            flags.can_end = false;
        }

        let tag = sentence.tag(i);
        flags.can_start &= self.rules.start_permitted(tag);
        flags.can_end &= self.rules.end_permitted(tag);
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(triples: &[(&str, &str, &str)]) -> Boundaries {
        let rules = RuleTable::default();
        let stopwords = StopwordIndex::english();
        let sentence = AnnotatedSentence::from_triples(triples.iter().copied());
        BoundaryComputer::new(&rules, &stopwords).compute(&sentence)
    }

    #[test]
    fn test_empty_sentence() {
        assert!(compute(&[]).is_empty());
    }

    #[test]
    fn test_single_noun() {
        let flags = compute(&[("kitties", "NNS", "B-NP")]);
        assert_eq!(
            flags[0],
            BoundaryFlags {
                can_start: true,
                can_end: true,
                can_cross: true
            }
        );
    }

    #[test]
    fn test_start_shifts_past_determiner() {
        let flags = compute(&[("the", "DT", "B-NP"), ("puppies", "NNS", "I-NP")]);
        assert!(!flags[0].can_start);
        assert!(!flags[0].can_end);
        assert!(flags[1].can_start);
        assert!(flags[1].can_end);
    }

    #[test]
    fn test_inside_chunk_blocks_end() {
        let flags = compute(&[("big", "JJ", "B-NP"), ("fan", "NN", "I-NP")]);
        assert!(flags[0].can_start);
        assert!(!flags[0].can_end);
        assert!(flags[1].can_end);
        assert!(!flags[1].can_start);
    }

    #[test]
    fn test_conjunction_splits_phrase() {
        let flags = compute(&[
            ("nuts", "NNS", "B-NP"),
            ("and", "CC", "I-NP"),
            ("bolts", "NNS", "I-NP"),
        ]);
        assert!(flags[0].can_end, "conjunction re-opens the previous end");
        assert!(!flags[1].can_cross);
        assert!(flags[2].can_start);
        assert!(flags[2].can_end);
    }

    #[test]
    fn test_conjunction_does_not_reopen_stopword_end() {
        let flags = compute(&[("them", "NNS", "B-NP"), ("and", "CC", "I-NP")]);
        assert!(!flags[0].can_end);
    }

    #[test]
    fn test_contraction_piece() {
        let flags = compute(&[
            ("Jon", "NNP", "B-NP"),
            ("should", "MD", "B-VP"),
            ("'ve", "VB", "I-VP"),
        ]);
        assert!(!flags[1].can_end);
        assert!(!flags[1].can_start);
        assert!(!flags[2].can_start);
    }

    #[test]
    fn test_placeholder_not_crossable() {
        let flags = compute(&[("<URL>", "NN", "B-NP")]);
        assert!(!flags[0].can_cross);
    }

    #[test]
    fn test_connective_not_crossable() {
        let flags = compute(&[("time", "NN", "B-NP"), ("for", "IN", "B-PP")]);
        assert!(flags[0].can_cross);
        assert!(!flags[1].can_cross);
    }

    #[test]
    fn test_verb_chunk_start_not_crossable() {
        let flags = compute(&[("makes", "VBZ", "B-VP"), ("sense", "NN", "B-NP")]);
        assert!(!flags[0].can_cross);
        assert!(flags[1].can_cross);
    }
}
