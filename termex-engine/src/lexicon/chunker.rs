//! BIO phrase chunking over POS tags
//!
//! Produces `B-`/`I-` tags for NP, VP, PP, ADJP and ADVP, and `O` for
//! everything else. Noun phrases follow `(PDT)? (DT|PRP$)? (CD|JJ*)* (NN*|POS)+`.

use termex_core::annotation::{NOUN_PHRASE_BEGIN, NOUN_PHRASE_INSIDE, OUTSIDE, VERB_PHRASE_BEGIN};

const VERB_PHRASE_INSIDE: &str = "I-VP";

fn is_noun(tag: &str) -> bool {
    matches!(tag, "NN" | "NNS" | "NNP" | "NNPS" | "FW")
}

fn is_adjective(tag: &str) -> bool {
    matches!(tag, "JJ" | "JJR" | "JJS")
}

fn is_verb(tag: &str) -> bool {
    matches!(tag, "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" | "MD")
}

fn is_adverb(tag: &str) -> bool {
    matches!(tag, "RB" | "RBR" | "RBS")
}

/// Tags a noun phrase can continue after
fn continues_noun_phrase(tag: &str) -> bool {
    is_noun(tag) || is_adjective(tag) || matches!(tag, "DT" | "PDT" | "PRP$" | "WP$" | "CD" | "POS")
}

fn phrase(chunk: &str) -> Option<&str> {
    chunk.get(2..).filter(|_| chunk.len() > 2)
}

/// Rule-based BIO chunker
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseChunker;

impl PhraseChunker {
    /// Create a chunker
    pub fn new() -> Self {
        Self
    }

    /// Chunk a tagged sentence; the result has the same length as `tags`
    pub fn chunk(&self, tokens: &[String], tags: &[String]) -> Vec<String> {
        let mut chunks: Vec<String> = Vec::with_capacity(tags.len());

        for (i, tag) in tags.iter().enumerate() {
            let prev_chunk = chunks.last().map(String::as_str).unwrap_or(OUTSIDE);
            let prev_tag = if i > 0 { tags[i - 1].as_str() } else { "" };
            let next_tag = tags.get(i + 1).map_or("", String::as_str);

            let in_noun_phrase = phrase(prev_chunk) == Some("NP") && continues_noun_phrase(prev_tag);
            let in_verb_phrase = phrase(prev_chunk) == Some("VP");

            let chunk = match tag.as_str() {
                t if is_noun(t) || t == "POS" || t == "CD" => {
                    if in_noun_phrase {
                        NOUN_PHRASE_INSIDE
                    } else {
                        NOUN_PHRASE_BEGIN
                    }
                }
                t if is_adjective(t) => {
                    if in_noun_phrase && !is_noun(prev_tag) {
                        NOUN_PHRASE_INSIDE
                    } else if noun_follows(tags, i) {
                        NOUN_PHRASE_BEGIN
                    } else if phrase(prev_chunk) == Some("ADJP") {
                        "I-ADJP"
                    } else {
                        "B-ADJP"
                    }
                }
                "DT" | "PRP$" | "WP$" => {
                    if in_noun_phrase && prev_tag == "PDT" {
                        NOUN_PHRASE_INSIDE
                    } else {
                        NOUN_PHRASE_BEGIN
                    }
                }
                "PDT" | "PRP" | "EX" | "WP" | "WDT" => NOUN_PHRASE_BEGIN,
                t if is_verb(t) => {
                    if in_verb_phrase {
                        VERB_PHRASE_INSIDE
                    } else {
                        VERB_PHRASE_BEGIN
                    }
                }
                "TO" => {
                    if next_tag == "VB" {
                        if in_verb_phrase {
                            VERB_PHRASE_INSIDE
                        } else {
                            VERB_PHRASE_BEGIN
                        }
                    } else {
                        "B-PP"
                    }
                }
                "IN" => "B-PP",
                "RP" if in_verb_phrase => VERB_PHRASE_INSIDE,
                t if is_adverb(t) => {
                    let negation = tokens.get(i).is_some_and(|tok| tok.starts_with('\''));
                    if in_verb_phrase && (negation || is_verb(next_tag) || is_adverb(next_tag)) {
                        VERB_PHRASE_INSIDE
                    } else if phrase(prev_chunk) == Some("ADVP") && is_adverb(prev_tag) {
                        "I-ADVP"
                    } else {
                        "B-ADVP"
                    }
                }
                _ => OUTSIDE,
            };

            chunks.push(chunk.to_string());
        }

        log::trace!("Chunked {} tokens", chunks.len());
        chunks
    }
}

/// Whether a noun follows position `i`, skipping adjectives and numerals
fn noun_follows(tags: &[String], i: usize) -> bool {
    tags[i + 1..]
        .iter()
        .find(|tag| !is_adjective(tag) && tag.as_str() != "CD")
        .is_some_and(|tag| is_noun(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(pairs: &[(&str, &str)]) -> Vec<String> {
        let tokens: Vec<String> = pairs.iter().map(|(t, _)| t.to_string()).collect();
        let tags: Vec<String> = pairs.iter().map(|(_, t)| t.to_string()).collect();
        PhraseChunker::new().chunk(&tokens, &tags)
    }

    #[test]
    fn test_big_fan_of_kitties() {
        let chunks = chunk(&[
            ("I", "PRP"),
            ("am", "VBP"),
            ("a", "DT"),
            ("big", "JJ"),
            ("fan", "NN"),
            ("of", "IN"),
            ("kitties", "NNS"),
        ]);
        assert_eq!(chunks, vec!["B-NP", "B-VP", "B-NP", "I-NP", "I-NP", "B-PP", "B-NP"]);
    }

    #[test]
    fn test_possessive_continues_phrase() {
        let chunks = chunk(&[
            ("Britain", "NNP"),
            ("'s", "POS"),
            ("healthcare", "NN"),
            ("system", "NN"),
        ]);
        assert_eq!(chunks, vec!["B-NP", "I-NP", "I-NP", "I-NP"]);
    }

    #[test]
    fn test_verb_group_with_negation() {
        let chunks = chunk(&[
            ("I", "PRP"),
            ("don", "VBP"),
            ("'t", "RB"),
            ("have", "VBP"),
            ("time", "NN"),
        ]);
        assert_eq!(chunks, vec!["B-NP", "B-VP", "I-VP", "I-VP", "B-NP"]);
    }

    #[test]
    fn test_infinitive_and_preposition() {
        let chunks = chunk(&[
            ("energy", "NN"),
            ("to", "TO"),
            ("add", "VB"),
            ("my", "PRP$"),
            ("voice", "NN"),
            ("to", "TO"),
            ("the", "DT"),
            ("cacophony", "NN"),
        ]);
        assert_eq!(
            chunks,
            vec!["B-NP", "B-VP", "I-VP", "B-NP", "I-NP", "B-PP", "B-NP", "I-NP"]
        );
    }

    #[test]
    fn test_predicative_adjective() {
        let chunks = chunk(&[("kitties", "NNS"), ("are", "VBP"), ("cute", "JJ")]);
        assert_eq!(chunks, vec!["B-NP", "B-VP", "B-ADJP"]);

        let chunks = chunk(&[("are", "VBP"), ("cute", "JJ"), ("creatures", "NNS")]);
        assert_eq!(chunks, vec!["B-VP", "B-NP", "I-NP"]);
    }

    #[test]
    fn test_predeterminer() {
        let chunks = chunk(&[("all", "PDT"), ("the", "DT"), ("hysteria", "NN")]);
        assert_eq!(chunks, vec!["B-NP", "I-NP", "I-NP"]);
    }

    #[test]
    fn test_punctuation_and_conjunctions_are_outside() {
        let chunks = chunk(&[("nuts", "NNS"), ("and", "CC"), ("bolts", "NNS"), (".", ".")]);
        assert_eq!(chunks, vec!["B-NP", "O", "B-NP", "O"]);
    }

    #[test]
    fn test_empty() {
        assert!(chunk(&[]).is_empty());
    }
}
