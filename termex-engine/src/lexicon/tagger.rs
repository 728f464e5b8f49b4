//! Lexicon and heuristic part-of-speech tagging
//!
//! Tags are assigned left to right so each decision can look at the tags
//! already chosen for earlier tokens. Lookup order: punctuation and
//! placeholders, contraction pieces, numerals, all-caps acronyms, the
//! closed-class lexicon, known adjectives, capitalization, then known verbs
//! and suffix rules.

use super::dictionary::Lexicon;
use regex::Regex;
use std::sync::OnceLock;

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| Regex::new(r"^<\w+>$").expect("valid regex"))
}

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ical", "less", "ish"];

/// Forms of `be` and `have` that take a participle
const AUXILIARIES: &[&str] = &[
    "be", "is", "am", "are", "was", "were", "been", "being", "'re", "'m", "isn", "aren", "wasn",
    "weren", "have", "has", "had", "having", "'ve", "haven", "hasn", "hadn", "get", "got",
];

/// Tags after which a word that could be a verb reads as a noun
const NOMINAL_CONTEXT: &[&str] = &["DT", "PDT", "PRP$", "WP$", "POS", "CD", "JJ", "JJR", "JJS", "IN"];

/// Tags that read as modifiers of a following participle
const MODIFIER_CONTEXT: &[&str] = &["DT", "PDT", "PRP$", "WP$", "POS", "JJ"];

/// Tags that can be the subject of a following verb
const SUBJECT_TAGS: &[&str] = &["PRP", "NN", "NNP", "NNS", "NNPS", "WDT", "WP", "EX"];

fn is_noun(tag: &str) -> bool {
    matches!(tag, "NN" | "NNS" | "NNP" | "NNPS")
}

fn is_adverb(tag: &str) -> bool {
    matches!(tag, "RB" | "RBR" | "RBS")
}

fn is_plural(lower: &str) -> bool {
    lower.chars().count() >= 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

/// Tagging state at one position
struct Context<'t> {
    tokens: &'t [String],
    /// Tags of all earlier tokens
    tags: &'t [String],
    index: usize,
}

impl Context<'_> {
    fn prev_tag(&self) -> Option<&str> {
        self.tags.last().map(String::as_str)
    }

    fn prev_tag_in(&self, set: &[&str]) -> bool {
        self.prev_tag().is_some_and(|tag| set.contains(&tag))
    }

    fn is_last(&self) -> bool {
        self.index + 1 == self.tokens.len()
    }

    fn is_sentence_initial(&self) -> bool {
        self.index == 0 || matches!(self.prev_tag(), Some(".") | Some(":"))
    }

    /// Whether the nearest non-adverb before this token is a form of
    /// `be` or `have`
    fn follows_auxiliary(&self) -> bool {
        self.tags
            .iter()
            .zip(self.tokens)
            .rev()
            .find(|(tag, _)| !is_adverb(tag))
            .is_some_and(|(_, token)| AUXILIARIES.contains(&token.to_lowercase().as_str()))
    }
}

/// Assigns Penn Treebank tags from an embedded lexicon and heuristics
#[derive(Debug, Clone, Copy)]
pub struct RuleTagger<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> RuleTagger<'a> {
    /// Create a tagger backed by `lexicon`
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Tag every token; the result has the same length as `tokens`
    pub fn tag(&self, tokens: &[String]) -> Vec<String> {
        let mut tags: Vec<String> = Vec::with_capacity(tokens.len());

        for (index, token) in tokens.iter().enumerate() {
            let tag = self.tag_token(
                token,
                &Context {
                    tokens,
                    tags: &tags,
                    index,
                },
            );
            tags.push(tag.to_string());
        }

        tags
    }

    fn tag_token(&self, token: &str, ctx: &Context<'_>) -> &'a str {
        if token.is_empty() || placeholder().is_match(token) {
            return "SYM";
        }
        if !token.chars().any(char::is_alphanumeric) {
            return punctuation_tag(token, ctx.is_last());
        }
        if token.starts_with('\'') {
            return self.contraction_tag(token, ctx);
        }
        if is_numeral(token) {
            return "CD";
        }

        let letters = token.chars().filter(|c| c.is_alphabetic()).count();
        if letters > 1 && token.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase) {
            return "NNP";
        }

        let lower = token.to_lowercase();
        if let Some(tag) = self.lexicon.closed_tag(&lower) {
            if lower == "like" && ctx.prev_tag_in(&["PRP", "NNS", "NNP", "NNPS", "MD", "TO", "RB"]) {
                return self.base_verb(ctx);
            }
            return tag;
        }
        if self.lexicon.is_adjective(&lower) {
            return "JJ";
        }

        let capitalized = token.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !ctx.is_sentence_initial() {
            return if is_plural(&lower) && lower.chars().count() > 3 {
                "NNPS"
            } else {
                "NNP"
            };
        }

        let tag = self.open_class_tag(&lower, ctx);
        if capitalized && is_noun(tag) && tag != "NNS" {
            "NNP"
        } else {
            tag
        }
    }

    fn contraction_tag(&self, token: &str, ctx: &Context<'_>) -> &'a str {
        let lower = token.to_lowercase();
        if lower == "'s" {
            return if ctx.prev_tag_in(&["PRP", "WP", "WDT", "EX", "DT"]) {
                "VBZ"
            } else {
                "POS"
            };
        }
        if let Some(tag) = self.lexicon.closed_tag(&lower) {
            return tag;
        }

        // A quoted word such as 'kitties
        let inner = token.trim_start_matches('\'');
        if inner.is_empty() {
            "SYM"
        } else {
            self.tag_token(inner, ctx)
        }
    }

    fn open_class_tag(&self, lower: &str, ctx: &Context<'_>) -> &'a str {
        if self.lexicon.is_verb(lower) {
            return self.base_verb(ctx);
        }
        if self.lexicon.is_irregular_participle(lower) {
            return self.participle(ctx);
        }
        if self.lexicon.is_irregular_past(lower) {
            return if ctx.follows_auxiliary() { "VBN" } else { "VBD" };
        }
        if self.is_third_person(lower) {
            return if ctx.prev_tag_in(SUBJECT_TAGS) { "VBZ" } else { "NNS" };
        }

        let chars = lower.chars().count();
        if let Some(stem) = lower.strip_suffix("ing") {
            if chars >= 5 && has_vowel(stem) {
                return if ctx.prev_tag_in(MODIFIER_CONTEXT) { "NN" } else { "VBG" };
            }
        }
        if let Some(stem) = lower.strip_suffix("ed") {
            if chars >= 4 && has_vowel(stem) && (!stem.ends_with('e') || self.is_past_of_verb(lower)) {
                return self.participle(ctx);
            }
        }
        if chars >= 5 && lower.ends_with("ly") {
            return "RB";
        }
        if ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| lower.ends_with(suffix) && chars > suffix.len() + 2)
        {
            return "JJ";
        }
        if is_plural(lower) {
            return "NNS";
        }
        "NN"
    }

    /// Reading of a base-form verb
    fn base_verb(&self, ctx: &Context<'_>) -> &'a str {
        match ctx.prev_tag() {
            None => "VB",
            Some("TO" | "MD") => "VB",
            Some(tag) if NOMINAL_CONTEXT.contains(&tag) => "NN",
            Some(tag) if SUBJECT_TAGS.contains(&tag) || is_adverb(tag) => "VBP",
            Some(_) => "VB",
        }
    }

    fn participle(&self, ctx: &Context<'_>) -> &'a str {
        if ctx.follows_auxiliary() {
            "VBN"
        } else if ctx.prev_tag_in(MODIFIER_CONTEXT) {
            "JJ"
        } else {
            "VBD"
        }
    }

    /// Whether `lower` is the third person singular of a known verb
    fn is_third_person(&self, lower: &str) -> bool {
        if let Some(stem) = lower.strip_suffix("ies") {
            if self.lexicon.is_verb(&format!("{stem}y")) {
                return true;
            }
        }
        if let Some(stem) = lower.strip_suffix("es") {
            if self.lexicon.is_verb(stem) {
                return true;
            }
        }
        lower
            .strip_suffix('s')
            .is_some_and(|stem| !stem.ends_with('s') && self.lexicon.is_verb(stem))
    }

    /// Whether an `-eed` word such as `agreed` is the past of a known verb
    fn is_past_of_verb(&self, lower: &str) -> bool {
        lower
            .strip_suffix('d')
            .is_some_and(|stem| self.lexicon.is_verb(stem))
    }
}

fn is_numeral(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('$' | '£' | '€' | '#' | '+' | '-') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

fn punctuation_tag(token: &str, last: bool) -> &'static str {
    match token {
        "," => ",",
        ";" | ":" | "-" | "--" => ":",
        "(" => "(",
        ")" => ")",
        "$" => "$",
        "&" => "CC",
        _ if token.chars().all(|c| matches!(c, '.' | '!' | '?' | '…')) => {
            if last {
                "."
            } else {
                ":"
            }
        }
        _ => "SYM",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(sentence: &str) -> Vec<String> {
        let tokens: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
        RuleTagger::new(Lexicon::english()).tag(&tokens)
    }

    #[test]
    fn test_big_fan_of_kitties() {
        assert_eq!(
            tag("I am a big fan of kitties"),
            vec!["PRP", "VBP", "DT", "JJ", "NN", "IN", "NNS"]
        );
    }

    #[test]
    fn test_like_as_verb_and_preposition() {
        assert_eq!(tag("I like kitties")[1], "VBP");
        assert_eq!(tag("fans like me")[1], "VBP");
        assert_eq!(tag("a song like this")[2], "IN");
    }

    #[test]
    fn test_proper_nouns_and_numbers() {
        assert_eq!(
            tag("I think Enterprise 2.0 is neato"),
            vec!["PRP", "VBP", "NNP", "CD", "VBZ", "JJ"]
        );
        assert_eq!(tag("the 1930s")[1], "CD");
        assert_eq!(tag("a $700 plan")[1], "CD");
    }

    #[test]
    fn test_sentence_initial_capitals() {
        assert_eq!(tag("Humans have 23 pairs")[0], "NNS");
        assert_eq!(tag("European policymakers urged")[0], "NNP");
        assert_eq!(tag("Please consider the environment")[..2], ["UH", "VB"]);
        assert_eq!(tag("The Marching Indians")[1..], ["NNP", "NNPS"]);
    }

    #[test]
    fn test_contraction_pieces() {
        assert_eq!(
            tag("Jon should 've liked the puppies"),
            vec!["NNP", "MD", "VBP", "VBN", "DT", "NNS"]
        );
        assert_eq!(tag("Britain 's healthcare system")[1], "POS");
        assert_eq!(tag("it 's cute")[1], "VBZ");
        assert_eq!(tag("I don 't know")[1..3], ["VBP", "RB"]);
    }

    #[test]
    fn test_context_sensitive_verbs() {
        assert_eq!(tag("it makes sense")[1], "VBZ");
        assert_eq!(tag("the reports")[1], "NNS");
        assert_eq!(tag("to change your password")[1], "VB");
        assert_eq!(tag("the change")[1], "NN");
        assert_eq!(tag("my considered opinion")[1], "JJ");
        assert_eq!(tag("I have always asked")[3], "VBN");
        assert_eq!(tag("the plan aimed at")[2], "VBD");
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(tag("before printing")[1], "VBG");
        assert_eq!(tag("all the fear-mongering")[2], "NN");
        assert_eq!(tag("visually")[0], "RB");
        assert_eq!(tag("a dangerous idea")[1], "JJ");
        assert_eq!(tag("the crisis")[1], "NN");
        assert_eq!(tag("the gusto")[1], "NN");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(tag("kitties , puppies ; birds ."), vec!["NNS", ",", "NNS", ":", "NNS", "."]);
        assert_eq!(tag("Mr . Mike")[1], ":");
        assert_eq!(tag("see <URL> now")[1], "SYM");
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(tag("the MCHS choir")[1], "NNP");
        assert_eq!(tag("I")[0], "PRP");
    }

    #[test]
    fn test_empty() {
        assert!(tag("").is_empty());
    }
}
