//! Rule-based sentence boundary detection

use super::dictionary::Lexicon;
use regex::Regex;
use std::sync::OnceLock;

static INITIALS: OnceLock<Regex> = OnceLock::new();

fn initials() -> &'static Regex {
    INITIALS.get_or_init(|| Regex::new(r"^(?:[A-Za-z]\.)*[A-Za-z]$").expect("valid regex"))
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn opens_sentence(ch: char) -> bool {
    ch.is_uppercase()
        || ch.is_ascii_digit()
        || is_terminator(ch)
        || matches!(ch, '"' | '\'' | '“' | '‘' | '(' | '[' | '{' | '<')
}

/// Splits text after terminator runs that are followed by whitespace and
/// something that can open a sentence
#[derive(Debug, Clone, Copy)]
pub struct SentenceDetector<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SentenceDetector<'a> {
    /// Create a detector backed by `lexicon`'s abbreviation list
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Split `text` into trimmed, non-empty sentences
    pub fn detect(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut sentence_start = 0;
        let mut i = 0;

        while i < chars.len() {
            if !is_terminator(chars[i].1) {
                i += 1;
                continue;
            }

            let run_start = i;
            while i < chars.len() && is_terminator(chars[i].1) {
                i += 1;
            }
            let run_end = i;

            let mut next = run_end;
            while next < chars.len() && chars[next].1.is_whitespace() {
                next += 1;
            }

            let has_gap = next > run_end;
            let opens = next < chars.len() && opens_sentence(chars[next].1);
            if !has_gap || !opens {
                continue;
            }

            let run_start_byte = chars[run_start].0;
            let single_period = run_end - run_start == 1 && chars[run_start].1 == '.';
            if single_period && self.is_abbreviation(&text[sentence_start..run_start_byte]) {
                continue;
            }

            let end_byte = chars.get(run_end).map_or(text.len(), |(b, _)| *b);
            push_trimmed(&mut sentences, &text[sentence_start..end_byte]);
            sentence_start = end_byte;
        }

        push_trimmed(&mut sentences, &text[sentence_start..]);
        sentences
    }

    /// Whether the last word of `before` is an abbreviation
    fn is_abbreviation(&self, before: &str) -> bool {
        let word = before
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());

        if word.is_empty() || word == "I" {
            return false;
        }

        self.lexicon.is_abbreviation(&word.to_lowercase()) || initials().is_match(word)
    }
}

fn push_trimmed(sentences: &mut Vec<String>, sentence: &str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Vec<String> {
        SentenceDetector::new(Lexicon::english()).detect(text)
    }

    #[test]
    fn test_two_sentences() {
        assert_eq!(
            detect("I like kitties. They are cute creatures"),
            vec!["I like kitties.", "They are cute creatures"]
        );
    }

    #[test]
    fn test_cleaned_paragraph_break() {
        assert_eq!(
            detect("I like kitties. . I like puppies"),
            vec!["I like kitties.", ".", "I like puppies"]
        );
    }

    #[test]
    fn test_title_abbreviation() {
        assert_eq!(detect("Dr. Smith likes kitties"), vec!["Dr. Smith likes kitties"]);
        assert_eq!(
            detect("The choir, led by Mr. Mike Weaver, sang. Everyone cheered!"),
            vec!["The choir, led by Mr. Mike Weaver, sang.", "Everyone cheered!"]
        );
    }

    #[test]
    fn test_initials_and_dotted_abbreviations() {
        assert_eq!(
            detect("European policymakers urged the U.S. Senate to act"),
            vec!["European policymakers urged the U.S. Senate to act"]
        );
        assert_eq!(detect("J. R. Hartley wrote it"), vec!["J. R. Hartley wrote it"]);
    }

    #[test]
    fn test_lower_case_continuation() {
        assert_eq!(
            detect("See the site http://www.google.com. for kitties"),
            vec!["See the site http://www.google.com. for kitties"]
        );
    }

    #[test]
    fn test_terminator_runs() {
        assert_eq!(
            detect("You don't like kitties?!? That is odd"),
            vec!["You don't like kitties?!?", "That is odd"]
        );
    }

    #[test]
    fn test_no_whitespace_no_split() {
        assert_eq!(detect("Version 2.0 ships"), vec!["Version 2.0 ships"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(detect("").is_empty());
        assert!(detect("   \n ").is_empty());
    }
}
