//! Annotator backed by an nlprule tokenizer model
//!
//! Sentence splitting and POS tags come from an nlprule binary
//! (`en_tokenizer.bin`). nlprule tokenizes on its own, so its tags are
//! aligned back onto the extractor's tokens by surface text. Tokens the
//! model splits differently, or tags outside the Penn set, keep the tag of
//! the rule-based tagger. Chunking and stemming use the reference
//! annotator over the resulting tags.

use crate::error::Result;
use crate::lexicon::{LexiconAnnotator, RuleTagger};
use nlprule::Tokenizer;
use std::path::Path;
use termex_core::{Annotator, AnnotatorError, Stemmer};

const PENN_TAGS: &[&str] = &[
    "CC", "CD", "DT", "EX", "FW", "IN", "JJ", "JJR", "JJS", "LS", "MD", "NN", "NNS", "NNP",
    "NNPS", "PDT", "POS", "PRP", "PRP$", "RB", "RBR", "RBS", "RP", "SYM", "TO", "UH", "VB",
    "VBD", "VBG", "VBN", "VBP", "VBZ", "WDT", "WP", "WP$", "WRB",
];

/// nlprule sentence detection and tagging with a rule-based fallback
pub struct ModelAnnotator {
    tokenizer: Tokenizer,
    fallback: LexiconAnnotator,
}

impl std::fmt::Debug for ModelAnnotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelAnnotator").finish_non_exhaustive()
    }
}

impl ModelAnnotator {
    /// Load an nlprule tokenizer binary
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let tokenizer = Tokenizer::new(path).map_err(|e| AnnotatorError::new(e))?;
        log::debug!("Loaded nlprule tokenizer from {}", path.display());

        Ok(Self {
            tokenizer,
            fallback: LexiconAnnotator::english(),
        })
    }

    /// (text, tag) for every model token of `text`, in order
    fn model_tokens(&self, text: &str) -> Vec<(String, Option<String>)> {
        self.tokenizer
            .pipe(text)
            .flat_map(|sentence| {
                sentence
                    .tokens()
                    .iter()
                    .map(|token| {
                        let word = token.word();
                        let tag = word.tags().first().map(|data| data.pos().as_str().to_string());
                        (word.text().as_str().to_string(), tag)
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|(text, _)| !text.trim().is_empty())
            .collect()
    }
}

impl Stemmer for ModelAnnotator {
    fn stem(&self, word: &str) -> String {
        self.fallback.stem(word)
    }
}

impl Annotator for ModelAnnotator {
    fn detect_sentences(&self, text: &str) -> std::result::Result<Vec<String>, AnnotatorError> {
        Ok(self
            .tokenizer
            .pipe(text)
            .map(|sentence| sentence.text().trim().to_string())
            .filter(|sentence| !sentence.is_empty())
            .collect())
    }

    fn tag(&self, tokens: &[String]) -> std::result::Result<Vec<String>, AnnotatorError> {
        let fallback = RuleTagger::new(self.fallback.lexicon()).tag(tokens);
        let model = self.model_tokens(&tokens.join(" "));
        Ok(align_tags(tokens, &model, fallback))
    }

    fn chunk(
        &self,
        tokens: &[String],
        tags: &[String],
    ) -> std::result::Result<Vec<String>, AnnotatorError> {
        self.fallback.chunk(tokens, tags)
    }
}

/// Overlay model tags onto `fallback` where a model token starts exactly
/// where one of `tokens` starts and carries a Penn tag
///
/// Positions are byte offsets into `tokens` joined by single spaces.
pub(crate) fn align_tags(
    tokens: &[String],
    model: &[(String, Option<String>)],
    mut fallback: Vec<String>,
) -> Vec<String> {
    let joined = tokens.join(" ");

    let mut starts = Vec::with_capacity(model.len());
    let mut cursor = 0;
    for (text, tag) in model {
        if let Some(offset) = joined[cursor..].find(text.as_str()) {
            let start = cursor + offset;
            starts.push((start, tag.as_deref()));
            cursor = start + text.len();
        }
    }

    let mut offset = 0;
    let mut model_tags = starts.into_iter().peekable();
    for (index, token) in tokens.iter().enumerate() {
        while model_tags.next_if(|(start, _)| *start < offset).is_some() {}

        if let Some((_, Some(tag))) = model_tags.next_if(|(start, _)| *start == offset) {
            if PENN_TAGS.contains(&tag) {
                fallback[index] = tag.to_string();
            }
        }
        offset += token.len() + 1;
    }

    fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn piece(text: &str, tag: &str) -> (String, Option<String>) {
        (text.to_string(), Some(tag.to_string()))
    }

    #[test]
    fn test_aligned_tags_replace_fallback() {
        let tokens = strings(&["I", "like", "kitties"]);
        let model = vec![piece("I", "PRP"), piece("like", "VBP"), piece("kitties", "NNS")];
        let tags = align_tags(&tokens, &model, strings(&["X", "X", "X"]));
        assert_eq!(tags, ["PRP", "VBP", "NNS"]);
    }

    #[test]
    fn test_split_tokens_keep_fallback() {
        // model keeps "U.S." whole, our tokens split off the period
        let tokens = strings(&["the", "U.S", ".", "Senate"]);
        let model = vec![piece("the", "DT"), piece("U.S.", "NNP"), piece("Senate", "NNP")];
        let tags = align_tags(&tokens, &model, strings(&["a", "b", ":", "d"]));
        assert_eq!(tags, ["DT", "b", ":", "NNP"]);
    }

    #[test]
    fn test_non_penn_tags_ignored() {
        let tokens = strings(&["kitties", "."]);
        let model = vec![piece("kitties", "NNS"), piece(".", "PCT"), (".".into(), None)];
        let tags = align_tags(&tokens, &model, strings(&["NN", "."]));
        assert_eq!(tags, ["NNS", "."]);
    }

    #[test]
    fn test_missing_model_file() {
        let result = ModelAnnotator::from_path("/no/such/en_tokenizer.bin");
        assert!(matches!(result, Err(crate::EngineError::Annotator(_))));
    }

    #[test]
    fn test_model_annotation_when_available() {
        let Ok(path) = std::env::var("TERMEX_NLPRULE_MODEL") else {
            return;
        };
        let annotator = ModelAnnotator::from_path(path).unwrap();

        let sentences = annotator
            .detect_sentences("I like kitties. They are cute creatures.")
            .unwrap();
        assert_eq!(sentences.len(), 2);

        let tokens = strings(&["I", "am", "a", "big", "fan", "of", "kitties"]);
        let tags = annotator.tag(&tokens).unwrap();
        assert_eq!(tags.len(), tokens.len());
        assert_eq!(tags[6], "NNS");
    }
}
