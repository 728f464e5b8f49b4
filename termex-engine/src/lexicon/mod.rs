//! Rule-based reference annotator
//!
//! [`LexiconAnnotator`] implements [`Annotator`] with an embedded English
//! lexicon and a handful of heuristics, so the extractor works without a
//! statistical model. It never fails.

mod chunker;
mod dictionary;
mod sentences;
mod stemmer;
mod tagger;

pub use chunker::PhraseChunker;
pub use dictionary::Lexicon;
pub use sentences::SentenceDetector;
pub use stemmer::SnowballStemmer;
pub use tagger::RuleTagger;

use termex_core::{Annotator, AnnotatorError, Stemmer};

/// Sentence detector, tagger, chunker and stemmer over one [`Lexicon`]
#[derive(Debug, Clone, Copy)]
pub struct LexiconAnnotator {
    lexicon: &'static Lexicon,
    chunker: PhraseChunker,
    stemmer: SnowballStemmer,
}

impl LexiconAnnotator {
    /// Annotator over the embedded English lexicon
    pub fn english() -> Self {
        Self::with_lexicon(Lexicon::english())
    }

    /// Annotator over a caller-supplied lexicon
    pub fn with_lexicon(lexicon: &'static Lexicon) -> Self {
        Self {
            lexicon,
            chunker: PhraseChunker::new(),
            stemmer: SnowballStemmer::new(),
        }
    }

    /// The backing lexicon
    pub fn lexicon(&self) -> &'static Lexicon {
        self.lexicon
    }
}

impl Default for LexiconAnnotator {
    fn default() -> Self {
        Self::english()
    }
}

impl Stemmer for LexiconAnnotator {
    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }
}

impl Annotator for LexiconAnnotator {
    fn detect_sentences(&self, text: &str) -> Result<Vec<String>, AnnotatorError> {
        Ok(SentenceDetector::new(self.lexicon).detect(text))
    }

    fn tag(&self, tokens: &[String]) -> Result<Vec<String>, AnnotatorError> {
        Ok(RuleTagger::new(self.lexicon).tag(tokens))
    }

    fn chunk(&self, tokens: &[String], tags: &[String]) -> Result<Vec<String>, AnnotatorError> {
        Ok(self.chunker.chunk(tokens, tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termex_core::text::tokenize_sentence;

    #[test]
    fn test_annotates_aligned_sequences() {
        let annotator = LexiconAnnotator::english();
        let tokens = tokenize_sentence("I think Enterprise 2.0 is neato");
        let tags = annotator.tag(&tokens).unwrap();
        let chunks = annotator.chunk(&tokens, &tags).unwrap();

        assert_eq!(tokens.len(), tags.len());
        assert_eq!(tokens.len(), chunks.len());
        assert_eq!(chunks, vec!["B-NP", "B-VP", "B-NP", "I-NP", "B-VP", "B-ADJP"]);
    }

    #[test]
    fn test_sentences_and_stems() {
        let annotator = LexiconAnnotator::default();
        let sentences = annotator
            .detect_sentences("I like kitties. They are cute creatures")
            .unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(annotator.stem("kitties"), annotator.stem("kitty"));
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LexiconAnnotator>();
    }
}
