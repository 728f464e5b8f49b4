//! Per-sentence extraction context

use crate::config::ExtractorConfig;
use crate::error::Result;
use std::cell::OnceCell;
use termex_core::text::{clean_sentence, remove_paths, remove_urls, tokenize_sentence};
use termex_core::{
    AnnotatedSentence, Annotator, Boundaries, BoundaryComputer, StopwordIndex, Term,
    TermSpanEnumerator,
};

/// Annotated sentence with lazily computed boundaries and terms
///
/// Boundaries and terms are each computed on first access and kept for the
/// life of the context. Contexts are independent of each other and can be
/// built on any thread.
#[derive(Debug)]
pub struct TermContext<'a> {
    sentence: AnnotatedSentence,
    sentence_index: usize,
    stopwords: &'a StopwordIndex,
    enumerator: TermSpanEnumerator<'a>,
    config: &'a ExtractorConfig,
    boundaries: OnceCell<Boundaries>,
    terms: OnceCell<Vec<Term>>,
}

impl<'a> TermContext<'a> {
    /// Clean, mask, tokenize and annotate one raw sentence
    pub fn annotate(
        annotator: &dyn Annotator,
        raw: &str,
        sentence_index: usize,
        config: &'a ExtractorConfig,
        stopwords: &'a StopwordIndex,
    ) -> Result<Self> {
        let prepared = prepare_sentence(raw, config);
        let tokens = tokenize_sentence(&prepared);

        let sentence = if tokens.is_empty() {
            AnnotatedSentence::new(Vec::new(), Vec::new(), Vec::new())?
        } else {
            let tags = annotator.tag(&tokens)?;
            let chunks = annotator.chunk(&tokens, &tags)?;
            AnnotatedSentence::new(tokens, tags, chunks)?
        };

        log::trace!(
            "Sentence {} annotated with {} tokens",
            sentence_index,
            sentence.len()
        );
        Self::from_annotated(sentence, sentence_index, config, stopwords)
    }

    /// Wrap an already annotated sentence
    pub fn from_annotated(
        sentence: AnnotatedSentence,
        sentence_index: usize,
        config: &'a ExtractorConfig,
        stopwords: &'a StopwordIndex,
    ) -> Result<Self> {
        let enumerator = TermSpanEnumerator::new(&config.rules, config.max_term_length)?;

        Ok(Self {
            sentence,
            sentence_index,
            stopwords,
            enumerator,
            config,
            boundaries: OnceCell::new(),
            terms: OnceCell::new(),
        })
    }

    /// The annotated sentence
    pub fn sentence(&self) -> &AnnotatedSentence {
        &self.sentence
    }

    /// Index of the sentence within its text
    pub fn sentence_index(&self) -> usize {
        self.sentence_index
    }

    /// Boundary flags, computed once
    pub fn boundaries(&self) -> &Boundaries {
        self.boundaries.get_or_init(|| {
            BoundaryComputer::new(&self.config.rules, self.stopwords).compute(&self.sentence)
        })
    }

    /// Terms of the sentence, computed once
    pub fn terms(&self) -> &[Term] {
        self.terms.get_or_init(|| {
            self.enumerator
                .enumerate(&self.sentence, self.boundaries(), self.sentence_index)
        })
    }

    /// Consume the context, keeping only its terms
    pub fn into_terms(self) -> Vec<Term> {
        self.terms();
        self.terms.into_inner().unwrap_or_default()
    }
}

/// `clean_sentence`, then URL and path masking as configured
pub fn prepare_sentence(raw: &str, config: &ExtractorConfig) -> String {
    let mut text = clean_sentence(raw);
    if config.remove_urls {
        text = remove_urls(&text);
    }
    if config.remove_paths {
        text = remove_paths(&text);
    }
    text
}
