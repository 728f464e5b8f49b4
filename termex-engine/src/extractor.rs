//! Term extraction over whole texts
//!
//! [`TermExtractor`] splits text into sentences with its [`Annotator`],
//! builds one [`TermContext`] per sentence and collects the terms in
//! sentence order.

use crate::config::ExtractorConfig;
use crate::context::TermContext;
use crate::error::Result;
use crate::lexicon::LexiconAnnotator;
use std::io::BufRead;
use std::sync::Arc;
use termex_core::text::{clean_text, extract_embedded_sentences, tokenize_sentence};
use termex_core::{Annotator, StopwordIndex, StopwordSource, Term};

/// How sentences are distributed over threads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One sentence after another on the calling thread
    Sequential,
    /// Sentences spread over a rayon pool
    Parallel,
}

/// Extracts candidate terms from sentences and texts
pub struct TermExtractor {
    annotator: Arc<dyn Annotator>,
    config: ExtractorConfig,
    stopwords: StopwordIndex,
}

impl std::fmt::Debug for TermExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermExtractor")
            .field("config", &self.config)
            .field("stopwords", &self.stopwords.len())
            .finish_non_exhaustive()
    }
}

impl TermExtractor {
    /// Create an extractor with the embedded English stopword list
    pub fn new(annotator: Arc<dyn Annotator>, config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            annotator,
            config,
            stopwords: StopwordIndex::english(),
        })
    }

    /// Extractor over the built-in [`LexiconAnnotator`] with default settings
    pub fn english() -> Self {
        Self {
            annotator: Arc::new(LexiconAnnotator::english()),
            config: ExtractorConfig::default(),
            stopwords: StopwordIndex::english(),
        }
    }

    /// Replace the stopword index
    pub fn with_stopwords(mut self, stopwords: StopwordIndex) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Replace the stopword index with one read from `source`
    pub fn with_stopword_source(self, source: &dyn StopwordSource) -> Result<Self> {
        let stopwords = StopwordIndex::from_source(source)?;
        Ok(self.with_stopwords(stopwords))
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Active stopword index
    pub fn stopwords(&self) -> &StopwordIndex {
        &self.stopwords
    }

    /// The annotator in use
    pub fn annotator(&self) -> &dyn Annotator {
        self.annotator.as_ref()
    }

    /// Execution mode selected by the configuration and enabled features
    pub fn execution_mode(&self) -> ExecutionMode {
        if self.config.parallel && cfg!(feature = "parallel") {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }

    /// Split text into trimmed sentences
    ///
    /// Empty sentences and sentences made only of `.`, `!` or `?` are
    /// dropped.
    pub fn sentences(&self, text: &str) -> Result<Vec<String>> {
        let detected = self.annotator.detect_sentences(&clean_text(text))?;
        Ok(detected
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty() && !s.chars().all(|c| matches!(c, '.' | '!' | '?')))
            .map(str::to_string)
            .collect())
    }

    /// Stream the sentences of a reader to `f`
    ///
    /// Lines are trimmed and grouped into blocks separated by blank lines.
    /// Each block is split with [`Self::sentences`] and every sentence is
    /// passed on with its newlines replaced by spaces.
    pub fn each_sentence<R, F>(&self, reader: R, mut f: F) -> Result<()>
    where
        R: BufRead,
        F: FnMut(&str),
    {
        let mut lines: Vec<String> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                self.flush_block(&mut lines, &mut f)?;
            }
            lines.push(line.to_string());
        }

        self.flush_block(&mut lines, &mut f)
    }

    fn flush_block<F: FnMut(&str)>(&self, lines: &mut Vec<String>, f: &mut F) -> Result<()> {
        let block = lines.join("\n");
        lines.clear();

        let block = block.trim();
        if block.is_empty() {
            return Ok(());
        }

        for sentence in self.sentences(block)? {
            f(&sentence.replace('\n', " "));
        }
        Ok(())
    }

    /// Tokenize a sentence and pair every token with its POS tag
    pub fn postag(&self, sentence: &str) -> Result<Vec<(String, String)>> {
        let tokens = tokenize_sentence(sentence);
        let tags = self.annotator.tag(&tokens)?;
        Ok(tokens.into_iter().zip(tags).collect())
    }

    /// Tokenize a sentence and pair every token with its chunk tag
    pub fn chunk_sentence(&self, sentence: &str) -> Result<Vec<(String, String)>> {
        let tokens = tokenize_sentence(sentence);
        let tags = self.annotator.tag(&tokens)?;
        let chunks = self.annotator.chunk(&tokens, &tags)?;
        Ok(tokens.into_iter().zip(chunks).collect())
    }

    /// [`Self::chunk_sentence`] over every sentence of `text`, concatenated
    pub fn chunk_text(&self, text: &str) -> Result<Vec<(String, String)>> {
        let mut chunked = Vec::new();
        for sentence in self.sentences(text)? {
            chunked.extend(self.chunk_sentence(&sentence)?);
        }
        Ok(chunked)
    }

    /// Comparison key for `text` using the active stopwords and stemmer
    pub fn canonicalize(&self, text: &str) -> String {
        self.stopwords.canonicalize(text, &self.annotator)
    }

    /// Build the extraction context for one sentence
    pub fn context(&self, sentence: &str, sentence_index: usize) -> Result<TermContext<'_>> {
        TermContext::annotate(
            self.annotator.as_ref(),
            sentence,
            sentence_index,
            &self.config,
            &self.stopwords,
        )
    }

    /// Terms of a single sentence, stamped with sentence index 0
    pub fn extract_terms_from_sentence(&self, sentence: &str) -> Result<Vec<Term>> {
        self.sentence_terms(sentence, 0)
    }

    /// Terms of every sentence of `text`, in sentence order
    pub fn extract_terms_from_text(&self, text: &str) -> Result<Vec<Term>> {
        let sentences = self.sentences(text)?;
        log::debug!("Extracting terms from {} sentences", sentences.len());

        let per_sentence = match self.execution_mode() {
            ExecutionMode::Parallel => self.extract_parallel(&sentences)?,
            ExecutionMode::Sequential => sentences
                .iter()
                .enumerate()
                .map(|(index, sentence)| self.sentence_terms(sentence, index))
                .collect::<Result<Vec<_>>>()?,
        };

        let terms: Vec<Term> = per_sentence.into_iter().flatten().collect();
        log::debug!("Extracted {} terms", terms.len());
        Ok(terms)
    }

    /// Push every term of `text` to `f` as soon as its sentence is done
    ///
    /// Sentences are always processed in order on the calling thread.
    pub fn for_each_term<F>(&self, text: &str, mut f: F) -> Result<()>
    where
        F: FnMut(Term),
    {
        for (index, sentence) in self.sentences(text)?.iter().enumerate() {
            for term in self.sentence_terms(sentence, index)? {
                f(term);
            }
        }
        Ok(())
    }

    fn sentence_terms(&self, sentence: &str, index: usize) -> Result<Vec<Term>> {
        if !self.config.split_embedded {
            return Ok(self.context(sentence, index)?.into_terms());
        }

        let mut terms = Vec::new();
        for fragment in extract_embedded_sentences(sentence) {
            terms.extend(self.context(&fragment, index)?.into_terms());
        }
        Ok(terms)
    }

    #[cfg(feature = "parallel")]
    fn extract_parallel(&self, sentences: &[String]) -> Result<Vec<Vec<Term>>> {
        crate::parallel::map_in_order(sentences, self.config.threads, |index, sentence| {
            self.sentence_terms(sentence, index)
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn extract_parallel(&self, _sentences: &[String]) -> Result<Vec<Vec<Term>>> {
        Err(crate::error::EngineError::Parallel(
            "built without the `parallel` feature".into(),
        ))
    }
}

impl Default for TermExtractor {
    fn default() -> Self {
        Self::english()
    }
}
