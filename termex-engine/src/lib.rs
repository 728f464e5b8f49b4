//! Term extraction orchestration
//!
//! This crate wires the algorithms of `termex-core` into a usable
//! extractor: configuration (in code or TOML), sentence splitting and
//! streaming, per-sentence contexts, optional sentence-level parallelism
//! and a rule-based reference annotator for English. With the `nlprule`
//! feature, [`ModelAnnotator`] takes sentences and POS tags from an
//! nlprule tokenizer model instead.
//!
//! # Example
//!
//! ```rust
//! use termex_engine::TermExtractor;
//!
//! let extractor = TermExtractor::english();
//! let terms = extractor.extract_terms_from_text("I am a big fan of kitties").unwrap();
//!
//! let mut texts: Vec<_> = terms.iter().map(|t| t.text.as_str()).collect();
//! texts.sort();
//! assert_eq!(texts, ["big fan", "big fan of kitties", "kitties"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod context;
pub mod error;
pub mod extractor;
pub mod lexicon;
#[cfg(feature = "nlprule")]
pub mod model;
#[cfg(feature = "parallel")]
mod parallel;
pub mod stopwords;

pub use config::{ExtractorConfig, ExtractorConfigBuilder};
pub use context::TermContext;
pub use error::{EngineError, Result};
pub use extractor::{ExecutionMode, TermExtractor};
pub use lexicon::LexiconAnnotator;
#[cfg(feature = "nlprule")]
pub use model::ModelAnnotator;
pub use stopwords::StopwordFile;

// Re-export from core for convenience
pub use termex_core::{Annotator, AnnotatorError, RuleTable, StopwordIndex, Stemmer, Term};
