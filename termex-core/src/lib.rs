//! Rule-based term extraction over annotated sentences
//!
//! This crate holds the deterministic half of termex: text normalization,
//! tokenization, stopword handling, and the boundary and span algorithms
//! that turn a tagged, chunked sentence into candidate terms. Sentence
//! detection, tagging, chunking and stemming are supplied from outside
//! through the [`Annotator`] trait.
//!
//! # Pipeline
//!
//! - [`text`]: cleanup, URL/path masking, embedded fragment extraction, tokens
//! - [`BoundaryComputer`]: per-token start/end/cross flags
//! - [`TermSpanEnumerator`]: every admissible span up to a length cap
//!
//! # Example
//!
//! ```rust
//! use termex_core::{
//!     AnnotatedSentence, BoundaryComputer, RuleTable, StopwordIndex, TermSpanEnumerator,
//! };
//!
//! let sentence = AnnotatedSentence::from_triples([
//!     ("I", "PRP", "B-NP"),
//!     ("am", "VBP", "B-VP"),
//!     ("a", "DT", "B-NP"),
//!     ("big", "JJ", "I-NP"),
//!     ("fan", "NN", "I-NP"),
//!     ("of", "IN", "B-PP"),
//!     ("kitties", "NNS", "B-NP"),
//! ]);
//!
//! let rules = RuleTable::default();
//! let stopwords = StopwordIndex::english();
//! let boundaries = BoundaryComputer::new(&rules, &stopwords).compute(&sentence);
//! let terms = TermSpanEnumerator::new(&rules, 4)
//!     .unwrap()
//!     .enumerate(&sentence, &boundaries, 0);
//!
//! let texts: Vec<_> = terms.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["big fan", "big fan of kitties", "kitties"]);
//! ```

#![warn(missing_docs)]

pub mod annotation;
pub mod annotator;
pub mod boundary;
pub mod error;
pub mod rules;
pub mod span;
pub mod stopwords;
pub mod text;

pub use annotation::AnnotatedSentence;
pub use annotator::{Annotator, AnnotatorError, IdentityStemmer, Stemmer};
pub use boundary::{Boundaries, BoundaryComputer, BoundaryFlags};
pub use error::{CoreError, Result};
pub use rules::{NumericFilter, RuleTable, TagSet};
pub use span::{Term, TermSpanEnumerator, DEFAULT_MAX_TERM_LENGTH};
pub use stopwords::{EmbeddedEnglish, StopwordIndex, StopwordSource};
