//! Text normalization and tokenization

mod normalizer;
mod tokenizer;

pub use normalizer::{
    clean_sentence, clean_text, extract_embedded_sentences, remove_paths, remove_urls,
    PATH_PLACEHOLDER, QUOTE_PLACEHOLDER, URL_PLACEHOLDER,
};
pub use tokenizer::{recombobulate, tokenize_sentence};
