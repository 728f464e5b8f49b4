//! Whitespace tokenization of cleaned sentences

use super::normalizer::clean_sentence;

/// Split a sentence into tokens
///
/// Punctuation separators, contraction pieces (`'ve`, `'s`) and ellipses
/// come out as tokens of their own.
pub fn tokenize_sentence(sentence: &str) -> Vec<String> {
    clean_sentence(sentence)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Rebuild surface text from a run of tokens
///
/// Contraction apostrophes and decimal points are reattached to the token
/// before them.
pub fn recombobulate<S: AsRef<str>>(tokens: &[S]) -> String {
    let joined = tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");

    joined.replace(" '", "'").replace(" .", ".")
}
