//! Text cleanup ahead of sentence detection and tokenization
//!
//! Raw text is flattened onto a single line, noisy substrings (URLs, file
//! system paths) are masked with placeholder tokens, and punctuation that
//! does not belong to a token is turned into a uniform comma separator.

use regex::{Captures, Regex};

/// Placeholder substituted for masked URLs
pub const URL_PLACEHOLDER: &str = "<URL>";
/// Placeholder substituted for masked file system paths
pub const PATH_PLACEHOLDER: &str = "<PATH>";
/// Placeholder substituted for embedded quotations
pub const QUOTE_PLACEHOLDER: &str = "<QUOTE>";

/// Upper bound on cleaning passes; real text settles in two or three
const MAX_CLEAN_PASSES: usize = 8;

/// Bracket pairs whose contents are split out as separate fragments
const EMBED_PAIRS: [(char, char); 4] = [('"', '"'), ('(', ')'), ('[', ']'), ('{', '}')];

macro_rules! regex {
    ($pattern:expr) => {{
        static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| Regex::new($pattern).expect("static pattern is valid"))
    }};
}

/// Collapse a multi-line document into single-line, sentence-ready text
///
/// Blank lines become sentence separators, remaining newlines become
/// spaces, and `1.`-style list markers are detached from their number so
/// they do not confuse sentence detection.
pub fn clean_text(text: &str) -> String {
    let text = regex!(r"\r\n?").replace_all(text, "\n");
    let text = regex!(r"(?m)^\s+$").replace_all(&text, "");
    let text = regex!(r"\n\n+").replace_all(&text, ".\n.\n");
    let text = text.replace('\n', " ");
    let text = regex!(r"(\d+)\. ").replace_all(&text, "$1 . ");
    text.trim().to_string()
}

/// Normalize a sentence so that distinct tokens are separated by whitespace
///
/// The cleanup is applied until the text stops changing, which makes the
/// function idempotent.
pub fn clean_sentence(text: &str) -> String {
    let mut current = clean_sentence_pass(text);
    for _ in 1..MAX_CLEAN_PASSES {
        let next = clean_sentence_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn clean_sentence_pass(text: &str) -> String {
    let text = regex!(r"--+").replace_all(text, " -- ");
    let text = text.replace('…', "...");

    // Bracket variants collapse onto parentheses
    let text = regex!(r"[{\[]").replace_all(&text, "(");
    let text = regex!(r"[}\]]").replace_all(&text, ")");

    let text = text.replace('’', "'");
    let text = split_dot_runs(&text);

    // Punctuation at token edges becomes a comma separator
    let text = regex!(r#"(?:^| )["():;*,\-]+"#).replace_all(&text, " , ");
    let text = regex!(r#"["():;*,\-]+(?: |$)"#).replace_all(&text, " , ");

    // Detach dot runs followed by a space, and contraction apostrophes
    let text = regex!(r"(\.+ |')").replace_all(&text, " $1");
    let text = regex!(r" / ").replace_all(&text, " , ");

    // Undo over-eager comma insertion
    let text = regex!(r"([,.]) *,").replace_all(&text, " $1 ");
    let text = regex!(r"[, ]+$").replace_all(&text, "");
    let text = regex!(r"^[, ]+").replace_all(&text, "");

    let text = regex!(r"([.!?]+)$").replace_all(&text, " $1");
    let text = regex!(r"\s+").replace_all(&text, " ");
    text.trim().to_string()
}

/// Replace runs of two or more dots sitting between word characters with a
/// comma, e.g. `kitties...puppies` becomes `kitties , puppies`
fn split_dot_runs(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '.' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let run_start = i;
        while i < chars.len() && chars[i] == '.' {
            i += 1;
        }

        let between_words = i - run_start >= 2
            && run_start > 0
            && is_word_char(chars[run_start - 1])
            && i < chars.len()
            && is_word_char(chars[i]);

        if between_words {
            out.push_str(" , ");
        } else {
            out.extend(&chars[run_start..i]);
        }
    }

    out
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Mask `scheme://...` URLs with [`URL_PLACEHOLDER`]
///
/// A URL extends to the next whitespace; a single trailing period is left
/// in place as sentence punctuation.
pub fn remove_urls(text: &str) -> String {
    regex!(r"\w+://\S+")
        .replace_all(text, |caps: &Captures| {
            let url = &caps[0];
            let keeps_body = url
                .split_once("://")
                .is_some_and(|(_, rest)| rest.len() > 1);

            if url.ends_with('.') && keeps_body {
                format!("{URL_PLACEHOLDER}.")
            } else {
                URL_PLACEHOLDER.to_string()
            }
        })
        .into_owned()
}

/// Mask Windows and Unix style paths with [`PATH_PLACEHOLDER`]
///
/// Fragments separated by a single short word (as in
/// `C:\Documents and Settings\Kitty`) are merged into one path before
/// adjacent placeholders are collapsed.
pub fn remove_paths(text: &str) -> String {
    let text = regex!(r"[\w:\\]*\\[\w:\\]*").replace_all(text, PATH_PLACEHOLDER);
    let text = regex!(r"/[\w/]+").replace_all(&text, PATH_PLACEHOLDER);
    let mut text = regex!(r"[\w/]+/")
        .replace_all(&text, PATH_PLACEHOLDER)
        .into_owned();

    let merge = regex!(r"<PATH>\s+\w+\s+<PATH>");
    while merge.is_match(&text) {
        text = merge.replace_all(&text, PATH_PLACEHOLDER).into_owned();
    }

    regex!(r"<PATH>(?:\s*<PATH>)+")
        .replace_all(&text, PATH_PLACEHOLDER)
        .into_owned()
}

fn embed_pattern(open: char, close: char) -> &'static Regex {
    match (open, close) {
        ('"', '"') => regex!(r#""[^"\n]*""#),
        ('(', ')') => regex!(r"\([^()\n]*\)"),
        ('[', ']') => regex!(r"\[[^\[\]\n]*\]"),
        _ => regex!(r"\{[^{}\n]*\}"),
    }
}

/// Split out quotations and parentheticals as independent fragments
///
/// The first element is the main text with quotations replaced by
/// [`QUOTE_PLACEHOLDER`] and other bracketed comments removed. Every
/// extracted fragment follows, itself recursively split. Brackets never
/// match across a newline.
pub fn extract_embedded_sentences(text: &str) -> Vec<String> {
    let mut main = text.to_string();
    let mut fragments: Vec<String> = Vec::new();

    loop {
        let found = fragments.len();

        for (open, close) in EMBED_PAIRS {
            let replacement = if open == close { QUOTE_PLACEHOLDER } else { "" };
            main = embed_pattern(open, close)
                .replace_all(&main, |caps: &Captures| {
                    let matched = &caps[0];
                    let inner = &matched[open.len_utf8()..matched.len() - close.len_utf8()];
                    fragments.push(inner.to_string());
                    replacement
                })
                .into_owned();
        }

        if fragments.len() == found {
            break;
        }
    }

    let mut result = vec![main];
    for fragment in fragments {
        result.extend(extract_embedded_sentences(&fragment));
    }
    result
}
