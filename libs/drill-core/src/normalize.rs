//! Text normalization for comparing spoken answers.
//!
//! Normalization folds case, expands a fixed table of English contractions
//! and strips punctuation, so that "I Don't!" and "i do not" compare equal.

use regex::Regex;
use std::sync::LazyLock;

/// Informal forms and their expansions, applied in this order.
///
/// Replacement is a plain substring replace over the lowercased text, not
/// word-boundary aware, so "can't" also matches inside a longer word.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("can't", "cannot"),
    ("won't", "will not"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("i'm", "i am"),
    ("you're", "you are"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("it's", "it is"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("i've", "i have"),
    ("you've", "you have"),
    ("we've", "we have"),
    ("they've", "they have"),
    ("i'll", "i will"),
    ("you'll", "you will"),
    ("we'll", "we will"),
    ("they'll", "they will"),
    ("gonna", "going to"),
    ("wanna", "want to"),
    ("gotta", "got to"),
];

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s']").expect("valid non-word pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Canonicalize raw text into a space-separated string of tokens.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut s = text.to_lowercase().trim().replace('\u{2019}', "'");

    // Must run before punctuation stripping, which would eat the apostrophes.
    for &(informal, expanded) in CONTRACTIONS {
        if s.contains(informal) {
            s = s.replace(informal, expanded);
        }
    }

    let s = NON_WORD.replace_all(&s, " ");
    WHITESPACE.replace_all(&s, " ").trim().to_string()
}

/// Split text into normalized tokens. Never yields empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
