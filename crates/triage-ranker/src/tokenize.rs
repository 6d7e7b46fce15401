//! Tokenization shared by corpus fitting and query vectorization.
//!
//! Text is lower-cased and split into runs of two or more Unicode word
//! characters. Single-character tokens and punctuation are discarded, so
//! `"Fever, and a cough!"` tokenizes to `["fever", "and", "cough"]`.

use std::sync::OnceLock;

use regex::Regex;

const TOKEN_PATTERN: &str = r"\b\w\w+\b";

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex"))
}

/// Split `text` into lower-case tokens, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
