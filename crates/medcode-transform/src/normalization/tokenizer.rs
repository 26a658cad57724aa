//! Treebank-style word tokenization.
//!
//! Brackets and most punctuation become tokens of their own. A comma or colon
//! is split off unless a digit follows (`2,5` stays one token), and only the
//! final period of the text is separated. Slashes, hyphens and inner periods
//! stay inside tokens (`inj/infopl`, `tert-butyl`, `i.v.m.`).

use std::sync::LazyLock;

use regex::Regex;

static SPLIT_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([;@#$%&?!])").expect("Invalid punctuation regex"));

static SPLIT_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\]\[(){}<>])").expect("Invalid bracket regex"));

static ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\.\.").expect("Invalid ellipsis regex"));

static COMMA_OR_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([:,])([^\d])").expect("Invalid comma regex"));

static TRAILING_COMMA_OR_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([:,])$").expect("Invalid trailing comma regex"));

static FINAL_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^.])(\.)([\])}>"']*)\s*$"#).expect("Invalid final period regex")
});

/// Splits text into word and punctuation tokens.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let mut spaced = SPLIT_PUNCTUATION.replace_all(text, " $1 ").into_owned();
    spaced = SPLIT_BRACKETS.replace_all(&spaced, " $1 ").into_owned();
    spaced = ELLIPSIS.replace_all(&spaced, " ... ").into_owned();
    spaced = COMMA_OR_COLON.replace_all(&spaced, " $1 $2").into_owned();
    spaced = TRAILING_COMMA_OR_COLON.replace_all(&spaced, " $1 ").into_owned();
    spaced = FINAL_PERIOD.replace(&spaced, "$1 $2$3 ").into_owned();
    spaced.split_whitespace().map(str::to_string).collect()
}
