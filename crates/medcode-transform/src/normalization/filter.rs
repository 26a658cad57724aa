//! Cleaning and rejection of split candidate words.

use std::sync::LazyLock;

use medcode_model::is_irrelevant_answer;
use medcode_standards::{Vocabularies, Vocabulary};
use regex::Regex;

use crate::error::{Result, TransformError};

static LEADING_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[(/\\]").expect("Invalid leading bracket regex"));

static TRAILING_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[)/\\,]$").expect("Invalid trailing bracket regex"));

static LONE_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- *$").expect("Invalid hyphen regex"));

static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("Invalid non-word regex"));

static SHORT_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\W*[a-zA-Z â]{1,2}\W*$").expect("Invalid short term regex"));

/// Replaces non-word runs with one space, keeping the hyphens a run starts
/// with (`co-trimoxazol` keeps its hyphen, `a (b)` loses its brackets).
fn collapse_non_word(text: &str) -> String {
    if LONE_HYPHEN.is_match(text) {
        return " ".to_string();
    }
    NON_WORD_RUN
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let run = &caps[0];
            let rest = run.trim_start_matches('-');
            let hyphens = &run[..run.len() - rest.len()];
            if rest.is_empty() {
                hyphens.to_string()
            } else {
                format!("{hyphens} ")
            }
        })
        .into_owned()
}

fn excluded_words_pattern(words: &Vocabulary) -> Result<Option<Regex>> {
    if words.is_empty() {
        return Ok(None);
    }
    let alternation = words
        .entries()
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b"))
        .map(Some)
        .map_err(|source| TransformError::InvalidPattern {
            name: "excluded words",
            source,
        })
}

/// Cleans split words and rejects the ones that cannot be a drug name.
#[derive(Debug, Clone)]
pub struct TermFilter<'a> {
    excluded: Option<Regex>,
    administration_forms: &'a Vocabulary,
    manufacturers: &'a Vocabulary,
    filler_terms: &'a Vocabulary,
}

impl<'a> TermFilter<'a> {
    pub fn new(vocabularies: &'a Vocabularies) -> Result<Self> {
        Ok(Self {
            excluded: excluded_words_pattern(&vocabularies.excluded_words)?,
            administration_forms: &vocabularies.administration_forms,
            manufacturers: &vocabularies.manufacturers,
            filler_terms: &vocabularies.filler_terms,
        })
    }

    /// Cleans a word without deciding whether to keep it. May return an
    /// empty string.
    pub fn clean(&self, piece: &str) -> String {
        let mut term = piece.trim().to_string();
        if let Some(excluded) = &self.excluded {
            term = excluded.replace_all(&term, "").into_owned();
        }
        term = LEADING_BRACKET.replace(&term, " ").into_owned();
        term = TRAILING_BRACKET.replace(&term, " ").into_owned();
        term = collapse_non_word(&term);
        let trimmed = term.trim();
        if SHORT_TERM.is_match(trimmed) {
            return String::new();
        }
        trimmed.to_string()
    }

    /// True for cleaned terms that carry no drug name on their own.
    pub fn rejects(&self, term: &str) -> bool {
        is_irrelevant_answer(term)
            || self.administration_forms.contains(term)
            || self.manufacturers.contains(term)
            || self.filler_terms.contains(term)
    }

    /// Cleans a word and returns it if it is kept.
    pub fn apply(&self, piece: &str) -> Option<String> {
        let term = self.clean(piece);
        (!self.rejects(&term)).then_some(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_keeps_leading_hyphens() {
        assert_eq!(collapse_non_word("co-trimoxazol"), "co-trimoxazol");
        assert_eq!(collapse_non_word("a (b)"), "a b ");
        assert_eq!(collapse_non_word("a- b"), "a- b");
        assert_eq!(collapse_non_word("- "), " ");
    }

    #[test]
    fn cleans_and_rejects_terms() {
        let vocabularies = Vocabularies::builtin();
        let filter = TermFilter::new(&vocabularies).unwrap();
        assert_eq!(filter.apply("(paracetamol)").as_deref(), Some("paracetamol"));
        assert_eq!(filter.apply("ibuprofen,").as_deref(), Some("ibuprofen"));
        assert_eq!(filter.apply("zonodig"), None);
        assert_eq!(filter.apply("tablet"), None);
        assert_eq!(filter.apply("Sandoz"), None);
        assert_eq!(filter.apply("forte"), None);
        assert_eq!(filter.apply("ab"), None);
        assert_eq!(filter.apply("-"), None);
        assert_eq!(filter.apply("9999"), None);
        assert_eq!(filter.apply(""), None);
    }

    #[test]
    fn excluded_words_are_removed_inside_terms() {
        let vocabularies = Vocabularies::builtin();
        let filter = TermFilter::new(&vocabularies).unwrap();
        assert_eq!(filter.clean("omeprazol ochtend"), "omeprazol");
    }
}
