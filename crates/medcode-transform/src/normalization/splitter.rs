//! Splitting normalized answers into candidate words.

use medcode_standards::{SplitGuards, Vocabularies, Vocabulary};

use super::tokenizer::tokenize_words;

const SEPARATORS: &[char] = &[' ', '/', '\\'];

/// Removes vocabulary tokens from the tokenized text and re-joins the rest.
pub fn drop_tokens(text: &str, vocabulary: &Vocabulary) -> String {
    tokenize_words(text)
        .into_iter()
        .filter(|token| !vocabulary.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits answers at spaces and slashes unless a guard keeps the
/// neighbouring words together.
#[derive(Debug, Clone)]
pub struct WordSplitter<'a> {
    stopwords: &'a Vocabulary,
    manufacturers: &'a Vocabulary,
    guards: &'a SplitGuards,
}

impl<'a> WordSplitter<'a> {
    pub fn new(vocabularies: &'a Vocabularies) -> Self {
        Self {
            stopwords: &vocabularies.stopwords,
            manufacturers: &vocabularies.manufacturers,
            guards: &vocabularies.split_guards,
        }
    }

    /// Stopword and manufacturer removal, each over a fresh tokenization.
    pub fn prepare(&self, normalized: &str) -> String {
        let without_stopwords = drop_tokens(normalized, self.stopwords);
        drop_tokens(&without_stopwords, self.manufacturers)
    }

    /// Prepares `normalized` and splits it. Pieces may be empty.
    pub fn split(&self, normalized: &str) -> Vec<String> {
        let prepared = self.prepare(normalized);
        split_guarded(&prepared, self.guards)
            .map(str::to_string)
            .collect()
    }
}

/// Lazily splits `text` at unguarded separators.
pub fn split_guarded<'t>(text: &'t str, guards: &'t SplitGuards) -> GuardedSplit<'t> {
    GuardedSplit {
        text,
        guards,
        start: 0,
        finished: false,
    }
}

/// Iterator returned by [`split_guarded`].
#[derive(Debug)]
pub struct GuardedSplit<'t> {
    text: &'t str,
    guards: &'t SplitGuards,
    start: usize,
    finished: bool,
}

impl<'t> Iterator for GuardedSplit<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        if self.finished {
            return None;
        }
        let rest = &self.text[self.start..];
        for (offset, ch) in rest.char_indices() {
            if !SEPARATORS.contains(&ch) {
                continue;
            }
            let at = self.start + offset;
            let before = &self.text[..at];
            let after = &self.text[at + ch.len_utf8()..];
            if self.guards.blocks(before, after) {
                continue;
            }
            let piece = &self.text[self.start..at];
            self.start = at + ch.len_utf8();
            return Some(piece);
        }
        self.finished = true;
        Some(rest)
    }
}
