//! Joining scored matches with ATC codes from the rainbow table.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use medcode_model::{CodeLayout, CodedMatch, ScoredMatch};
use medcode_standards::RainbowTable;

/// Separator used when several codes or names share one cell.
pub const LIST_SEPARATOR: &str = ", ";

/// Settings of a code matching run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    pub layout: CodeLayout,
    /// The rainbow table starts with a header row.
    pub rainbow_has_headers: bool,
}

impl MatchOptions {
    #[must_use]
    pub fn with_layout(mut self, layout: CodeLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_rainbow_headers(mut self, has_headers: bool) -> Self {
        self.rainbow_has_headers = has_headers;
        self
    }
}

/// Splits a code cell on `,` and `|`, trimmed, de-duplicated and sorted.
pub fn split_codes(cell: &str) -> BTreeSet<String> {
    cell.split([',', '|'])
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Left-joins every scored match with the codes of its ontology term.
///
/// One output row per scored row; `codes` is the sorted, de-duplicated code
/// list joined with `", "`, empty when the term is not in the table.
pub fn join_codes(scored: &[ScoredMatch], rainbow: &RainbowTable) -> Vec<CodedMatch> {
    let mut unmatched = 0usize;
    let coded: Vec<CodedMatch> = scored
        .iter()
        .map(|row| {
            let cell = rainbow.grouped_codes(&row.ontology_term_iri).unwrap_or_else(|| {
                unmatched += 1;
                String::new()
            });
            let codes = split_codes(&cell).into_iter().collect::<Vec<_>>();
            CodedMatch::from_scored(row, codes.join(LIST_SEPARATOR))
        })
        .collect();
    tracing::debug!(rows = coded.len(), unmatched, "joined scored matches with codes");
    coded
}

/// Order used to form name groups: every field except the name.
fn group_order(a: &CodedMatch, b: &CodedMatch) -> Ordering {
    a.synonym
        .cmp(&b.synonym)
        .then_with(|| a.ontology_term_name.cmp(&b.ontology_term_name))
        .then_with(|| a.ontology_term_iri.cmp(&b.ontology_term_iri))
        .then_with(|| a.score.total_cmp(&b.score))
        .then_with(|| a.validated.cmp(&b.validated))
        .then_with(|| a.review.cmp(&b.review))
        .then_with(|| a.codes.cmp(&b.codes))
}

/// One code per row; rows that differ only in `name` are merged and their
/// names joined in input order.
///
/// Sorted by synonym descending, then review ascending, code ascending,
/// validated descending and score ascending.
pub fn long_format(coded: &[CodedMatch]) -> Vec<CodedMatch> {
    let mut expanded: Vec<CodedMatch> = Vec::with_capacity(coded.len());
    for row in coded {
        let codes = split_codes(&row.codes);
        if codes.is_empty() {
            expanded.push(CodedMatch {
                codes: String::new(),
                ..row.clone()
            });
        } else {
            expanded.extend(codes.into_iter().map(|code| CodedMatch {
                codes: code,
                ..row.clone()
            }));
        }
    }
    expanded.sort_by(group_order);

    let mut merged: Vec<CodedMatch> = Vec::with_capacity(expanded.len());
    for row in expanded {
        match merged.last_mut() {
            Some(last) if group_order(last, &row) == Ordering::Equal => {
                last.name.push_str(LIST_SEPARATOR);
                last.name.push_str(&row.name);
            }
            _ => merged.push(row),
        }
    }

    merged.sort_by(|a, b| {
        b.synonym
            .cmp(&a.synonym)
            .then_with(|| a.review.cmp(&b.review))
            .then_with(|| a.codes.cmp(&b.codes))
            .then_with(|| b.validated.cmp(&a.validated))
            .then_with(|| a.score.total_cmp(&b.score))
    });
    merged
}

/// One row per scored match with all its codes, grouped by synonym for
/// review.
///
/// Rows are sorted by review descending, synonym, codes, validated
/// descending and score, then gathered per synonym in order of first
/// appearance with review-flagged rows leading each group.
pub fn wide_format(mut coded: Vec<CodedMatch>) -> Vec<CodedMatch> {
    coded.sort_by(|a, b| {
        b.review
            .cmp(&a.review)
            .then_with(|| a.synonym.cmp(&b.synonym))
            .then_with(|| a.codes.cmp(&b.codes))
            .then_with(|| b.validated.cmp(&a.validated))
            .then_with(|| a.score.total_cmp(&b.score))
    });

    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<CodedMatch>> = HashMap::new();
    for row in coded {
        if !groups.contains_key(&row.synonym) {
            order.push(row.synonym.clone());
        }
        groups.entry(row.synonym.clone()).or_default().push(row);
    }

    let mut grouped = Vec::new();
    for synonym in order {
        let Some(mut rows) = groups.remove(&synonym) else {
            continue;
        };
        rows.sort_by(|a, b| b.review.cmp(&a.review));
        grouped.extend(rows);
    }
    grouped
}
