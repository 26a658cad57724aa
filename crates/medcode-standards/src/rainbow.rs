//! Rainbow table: ontology term IRI → ATC code links.

use std::collections::BTreeMap;
use std::path::Path;

use medcode_ingest::{ReadOptions, read_delimited};
use medcode_model::{RainbowEntry, TextEncoding};

use crate::error::{Result, StandardsError};

/// IRI → code links, many-to-many, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RainbowTable {
    entries: Vec<RainbowEntry>,
    by_iri: BTreeMap<String, Vec<String>>,
}

impl RainbowTable {
    pub fn from_entries(entries: Vec<RainbowEntry>) -> Self {
        let mut by_iri: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in &entries {
            by_iri
                .entry(entry.term_iri.clone())
                .or_default()
                .push(entry.code.clone());
        }
        Self { entries, by_iri }
    }

    pub fn entries(&self) -> &[RainbowEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Codes linked to an IRI, in file order; empty for unknown IRIs.
    pub fn codes_for(&self, iri: &str) -> &[String] {
        self.by_iri.get(iri).map_or(&[], Vec::as_slice)
    }

    /// The raw code cell for an IRI: all linked codes joined with `,`.
    ///
    /// `None` when the IRI has no entry, so callers can tell an unmatched
    /// term from one whose codes are blank.
    pub fn grouped_codes(&self, iri: &str) -> Option<String> {
        self.by_iri.get(iri).map(|codes| codes.join(","))
    }

    pub fn iri_count(&self) -> usize {
        self.by_iri.len()
    }
}

/// Reads a tab separated `IRI<TAB>code` file.
///
/// With `has_headers` the first line is skipped. Rows with fewer than two
/// cells are malformed.
pub fn load_rainbow_table(
    path: &Path,
    has_headers: bool,
    encoding: TextEncoding,
) -> Result<RainbowTable> {
    let options = ReadOptions::tab()
        .with_encoding(encoding)
        .with_headers(has_headers)
        .with_trim(true);
    let table = read_delimited(path, &options)?;
    let mut entries = Vec::with_capacity(table.height());
    for (idx, row) in table.rows.iter().enumerate() {
        let (Some(iri), Some(code)) = (row.first(), row.get(1)) else {
            return Err(StandardsError::InvalidRow {
                path: path.to_path_buf(),
                line: idx + 1 + usize::from(has_headers),
                message: "expected an IRI and a code".to_string(),
            });
        };
        entries.push(RainbowEntry::new(iri.as_str(), code.as_str()));
    }
    let rainbow = RainbowTable::from_entries(entries);
    tracing::info!(
        path = %path.display(),
        entries = rainbow.len(),
        iris = rainbow.iri_count(),
        "loaded rainbow table"
    );
    Ok(rainbow)
}
