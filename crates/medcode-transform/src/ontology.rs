//! Conversion of curated ontology records into a rainbow table and RDF
//! statements.

use medcode_model::{OntologyRecord, RainbowEntry};

pub const RDFS_NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// Object position of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TermObject {
    Iri(String),
    Literal(String),
}

/// `rdfs` predicates used by the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdfsPredicate {
    Label,
    SubClassOf,
}

impl RdfsPredicate {
    pub fn local_name(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::SubClassOf => "subClassOf",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: String,
    pub predicate: RdfsPredicate,
    pub object: TermObject,
}

/// One `resource → code` link per record, in record order.
pub fn rainbow_entries(records: &[OntologyRecord]) -> Vec<RainbowEntry> {
    records
        .iter()
        .map(|record| RainbowEntry::new(record.resource.as_str(), record.code.as_str()))
        .collect()
}

/// Statements for every record: its label (omitted when the substance is
/// blank) and its parent class (omitted when the parent URI is blank).
/// Duplicate statements are dropped.
pub fn ontology_triples(records: &[OntologyRecord]) -> Vec<Triple> {
    let mut triples: Vec<Triple> = Vec::with_capacity(records.len() * 2);
    for record in records {
        if !record.substance.trim().is_empty() {
            triples.push(Triple {
                subject: record.resource.clone(),
                predicate: RdfsPredicate::Label,
                object: TermObject::Literal(record.substance.clone()),
            });
        }
        if !record.parent_uri.trim().is_empty() {
            triples.push(Triple {
                subject: record.resource.clone(),
                predicate: RdfsPredicate::SubClassOf,
                object: TermObject::Iri(record.parent_uri.clone()),
            });
        }
    }
    let mut seen = std::collections::HashSet::new();
    triples.retain(|triple| seen.insert(triple.clone()));
    triples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(resource: &str, substance: &str, code: &str, parent: &str) -> OntologyRecord {
        OntologyRecord {
            resource: resource.to_string(),
            substance: substance.to_string(),
            code: code.to_string(),
            parent_uri: parent.to_string(),
            label: None,
        }
    }

    #[test]
    fn blank_substance_has_no_label() {
        let records = vec![
            record("r:para", "Paracetamol", "N02BE01", "atc:N02BE"),
            record("r:none", "", "A01", "atc:A"),
        ];
        let triples = ontology_triples(&records);
        assert_eq!(triples.len(), 3);
        assert!(
            !triples
                .iter()
                .any(|t| t.subject == "r:none" && t.predicate == RdfsPredicate::Label)
        );
        assert_eq!(rainbow_entries(&records)[1], RainbowEntry::new("r:none", "A01"));
    }

    #[test]
    fn repeated_records_yield_one_statement() {
        let records = vec![
            record("r:para", "Paracetamol", "N02BE01", "atc:N02BE"),
            record("r:para", "Paracetamol", "N02BE51", "atc:N02BE"),
        ];
        assert_eq!(ontology_triples(&records).len(), 2);
        assert_eq!(rainbow_entries(&records).len(), 2);
    }
}
