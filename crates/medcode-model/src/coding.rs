//! Records on the coding side of the pipeline: rainbow table entries, scored
//! matches from the external curation step and their coded counterparts.

use serde::{Deserialize, Deserializer, Serialize};

/// One ontology term IRI → ATC code link from the rainbow table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RainbowEntry {
    pub term_iri: String,
    pub code: String,
}

impl RainbowEntry {
    pub fn new(term_iri: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            term_iri: term_iri.into(),
            code: code.into(),
        }
    }
}

/// One row of the scored matching file produced by the term matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Synonym")]
    pub synonym: String,
    #[serde(rename = "ontologyTermName")]
    pub ontology_term_name: String,
    #[serde(rename = "ontologyTermIRI")]
    pub ontology_term_iri: String,
    pub score: f64,
    #[serde(deserialize_with = "deserialize_flag")]
    pub validated: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub review: bool,
}

/// A scored match joined with its classification codes.
///
/// `codes` holds exactly one code in long format and a `", "` separated list
/// in wide format. It is empty when the ontology term has no code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodedMatch {
    pub name: String,
    pub synonym: String,
    pub ontology_term_name: String,
    pub ontology_term_iri: String,
    pub score: f64,
    pub validated: bool,
    pub review: bool,
    pub codes: String,
}

impl CodedMatch {
    pub fn from_scored(scored: &ScoredMatch, codes: impl Into<String>) -> Self {
        Self {
            name: scored.name.clone(),
            synonym: scored.synonym.clone(),
            ontology_term_name: scored.ontology_term_name.clone(),
            ontology_term_iri: scored.ontology_term_iri.clone(),
            score: scored.score,
            validated: scored.validated,
            review: scored.review,
            codes: codes.into(),
        }
    }
}

/// Parses the boolean spellings found in curation exports.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "0" | "" => Some(false),
        _ => None,
    }
}

/// Serde adapter for [`parse_flag`].
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid boolean value '{raw}'")))
}
