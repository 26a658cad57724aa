use serde::{Deserialize, Serialize};

/// One curated ontology source row: a drug resource, its label, its ATC code
/// and the class it specializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyRecord {
    pub resource: String,
    pub substance: String,
    pub code: String,
    pub parent_uri: String,
    pub label: Option<String>,
}
