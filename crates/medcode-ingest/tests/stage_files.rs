use std::io::Write;

use medcode_ingest::{IngestError, read_keyed_table, read_scored_matches};
use medcode_model::TextEncoding;
use tempfile::NamedTempFile;

fn file_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write file");
    file
}

#[test]
fn scored_matches_deserialize_with_extra_columns() {
    let file = file_with(
        "Name;Synonym;ontologyTermName;ontologyTermIRI;score;validated;review;extra\n\
         paracetamol;paracetamol 500;Paracetamol;http://x/p;92.5;true;false;?\n\
         ibuprofen;ibuprofen;Ibuprofen;http://x/i;100;False;True;\n",
    );
    let matches = read_scored_matches(file.path(), TextEncoding::Utf8).expect("read matches");
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].synonym, "paracetamol 500");
    assert!((matches[0].score - 92.5).abs() < 1e-9);
    assert!(matches[0].validated);
    assert!(!matches[0].review);
    assert!(matches[1].review);
}

#[test]
fn scored_matches_require_review_column() {
    let file = file_with("Name;Synonym;ontologyTermName;ontologyTermIRI;score;validated\n");
    let err = read_scored_matches(file.path(), TextEncoding::Utf8).unwrap_err();
    assert!(matches!(err, IngestError::MissingColumn { ref column, .. } if column == "review"));
}

#[test]
fn malformed_score_is_an_invalid_record() {
    let file = file_with(
        "Name;Synonym;ontologyTermName;ontologyTermIRI;score;validated;review\n\
         a;b;c;d;high;true;false\n",
    );
    let err = read_scored_matches(file.path(), TextEncoding::Utf8).unwrap_err();
    assert!(matches!(err, IngestError::InvalidRecord { .. }));
}

#[test]
fn keyed_tables_check_their_key() {
    let file = file_with("PSEUDOIDEXT\tCOVID24A2TXT\tOriginal\nP1\t x \t y \n");
    let table = read_keyed_table(file.path(), "Original", TextEncoding::Utf8, true)
        .expect("read keyed table");
    assert_eq!(table.rows[0], vec!["P1", "x", "y"]);
    assert!(read_keyed_table(file.path(), "Synonym", TextEncoding::Utf8, true).is_err());
}
