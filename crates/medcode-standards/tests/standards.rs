use std::fs;

use medcode_model::{ChoiceCode, TextEncoding};
use medcode_standards::{
    StandardsError, Vocabularies, load_choice_codes, load_ontology_records, load_rainbow_table,
    load_vocabularies,
};
use tempfile::TempDir;

#[test]
fn rainbow_table_reads_headerless_pairs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rainbow.tsv");
    fs::write(
        &path,
        "http://dbpedia.org/resource/Paracetamol\tN02BE01\n\
         http://dbpedia.org/resource/Metoprolol\tC07AB02\n\
         http://dbpedia.org/resource/Paracetamol\tN02BE51\n",
    )
    .unwrap();

    let rainbow = load_rainbow_table(&path, false, TextEncoding::Utf8).unwrap();
    assert_eq!(rainbow.len(), 3);
    assert_eq!(
        rainbow.codes_for("http://dbpedia.org/resource/Paracetamol"),
        ["N02BE01", "N02BE51"]
    );
}

#[test]
fn rainbow_table_rejects_rows_without_code() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rainbow.tsv");
    fs::write(&path, "iri:a\tN02BE01\niri:b\n").unwrap();

    let err = load_rainbow_table(&path, false, TextEncoding::Utf8).unwrap_err();
    assert!(matches!(err, StandardsError::InvalidRow { line: 2, .. }));
}

#[test]
fn missing_rainbow_table_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_rainbow_table(&dir.path().join("absent.tsv"), false, TextEncoding::Utf8)
        .unwrap_err();
    assert!(matches!(err, StandardsError::Ingest(_)));
}

#[test]
fn choice_codes_keep_file_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hardcoded.tsv");
    fs::write(&path, "COVID24A1A\tN02BE01\nCOVID24A1B\tM01AE01\n").unwrap();

    let codes = load_choice_codes(&path, TextEncoding::Latin1).unwrap();
    assert_eq!(
        codes,
        vec![
            ChoiceCode::new("COVID24A1A", "N02BE01"),
            ChoiceCode::new("COVID24A1B", "M01AE01"),
        ]
    );
}

#[test]
fn ontology_records_strip_quotes_and_blank_labels() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dbpedia_corrected.tsv");
    fs::write(
        &path,
        "resource\tsubstance\tatccode\tURI\tlabel\n\
         \"http://dbpedia.org/resource/Paracetamol\"\t\"Paracetamol\"\t\"N02BE01\"\t\"http://purl.org/atc/N02BE\"\t\n\
         http://dbpedia.org/resource/Unknown\t\tA01\thttp://purl.org/atc/A\tunknown\n",
    )
    .unwrap();

    let records = load_ontology_records(&path, TextEncoding::Utf8).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].resource, "http://dbpedia.org/resource/Paracetamol");
    assert_eq!(records[0].substance, "Paracetamol");
    assert_eq!(records[0].code, "N02BE01");
    assert_eq!(records[0].label, None);
    assert_eq!(records[1].substance, "");
    assert_eq!(records[1].label.as_deref(), Some("unknown"));
}

#[test]
fn vocabulary_overrides_replace_only_present_lists() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manufacturers.txt"),
        "# local list\nAcme\n\nglobex\n",
    )
    .unwrap();
    fs::write(dir.path().join("split_guards_before.txt"), "multi \nrode\n").unwrap();

    let vocabularies = Vocabularies::builtin()
        .with_overrides_from(dir.path())
        .unwrap();
    assert_eq!(vocabularies.manufacturers.entries(), ["acme", "globex"]);
    assert!(!vocabularies.manufacturers.contains("sandoz"));
    assert_eq!(vocabularies.split_guards.before, ["multi ", "rode"]);
    assert_eq!(
        vocabularies.split_guards.after,
        Vocabularies::builtin().split_guards.after
    );
    assert_eq!(vocabularies.stopwords, Vocabularies::builtin().stopwords);
}

#[test]
fn explicit_vocabulary_dir_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("stopwords.txt"), "de\nhet\n").unwrap();

    let vocabularies = load_vocabularies(Some(dir.path())).unwrap();
    assert_eq!(vocabularies.stopwords.len(), 2);
}
