use std::fs;

use medcode_ingest::load_questionnaire;
use medcode_model::{QuestionnaireSchema, TextEncoding};
use medcode_standards::Vocabularies;
use medcode_transform::{ExtractOptions, extract_questionnaire};
use tempfile::TempDir;

const EXPORT: &str = "PSEUDOIDEXT\tCOVID24A2TXT\tCOVID24A2TXT1\tCOVID24A3TXT\tCOVID24A10TXT\tCOVID24A1A\n\
P1\tParacetamol 500mg\tomeprazol\t9999\t9999\t1\n\
P2\tascal;simvastatine\t\t\tmetformine 2 dd 1 tablet\t0\n\
P3\t9999\tParacetamol 500mg\t8888\t\t1\n";

fn extract(schema: QuestionnaireSchema, keep_empty: bool) -> Vec<medcode_transform::QuestionExtraction> {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("week1.dat");
    fs::write(&path, EXPORT).expect("write export");
    let questionnaire =
        load_questionnaire(&path, &schema, TextEncoding::Latin1).expect("load questionnaire");
    let options = ExtractOptions::default()
        .with_schema(schema)
        .with_keep_empty_questions(keep_empty);
    extract_questionnaire(&questionnaire, &options, &Vocabularies::builtin())
        .expect("extraction failed")
}

#[test]
fn test_extracts_questions_column_by_column() {
    let extractions = extract(QuestionnaireSchema::default(), false);
    let columns: Vec<_> = extractions.iter().map(|e| e.column.as_str()).collect();
    assert_eq!(columns, ["COVID24A2TXT", "COVID24A10TXT"]);

    let question2 = &extractions[0];
    assert_eq!(question2.source_columns, ["COVID24A2TXT", "COVID24A2TXT1"]);
    assert_eq!(question2.answered, 4);
    let rendered: Vec<String> = question2
        .candidates
        .iter()
        .map(|c| format!("{}|{}|{}", c.participant_id, c.term, c.original))
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    P1|paracetamol|paracetamol
    P2|ascal|ascal,simvastatine
    P2|simvastatine|ascal,simvastatine
    P1|omeprazol|omeprazol
    P3|paracetamol|paracetamol
    ");

    let question10 = &extractions[1];
    assert_eq!(question10.candidates.len(), 1);
    assert_eq!(question10.candidates[0].term, "metformine");
}

#[test]
fn test_anonymized_output_drops_repeats() {
    let extractions = extract(QuestionnaireSchema::default(), false);
    let anonymous = extractions[0].anonymized();
    let rendered: Vec<String> = anonymous
        .iter()
        .map(|t| format!("{};{}", t.name, t.synonym))
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    paracetamol;paracetamol
    ascal;ascal,simvastatine
    simvastatine;ascal,simvastatine
    omeprazol;omeprazol
    ");
}

#[test]
fn test_questions_without_answers_are_skipped_unless_kept() {
    let schema = QuestionnaireSchema::default().with_questions(vec![1, 3]);
    let skipped = extract(schema.clone(), false);
    assert!(skipped.is_empty());

    let kept = extract(schema, true);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].column, "COVID24A3TXT");
    assert_eq!(kept[0].answered, 0);
    assert!(kept[0].candidates.is_empty());
}

#[test]
fn test_every_candidate_traces_to_an_answer() {
    let extractions = extract(QuestionnaireSchema::default(), false);
    for extraction in &extractions {
        for candidate in &extraction.candidates {
            assert!(["P1", "P2", "P3"].contains(&candidate.participant_id.as_str()));
            assert!(!candidate.term.is_empty());
            assert!(candidate.original.contains(candidate.term.as_str()));
        }
    }
}
