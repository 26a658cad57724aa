//! Tests for medcode-model types.

use medcode_model::{
    CandidateTerm, CodeLayout, ModelError, QuestionnaireRow, QuestionnaireSchema, TextEncoding,
    parse_question_list,
};

#[test]
fn default_schema_targets_questions_two_to_ten() {
    let schema = QuestionnaireSchema::default();
    assert_eq!(schema.id_column, "PSEUDOIDEXT");
    assert_eq!(schema.questions.first(), Some(&2));
    assert_eq!(schema.questions.last(), Some(&10));
    assert_eq!(schema.text_column(10), "COVID24A10TXT");
}

#[test]
fn schema_builders_override_defaults() {
    let schema = QuestionnaireSchema::default()
        .with_prefix("COVID27A")
        .with_id_column("ID")
        .with_questions(vec![4]);
    assert_eq!(schema.text_column(4), "COVID27A4TXT");
    assert_eq!(schema.id_column, "ID");
    assert_eq!(schema.questions, vec![4]);
}

#[test]
fn question_lists_accept_ranges_and_singles() {
    assert_eq!(parse_question_list("2-4").unwrap(), vec![2, 3, 4]);
    assert_eq!(parse_question_list("2, 5,9").unwrap(), vec![2, 5, 9]);
    assert_eq!(parse_question_list("2-3,7").unwrap(), vec![2, 3, 7]);
}

#[test]
fn question_lists_reject_garbage() {
    assert!(matches!(
        parse_question_list("ten"),
        Err(ModelError::InvalidQuestionList(_))
    ));
    assert!(parse_question_list("5-2").is_err());
    assert!(parse_question_list("").is_err());
}

#[test]
fn encodings_parse_common_labels() {
    assert_eq!("ISO-8859-1".parse::<TextEncoding>().unwrap(), TextEncoding::Latin1);
    assert_eq!("utf-8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
    assert!("ebcdic".parse::<TextEncoding>().is_err());
}

#[test]
fn layout_flags() {
    assert!(CodeLayout::Both.wants_long());
    assert!(CodeLayout::Both.wants_wide());
    assert!(!CodeLayout::Long.wants_wide());
    assert!(!CodeLayout::Wide.wants_long());
}

#[test]
fn questionnaire_row_lookup() {
    let row = QuestionnaireRow::new("P1").with_answer("COVID24A2TXT", "paracetamol");
    assert_eq!(row.answer("COVID24A2TXT"), Some("paracetamol"));
    assert_eq!(row.answer("COVID24A3TXT"), None);
}

#[test]
fn candidate_terms_hash_by_value() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(CandidateTerm::new("P1", "a", "b"));
    set.insert(CandidateTerm::new("P1", "a", "b"));
    assert_eq!(set.len(), 1);
}
