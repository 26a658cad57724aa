//! Codes implied by ticked multiple-choice answers.

use medcode_ingest::Questionnaire;
use medcode_model::{ChoiceCode, ChoiceSelection};

/// Value of a ticked answer.
pub const SELECTED: &str = "1";

/// Collects `(participant, code)` for every ticked hardcoded answer.
///
/// Entries are processed in table order and participants in file order. A
/// column missing from the export is reported and skipped.
pub fn extract_choices(questionnaire: &Questionnaire, codes: &[ChoiceCode]) -> Vec<ChoiceSelection> {
    let table = &questionnaire.table;
    let mut selections = Vec::new();
    let mut missing = 0usize;
    for choice in codes {
        let Some(idx) = table.column_index(&choice.column) else {
            tracing::warn!(column = %choice.column, "multiple-choice column not found, skipping");
            missing += 1;
            continue;
        };
        let before = selections.len();
        selections.extend(
            (0..table.height())
                .filter(|&row| table.value(row, idx) == SELECTED)
                .map(|row| ChoiceSelection {
                    participant_id: questionnaire.participant_id(row).to_string(),
                    code: choice.code.clone(),
                }),
        );
        tracing::debug!(
            column = %choice.column,
            code = %choice.code,
            selected = selections.len() - before,
            "collected multiple-choice answers"
        );
    }
    tracing::info!(
        entries = codes.len(),
        missing,
        selections = selections.len(),
        "extracted multiple-choice medication"
    );
    selections
}
