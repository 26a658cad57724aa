//! Stage runners: read inputs, run the transformation, write outputs.

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use medcode_ingest::{load_questionnaire, read_keyed_table, read_scored_matches};
use medcode_model::columns;
use medcode_output::{
    long_format_path, wide_format_path, write_choice_selections, write_extraction,
    write_long_format, write_rainbow_table, write_table, write_turtle, write_wide_format,
};
use medcode_standards::{
    load_choice_codes, load_ontology_records, load_rainbow_table, load_vocabularies,
};
use medcode_transform::{
    extract_choices, extract_questionnaire, join_codes, long_format, match_back, ontology_triples,
    rainbow_entries, wide_format,
};

use crate::logging::redact_value;
use crate::types::{
    ExtractRequest, ExtractResult, MatchBackRequest, MatchBackResult, MatchCodesRequest,
    MatchCodesResult, MultipleChoiceRequest, MultipleChoiceResult, OntologyRequest,
    OntologyResult, QuestionSummary, WrittenFile,
};

/// Extracts candidate terms for every configured question and writes the
/// identified and anonymized files.
pub fn run_extract(request: &ExtractRequest) -> Result<ExtractResult> {
    let span = info_span!("extract", datasource = %request.datasource.display());
    let _guard = span.enter();

    let vocabularies = load_vocabularies(request.vocabulary_dir.as_deref())
        .context("load vocabularies")?;
    let questionnaire = load_questionnaire(
        &request.datasource,
        &request.options.schema,
        request.encoding,
    )
    .with_context(|| format!("load questionnaire {}", request.datasource.display()))?;

    let extractions = extract_questionnaire(&questionnaire, &request.options, &vocabularies)
        .context("extract candidate terms")?;

    let mut questions = Vec::with_capacity(extractions.len());
    for extraction in &extractions {
        for candidate in &extraction.candidates {
            trace!(
                column = %extraction.column,
                participant = redact_value(&candidate.participant_id),
                term = redact_value(&candidate.term),
                "candidate term"
            );
        }
        let files = write_extraction(&request.output_dir, extraction)
            .with_context(|| format!("write {} outputs", extraction.column))?;
        questions.push(QuestionSummary {
            column: extraction.column.clone(),
            source_columns: extraction.source_columns.len(),
            answered: extraction.answered,
            identified_rows: files.identified_rows,
            anonymized_rows: files.anonymized_rows,
            identified: files.identified,
            anonymized: files.anonymized,
        });
    }
    info!(questions = questions.len(), "extraction complete");

    Ok(ExtractResult {
        datasource: request.datasource.clone(),
        output_dir: request.output_dir.clone(),
        participants: questionnaire.participant_count(),
        questions,
    })
}

/// Joins scored matches with rainbow table codes and writes the requested
/// layouts.
pub fn run_match_codes(request: &MatchCodesRequest) -> Result<MatchCodesResult> {
    let span = info_span!("match_codes", scored = %request.scored.display());
    let _guard = span.enter();

    let scored = read_scored_matches(&request.scored, request.encoding)
        .with_context(|| format!("read scored matches {}", request.scored.display()))?;
    let rainbow = load_rainbow_table(
        &request.rainbow,
        request.options.rainbow_has_headers,
        request.encoding,
    )
    .with_context(|| format!("read rainbow table {}", request.rainbow.display()))?;

    let coded = join_codes(&scored, &rainbow);
    let uncoded = coded.iter().filter(|row| row.codes.is_empty()).count();

    let long = if request.options.layout.wants_long() {
        let path = request
            .long_output
            .clone()
            .unwrap_or_else(|| long_format_path(&request.scored));
        let rows = write_long_format(&path, &long_format(&coded))
            .with_context(|| format!("write {}", path.display()))?;
        Some(WrittenFile { path, rows })
    } else {
        None
    };
    let wide = if request.options.layout.wants_wide() {
        let path = request
            .wide_output
            .clone()
            .unwrap_or_else(|| wide_format_path(&request.scored));
        let rows = write_wide_format(&path, &wide_format(coded))
            .with_context(|| format!("write {}", path.display()))?;
        Some(WrittenFile { path, rows })
    } else {
        None
    };
    info!(scored = scored.len(), uncoded, "code matching complete");

    Ok(MatchCodesResult {
        scored_rows: scored.len(),
        rainbow_entries: rainbow.len(),
        uncoded,
        long,
        wide,
    })
}

/// Re-joins coded long layout rows with the identified candidate file.
pub fn run_match_back(request: &MatchBackRequest) -> Result<MatchBackResult> {
    let span = info_span!("match_back", answers = %request.answers.display());
    let _guard = span.enter();

    let identified = read_keyed_table(&request.answers, columns::ORIGINAL, request.encoding, true)
        .with_context(|| format!("read identified file {}", request.answers.display()))?;
    let coded = read_keyed_table(&request.codes, columns::SYNONYM, request.encoding, false)
        .with_context(|| format!("read coded file {}", request.codes.display()))?;

    let joined = match_back(&identified, &coded).context("match coded results back")?;
    let rows = write_table(&request.output, &joined)
        .with_context(|| format!("write {}", request.output.display()))?;

    Ok(MatchBackResult {
        identified_rows: identified.height(),
        coded_rows: coded.height(),
        output: WrittenFile {
            path: request.output.clone(),
            rows,
        },
    })
}

/// Collects codes of ticked multiple-choice answers.
pub fn run_multiple_choice(request: &MultipleChoiceRequest) -> Result<MultipleChoiceResult> {
    let span = info_span!("multiple_choice", datasource = %request.datasource.display());
    let _guard = span.enter();

    let questionnaire = load_questionnaire(&request.datasource, &request.schema, request.encoding)
        .with_context(|| format!("load questionnaire {}", request.datasource.display()))?;
    let codes = load_choice_codes(&request.codes, request.encoding)
        .with_context(|| format!("read hardcoded codes {}", request.codes.display()))?;

    let missing_columns = codes
        .iter()
        .filter(|code| !questionnaire.has_column(&code.column))
        .map(|code| code.column.clone())
        .collect();
    let selections = extract_choices(&questionnaire, &codes);
    let rows = write_choice_selections(&request.output, &selections)
        .with_context(|| format!("write {}", request.output.display()))?;

    Ok(MultipleChoiceResult {
        entries: codes.len(),
        missing_columns,
        output: WrittenFile {
            path: request.output.clone(),
            rows,
        },
    })
}

/// Writes the rainbow table and the Turtle file of the curated ontology
/// source.
pub fn run_ontology(request: &OntologyRequest) -> Result<OntologyResult> {
    let span = info_span!("ontology", source = %request.source.display());
    let _guard = span.enter();

    let records = load_ontology_records(&request.source, request.encoding)
        .with_context(|| format!("read ontology source {}", request.source.display()))?;
    let entries = rainbow_entries(&records);
    let rows = write_rainbow_table(&request.rainbow_output, &entries)
        .with_context(|| format!("write {}", request.rainbow_output.display()))?;
    let triples = ontology_triples(&records);
    write_turtle(&request.turtle_output, &triples)
        .with_context(|| format!("write {}", request.turtle_output.display()))?;

    Ok(OntologyResult {
        records: records.len(),
        statements: triples.len(),
        rainbow: WrittenFile {
            path: request.rainbow_output.clone(),
            rows,
        },
        turtle: request.turtle_output.clone(),
    })
}
