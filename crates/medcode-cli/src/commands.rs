use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;

use medcode_cli::pipeline;
use medcode_cli::types::{
    ExtractRequest, MatchBackRequest, MatchCodesRequest, MultipleChoiceRequest, OntologyRequest,
};
use medcode_model::{QuestionnaireSchema, parse_question_list};
use medcode_standards::{VOCABULARY_ENV_VAR, load_vocabularies};
use medcode_transform::{ExtractOptions, MatchOptions};

use crate::cli::{
    ExtractArgs, MatchBackArgs, MatchCodesArgs, MultipleChoiceArgs, OntologyArgs, VocabularyArgs,
};
use crate::summary::{
    apply_table_style, print_extract_summary, print_match_back_summary,
    print_match_codes_summary, print_multiple_choice_summary, print_ontology_summary,
};

const DEFAULT_QUESTIONNAIRE: &str = "../../data/raw/covid_questionnaires/week1/covid19-week1-1.dat";
const DEFAULT_ONTOLOGY_SOURCE: &str = "dbpedia_corrected.tsv";

/// Positional argument, then `-d/--datasource`, then the default path.
fn datasource(input: Option<&PathBuf>, flag: Option<&PathBuf>, default: &str) -> PathBuf {
    input
        .or(flag)
        .cloned()
        .unwrap_or_else(|| PathBuf::from(default))
}

pub fn run_extract(args: &ExtractArgs) -> Result<()> {
    let questions = parse_question_list(&args.questions)
        .with_context(|| format!("invalid --questions '{}'", args.questions))?;
    let schema = QuestionnaireSchema::default()
        .with_id_column(args.id_column.clone())
        .with_prefix(args.prefix.clone())
        .with_questions(questions);
    let request = ExtractRequest {
        datasource: datasource(
            args.input.as_ref(),
            args.datasource.as_ref(),
            DEFAULT_QUESTIONNAIRE,
        ),
        output_dir: args.output_dir.clone(),
        encoding: args.encoding,
        options: ExtractOptions::default()
            .with_schema(schema)
            .with_keep_empty_questions(args.keep_empty),
        vocabulary_dir: args.vocabularies.vocabulary_dir.clone(),
    };
    let result = pipeline::run_extract(&request)?;
    print_extract_summary(&result);
    Ok(())
}

pub fn run_match_codes(args: &MatchCodesArgs) -> Result<()> {
    let scored = args
        .input
        .as_ref()
        .or(args.datasource.as_ref())
        .cloned()
        .context("a scored matching file is required")?;
    let request = MatchCodesRequest {
        scored,
        rainbow: args.rainbow.clone(),
        options: MatchOptions::default()
            .with_layout(args.layout.into())
            .with_rainbow_headers(args.rainbow_header),
        long_output: args.long_output.clone(),
        wide_output: args.wide_output.clone(),
        encoding: args.encoding,
    };
    let result = pipeline::run_match_codes(&request)?;
    print_match_codes_summary(&result);
    Ok(())
}

pub fn run_match_back(args: &MatchBackArgs) -> Result<()> {
    let request = MatchBackRequest {
        answers: args.answers.clone(),
        codes: args.codes.clone(),
        output: args.output.clone(),
        encoding: args.encoding,
    };
    let result = pipeline::run_match_back(&request)?;
    print_match_back_summary(&result);
    Ok(())
}

pub fn run_multiple_choice(args: &MultipleChoiceArgs) -> Result<()> {
    let request = MultipleChoiceRequest {
        datasource: datasource(
            args.input.as_ref(),
            args.datasource.as_ref(),
            DEFAULT_QUESTIONNAIRE,
        ),
        codes: args.codes.clone(),
        output: args.output.clone(),
        schema: QuestionnaireSchema::default().with_id_column(args.id_column.clone()),
        encoding: args.encoding,
    };
    let result = pipeline::run_multiple_choice(&request)?;
    print_multiple_choice_summary(&result);
    Ok(())
}

pub fn run_ontology(args: &OntologyArgs) -> Result<()> {
    let request = OntologyRequest {
        source: datasource(
            args.input.as_ref(),
            args.datasource.as_ref(),
            DEFAULT_ONTOLOGY_SOURCE,
        ),
        rainbow_output: args.rainbow_output.clone(),
        turtle_output: args.turtle_output.clone(),
        encoding: args.encoding,
    };
    let result = pipeline::run_ontology(&request)?;
    print_ontology_summary(&result);
    Ok(())
}

pub fn run_vocabularies(args: &VocabularyArgs) -> Result<()> {
    let vocabularies =
        load_vocabularies(args.vocabulary_dir.as_deref()).context("load vocabularies")?;
    match args.vocabulary_dir.as_ref() {
        Some(dir) => println!("Overrides: {}", dir.display()),
        None => println!("Overrides: ${VOCABULARY_ENV_VAR} or built-in"),
    }
    let mut table = Table::new();
    table.set_header(vec!["Vocabulary", "Entries"]);
    apply_table_style(&mut table);
    for (name, size) in vocabularies.summary() {
        table.add_row(vec![name.to_string(), size.to_string()]);
    }
    println!("{table}");
    Ok(())
}
