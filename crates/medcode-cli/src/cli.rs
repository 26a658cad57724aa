//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use medcode_model::{CodeLayout, TextEncoding};

#[derive(Parser)]
#[command(
    name = "medcode",
    version,
    about = "Questionnaire medication coding - from free-text answers to ATC codes",
    long_about = "Extract candidate drug names from questionnaire free-text answers,\n\
                  join curated matches with ATC codes and link the codes back to\n\
                  participants. Every stage reads and writes plain delimited files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow participant identifiers and answer texts in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract candidate drug names from the free-text questions.
    Extract(ExtractArgs),

    /// Join curated term matches with ATC codes (long and/or wide layout).
    MatchCodes(MatchCodesArgs),

    /// Link coded results back to participants.
    MatchBack(MatchBackArgs),

    /// Collect ATC codes of ticked multiple-choice answers.
    MultipleChoice(MultipleChoiceArgs),

    /// Build a rainbow table and a Turtle file from the curated ontology source.
    Ontology(OntologyArgs),

    /// List the cleaning vocabularies in effect.
    Vocabularies(VocabularyArgs),
}

#[derive(Args)]
pub struct VocabularyArgs {
    /// Directory with vocabulary override files (default: $MEDCODE_VOCABULARY_DIR).
    #[arg(long = "vocabulary-dir", value_name = "DIR")]
    pub vocabulary_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct ExtractArgs {
    /// Questionnaire export (tab separated).
    #[arg(value_name = "DATASOURCE")]
    pub input: Option<PathBuf>,

    /// Questionnaire export, alternative to the positional argument.
    #[arg(
        short = 'd',
        long = "datasource",
        value_name = "PATH",
        conflicts_with = "input"
    )]
    pub datasource: Option<PathBuf>,

    /// Output directory; anonymized files go to its `anonymous` sub-directory.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "./extractedColumns4")]
    pub output_dir: PathBuf,

    /// Identifier column of the export.
    #[arg(long = "id-column", default_value = "PSEUDOIDEXT")]
    pub id_column: String,

    /// Prefix of the free-text question columns.
    #[arg(long = "prefix", default_value = "COVID24A")]
    pub prefix: String,

    /// Questions to extract, e.g. `2-10` or `2,4,7`.
    #[arg(long = "questions", default_value = "2-10")]
    pub questions: String,

    /// Write files for questions without any usable answer.
    #[arg(long = "keep-empty")]
    pub keep_empty: bool,

    /// Character encoding of the export.
    #[arg(long = "encoding", default_value = "latin1")]
    pub encoding: TextEncoding,

    #[command(flatten)]
    pub vocabularies: VocabularyArgs,
}

#[derive(Args)]
pub struct MatchCodesArgs {
    /// Scored matching file from the term matcher (`;` separated).
    #[arg(value_name = "SCORED")]
    pub input: Option<PathBuf>,

    /// Scored matching file, alternative to the positional argument.
    #[arg(
        short = 'd',
        long = "datasource",
        value_name = "PATH",
        conflicts_with = "input",
        required_unless_present = "input"
    )]
    pub datasource: Option<PathBuf>,

    /// Rainbow table (`IRI<TAB>code`).
    #[arg(long = "rainbow", value_name = "PATH", default_value = "rainbowtable_all.tsv")]
    pub rainbow: PathBuf,

    /// The rainbow table starts with a header row.
    #[arg(long = "rainbow-header")]
    pub rainbow_header: bool,

    /// Layout(s) to write.
    #[arg(long = "layout", value_enum, default_value = "long")]
    pub layout: LayoutArg,

    /// Long layout output (default: `<stem>_long_format.tsv` next to the input).
    #[arg(long = "long-output", value_name = "PATH")]
    pub long_output: Option<PathBuf>,

    /// Wide layout output (default: `<stem>_wide_format.tsv` next to the input).
    #[arg(long = "wide-output", value_name = "PATH")]
    pub wide_output: Option<PathBuf>,

    /// Character encoding of both inputs.
    #[arg(long = "encoding", default_value = "utf8")]
    pub encoding: TextEncoding,
}

#[derive(Args)]
pub struct MatchBackArgs {
    /// Identified candidate file of one question.
    #[arg(
        value_name = "ANSWERS",
        default_value = "../../extractedColumns4_week1/COVID24A2TXT_column.csv"
    )]
    pub answers: PathBuf,

    /// Coded long layout file.
    #[arg(
        value_name = "CODES",
        default_value = "./Lifelines_Covid_questionaire_week1_question_24A2_processed_wide_ATC_codes_incl_unfilteredlong_format.tsv"
    )]
    pub codes: PathBuf,

    /// Result file.
    #[arg(value_name = "OUTPUT", default_value = "result.tsv")]
    pub output: PathBuf,

    /// Character encoding of both inputs.
    #[arg(long = "encoding", default_value = "utf8")]
    pub encoding: TextEncoding,
}

#[derive(Args)]
pub struct MultipleChoiceArgs {
    /// Questionnaire export (tab separated).
    #[arg(value_name = "DATASOURCE")]
    pub input: Option<PathBuf>,

    /// Questionnaire export, alternative to the positional argument.
    #[arg(
        short = 'd',
        long = "datasource",
        value_name = "PATH",
        conflicts_with = "input"
    )]
    pub datasource: Option<PathBuf>,

    /// Hardcoded `column<TAB>ATC code` table.
    #[arg(
        long = "codes",
        value_name = "PATH",
        default_value = "./hardcoded_ATC_questions_week1-6.tsv"
    )]
    pub codes: PathBuf,

    /// Result file.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "./Medication_use_multiplechoice.tsv"
    )]
    pub output: PathBuf,

    /// Identifier column of the export.
    #[arg(long = "id-column", default_value = "PSEUDOIDEXT")]
    pub id_column: String,

    /// Character encoding of the export and the hardcoded table.
    #[arg(long = "encoding", default_value = "latin1")]
    pub encoding: TextEncoding,
}

#[derive(Args)]
pub struct OntologyArgs {
    /// Curated ontology source table.
    #[arg(value_name = "SOURCE")]
    pub input: Option<PathBuf>,

    /// Curated ontology source table, alternative to the positional argument.
    #[arg(
        short = 'd',
        long = "datasource",
        value_name = "PATH",
        conflicts_with = "input"
    )]
    pub datasource: Option<PathBuf>,

    /// Rainbow table output.
    #[arg(
        long = "rainbow-output",
        value_name = "PATH",
        default_value = "./dbpedia_rainbowtable.tsv"
    )]
    pub rainbow_output: PathBuf,

    /// Turtle output.
    #[arg(long = "turtle-output", value_name = "PATH", default_value = "./dbpedia.ttl")]
    pub turtle_output: PathBuf,

    /// Character encoding of the source table.
    #[arg(long = "encoding", default_value = "utf8")]
    pub encoding: TextEncoding,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    Long,
    Wide,
    Both,
}

impl From<LayoutArg> for CodeLayout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Long => Self::Long,
            LayoutArg::Wide => Self::Wide,
            LayoutArg::Both => Self::Both,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
