//! Input side of the pipeline: decoding, delimited tables and questionnaire
//! exports.

pub mod encoding;
pub mod error;
pub mod questionnaire;
pub mod stage_files;
pub mod table;

pub use encoding::{decode_bytes, read_text};
pub use error::{IngestError, Result};
pub use questionnaire::{
    QuestionAnswers, Questionnaire, RawAnswer, load_questionnaire, select_question_columns,
};
pub use stage_files::{read_keyed_table, read_scored_matches};
pub use table::{DelimitedTable, ReadOptions, parse_delimited, read_delimited};
