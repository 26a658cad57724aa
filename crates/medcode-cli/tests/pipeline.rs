use std::fs;
use std::path::{Path, PathBuf};

use medcode_cli::pipeline::{
    run_extract, run_match_back, run_match_codes, run_multiple_choice, run_ontology,
};
use medcode_cli::types::{
    ExtractRequest, MatchBackRequest, MatchCodesRequest, MultipleChoiceRequest, OntologyRequest,
};
use medcode_ingest::{DelimitedTable, ReadOptions, read_delimited};
use medcode_model::{CodeLayout, QuestionnaireSchema, TextEncoding};
use medcode_transform::{ExtractOptions, MatchOptions};
use tempfile::TempDir;

const EXPORT: &str = "PSEUDOIDEXT\tCOVID24A2TXT\tCOVID24A2TXT1\tCOVID24A3TXT\tCOVID24A1A\tCOVID24A1B\n\
P1\tParacetamol 500mg\tomeprazol\t9999\t1\t0\n\
P2\tascal;simvastatine\t\t\t0\t1\n\
P3\t9999\tParacetamol 500mg\t8888\t1\t1\n";

const SCORED: &str = "Name;Synonym;ontologyTermName;ontologyTermIRI;score;validated;review\n\
paracetamol;paracetamol;Paracetamol;http://dbpedia.org/resource/Paracetamol;100.0;true;false\n\
ascal;ascal,simvastatine;Acetylsalicylic acid;http://dbpedia.org/resource/Aspirin;85.5;true;false\n\
simvastatine;ascal,simvastatine;Simvastatin;http://dbpedia.org/resource/Simvastatin;92;true;false\n\
omeprazol;omeprazol;Omeprazole;http://dbpedia.org/resource/Omeprazole;88;false;true\n";

const RAINBOW: &str = "http://dbpedia.org/resource/Paracetamol\tN02BE01\n\
http://dbpedia.org/resource/Aspirin\tB01AC06\n\
http://dbpedia.org/resource/Aspirin\tN02BA01\n\
http://dbpedia.org/resource/Simvastatin\tC10AA01\n";

const CHOICES: &str = "COVID24A1A\tN02BE01\nCOVID24A1B\tC10AA01\nCOVID24A1Z\tA10BA02\n";

const ONTOLOGY: &str = "resource\tsubstance\tatc\tparent\tlabel\n\
\"http://dbpedia.org/resource/Paracetamol\"\t\"Paracetamol\"\tN02BE01\thttp://example.org/atc/N02BE\tParacetamol\n\
\"http://dbpedia.org/resource/Aspirin\"\t\"Acetylsalicylic acid\"\tB01AC06\thttp://example.org/atc/B01AC\t\n\
\"http://dbpedia.org/resource/Aspirin\"\t\"Acetylsalicylic acid\"\tN02BA01\t\t\n";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn read_tab(path: &Path) -> DelimitedTable {
    let options = ReadOptions::tab().with_encoding(TextEncoding::Utf8);
    read_delimited(path, &options).expect("read output")
}

fn column(table: &DelimitedTable, name: &str) -> Vec<String> {
    table
        .column_values(name)
        .expect("column present")
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_full_pipeline_links_codes_back_to_participants() {
    let dir = TempDir::new().expect("tempdir");
    let export = write(dir.path(), "week1.dat", EXPORT);
    let out_dir = dir.path().join("extracted");

    let extracted = run_extract(&ExtractRequest {
        datasource: export,
        output_dir: out_dir.clone(),
        encoding: TextEncoding::Latin1,
        options: ExtractOptions::default()
            .with_schema(QuestionnaireSchema::default().with_questions(vec![2, 3])),
        vocabulary_dir: None,
    })
    .expect("extract");
    assert_eq!(extracted.participants, 3);
    assert_eq!(extracted.questions.len(), 1);
    let question = &extracted.questions[0];
    assert_eq!(question.column, "COVID24A2TXT");
    assert_eq!(question.identified_rows, 5);
    assert_eq!(question.anonymized_rows, 4);
    assert!(question.anonymized.starts_with(out_dir.join("anonymous")));

    let identified = read_tab(&question.identified);
    assert_eq!(identified.headers, ["PSEUDOIDEXT", "COVID24A2TXT", "Original"]);
    assert_eq!(
        column(&identified, "COVID24A2TXT"),
        ["paracetamol", "ascal", "simvastatine", "omeprazol", "paracetamol"]
    );

    let scored = write(dir.path(), "sorta_q2.csv", SCORED);
    let rainbow = write(dir.path(), "rainbow.tsv", RAINBOW);
    let matched = run_match_codes(&MatchCodesRequest {
        scored: scored.clone(),
        rainbow,
        options: MatchOptions::default().with_layout(CodeLayout::Both),
        long_output: None,
        wide_output: None,
        encoding: TextEncoding::Utf8,
    })
    .expect("match codes");
    assert_eq!(matched.scored_rows, 4);
    assert_eq!(matched.uncoded, 1);

    // One long row per code, one for a term without codes.
    let long = matched.long.expect("long layout written");
    assert_eq!(long.path, dir.path().join("sorta_q2_long_format.tsv"));
    assert_eq!(long.rows, 5);
    let long_table = read_tab(&long.path);
    assert_eq!(
        long_table.headers,
        ["Name", "Synonym", "ontologyTermName", "score", "validated", "Atccode", "review"]
    );

    let wide = matched.wide.expect("wide layout written");
    assert_eq!(wide.rows, 4);
    let wide_table = read_tab(&wide.path);
    let wide_codes = column(&wide_table, "Atccode");
    assert!(wide_codes.contains(&"B01AC06, N02BA01".to_string()));

    let result_path = dir.path().join("result.tsv");
    let linked = run_match_back(&MatchBackRequest {
        answers: question.identified.clone(),
        codes: long.path,
        output: result_path.clone(),
        encoding: TextEncoding::Utf8,
    })
    .expect("match back");
    assert_eq!(linked.identified_rows, 5);
    assert_eq!(linked.coded_rows, 5);
    // paracetamol 2x1, ascal and simvastatine 2x3, omeprazol 1x1
    assert_eq!(linked.output.rows, 9);

    let result = read_tab(&result_path);
    assert_eq!(
        result.headers,
        [
            "PSEUDOIDEXT",
            "COVID24A2TXT",
            "Original",
            "Name",
            "ontologyTermName",
            "score",
            "validated",
            "Atccode",
            "review"
        ]
    );
    let mut p2_codes: Vec<&str> = (0..result.height())
        .filter(|&row| result.value(row, 0) == "P2" && result.value(row, 1) == "ascal")
        .map(|row| result.value(row, 7))
        .collect();
    p2_codes.sort_unstable();
    assert_eq!(p2_codes, ["B01AC06", "C10AA01", "N02BA01"]);
}

#[test]
fn test_multiple_choice_skips_missing_columns() {
    let dir = TempDir::new().expect("tempdir");
    let export = write(dir.path(), "week1.dat", EXPORT);
    let codes = write(dir.path(), "choices.tsv", CHOICES);
    let output = dir.path().join("multiple_choice.tsv");

    let result = run_multiple_choice(&MultipleChoiceRequest {
        datasource: export,
        codes,
        output: output.clone(),
        schema: QuestionnaireSchema::default(),
        encoding: TextEncoding::Latin1,
    })
    .expect("multiple choice");
    assert_eq!(result.entries, 3);
    assert_eq!(result.missing_columns, ["COVID24A1Z"]);
    assert_eq!(result.output.rows, 4);

    let table = read_tab(&output);
    let rows: Vec<String> = (0..table.height())
        .map(|row| format!("{} {}", table.value(row, 0), table.value(row, 1)))
        .collect();
    assert_eq!(rows, ["P1 N02BE01", "P3 N02BE01", "P2 C10AA01", "P3 C10AA01"]);
}

#[test]
fn test_ontology_export_writes_rainbow_and_turtle() {
    let dir = TempDir::new().expect("tempdir");
    let source = write(dir.path(), "dbpedia_corrected.tsv", ONTOLOGY);
    let rainbow_output = dir.path().join("out").join("dbpedia_rainbowtable.tsv");
    let turtle_output = dir.path().join("out").join("dbpedia.ttl");

    let result = run_ontology(&OntologyRequest {
        source,
        rainbow_output: rainbow_output.clone(),
        turtle_output: turtle_output.clone(),
        encoding: TextEncoding::Utf8,
    })
    .expect("ontology export");
    assert_eq!(result.records, 3);
    // Repeated labels collapse; the blank parent adds nothing.
    assert_eq!(result.statements, 4);
    assert_eq!(result.rainbow.rows, 3);

    let rainbow = fs::read_to_string(&rainbow_output).expect("read rainbow table");
    let lines: Vec<&str> = rainbow.lines().collect();
    assert_eq!(
        lines,
        [
            "http://dbpedia.org/resource/Paracetamol\tN02BE01",
            "http://dbpedia.org/resource/Aspirin\tB01AC06",
            "http://dbpedia.org/resource/Aspirin\tN02BA01",
        ]
    );

    let turtle = fs::read_to_string(&turtle_output).expect("read turtle");
    assert!(turtle.starts_with("@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> ."));
    assert!(turtle.contains("<http://dbpedia.org/resource/Aspirin> rdfs:label \"Acetylsalicylic acid\""));
    assert!(turtle.contains("rdfs:subClassOf <http://example.org/atc/N02BE>"));
}
