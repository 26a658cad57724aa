use std::io::Write;
use std::path::Path;

use medcode_ingest::{IngestError, ReadOptions, parse_delimited, read_delimited};
use medcode_model::TextEncoding;
use tempfile::NamedTempFile;

fn temp_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file
}

#[test]
fn reads_tab_separated_latin1() {
    let mut bytes = b"PSEUDOIDEXT\tCOVID24A2TXT\nP1\tcr".to_vec();
    bytes.push(0xE8);
    bytes.extend_from_slice(b"me\n");
    let file = temp_file(&bytes);

    let table = read_delimited(file.path(), &ReadOptions::tab()).expect("read table");

    assert_eq!(table.headers, vec!["PSEUDOIDEXT", "COVID24A2TXT"]);
    assert_eq!(table.rows, vec![vec!["P1".to_string(), "crème".to_string()]]);
}

#[test]
fn short_rows_are_padded_and_blank_rows_skipped() {
    let text = "A;B;C\n1;x\n;;\n2;y;z\n";
    let table = parse_delimited(text, &ReadOptions::semicolon(), Path::new("mem.csv"))
        .expect("parse");
    assert_eq!(table.height(), 2);
    assert_eq!(table.rows[0], vec!["1", "x", ""]);
    assert_eq!(table.value(1, 2), "z");
    assert_eq!(table.value(5, 0), "");
}

#[test]
fn trim_option_trims_cells() {
    let text = "Original\tX\n  paracetamol \t 1\n";
    let options = ReadOptions::tab().with_trim(true);
    let table = parse_delimited(text, &options, Path::new("mem.tsv")).expect("parse");
    assert_eq!(table.column_values("Original"), Some(vec!["paracetamol"]));
    assert_eq!(table.column_values("X"), Some(vec!["1"]));
}

#[test]
fn headerless_tables_keep_all_rows() {
    let text = "http://a\tA01\nhttp://b\tB02\n";
    let options = ReadOptions::tab().with_headers(false);
    let table = parse_delimited(text, &options, Path::new("rainbow.tsv")).expect("parse");
    assert!(table.headers.is_empty());
    assert_eq!(table.height(), 2);
}

#[test]
fn empty_file_with_header_expected_is_an_error() {
    let result = parse_delimited("", &ReadOptions::tab(), Path::new("empty.tsv"));
    assert!(matches!(result, Err(IngestError::EmptyFile { .. })));
}

#[test]
fn missing_file_is_reported() {
    let options = ReadOptions::tab().with_encoding(TextEncoding::Utf8);
    let result = read_delimited(Path::new("/definitely/not/here.tsv"), &options);
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn required_columns_are_checked() {
    let table = parse_delimited("A\tB\n1\t2\n", &ReadOptions::tab(), Path::new("t.tsv"))
        .expect("parse");
    assert_eq!(table.require_column("B", Path::new("t.tsv")).unwrap(), 1);
    let err = table.require_column("C", Path::new("t.tsv")).unwrap_err();
    assert_eq!(err.to_string(), "required column 'C' not found in t.tsv");
}
