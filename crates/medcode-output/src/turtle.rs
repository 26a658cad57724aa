//! Turtle serialization of the ontology statements.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use medcode_transform::ontology::RDFS_NAMESPACE;
use medcode_transform::{TermObject, Triple};

use crate::error::{OutputError, Result};
use crate::frame::ensure_parent_dir;

fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Characters not allowed in an IRI reference are written as `\u` escapes.
fn escape_iri(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch <= ' ' || matches!(ch, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\') {
            let _ = write!(escaped, "\\u{:04X}", u32::from(ch));
        } else {
            escaped.push(ch);
        }
    }
    escaped
}

fn render_object(object: &TermObject) -> String {
    match object {
        TermObject::Iri(iri) => format!("<{}>", escape_iri(iri)),
        TermObject::Literal(text) => format!("\"{}\"", escape_literal(text)),
    }
}

/// Renders statements grouped by subject in order of first appearance.
pub fn render_turtle(triples: &[Triple]) -> String {
    let mut subjects: Vec<&str> = Vec::new();
    for triple in triples {
        if !subjects.contains(&triple.subject.as_str()) {
            subjects.push(&triple.subject);
        }
    }

    let mut out = format!("@prefix rdfs: <{RDFS_NAMESPACE}> .\n");
    for subject in subjects {
        let statements: Vec<String> = triples
            .iter()
            .filter(|triple| triple.subject == subject)
            .map(|triple| {
                format!(
                    "rdfs:{} {}",
                    triple.predicate.local_name(),
                    render_object(&triple.object)
                )
            })
            .collect();
        let _ = write!(
            out,
            "\n<{}> {} .\n",
            escape_iri(subject),
            statements.join(" ;\n    ")
        );
    }
    out
}

/// Writes the Turtle document.
pub fn write_turtle(path: &Path, triples: &[Triple]) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, render_turtle(triples)).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), statements = triples.len(), "wrote turtle");
    Ok(())
}
