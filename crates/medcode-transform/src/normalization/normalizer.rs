//! Free-text answer normalization.

use std::sync::LazyLock;

use regex::Regex;

/// Dosage, frequency and quantity expressions such as `500 mg`, `2x per dag`,
/// `elke 3 dagen`, `1 dd 1 tablet` or `10 ml per week`.
///
/// The alternation order of the unit and frequency groups matters: earlier
/// alternatives win, so `gram` must come before `gr` and `g`.
static DOSAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(elke( +)?)?\d+((,\d*)|(\.\d*))?( *)?",
        r"(m?\.?((gram)|(gr)|(g)|(l)))?\.?( *)?/?( +)?",
        r"(m?\.?((gram)|(gr)|(g)|(l)))?\.?( +)?",
        r"(half(e)?)?(pch)?(pcn)?(ie)?(keer)?(kker)?(st)?(st\.)?",
        r"((( +)?(per\W|x|\*))+)?( +)?((dag)(\w{0,2}))?(p/d)?(p/dag)?( +)?",
        r"(daags)?(dgs)?(dg)?(smorgens)?(savonds)?",
        r"(\d?( +)?dd( +)?\d?( +)?(t(ab(l(et(ten)?)?)?)?\b)?)?(dgs)?( +)?(week)?",
    ))
    .expect("Invalid dosage regex")
});

static COMMA_BEFORE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\w)").expect("Invalid comma regex"));

/// Whole cell of at most two letters, optionally wrapped in punctuation.
static SHORT_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\W*[a-zA-Z]{0,2}\W*$").expect("Invalid short cell regex"));

static TRAILING_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(,| \.)\s*$").expect("Invalid trailing separator regex"));

const QUOTE_ARTIFACTS: &[&str] = &["\"", "'", "`", "\t", "--"];
const BRACKET_ARTIFACTS: &[&str] = &["()", "( )", "( / )", "+", "i.v.m."];

/// Removes dosage expressions from already lowercased text.
pub fn strip_dosages(text: &str) -> String {
    DOSAGE_REGEX.replace_all(text, "").into_owned()
}

/// Collapses whitespace runs to one space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes one free-text answer.
///
/// Lowercases, removes quoting and dosage noise, turns `;` into `,` and
/// blanks answers that are only a letter or two. The result is trimmed and
/// single-spaced. Never fails; text without noise passes through.
pub fn normalize_answer(raw: &str) -> String {
    let mut text = raw.to_lowercase();
    text = COMMA_BEFORE_WORD.replace_all(&text, ", $1").into_owned();
    for artifact in QUOTE_ARTIFACTS {
        text = text.replace(artifact, " ");
    }
    text = strip_dosages(&text);
    text = text.replace(';', ",");
    if SHORT_CELL.is_match(&text) {
        return String::new();
    }
    text = TRAILING_SEPARATOR.replace(&text, "").into_owned();
    text = collapse_whitespace(&text);
    for artifact in BRACKET_ARTIFACTS {
        text = text.replace(artifact, " ");
    }
    collapse_whitespace(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_dosage_expressions() {
        assert_eq!(normalize_answer("Paracetamol 500 mg"), "paracetamol");
        assert_eq!(normalize_answer("Metoprolol 50mg 1x per dag"), "metoprolol");
        assert_eq!(normalize_answer("omeprazol 20 gram"), "omeprazol");
        assert_eq!(normalize_answer("oxazepam 2 dd 1 tablet"), "oxazepam");
        assert_eq!(normalize_answer("vitamine d elke 2 weken"), "vitamine d weken");
    }

    #[test]
    fn removes_quotes_and_trailing_separators() {
        assert_eq!(normalize_answer("\"Ibuprofen\" ,"), "ibuprofen");
        assert_eq!(normalize_answer("`salbutamol` ."), "salbutamol");
        assert_eq!(normalize_answer("a--b"), "a b");
    }

    #[test]
    fn separates_comma_lists() {
        assert_eq!(normalize_answer("ibuprofen,paracetamol"), "ibuprofen, paracetamol");
        assert_eq!(normalize_answer("ascal;simvastatine"), "ascal,simvastatine");
    }

    #[test]
    fn blanks_short_cells() {
        assert_eq!(normalize_answer("NB"), "");
        assert_eq!(normalize_answer(" x. "), "");
        assert_eq!(normalize_answer("-"), "");
        assert_eq!(normalize_answer("9999"), "");
    }

    #[test]
    fn removes_bracket_artifacts() {
        assert_eq!(normalize_answer("insuline (  ) novorapid"), "insuline novorapid");
        assert_eq!(normalize_answer("calcium+vitamine"), "calcium vitamine");
        assert_eq!(normalize_answer("prednison i.v.m. astma"), "prednison astma");
    }
}
