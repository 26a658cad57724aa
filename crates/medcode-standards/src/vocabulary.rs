//! Fixed word lists used to clean free-text medication answers.
//!
//! The lists are immutable once loaded. Built-in defaults cover the Dutch
//! questionnaire; any list can be replaced by a plain text file (one entry per
//! line, `#` starts a comment) in a vocabulary directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Result, StandardsError};

/// Environment variable pointing at a vocabulary override directory.
pub const VOCABULARY_ENV_VAR: &str = "MEDCODE_VOCABULARY_DIR";

/// Dutch stopwords (the Snowball list shipped with common NLP toolkits).
pub const DUTCH_STOPWORDS: &[&str] = &[
    "de", "en", "van", "ik", "te", "dat", "die", "in", "een", "hij", "het", "niet", "zijn", "is",
    "was", "op", "aan", "met", "als", "voor", "had", "er", "maar", "om", "hem", "dan", "zou",
    "of", "wat", "mijn", "men", "dit", "zo", "door", "over", "ze", "zich", "bij", "ook", "tot",
    "je", "mij", "uit", "der", "daar", "haar", "naar", "heb", "hoe", "heeft", "hebben", "deze",
    "u", "want", "nog", "zal", "me", "zij", "nu", "ge", "geen", "omdat", "iets", "worden",
    "toch", "al", "waren", "veel", "meer", "doen", "toen", "moet", "ben", "zonder", "kan", "hun",
    "dus", "alles", "onder", "ja", "eens", "hier", "wie", "werd", "altijd", "doch", "wordt",
    "wezen", "kunnen", "ons", "zelf", "tegen", "na", "reeds", "wil", "kon", "niets", "uw",
    "iemand", "geweest", "andere",
];

/// Generic manufacturer names and their abbreviations.
pub const MANUFACTURERS: &[&str] = &[
    "actavis", "apo", "apotex", "aur", "auro", "bipha", "bipharma", "cf", "dcb", "dumex", "fna",
    "foc", "fres", "gl", "hexal", "hikma", "idyl", "kabi", "leyden", "mdq", "micron", "myl",
    "myla", "mylan", "pch", "pfiz", "pharbita", "phb", "ranb", "rp", "san", "sandoz", "sdz",
    "teva", "vogel", "weleda", "lilly", "janssen-cilag", "ratiopharm", "sadoz", "dandoz",
    "sandox",
];

/// Fill words: allowed inside an answer, never a term on their own.
pub const FILLER_TERMS: &[&str] = &[
    "alp", "berna", "biotest", "brist", "broc", "dep", "drp", "du", "eb", "ebe", "eu", "fa",
    "fauld", "fis", "flacon", "flos", "flx", "forte", "fre", "gf", "hcl", "ho", "hos", "hosp",
    "htp", "hydrofiele", "icn", "intraflex", "jc", "jjc", "jub", "kar", "karib", "katw", "kri",
    "krist", "ktw", "kw", "kwikpen", "lic", "mayne", "medicinaal", "minipl", "mp", "normaal",
    "novol", "novolet", "nx", "op", "opg", "ora", "oros", "pb", "penfill", "phbt", "psi",
    "radix", "ret", "retard", "rivm", "sm", "sudco", "tram", "tts", "wwsp", "conc", "extract",
    "geel", "dis", "plus", "hci", "tert", "auto", "combinatie", "remmer", "remmers", "mono",
    "neuro", "sun", "card", "car", "pro", "hart", "med", "extra", "sterk",
];

/// Whole words removed from split terms (complaints, time words, phrases).
pub const EXCLUDED_WORDS: &[&str] = &[
    "teva", "accord", "focus", "schildklier", "pd", "x", "auro", "aurobindo", "retard", "foc",
    "glenmark", "glen", "m/gr", "glaucoom", "zonodig", "microgram", "ochtend", "medicijn", "mcg",
    "migraine", "profylaxe", "tegen", "jicht", "pharmathen", "halve", "opvliegers", "allergie",
    "pillen", "van", "ochtends", "avonds", "pompkracht", "maart", "mee", "begonnen",
    "hooikoorts", "i.v.m.", "eenogigheid", "ziekte", "crohn", "voor", "depressie", "hoge", "een",
    "andere", "medicatie", "mijn", "spiegel", "was", "te", "laag", "homeopatisch", "ivm",
    "gordelroos", "om", "op", "houden", "medicijnen", "hartritme", "geen", "idee", "milli",
    "micro", "gram/ml", "slijmbeursontsteking", "hartkloppingen", "zwangerschap", "gebruik",
    "als", "onderhoudsmedicatie", "hoofdpijn", "plassen", "middelen", "weet", "niet",
    "wekelijks", "bloeddrukverlager", "jeukbestrijding", "door", "dermatoloog", "aangeraden",
    "ter", "voorkoming", "voorschrift", "neuroloog", "alternatief", "prostaat", "gewrichten",
    "bloeddrukpillen", "onafhankelijk", "het", "preventief", "heb", "gehad", "ritme", "storing",
    "kon", "ik", "invullen", "onderstaande", "vraag", "pijnremmers", "per", "dag", "mylan",
    "bloeddruk", "bloedvaten", "ide", "week", "elk", "nemen", "ieder", "di e", "toe", "rug",
    "nodig", "hom", "uur", "neus", "parkinson", "mood", "naam", "t b v", "via", "huisarts",
];

/// Administration forms (dose forms) that are never a drug name on their own.
pub const ADMINISTRATION_FORMS: &[&str] = &[
    "aerosol", "applicatievl", "applicatievloeist", "applicatievlst", "applvlst", "blaassp",
    "blaasspoeling", "bruisgr", "bruisgran", "bruisgranulaat", "bruistab", "bruistablet",
    "capsule", "concentraat", "creme", "dispertabl", "dragee", "drank", "druppels", "emulsie",
    "gel", "gorgeldrank", "granulaat", "huidspray", "implantaat", "implantatiestift", "inf",
    "infopl", "infusievloeistof", "infusion", "infuus", "infvls", "infvlst", "inhalatiepoeder",
    "inhalatievloeistof/gas", "inhalatievlst/gas", "inhalcaps", "inhpdr", "inj", "inj/infopl",
    "injectie", "injectie/infuus", "injectiepoeder", "injpdr", "injsusp", "injv", "injvls",
    "kauw-/dispertab", "kauwtab", "kauwtablet", "kauwtb", "klysma", "lotion", "mondpasta",
    "mondspoeling", "mondspray", "neusspray", "oogdruppel", "ooginsert", "oogwassing", "oogzalf",
    "oordr", "oordrup", "oordrupp", "oordruppel", "oordruppels", "opl", "oplos", "oplossing",
    "pasta", "pdr", "poeder", "schudmixtuur", "siroop", "smeersel", "smelttablet", "solutab",
    "spoeling", "spray", "strooipoeder", "stroop", "supp", "sus", "susp", "susp.", "suspensie",
    "tab", "tablet", "tabletten", "tandpasta", "tinctuur", "vaginaalcapsule", "vaginaalcreme",
    "vaginaaltablet", "vernevel", "vernevelvlst", "vlst", "weefsellijm", "zalf", "zetpil",
    "zuigtablet", "oleogel",
];

/// Text directly before a separator that keeps the two sides together
/// (`rode gist`, `multi vitamine`, `vitamine d`, `tert-butyl`).
pub const SPLIT_GUARDS_BEFORE: &[&str] = &[
    "rode", "multi ", "multi", "vitamin", "vitamine", "tert-", "tert",
];

/// Text directly after a separator that keeps the two sides together; dose
/// form words and abbreviations, matched as prefixes.
pub const SPLIT_GUARDS_AFTER: &[&str] = &[
    "aerosol", "applicatievl", "applicatievloeist", "applicatievlst", "applvlst", "blaassp",
    "blaasspoeling", "bruisgr", "bruisgran", "bruisgranulaat", "bruistab", "bruistablet",
    "capsule", "caps", "chew", "concentraat", "creme", "dispertabl", "disp", "dsp", "dragee",
    "drank", "druppels", "emulsie", "gel", "gorgeldrank", "granulaat", "huidspray",
    "implantaat", "implantatiestift", "inf", "infopl", "infusievloeistof", "infusion", "infuus",
    "infvls", "infvlst", "inhalatiepoeder", "inhalatievloeistof/gas", "inhalatievlst/gas",
    "inhalcaps", "inhpdr", "inj", "inj/infopl", "injectie", "injectie/infuus", "injectiepoeder",
    "injpdr", "injsusp", "injv", "injvls", "kauw-/dispertab", "kauwtab", "kauwtablet", "kauwtb",
    "klysma", "lotion", "mondpasta", "mondspoeling", "mondspray", "neusspray", "omh tabl", "omh",
    "oogdruppel", "ooginsert", "oogwassing", "oogzalf", "oordr", "oordrup", "oordrupp",
    "oordruppel", "oog druppels", "oordruppels", "opl", "oplos", "oplossing", "pasta", "pdr",
    "pleister", "poeder", "schudmixtuur", "siroop", "smeersel", "smelttablet", "solutab",
    "spoeling", "spray", "strooipoeder", "stroop", "supp", "sus", "susp", "susp.", "suspensie",
    "tabl omh", "tab", "tablet", "tabletten", "tabl", "tandpasta", "tea", "tinctuur",
    "vaginaalcapsule", "vaginaalcreme", "vaginaaltablet", "vernevel", "vernevelvlst", "vlst",
    "weefsellijm", "zalf", "zetpil", "zuigtablet", "oleogel",
];

/// An ordered, de-duplicated list of lowercase entries with set lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<String>,
    lookup: HashSet<String>,
}

impl Vocabulary {
    /// Builds a vocabulary; entries are lowercased and trimmed, blanks dropped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self::default();
        for entry in entries {
            let entry = entry.as_ref().trim().to_lowercase();
            if entry.is_empty() {
                continue;
            }
            if vocabulary.lookup.insert(entry.clone()) {
                vocabulary.entries.push(entry);
            }
        }
        vocabulary
    }

    /// Case-insensitive membership of a trimmed value.
    pub fn contains(&self, value: &str) -> bool {
        let trimmed = value.trim();
        self.lookup.contains(trimmed) || self.lookup.contains(&trimmed.to_lowercase())
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Context checks that veto a split at a separator character.
///
/// Guards are lowercase and keep inner and trailing spaces (`"multi "`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitGuards {
    pub before: Vec<String>,
    pub after: Vec<String>,
}

impl SplitGuards {
    pub fn new<I, J, S, T>(before: I, after: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let clean = |value: &str| {
            let value = value.to_lowercase();
            (!value.trim().is_empty()).then_some(value)
        };
        Self {
            before: before.into_iter().filter_map(|v| clean(v.as_ref())).collect(),
            after: after.into_iter().filter_map(|v| clean(v.as_ref())).collect(),
        }
    }

    /// True when `before` ends with a guard or `after` starts with one.
    pub fn blocks(&self, before: &str, after: &str) -> bool {
        self.before.iter().any(|guard| before.ends_with(guard.as_str()))
            || self.after.iter().any(|guard| after.starts_with(guard.as_str()))
    }
}

/// Every word list the cleaning stages need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabularies {
    pub stopwords: Vocabulary,
    pub manufacturers: Vocabulary,
    pub filler_terms: Vocabulary,
    pub administration_forms: Vocabulary,
    pub excluded_words: Vocabulary,
    pub split_guards: SplitGuards,
}

impl Default for Vocabularies {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Override file names inside a vocabulary directory.
const STOPWORDS_FILE: &str = "stopwords.txt";
const MANUFACTURERS_FILE: &str = "manufacturers.txt";
const FILLER_TERMS_FILE: &str = "filler_terms.txt";
const ADMINISTRATION_FORMS_FILE: &str = "administration_forms.txt";
const EXCLUDED_WORDS_FILE: &str = "excluded_words.txt";
const SPLIT_GUARDS_BEFORE_FILE: &str = "split_guards_before.txt";
const SPLIT_GUARDS_AFTER_FILE: &str = "split_guards_after.txt";

impl Vocabularies {
    /// The built-in Dutch questionnaire vocabularies.
    pub fn builtin() -> Self {
        Self {
            stopwords: Vocabulary::new(DUTCH_STOPWORDS),
            manufacturers: Vocabulary::new(MANUFACTURERS),
            filler_terms: Vocabulary::new(FILLER_TERMS),
            administration_forms: Vocabulary::new(ADMINISTRATION_FORMS),
            excluded_words: Vocabulary::new(EXCLUDED_WORDS),
            split_guards: SplitGuards::new(SPLIT_GUARDS_BEFORE, SPLIT_GUARDS_AFTER),
        }
    }

    /// Replaces every list that has a file in `dir`; other lists keep their
    /// current entries.
    pub fn with_overrides_from(mut self, dir: &Path) -> Result<Self> {
        if let Some(lines) = read_list(&dir.join(STOPWORDS_FILE))? {
            self.stopwords = Vocabulary::new(lines);
        }
        if let Some(lines) = read_list(&dir.join(MANUFACTURERS_FILE))? {
            self.manufacturers = Vocabulary::new(lines);
        }
        if let Some(lines) = read_list(&dir.join(FILLER_TERMS_FILE))? {
            self.filler_terms = Vocabulary::new(lines);
        }
        if let Some(lines) = read_list(&dir.join(ADMINISTRATION_FORMS_FILE))? {
            self.administration_forms = Vocabulary::new(lines);
        }
        if let Some(lines) = read_list(&dir.join(EXCLUDED_WORDS_FILE))? {
            self.excluded_words = Vocabulary::new(lines);
        }
        let before = read_list(&dir.join(SPLIT_GUARDS_BEFORE_FILE))?;
        let after = read_list(&dir.join(SPLIT_GUARDS_AFTER_FILE))?;
        if before.is_some() || after.is_some() {
            self.split_guards = SplitGuards::new(
                before.unwrap_or_else(|| self.split_guards.before.clone()),
                after.unwrap_or_else(|| self.split_guards.after.clone()),
            );
        }
        tracing::info!(dir = %dir.display(), "applied vocabulary overrides");
        Ok(self)
    }

    /// Name and size of every list, for listings.
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("stopwords", self.stopwords.len()),
            ("manufacturers", self.manufacturers.len()),
            ("filler terms", self.filler_terms.len()),
            ("administration forms", self.administration_forms.len()),
            ("excluded words", self.excluded_words.len()),
            ("split guards (before)", self.split_guards.before.len()),
            ("split guards (after)", self.split_guards.after.len()),
        ]
    }
}

/// Override directory from the environment, if set.
pub fn vocabulary_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(VOCABULARY_ENV_VAR).map(PathBuf::from)
}

/// Built-in vocabularies, overridden from `dir` or from the environment.
pub fn load_vocabularies(dir: Option<&Path>) -> Result<Vocabularies> {
    let env_dir = vocabulary_dir_from_env();
    match dir.or(env_dir.as_deref()) {
        Some(dir) => Vocabularies::builtin().with_overrides_from(dir),
        None => Ok(Vocabularies::builtin()),
    }
}

/// Reads a list file. Only line endings are stripped so guards can keep
/// trailing spaces. Returns `None` when the file does not exist.
fn read_list(path: &Path) -> Result<Option<Vec<String>>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StandardsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let lines = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .map(str::to_string)
        .collect();
    Ok(Some(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_lookup_is_case_insensitive() {
        let vocabulary = Vocabulary::new(["Tablet", "ZALF ", "tablet"]);
        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.contains("tablet"));
        assert!(vocabulary.contains(" TABLET "));
        assert!(vocabulary.contains("zalf"));
        assert!(!vocabulary.contains("tabletten"));
    }

    #[test]
    fn guards_match_context() {
        let guards = SplitGuards::new(["multi"], ["tab"]);
        assert!(guards.blocks("multi", "vitamine"));
        assert!(guards.blocks("paracetamol", "tablet"));
        assert!(!guards.blocks("paracetamol", "ibuprofen"));
    }

    #[test]
    fn builtin_lists_are_populated() {
        let vocabularies = Vocabularies::builtin();
        assert_eq!(vocabularies.stopwords.len(), 101);
        assert!(vocabularies.manufacturers.contains("sandoz"));
        assert!(vocabularies.filler_terms.contains("plus"));
        assert!(vocabularies.administration_forms.contains("SIROOP"));
        assert!(vocabularies.excluded_words.contains("i.v.m."));
        assert!(vocabularies.split_guards.before.contains(&"multi ".to_string()));
    }
}
