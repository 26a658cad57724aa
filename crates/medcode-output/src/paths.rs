//! Output file naming.

use std::path::{Path, PathBuf};

/// Sub-directory of the extraction output holding the anonymized files.
pub const ANONYMOUS_DIR: &str = "anonymous";

/// `{out}/{column}_column.csv`
pub fn identified_path(out_dir: &Path, column: &str) -> PathBuf {
    out_dir.join(format!("{column}_column.csv"))
}

/// `{out}/anonymous/{column}_column_anonymous.csv`
pub fn anonymized_path(out_dir: &Path, column: &str) -> PathBuf {
    out_dir
        .join(ANONYMOUS_DIR)
        .join(format!("{column}_column_anonymous.csv"))
}

/// `<stem>_long_format.tsv` next to the input.
pub fn long_format_path(input: &Path) -> PathBuf {
    derived_path(input, "long_format")
}

/// `<stem>_wide_format.tsv` next to the input.
pub fn wide_format_path(input: &Path) -> PathBuf {
    derived_path(input, "wide_format")
}

fn derived_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "output".into(), |stem| stem.to_string_lossy());
    input.with_file_name(format!("{stem}_{suffix}.tsv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_names() {
        let out = Path::new("out");
        assert_eq!(
            identified_path(out, "COVID24A2TXT"),
            Path::new("out/COVID24A2TXT_column.csv")
        );
        assert_eq!(
            anonymized_path(out, "COVID24A2TXT"),
            Path::new("out/anonymous/COVID24A2TXT_column_anonymous.csv")
        );
        assert_eq!(
            long_format_path(Path::new("data/sorta_q2.csv")),
            Path::new("data/sorta_q2_long_format.tsv")
        );
        assert_eq!(
            wide_format_path(Path::new("sorta.csv")),
            Path::new("sorta_wide_format.tsv")
        );
    }
}
