//! Tab-separated validation report formatting.

use crate::splice::GeneValidity;

/// Report header. Column names are fixed; downstream pipeline scripts key
/// on them.
pub const HEADER: &str = "Chr\tProtID\tPBstart\tPBstop\tOF\tPBintron\tvalidity";

/// Format one report row. Flags render as `True`/`False` so existing
/// consumers of the report keep parsing unchanged.
#[must_use]
pub fn format_row(chr: &str, protein_id: &str, validity: &GeneValidity) -> String {
    format!(
        "{chr}\t{protein_id}\t{}\t{}\t{}\t{}\t{}",
        flag(validity.start_invalid),
        flag(validity.stop_invalid),
        flag(validity.frameshift),
        flag(validity.non_canonical_intron),
        validity.status()
    )
}

fn flag(set: bool) -> &'static str {
    if set { "True" } else { "False" }
}
