//! Splice-site and start/stop-codon canonicality checks for gene models.

use std::fmt;

use crate::error::Error;
use crate::gene_table::ExonRecord;
use crate::sequence::{SequenceStore, reverse_complement};
use crate::strand::Strand;

const STOP_CODONS: [&[u8]; 3] = [b"TGA", b"TAG", b"TAA"];

/// Gaps of this size or smaller are treated as small indels or sequencing
/// noise, not introns, and their motifs are never checked.
const MAX_NOISE_GAP: u32 = 10;

/// Overall classification of one gene model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    NotValid,
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "Valid"),
            Self::NotValid => write!(f, "notValid"),
        }
    }
}

/// Validation flags for one gene model, constructed once by [`classify`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneValidity {
    pub start_invalid: bool,
    pub stop_invalid: bool,
    pub frameshift: bool,
    pub non_canonical_intron: bool,
}

impl GeneValidity {
    /// `NotValid` iff any flag is set.
    #[must_use]
    pub fn status(&self) -> Validity {
        if self.start_invalid || self.stop_invalid || self.frameshift || self.non_canonical_intron
        {
            Validity::NotValid
        } else {
            Validity::Valid
        }
    }
}

/// Classify one gene model against the genome sequence.
///
/// The record's chromosome must be present in the store and all coordinates
/// must resolve to in-range slices; either failure is fatal for the record.
pub fn classify(
    store: &SequenceStore,
    chr: &str,
    record: &ExonRecord,
) -> Result<GeneValidity, Error> {
    let mut validity = GeneValidity::default();

    let lo = record.first_coord() as usize;
    let hi = record.last_coord() as usize;
    if hi < 3 {
        return Err(Error::Validation(format!(
            "gene {} ends before position 3",
            record.protein_id
        )));
    }

    // Start/stop codons. On the reverse strand the codons are read via
    // reverse-complement from the opposite end of the coordinate range.
    if record.strand.is_reverse() {
        let start = reverse_complement(store.slice(chr, hi - 3, hi)?);
        let stop = reverse_complement(store.slice(chr, lo - 1, lo + 2)?);
        validity.start_invalid = !is_start(&start);
        validity.stop_invalid = !is_stop(&stop);
    } else {
        validity.start_invalid = !is_start(store.slice(chr, lo - 1, lo + 2)?);
        validity.stop_invalid = !is_stop(store.slice(chr, hi - 3, hi)?);
    }

    // Frameshift and intron checks over consecutive exon boundary pairs.
    for pair in record.exons.windows(2) {
        let exon_stop = pair[0].1;
        let next_start = pair[1].0;
        if next_start < exon_stop {
            validity.frameshift = true;
        } else if next_start > exon_stop + MAX_NOISE_GAP
            && !is_canonical_intron(store, chr, record.strand, exon_stop, next_start)?
        {
            validity.non_canonical_intron = true;
        }
    }

    Ok(validity)
}

fn is_start(codon: &[u8]) -> bool {
    codon == b"ATG"
}

fn is_stop(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|&stop| stop == codon)
}

/// Check the donor/acceptor motifs of the gap between `exon_stop` and
/// `next_start` (both 1-based inclusive exon boundaries).
///
/// Both windows are read from the raw forward strand. On the reverse strand
/// they are compared against the complement motif literals ("AC"/"CG" donor,
/// "CT" acceptor) without reverse-complementing the windows themselves; only
/// start/stop codons get reverse-complemented. This asymmetry is kept
/// deliberately since changing it would silently flip validation outcomes.
fn is_canonical_intron(
    store: &SequenceStore,
    chr: &str,
    strand: Strand,
    exon_stop: u32,
    next_start: u32,
) -> Result<bool, Error> {
    let stop = exon_stop as usize;
    let next = next_start as usize;

    // Two bases just after the current exon, two bases just before the next.
    let after_stop = store.slice(chr, stop, stop + 2)?;
    let before_next = store.slice(chr, next - 3, next - 1)?;

    Ok(match strand {
        Strand::Forward => {
            (after_stop == b"GT" || after_stop == b"GC") && before_next == b"AG"
        }
        Strand::Reverse => {
            (before_next == b"AC" || before_next == b"CG") && after_stop == b"CT"
        }
    })
}
