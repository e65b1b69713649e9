//! In-memory genome sequence store keyed by chromosome identifier.

use std::collections::HashMap;
use std::io::{BufRead, Read};

use crate::error::Error;
use crate::fasta;

/// Genome sequence dictionary, loaded once per run and read-only afterward.
pub struct SequenceStore {
    sequences: HashMap<String, Vec<u8>>,
}

impl SequenceStore {
    /// Build from a plain FASTA reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        Self::from_records(fasta::parse_fasta(reader)?)
    }

    /// Build from a gzip-compressed FASTA reader.
    pub fn from_gz<R: Read>(reader: R) -> Result<Self, Error> {
        Self::from_records(fasta::parse_fasta_gz(reader)?)
    }

    fn from_records(records: Vec<(String, Vec<u8>)>) -> Result<Self, Error> {
        let mut sequences = HashMap::with_capacity(records.len());
        for (id, seq) in records {
            if sequences.contains_key(&id) {
                return Err(Error::Validation(format!(
                    "duplicate record ID in FASTA: {id}"
                )));
            }
            sequences.insert(id, seq);
        }
        Ok(Self { sequences })
    }

    /// Get a full chromosome sequence. Lookup failure is a contract error,
    /// never silently defaulted.
    pub fn chromosome(&self, chr: &str) -> Result<&[u8], Error> {
        self.sequences
            .get(chr)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::MissingChromosome(chr.to_string()))
    }

    /// 0-based half-open slice of one chromosome.
    pub fn slice(&self, chr: &str, start: usize, end: usize) -> Result<&[u8], Error> {
        let seq = self.chromosome(chr)?;
        if start > end || end > seq.len() {
            return Err(Error::OutOfRange {
                chr: chr.to_string(),
                start,
                end,
                len: seq.len(),
            });
        }
        Ok(&seq[start..end])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

/// Reverse complement of a nucleotide slice. Non-ACGT bases map to 'N'.
#[must_use]
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'C' => b'G',
        b'G' => b'C',
        b'T' => b'A',
        _ => b'N',
    }
}
