//! Parser for FASTA sequence files.

use std::io::{BufRead, BufReader, Read};

use flate2::read::GzDecoder;

use crate::error::Error;

/// Reads gzip-compressed FASTA and yields (identifier, sequence) pairs.
pub fn parse_fasta_gz<R: Read>(reader: R) -> Result<Vec<(String, Vec<u8>)>, Error> {
    parse_fasta(BufReader::new(GzDecoder::new(reader)))
}

/// Reads FASTA from a buffered reader and yields (identifier, sequence) pairs.
///
/// The identifier is the first whitespace-delimited token after `>`.
/// Sequence bases are uppercased. Lines before the first header are ignored.
pub fn parse_fasta<R: BufRead>(reader: R) -> Result<Vec<(String, Vec<u8>)>, Error> {
    let mut records: Vec<(String, Vec<u8>)> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if let Some(header) = line.strip_prefix('>') {
            let id = header.split_whitespace().next().unwrap_or("");
            if id.is_empty() {
                return Err(Error::Parse(format!("empty FASTA header: >{header}")));
            }
            records.push((id.to_string(), Vec::new()));
        } else if let Some((_, seq)) = records.last_mut() {
            let trimmed = line.trim();
            let at = seq.len();
            seq.extend_from_slice(trimmed.as_bytes());
            seq[at..].make_ascii_uppercase();
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::{Cursor, Write};

    fn make_gz(content: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
        encoder.write_all(content).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn parse_single_record() {
        let fasta = b">Chr1 Oryza sativa chromosome 1\nACGTacgt\nNNNN\n";
        let records = parse_fasta(Cursor::new(&fasta[..])).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "Chr1");
        assert_eq!(records[0].1, b"ACGTACGTNNNN");
    }

    #[test]
    fn parse_multiple_records() {
        let fasta = b">chr1\nACGT\n>chr2\nTTTT\nAAAA\n>chr3\nGGG\n";
        let records = parse_fasta(Cursor::new(&fasta[..])).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], ("chr1".to_string(), b"ACGT".to_vec()));
        assert_eq!(records[1], ("chr2".to_string(), b"TTTTAAAA".to_vec()));
        assert_eq!(records[2], ("chr3".to_string(), b"GGG".to_vec()));
    }

    #[test]
    fn gz_round_trip() {
        let gz = make_gz(b">chr1 description\nacgtACGT\n");
        let records = parse_fasta_gz(Cursor::new(gz)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "chr1");
        assert_eq!(records[0].1, b"ACGTACGT");
    }

    #[test]
    fn empty_header_is_error() {
        let fasta = b">\nACGT\n";
        assert!(parse_fasta(Cursor::new(&fasta[..])).is_err());
    }

    #[test]
    fn bases_before_first_header_ignored() {
        let fasta = b"ACGT\n>chr1\nTTTT\n";
        let records = parse_fasta(Cursor::new(&fasta[..])).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].1, b"TTTT");
    }
}
