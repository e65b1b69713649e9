//! Parser for the semicolon-delimited exon-coordinate gene table.

use std::io::BufRead;

use crate::error::Error;
use crate::strand::Strand;

/// One gene model row: protein id, strand, and exon boundary pairs in
/// genomic order (1-based inclusive coordinates).
#[derive(Debug, Clone)]
pub struct ExonRecord {
    pub protein_id: String,
    pub strand: Strand,
    pub exons: Vec<(u32, u32)>,
}

impl ExonRecord {
    /// Chromosome id derived from the protein id by stripping the first and
    /// last underscore-delimited tokens. Callers guarantee the naming
    /// convention holds.
    #[must_use]
    pub fn chromosome_id(&self) -> String {
        let tokens: Vec<&str> = self.protein_id.split('_').collect();
        if tokens.len() < 3 {
            return String::new();
        }
        tokens[1..tokens.len() - 1].join("_")
    }

    /// First coding coordinate as listed (genomic order, not transcription).
    #[must_use]
    pub fn first_coord(&self) -> u32 {
        self.exons[0].0
    }

    /// Last coding coordinate as listed.
    #[must_use]
    pub fn last_coord(&self) -> u32 {
        self.exons[self.exons.len() - 1].1
    }
}

/// Parse the whole gene table, one [`ExonRecord`] per non-empty line.
pub fn parse_gene_table<R: BufRead>(reader: R) -> Result<Vec<ExonRecord>, Error> {
    let mut records = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_row(&line)
            .map_err(|e| Error::Parse(format!("{e} (line {line_num}: {line})")))?;
        records.push(record);
    }
    Ok(records)
}

/// Parse one `protId; strand; start1; stop1; ...` row.
pub fn parse_row(line: &str) -> Result<ExonRecord, Error> {
    let fields: Vec<&str> = line.split(';').map(str::trim).collect();
    if fields.len() < 4 {
        return Err(Error::Parse(format!(
            "gene row has {} fields, expected at least 4",
            fields.len()
        )));
    }

    let protein_id = fields[0].to_string();
    if protein_id.is_empty() {
        return Err(Error::Parse("gene row has empty protein id".to_string()));
    }
    let strand = Strand::from_table(fields[1])?;

    let coords = &fields[2..];
    if coords.len() % 2 != 0 {
        return Err(Error::Parse(format!(
            "gene row has {} coordinates, expected an even count",
            coords.len()
        )));
    }

    let mut exons = Vec::with_capacity(coords.len() / 2);
    for pair in coords.chunks_exact(2) {
        let start = parse_coord(pair[0])?;
        let stop = parse_coord(pair[1])?;
        exons.push((start, stop));
    }

    Ok(ExonRecord {
        protein_id,
        strand,
        exons,
    })
}

fn parse_coord(field: &str) -> Result<u32, Error> {
    let coord: u32 = field
        .parse()
        .map_err(|e| Error::Parse(format!("invalid coordinate '{field}': {e}")))?;
    if coord == 0 {
        return Err(Error::Parse(
            "coordinate 0 outside 1-based convention".to_string(),
        ));
    }
    Ok(coord)
}
