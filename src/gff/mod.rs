//! GFF-style annotation table parser and gene/mRNA hierarchy linker.

pub mod feature;
pub mod link;
pub mod parser;

use std::io::{BufRead, BufReader, Read};

use flate2::read::GzDecoder;

use crate::error::Error;

use feature::FeatureTable;
use parser::ParsedLine;

/// Parse a gzip-compressed annotation file into a flat feature table.
pub fn parse_annotation_gz<R: Read>(reader: R) -> Result<FeatureTable, Error> {
    parse_annotation(BufReader::new(GzDecoder::new(reader)))
}

/// Parse an annotation table from a buffered reader.
///
/// Malformed rows are fatal: downstream joins assume well-formed
/// identifiers, so nothing is recovered. The returned table is unlinked;
/// see [`link::link_hierarchy`].
pub fn parse_annotation<R: BufRead>(reader: R) -> Result<FeatureTable, Error> {
    let mut features = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line?;
        match parser::parse_line(&line)
            .map_err(|e| Error::Parse(format!("{e} (line {line_num}: {line})")))?
        {
            ParsedLine::Feature(feature) => features.push(*feature),
            ParsedLine::Comment => continue,
        }
    }

    Ok(FeatureTable { features })
}
