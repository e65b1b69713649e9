//! Annotation line and attribute parsing.

use crate::error::Error;
use crate::strand::Strand;

use super::feature::{Feature, FeatureKind};

/// Result of parsing a single annotation line.
pub enum ParsedLine {
    Feature(Box<Feature>),
    Comment,
}

/// Parse a single 9-column tab-separated annotation line.
pub fn parse_line(line: &str) -> Result<ParsedLine, Error> {
    if line.starts_with('#') {
        return Ok(ParsedLine::Comment);
    }
    let line = line.trim_end();
    if line.is_empty() {
        return Ok(ParsedLine::Comment);
    }

    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() != 9 {
        return Err(Error::Parse(format!(
            "annotation line has {} columns, expected 9",
            columns.len()
        )));
    }

    let start: u64 = columns[3]
        .parse()
        .map_err(|e| Error::Parse(format!("invalid start '{}': {e}", columns[3])))?;
    let end: u64 = columns[4]
        .parse()
        .map_err(|e| Error::Parse(format!("invalid end '{}': {e}", columns[4])))?;

    Ok(ParsedLine::Feature(Box::new(Feature {
        seqid: columns[0].to_string(),
        kind: FeatureKind::from_column(columns[2]),
        start,
        end,
        strand: Strand::from_gff(columns[6]),
        id: attribute_value(columns[8], "ID").map(str::to_string),
        parent: attribute_value(columns[8], "Parent").map(str::to_string),
        mrna: None,
        gene: None,
    })))
}

/// Extract the value of a `key=value` pair from a `;`-delimited attribute
/// column. First match wins; a missing key yields `None`, not an error.
#[must_use]
pub fn attribute_value<'a>(attributes: &'a str, key: &str) -> Option<&'a str> {
    for pair in attributes.split(';') {
        let pair = pair.trim();
        let Some(eq_pos) = pair.find('=') else {
            continue;
        };
        if &pair[..eq_pos] == key {
            return Some(&pair[eq_pos + 1..]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cds_line() {
        let line = "Chr3\ttransfer\tCDS\t250\t900\t.\t-\t0\tID=cds7;Parent=mRNA3";
        match parse_line(line).unwrap() {
            ParsedLine::Feature(f) => {
                assert_eq!(f.seqid, "Chr3");
                assert_eq!(f.kind, FeatureKind::Cds);
                assert_eq!(f.start, 250);
                assert_eq!(f.end, 900);
                assert_eq!(f.strand, Strand::Reverse);
                assert_eq!(f.id.as_deref(), Some("cds7"));
                assert_eq!(f.parent.as_deref(), Some("mRNA3"));
                assert!(f.mrna.is_none() && f.gene.is_none());
            }
            ParsedLine::Comment => panic!("expected Feature"),
        }
    }

    #[test]
    fn comments_and_blanks_skipped() {
        assert!(matches!(
            parse_line("# whole-line comment").unwrap(),
            ParsedLine::Comment
        ));
        assert!(matches!(
            parse_line("##gff-version 3").unwrap(),
            ParsedLine::Comment
        ));
        assert!(matches!(parse_line("").unwrap(), ParsedLine::Comment));
    }

    #[test]
    fn wrong_column_count_is_error() {
        assert!(parse_line("Chr1\tgene\t100\t200").is_err());
    }

    #[test]
    fn non_numeric_coordinate_is_error() {
        let line = "Chr1\ttransfer\tgene\tstart\t200\t.\t+\t.\tID=g1";
        assert!(parse_line(line).is_err());
    }

    #[test]
    fn missing_attributes_yield_none() {
        let line = "Chr1\ttransfer\texon\t100\t200\t.\t+\t.\tnote=no ids here";
        match parse_line(line).unwrap() {
            ParsedLine::Feature(f) => {
                assert!(f.id.is_none());
                assert!(f.parent.is_none());
            }
            ParsedLine::Comment => panic!("expected Feature"),
        }
    }

    #[test]
    fn attribute_first_match_wins() {
        let attrs = "ID=first;note=x;ID=second";
        assert_eq!(attribute_value(attrs, "ID"), Some("first"));
        assert_eq!(attribute_value(attrs, "note"), Some("x"));
        assert_eq!(attribute_value(attrs, "Parent"), None);
    }

    #[test]
    fn attribute_value_with_equals_inside() {
        assert_eq!(
            attribute_value("note=a=b;ID=g1", "note"),
            Some("a=b")
        );
    }
}
