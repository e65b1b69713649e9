//! Strand orientation for genomic features.

use std::fmt;

use crate::error::Error;

/// Strand orientation of a genomic feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// Parse from an annotation table column 7. "-" is reverse; everything
    /// else ("+", ".") is forward.
    #[must_use]
    pub fn from_gff(s: &str) -> Self {
        if s == "-" { Self::Reverse } else { Self::Forward }
    }

    /// Strict parse for gene-table rows. The splice validator branches on
    /// strand, so anything outside {+,-} is rejected.
    pub fn from_table(s: &str) -> Result<Self, Error> {
        match s {
            "+" => Ok(Self::Forward),
            "-" => Ok(Self::Reverse),
            _ => Err(Error::Parse(format!("invalid strand token: '{s}'"))),
        }
    }

    #[must_use]
    pub fn is_reverse(self) -> bool {
        self == Self::Reverse
    }

    /// Numeric sign used by gene summaries: +1 forward, -1 reverse.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_gff() {
        assert_eq!(Strand::from_gff("+"), Strand::Forward);
        assert_eq!(Strand::from_gff("-"), Strand::Reverse);
        assert_eq!(Strand::from_gff("."), Strand::Forward);
    }

    #[test]
    fn from_table_strict() {
        assert_eq!(Strand::from_table("+").unwrap(), Strand::Forward);
        assert_eq!(Strand::from_table("-").unwrap(), Strand::Reverse);
        assert!(Strand::from_table(".").is_err());
        assert!(Strand::from_table("").is_err());
    }

    #[test]
    fn sign() {
        assert_eq!(Strand::Forward.sign(), 1);
        assert_eq!(Strand::Reverse.sign(), -1);
    }

    #[test]
    fn is_reverse() {
        assert!(!Strand::Forward.is_reverse());
        assert!(Strand::Reverse.is_reverse());
    }
}
