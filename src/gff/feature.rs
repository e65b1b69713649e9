//! Annotation feature data model.

use crate::strand::Strand;

/// Feature type from annotation column 3. Types outside the
/// gene/mRNA/CDS hierarchy pass through as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Gene,
    MRna,
    Cds,
    Other,
}

impl FeatureKind {
    #[must_use]
    pub fn from_column(s: &str) -> Self {
        match s {
            "gene" => Self::Gene,
            "mRNA" => Self::MRna,
            "CDS" => Self::Cds,
            _ => Self::Other,
        }
    }
}

/// One parsed annotation row, plus the owning mRNA/gene identifiers filled
/// in by [`super::link::link_hierarchy`].
#[derive(Debug, Clone)]
pub struct Feature {
    pub seqid: String,
    pub kind: FeatureKind,
    /// 1-based inclusive.
    pub start: u64,
    /// 1-based inclusive.
    pub end: u64,
    pub strand: Strand,
    pub id: Option<String>,
    pub parent: Option<String>,
    /// Owning mRNA id (self for mRNA features). `None` when unresolvable.
    pub mrna: Option<String>,
    /// Owning gene id (self for gene features). `None` when unresolvable.
    pub gene: Option<String>,
}

/// Flat table of annotation features in input row order.
#[derive(Debug, Default)]
pub struct FeatureTable {
    pub features: Vec<Feature>,
}

impl FeatureTable {
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_column() {
        assert_eq!(FeatureKind::from_column("gene"), FeatureKind::Gene);
        assert_eq!(FeatureKind::from_column("mRNA"), FeatureKind::MRna);
        assert_eq!(FeatureKind::from_column("CDS"), FeatureKind::Cds);
        assert_eq!(FeatureKind::from_column("exon"), FeatureKind::Other);
        assert_eq!(FeatureKind::from_column("five_prime_UTR"), FeatureKind::Other);
    }
}
