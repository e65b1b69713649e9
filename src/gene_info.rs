//! Per-gene structural summaries derived from an annotation table.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Error;
use crate::gff::{self, link};
use crate::gff::feature::{Feature, FeatureKind, FeatureTable};
use crate::stats;
use crate::strand::Strand;

/// Structural summary for one gene. Built once per annotation parse and
/// never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneInfo {
    pub gene_id: String,
    pub chr_id: String,
    pub coding_start: u64,
    pub coding_end: u64,
    /// +1 forward, -1 reverse.
    pub strand: i8,
    /// 0 for single-exon genes or genes with no positive intron.
    pub longest_intron: u64,
}

impl GeneInfo {
    #[must_use]
    pub fn coding_region_length(&self) -> u64 {
        self.coding_end - self.coding_start + 1
    }
}

/// Min/max CDS span for one gene with its first-seen strand and seqid.
#[derive(Debug, Clone)]
pub struct CodingRegion {
    pub coding_start: u64,
    pub coding_end: u64,
    pub strand: Strand,
    pub chr_id: String,
}

/// Group CDS rows by gene: min(start), max(end), first strand, first seqid.
/// "First" is input row order; genes without a resolved id are skipped.
#[must_use]
pub fn coding_regions(table: &FeatureTable) -> HashMap<String, CodingRegion> {
    let mut regions: HashMap<String, CodingRegion> = HashMap::new();

    for feature in &table.features {
        if feature.kind != FeatureKind::Cds {
            continue;
        }
        let Some(gene) = &feature.gene else { continue };

        match regions.get_mut(gene) {
            Some(region) => {
                region.coding_start = region.coding_start.min(feature.start);
                region.coding_end = region.coding_end.max(feature.end);
            }
            None => {
                regions.insert(
                    gene.clone(),
                    CodingRegion {
                        coding_start: feature.start,
                        coding_end: feature.end,
                        strand: feature.strand,
                        chr_id: feature.seqid.clone(),
                    },
                );
            }
        }
    }

    regions
}

/// Longest intron per gene, aggregated across all of the gene's mRNAs.
///
/// CDS rows are put in (mRNA, start) order with a stable sort, so ties keep
/// input row order. Within an mRNA run, `intron = max(0, start - prev_end - 1)`;
/// the first CDS of each mRNA contributes 0. Every distinct gene id seen
/// anywhere in the table appears in the result, defaulting to 0.
#[must_use]
pub fn longest_intron(table: &FeatureTable) -> HashMap<String, u64> {
    let mut longest: HashMap<String, u64> = HashMap::new();
    for feature in &table.features {
        if let Some(gene) = &feature.gene {
            longest.entry(gene.clone()).or_insert(0);
        }
    }

    let mut cds: Vec<&Feature> = table
        .features
        .iter()
        .filter(|f| f.kind == FeatureKind::Cds)
        .collect();
    cds.sort_by(|a, b| a.mrna.cmp(&b.mrna).then(a.start.cmp(&b.start)));

    let mut prev: Option<(Option<&str>, u64)> = None;
    for feature in cds {
        let intron = match prev {
            Some((prev_mrna, prev_end)) if feature.mrna.as_deref() == prev_mrna => {
                feature.start.saturating_sub(prev_end + 1)
            }
            _ => 0,
        };
        if intron > 0 {
            if let Some(gene) = &feature.gene {
                let entry = longest.entry(gene.clone()).or_insert(0);
                if intron > *entry {
                    *entry = intron;
                }
            }
        }
        prev = Some((feature.mrna.as_deref(), feature.end));
    }

    longest
}

/// Parse an annotation file and derive one [`GeneInfo`] per gene with at
/// least one CDS, plus the default intron length: the given quantile of the
/// longest-intron distribution over all genes.
pub fn build_gene_info<P: AsRef<Path>>(
    path: P,
    quantile: f64,
) -> Result<(HashMap<String, GeneInfo>, f64), Error> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut table = if path.extension().is_some_and(|ext| ext == "gz") {
        gff::parse_annotation_gz(file)?
    } else {
        gff::parse_annotation(BufReader::new(file))?
    };
    link::link_hierarchy(&mut table);
    Ok(gene_info_from_table(&table, quantile))
}

/// Join coding-region and longest-intron statistics into the final mapping.
/// The intron side fills 0 when missing; genes without CDS stay out of the
/// mapping but still weigh into the quantile through the intron distribution.
#[must_use]
pub fn gene_info_from_table(
    table: &FeatureTable,
    quantile: f64,
) -> (HashMap<String, GeneInfo>, f64) {
    let regions = coding_regions(table);
    let introns = longest_intron(table);

    let mut genes = HashMap::with_capacity(regions.len());
    for (gene_id, region) in regions {
        let longest = introns.get(&gene_id).copied().unwrap_or(0);
        genes.insert(
            gene_id.clone(),
            GeneInfo {
                gene_id,
                chr_id: region.chr_id,
                coding_start: region.coding_start,
                coding_end: region.coding_end,
                strand: region.strand.sign(),
                longest_intron: longest,
            },
        );
    }

    let distribution: Vec<f64> = introns.values().map(|&v| v as f64).collect();
    let default_intron_length = stats::quantile(&distribution, quantile);

    (genes, default_intron_length)
}
