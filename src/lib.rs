//! Canonqc: gene-model canonicality QC and annotation structure statistics.

pub mod error;

pub mod cli;
pub mod fasta;
pub mod gene_info;
pub mod gene_table;
pub mod gff;
pub mod perf;
pub mod report;
pub mod sequence;
pub mod splice;
pub mod stats;
pub mod strand;
