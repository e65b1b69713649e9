use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use canonqc::cli;
use canonqc::gene_info;

#[derive(Parser)]
#[command(
    name = "gene_stats",
    about = "Derive per-gene structure statistics from an annotation file"
)]
struct Cli {
    /// Path to the GFF-style annotation file (.gz accepted)
    annotation: PathBuf,

    /// Quantile of the longest-intron distribution used as the default
    /// intron length for downstream locus selection
    #[arg(short = 'q', long = "quantile", default_value_t = 0.7)]
    quantile: f64,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let args = Cli::parse();

    cli::banner("Gene structure statistics");

    cli::section("Inputs");
    cli::kv("Annotation", &args.annotation.display().to_string());
    cli::kv("Quantile", &args.quantile.to_string());

    let (genes, default_intron_length) = gene_info::build_gene_info(&args.annotation, args.quantile)
        .with_context(|| format!("failed to process annotation: {}", args.annotation.display()))?;
    cli::success(&format!("{} genes with coding regions", genes.len()));
    eprintln!();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "gene_id\tchr\tcoding_start\tcoding_end\tstrand\tcoding_length\tlongest_intron"
    )?;

    let mut gene_ids: Vec<&String> = genes.keys().collect();
    gene_ids.sort();
    for gene_id in gene_ids {
        let gene = &genes[gene_id];
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            gene.gene_id,
            gene.chr_id,
            gene.coding_start,
            gene.coding_end,
            gene.strand,
            gene.coding_region_length(),
            gene.longest_intron
        )?;
    }
    out.flush()?;

    cli::section("Summary");
    cli::kv("Genes", &genes.len().to_string());
    cli::kv(
        "Default intron length",
        &format!("{default_intron_length:.1}"),
    );

    cli::print_summary(start);
    Ok(())
}
