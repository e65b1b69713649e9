use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use canonqc::cli;
use canonqc::gene_table;
use canonqc::report;
use canonqc::sequence::SequenceStore;
use canonqc::splice::{self, Validity};

#[derive(Parser)]
#[command(
    name = "check_models",
    about = "Validate transferred gene models against a genome sequence"
)]
struct Cli {
    /// Path to the genomic FASTA file (.gz accepted)
    #[arg(short = 'f', long = "fasta")]
    fasta: PathBuf,

    /// Path to the semicolon-delimited gene table
    #[arg(short = 't', long = "table")]
    table: PathBuf,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let args = Cli::parse();

    cli::banner("Gene model validation");

    cli::section("Inputs");
    cli::kv("Genome", &args.fasta.display().to_string());
    cli::kv("Gene table", &args.table.display().to_string());

    let store = load_store(&args.fasta)?;
    cli::success(&format!("{} sequences loaded", store.len()));

    let file = File::open(&args.table)
        .with_context(|| format!("failed to open gene table: {}", args.table.display()))?;
    let records = gene_table::parse_gene_table(BufReader::new(file))
        .with_context(|| format!("failed to parse gene table: {}", args.table.display()))?;
    cli::success(&format!("{} gene models parsed", records.len()));
    eprintln!();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", report::HEADER)?;

    let mut num_valid = 0usize;
    for record in &records {
        let chr = record.chromosome_id();
        let validity = splice::classify(&store, &chr, record)
            .with_context(|| format!("failed to validate {}", record.protein_id))?;
        if validity.status() == Validity::Valid {
            num_valid += 1;
        }
        writeln!(out, "{}", report::format_row(&chr, &record.protein_id, &validity))?;
    }
    out.flush()?;

    cli::section("Results");
    cli::kv("Valid", &num_valid.to_string());
    cli::kv("Not valid", &(records.len() - num_valid).to_string());
    if num_valid < records.len() {
        cli::warning("non-canonical models detected; see report for flags");
    }

    cli::print_summary(start);
    Ok(())
}

fn load_store(path: &Path) -> Result<SequenceStore> {
    let file = File::open(path)
        .with_context(|| format!("failed to open FASTA: {}", path.display()))?;
    let store = if path.extension().is_some_and(|ext| ext == "gz") {
        SequenceStore::from_gz(file)
    } else {
        SequenceStore::from_reader(BufReader::new(file))
    }
    .with_context(|| format!("failed to parse FASTA: {}", path.display()))?;
    Ok(store)
}
