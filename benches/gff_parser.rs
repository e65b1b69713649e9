use std::fmt::Write;
use std::io::Cursor;

use criterion::{Criterion, criterion_group, criterion_main};

use canonqc::gene_info;
use canonqc::gff::{self, link};

/// Synthetic annotation: `n` genes, one mRNA each, four CDS rows per mRNA.
fn synthetic_annotation(n: usize) -> String {
    let mut text = String::from("##gff-version 3\n");
    for i in 0..n {
        let base = i as u64 * 10_000 + 1;
        writeln!(text, "Chr1\tt\tgene\t{}\t{}\t.\t+\t.\tID=gene{i}", base, base + 5000).unwrap();
        writeln!(
            text,
            "Chr1\tt\tmRNA\t{}\t{}\t.\t+\t.\tID=mRNA{i};Parent=gene{i}",
            base,
            base + 5000
        )
        .unwrap();
        for j in 0..4u64 {
            let start = base + j * 1200;
            writeln!(
                text,
                "Chr1\tt\tCDS\t{}\t{}\t.\t+\t0\tID=cds{i}_{j};Parent=mRNA{i}",
                start,
                start + 400
            )
            .unwrap();
        }
    }
    text
}

fn bench_parse_and_link(c: &mut Criterion) {
    let text = synthetic_annotation(1000);
    c.bench_function("parse_and_link (1000 genes)", |b| {
        b.iter(|| {
            let mut table = gff::parse_annotation(Cursor::new(text.as_bytes())).unwrap();
            link::link_hierarchy(&mut table);
            assert_eq!(table.len(), 6000);
        });
    });
}

fn bench_gene_info(c: &mut Criterion) {
    let text = synthetic_annotation(1000);
    let mut table = gff::parse_annotation(Cursor::new(text.as_bytes())).unwrap();
    link::link_hierarchy(&mut table);

    c.bench_function("gene_info_from_table (1000 genes)", |b| {
        b.iter(|| {
            let (genes, default_len) = gene_info::gene_info_from_table(&table, 0.7);
            assert_eq!(genes.len(), 1000);
            assert!(default_len > 0.0);
        });
    });
}

criterion_group!(benches, bench_parse_and_link, bench_gene_info);
criterion_main!(benches);
