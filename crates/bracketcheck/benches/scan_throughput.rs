//! Benchmark – `bracketcheck::scan` over lines and over a whole string
#![allow(missing_docs)]

use std::hint::black_box;

use bracketcheck::{scan, scan_str};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Roughly C-shaped source: nested blocks, calls, literals and both comment
/// styles, repeated to the requested number of lines.
fn synthetic_source(lines: usize) -> String {
    const SNIPPET: &[&str] = &[
        "static int table[4] = {1, 2, 3, 4};",
        "/* helper: sum(a[i]) for i in [0, n) */",
        "int sum(const int *a, int n) {",
        "    int total = 0; // running (total)",
        "    for (int i = 0; i < n; i++) {",
        "        if (a[i] == '(' || a[i] == '}') { puts(\"{[(\"); }",
        "        total += a[i];",
        "    }",
        "    return total;",
        "}",
    ];
    SNIPPET
        .iter()
        .cycle()
        .take(lines)
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    for lines in [100, 10_000] {
        let text = synthetic_source(lines);
        let split: Vec<&str> = text.split('\n').collect();
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("lines", lines), &split, |b, split| {
            b.iter(|| scan(black_box(split)));
        });
        group.bench_with_input(BenchmarkId::new("str", lines), &text, |b, text| {
            b.iter(|| scan_str(black_box(text)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
