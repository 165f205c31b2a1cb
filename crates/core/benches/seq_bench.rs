//! Benchmarks for codon packing and the splice engine.
use std::hint::black_box;
use std::str::FromStr;

use codonseq_core::{Base, Codon, Locator, Seq};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Benchmark codon primitives
fn bench_codon_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("codon_primitives");

    group.bench_function("parse", |b| {
        b.iter(|| black_box(Codon::from_str(black_box("TCA")).unwrap()));
    });

    group.bench_function("squeeze_cycle", |b| {
        let mut codon = Codon::from_str("ACG").unwrap();
        b.iter(|| {
            let out = codon.squeeze_right(black_box(Base::T));
            black_box(codon.squeeze_left(out))
        });
    });

    group.finish();
}

/// Benchmark sequence parsing and rendering
fn bench_seq_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("seq_text");

    for size in [1_000, 10_000, 100_000] {
        let text = "ACGT".repeat(size / 4);
        let seq = Seq::from_str(&text).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("from_str", size), &text, |b, t| {
            b.iter(|| black_box(Seq::from_str(t).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("to_string", size), &seq, |b, s| {
            b.iter(|| black_box(s.to_string()));
        });
    }

    group.finish();
}

/// Benchmark edits at the front of the sequence, the worst case for the
/// squeeze chain.
fn bench_seq_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("seq_edits");

    for size in [1_000, 10_000, 100_000] {
        let seq = Seq::from_str(&"ACGT".repeat(size / 4)).unwrap();
        let front = Locator::new(0, 2);
        let insert = Seq::from_str(&"GATTACA".repeat(20)).unwrap();

        group.bench_with_input(BenchmarkId::new("insert_pop_base", size), &seq, |b, s| {
            let mut s = s.clone();
            b.iter(|| {
                s.insert_base(Base::G, front).unwrap();
                black_box(s.pop_base(front).unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("insert_pop_seq", size), &seq, |b, s| {
            let mut s = s.clone();
            b.iter(|| {
                s.insert_seq(insert.clone(), front).unwrap();
                black_box(s.pop_seq(front, 140).unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("subseq", size), &seq, |b, s| {
            let end = Locator::new(size / 6, 3);
            b.iter(|| black_box(s.subseq(front, end).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codon_primitives, bench_seq_text, bench_seq_edits);
criterion_main!(benches);
