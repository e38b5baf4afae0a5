use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use pulldown_cmark::Parser;
use styledown_engine::{FontSpec, convert, parsing::lines::classify_lines};
mod common;

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    group.sample_size(20);

    let content = common::generate_markdown_content(100);
    let font = FontSpec::new("Georgia", 12.0);

    group.bench_function("convert", |b| {
        b.iter(|| {
            let doc = convert(black_box(&content), &font).unwrap();
            black_box(doc);
        });
    });

    group.bench_function("classify_lines", |b| {
        b.iter(|| {
            let n = classify_lines(black_box(&content)).count();
            black_box(n);
        });
    });

    // Baseline: a full CommonMark parser over the same input.
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let events: Vec<_> = Parser::new(black_box(&content)).collect();
            black_box(events);
        });
    });

    group.finish();
}

fn bench_adversarial(c: &mut Criterion) {
    let mut group = c.benchmark_group("adversarial");
    group.sample_size(10);

    let content = common::generate_adversarial_content(30, 10_000);
    let font = FontSpec::new("Georgia", 12.0);

    group.bench_function("unmatched_delimiters", |b| {
        b.iter(|| {
            let doc = convert(black_box(&content), &font).unwrap();
            black_box(doc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_conversion, bench_adversarial);
criterion_main!(benches);
