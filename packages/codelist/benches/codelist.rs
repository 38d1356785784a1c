//! Benchmarks for parsing, matching and compacting code lists.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hint::black_box;

use codelist::{CodeList, compact};
use criterion::{Criterion, criterion_group, criterion_main};

const LONG_LIST: &str = "
D1..D5 D7..D9 D54 D55 D60 D61 D63 D76..D78 D82..D85 D87 D89..D93 D99 D100 D102 D104 D107 D109 D112
D116 D118 D120 D122..D131 D135 D137 D139 D140 D142 D145 D146 D148 D153 D154 D157 D159 D165 D168
D172 D197 D198 D225..D230 D232..D235 D237..D247 D249..D253 D259 D650..D653 D656 D658 D660..D663 D670";

fn parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("codelist_parse");

    group.bench_function("long_list", |b| {
        b.iter(|| CodeList::parse(black_box(LONG_LIST)));
    });

    group.finish();
}

fn includes(c: &mut Criterion) {
    let mut group = c.benchmark_group("codelist_includes");

    let list = CodeList::parse(LONG_LIST);
    let with_exclusions = list.except(&CodeList::parse("D3, D125..D127, D651"));

    group.bench_function("literal_hit", |b| {
        b.iter(|| list.includes(black_box("D670")));
    });

    group.bench_function("range_hit", |b| {
        b.iter(|| list.includes(black_box("D662")));
    });

    group.bench_function("miss", |b| {
        b.iter(|| list.includes(black_box("E001")));
    });

    group.bench_function("miss_with_exclusions", |b| {
        b.iter(|| with_exclusions.includes(black_box("E001")));
    });

    group.finish();
}

fn compaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("codelist_compact");

    let codes = (100..1100)
        .filter(|n| n % 7 != 0)
        .map(|n| format!("A{n}"))
        .collect::<Vec<_>>();

    group.bench_function("one_thousand_codes", |b| {
        b.iter(|| compact(black_box(3), black_box(&codes)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, parse, includes, compaction);
criterion_main!(benches);
