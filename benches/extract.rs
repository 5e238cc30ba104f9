use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use elibraryrs::{normalize, Document, Extractor};
use std::fs;
use std::path::Path;

fn load_test_case(name: &str) -> Option<String> {
    let path = Path::new("tests/test-pages").join(name).join("source.html");
    fs::read_to_string(&path).ok()
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let extractor = Extractor::new(None);

    for name in ["meta-journal", "labelled-cell", "emphasis-only", "nothing-found"] {
        let html = match load_test_case(name) {
            Some(h) => h,
            None => continue,
        };

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("html", name), &html, |b, html| {
            b.iter(|| std::hint::black_box(extractor.extract_html(std::hint::black_box(html), "ref")));
        });
    }

    group.finish();
}

fn bench_extract_parsed(c: &mut Criterion) {
    let Some(html) = load_test_case("labelled-cell") else {
        return;
    };
    let doc = Document::parse(&html);
    let extractor = Extractor::new(None);

    c.bench_function("extract/parsed/labelled-cell", |b| {
        b.iter(|| std::hint::black_box(extractor.extract(&doc, "ref")));
    });
}

fn bench_normalize(c: &mut Criterion) {
    let raw = "  Большаков&nbsp;В.И.,\n\t Коваленко   А.А., &amp;nbsp; Петров С.П.  ".repeat(20);

    c.bench_function("normalize", |b| {
        b.iter(|| std::hint::black_box(normalize(std::hint::black_box(&raw))));
    });
}

criterion_group!(benches, bench_extract, bench_extract_parsed, bench_normalize);
criterion_main!(benches);
