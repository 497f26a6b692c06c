use criterion::{Criterion, criterion_group, criterion_main};
use ridecompare::prelude::*;
use std::hint::black_box;

fn curated_estimate(estimator: &Estimator) {
    let _ = black_box(estimator.estimate("PESU RR", "Reva University"));
}

fn synthetic_estimate(estimator: &Estimator) {
    let _ = black_box(estimator.estimate("Koramangala 5th Block", "Electronic City"));
}

fn classify_demo(ranker: &Ranker, catalog: &Catalog) {
    let _ = black_box(ranker.classify(catalog));
}

fn search_places(places: &Places) {
    let _ = black_box(places.search("grn park"));
}

fn criterion_benchmark(c: &mut Criterion) {
    let estimator = Estimator::default();
    let ranker = Ranker::default();
    let catalog = Catalog::demo();
    let places = Places::default();

    let mut group = c.benchmark_group("Estimate");
    group.bench_function("Curated route", |b| b.iter(|| curated_estimate(&estimator)));
    group.bench_function("Synthetic route", |b| {
        b.iter(|| synthetic_estimate(&estimator))
    });
    group.finish();

    let mut group = c.benchmark_group("Ranking");
    group.bench_function("Classify demo catalog", |b| {
        b.iter(|| classify_demo(&ranker, &catalog))
    });
    group.bench_function("Place search", |b| b.iter(|| search_places(&places)));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
