use anomaly_insight::explainability::{rank_features, FeatureImportance, SortMode};
use anomaly_insight::metrics::ConfusionMatrix;
use anomaly_insight::training::{TrainingConfig, TrainingSimulator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_metric_derivation(c: &mut Criterion) {
    let matrix = ConfusionMatrix::from_rows([[142, 8], [10, 40]]);

    c.bench_function("confusion_metrics", |b| {
        b.iter(|| black_box(matrix).metrics().unwrap())
    });
}

fn bench_feature_ranking(c: &mut Criterion) {
    let entries: Vec<FeatureImportance> = (0..100)
        .map(|i| FeatureImportance::new(format!("feature_{i}"), (i % 37) as f64 / 37.0))
        .collect();

    let mut group = c.benchmark_group("rank_features");
    group.bench_function("by_importance", |b| {
        b.iter(|| rank_features(black_box(&entries), SortMode::ByImportance))
    });
    group.bench_function("alphabetical", |b| {
        b.iter(|| rank_features(black_box(&entries), SortMode::Alphabetical))
    });
    group.finish();
}

fn bench_synthesis(c: &mut Criterion) {
    let simulator = TrainingSimulator::new();
    let config = TrainingConfig::default();

    c.bench_function("synthesize_result", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| simulator.synthesize(black_box(&config), &mut rng))
    });
}

criterion_group!(
    benches,
    bench_metric_derivation,
    bench_feature_ranking,
    bench_synthesis
);
criterion_main!(benches);
