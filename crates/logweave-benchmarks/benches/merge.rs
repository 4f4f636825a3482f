//! Configuration merge performance benchmarks
//!
//! Measures folding N sources into one composite, and the tree fold alone
//! at growing element counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use logweave_benchmarks::{criterion_config, synthetic_tree};
use logweave_config::{
    CompositeConfiguration, DefaultMergeStrategy, DefaultPluginResolver, MergeStrategy,
    PluginResolver, Source,
};
use std::sync::Arc;

/// Benchmark building a composite from a growing number of sources
fn bench_composite_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite_build");
    group.measurement_time(std::time::Duration::from_secs(5));

    let resolver: Arc<dyn PluginResolver> = Arc::new(DefaultPluginResolver::new());
    for source_count in [2, 8, 32].iter() {
        group.throughput(Throughput::Elements(*source_count as u64));

        let sources: Vec<Source> = (0..*source_count)
            .map(|tag| Source::new(synthetic_tree(tag, 10, 50)))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("sources", source_count),
            &sources,
            |b, sources| {
                b.iter(|| {
                    black_box(
                        CompositeConfiguration::build(sources.clone(), Arc::clone(&resolver))
                            .unwrap(),
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a single tree fold as logger counts grow
fn bench_tree_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_fold");
    group.measurement_time(std::time::Duration::from_secs(5));

    let resolver = DefaultPluginResolver::new();
    let strategy = DefaultMergeStrategy;
    for logger_count in [10, 100, 500].iter() {
        group.throughput(Throughput::Elements(*logger_count as u64));

        let mut target = synthetic_tree(0, 10, *logger_count);
        let mut source = synthetic_tree(1, 10, *logger_count);
        resolver.categorize(&mut target);
        resolver.categorize(&mut source);

        group.bench_with_input(
            BenchmarkId::new("loggers", logger_count),
            &(target, source),
            |b, (target, source)| {
                b.iter(|| {
                    let mut merged = target.clone();
                    strategy.merge_configurations(&mut merged, source.clone(), &resolver);
                    black_box(merged)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the root-attribute fold on its own
fn bench_root_fold(c: &mut Criterion) {
    let strategy = DefaultMergeStrategy;
    let trees: Vec<_> = (0..32).map(|tag| synthetic_tree(tag, 1, 1)).collect();

    c.bench_function("root_fold_32_sources", |b| {
        b.iter(|| {
            let mut root = trees[0].clone();
            for tree in &trees {
                strategy.merge_root_properties(&mut root, tree);
            }
            black_box(root)
        });
    });
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_composite_build, bench_tree_fold, bench_root_fold
}
criterion_main!(benches);
