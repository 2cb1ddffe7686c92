//! Criterion benchmarks for serverless_log

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use serverless_log::prelude::*;

fn discarding_output(level: LogLevel) -> Output {
    Output::builder()
        .level(level)
        .colors(false)
        .sink(FnSink::new(|_: &str| Ok(())))
        .build()
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let output = discarding_output(LogLevel::Notice);
    let log = output.log().get("bench");

    group.bench_function("filtered_debug", |b| {
        b.iter(|| {
            log.debug(black_box("Debug message"));
        });
    });

    group.bench_function("emitted_notice", |b| {
        b.iter(|| {
            log.notice(black_box("Notice message"));
        });
    });

    group.bench_function("emitted_with_meta", |b| {
        let meta = Meta::new().with_field("stage", "dev").with_field("attempt", 1);
        b.iter(|| {
            log.log_with_meta(LogLevel::Warn, black_box("Warn message"), &meta);
        });
    });

    group.finish();
}

// ============================================================================
// Cache Lookup Benchmarks
// ============================================================================

fn bench_cache_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_lookups");
    group.throughput(Throughput::Elements(1));

    let output = discarding_output(LogLevel::Notice);

    group.bench_function("namespace_get", |b| {
        b.iter(|| black_box(output.log().get(black_box("deploy"))));
    });

    group.bench_function("plugin_writers", |b| {
        b.iter(|| black_box(output.get_plugin_writers(black_box("plugin"))));
    });

    group.bench_function("progress_get", |b| {
        b.iter(|| black_box(output.progress().get(black_box("step"))));
    });

    group.finish();
}

// ============================================================================
// Legacy Format Benchmarks
// ============================================================================

fn bench_legacy(c: &mut Criterion) {
    let mut group = c.benchmark_group("legacy");
    group.throughput(Throughput::Elements(1));

    let output = discarding_output(LogLevel::Notice);
    let options = LegacyOptions::new().bold(true).underline(true);

    group.bench_function("default_options", |b| {
        b.iter(|| output.legacy().log(black_box("basic message")));
    });

    group.bench_function("styled", |b| {
        b.iter(|| output.legacy_log(black_box("basic message"), &options));
    });

    group.finish();
}

criterion_group!(benches, bench_level_filtering, bench_cache_lookups, bench_legacy);
criterion_main!(benches);
