//! Benchmarks for the Moodlog analytics engine
//!
//! Run with: cargo bench

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use moodlog::analytics;
use moodlog::storage::{MoodEntry, MoodSeries, MoodStore, StoreConfig};
use tempfile::tempdir;

fn create_test_series(count: usize) -> MoodSeries {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    MoodSeries::from_entries(
        (0..count)
            .map(|i| {
                // Mix of gaps, drift, and journal text of varying length
                let date = start + Duration::days((i + i / 10) as i64);
                let mood = ((i * 7 + i / 30) % 5 + 1) as u8;
                MoodEntry::new(date, mood).journal("a".repeat(i % 200))
            })
            .collect(),
    )
}

fn bench_analytics(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytics");

    for size in [30, 365, 3650] {
        let series = create_test_series(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("trend_{}", size), |b| {
            b.iter(|| analytics::analyze_trend(black_box(&series)))
        });

        group.bench_function(format!("rolling_avg_{}", size), |b| {
            b.iter(|| analytics::rolling_average(black_box(&series), 30))
        });

        group.bench_function(format!("weekly_{}", size), |b| {
            b.iter(|| analytics::analyze_weekly(black_box(&series)))
        });

        group.bench_function(format!("correlations_{}", size), |b| {
            b.iter(|| analytics::analyze_correlations(black_box(&series)))
        });

        group.bench_function(format!("streaks_{}", size), |b| {
            b.iter(|| analytics::analyze_streaks(black_box(&series)))
        });

        group.bench_function(format!("summary_{}", size), |b| {
            b.iter(|| analytics::summarize(black_box(&series)))
        });
    }

    group.finish();
}

fn bench_store(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("store");

    group.bench_function("upsert_single", |b| {
        b.iter_custom(|iters| {
            rt.block_on(async {
                let dir = tempdir().unwrap();
                let store =
                    MoodStore::open(StoreConfig::new(dir.path().join("bench.csv"))).unwrap();

                let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
                let start = std::time::Instant::now();

                for i in 0..iters {
                    let entry = MoodEntry::new(date + Duration::days((i % 3650) as i64), 3)
                        .journal("bench entry");
                    store.upsert(entry).await.unwrap();
                }

                start.elapsed()
            })
        });
    });

    group.bench_function("load_year", |b| {
        b.iter_custom(|iters| {
            rt.block_on(async {
                let dir = tempdir().unwrap();
                let store =
                    MoodStore::open(StoreConfig::new(dir.path().join("bench.csv"))).unwrap();

                let day0 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
                for i in 0..365 {
                    store
                        .upsert(MoodEntry::new(day0 + Duration::days(i), ((i % 5) + 1) as u8))
                        .await
                        .unwrap();
                }

                let start = std::time::Instant::now();

                for _ in 0..iters {
                    let _ = black_box(store.load().await);
                }

                start.elapsed()
            })
        });
    });

    group.finish();
}

criterion_group!(benches, bench_analytics, bench_store);
criterion_main!(benches);
