//! Makai Word Counter Benchmarks
//!
//! This module contains benchmarks for the Helu Counting Trie. The
//! benchmarks are implemented using the Criterion framework, which provides
//! statistical analysis and performance regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use std::time::Duration;

use makai_wc_lib::data_structures::HeluTrie;

/// Deterministic word list with heavy prefix sharing, so splits and
/// end-marker updates are both exercised.
fn words(count: usize) -> Vec<String> {
    let stems = ["ka", "kai", "kona", "mau", "mauka", "makai", "pali", "pa"];
    (0..count)
        .map(|i| format!("{}{}", stems[i % stems.len()], i % 97))
        .collect()
}

/// Benchmark the Helu Counting Trie
fn bench_helu_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("helu_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));
    group.sample_size(100);

    // Insert performance with different input sizes
    for size in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), size, |b, &size| {
            let input = words(size);
            b.iter(|| {
                let mut trie = HeluTrie::new();
                for word in &input {
                    trie.insert(black_box(word));
                }
                trie
            });
        });
    }

    // Enumeration performance over a populated trie
    for size in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("enumerate", size), size, |b, &size| {
            let mut trie = HeluTrie::new();
            for word in words(size) {
                trie.insert(word);
            }
            b.iter(|| black_box(trie.enumerate()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_helu_trie);
criterion_main!(benches);
