use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lrucache::LruCache;

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_1kb_hot", |b| {
        let cache = LruCache::new(1000);
        let data = vec![b'x'; 1024];

        // Warm the cache
        for key in 0..100u64 {
            cache.add(key, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_peek(c: &mut Criterion) {
    let mut group = c.benchmark_group("peek");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("peek_1kb_hot", |b| {
        let cache = LruCache::new(1000);
        let data = vec![b'x'; 1024];

        for key in 0..100u64 {
            cache.add(key, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            // Read-lock path: no promotion, no counter updates
            black_box(cache.peek(&(counter % 100)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("add_1kb_evicting", |b| {
        let cache = LruCache::new(100);
        let data = vec![b'x'; 1024];

        // Fill to capacity so every fresh key below evicts
        for key in 0..100u64 {
            cache.add(key, data.clone());
        }

        let mut counter = 100u64;
        b.iter(|| {
            cache.add(counter, data.clone());
            counter += 1;
        });
    });

    group.bench_function("add_1kb_overwrite", |b| {
        let cache = LruCache::new(100);
        let data = vec![b'x'; 1024];

        for key in 0..100u64 {
            cache.add(key, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            // Same key space as the warm-up: update in place, no evictions
            cache.add(counter % 100, data.clone());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write", |b| {
        let cache = LruCache::new(1000);
        let data = vec![b'x'; 1024];

        for key in 0..100u64 {
            cache.add(key, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter.is_multiple_of(2) {
                black_box(cache.get(&(counter % 100)));
            } else {
                cache.add(counter % 100, data.clone());
            }
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_get_hit,
    bench_peek,
    bench_add,
    bench_mixed_50_50
);
criterion_main!(benches);
