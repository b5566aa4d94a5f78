use criterion::{black_box, criterion_group, criterion_main, Criterion};
use oscillo_assets::{IconCache, IconVariant};

fn bench_icon_cache(c: &mut Criterion) {
    let cache = IconCache::embedded();
    // Populate once so the measured path is the hit path.
    cache.get(IconVariant::Standard).expect("first load");

    c.bench_function("icon_cache_hit", |b| {
        b.iter(|| {
            let icon = cache.get(black_box(IconVariant::Standard)).expect("cached");
            black_box(icon);
        })
    });

    c.bench_function("icon_cold_decode", |b| {
        b.iter_with_setup(IconCache::embedded, |fresh| {
            let icon = fresh.get(black_box(IconVariant::Standard)).expect("decode");
            black_box(icon);
        })
    });
}

criterion_group!(benches, bench_icon_cache);
criterion_main!(benches);
