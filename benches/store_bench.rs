use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docjar::jar::MemoryJar;
use docjar::store::CookieStore;
use docjar::wire::Attributes;

fn benchmark_set_item(c: &mut Criterion) {
    let store = CookieStore::new(MemoryJar::new());
    let attributes = Attributes::default();

    c.bench_function("store_set_item", |b| {
        b.iter(|| {
            store.set_item(black_box("session"), black_box("abc 123; x=y"), &attributes);
        })
    });
}

fn benchmark_get_item(c: &mut Criterion) {
    let store = CookieStore::new(MemoryJar::new());
    let attributes = Attributes::default();
    // Pre-populate
    for i in 0..100 {
        store.set_item(&format!("cookie{}", i), "val", &attributes);
    }

    c.bench_function("store_get_item", |b| {
        b.iter(|| {
            black_box(store.get_item(black_box("cookie99")));
        })
    });
}

fn benchmark_keys(c: &mut Criterion) {
    let store = CookieStore::new(MemoryJar::new());
    let attributes = Attributes::default();
    for i in 0..100 {
        store.set_item(&format!("cookie{}", i), "val", &attributes);
    }

    c.bench_function("store_keys", |b| {
        b.iter(|| {
            black_box(store.keys());
        })
    });
}

criterion_group!(benches, benchmark_set_item, benchmark_get_item, benchmark_keys);
criterion_main!(benches);
