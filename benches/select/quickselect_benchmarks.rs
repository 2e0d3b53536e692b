use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nmax::select::select_nth_largest;
use rand::Rng;

fn random_data(len: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

fn bench_quickselect(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_nth_largest");
    for len in [1_000, 10_000, 100_000] {
        let data = random_data(len);
        let n = len / 2;
        group.bench_with_input(BenchmarkId::new("quickselect", len), &data, |b, data| {
            b.iter(|| {
                let mut scratch = data.clone();
                black_box(select_nth_largest(&mut scratch, n))
            })
        });
        group.bench_with_input(BenchmarkId::new("full_sort", len), &data, |b, data| {
            b.iter(|| {
                let mut scratch = data.clone();
                scratch.sort_unstable_by(|a, b| b.cmp(a));
                black_box(scratch[n - 1])
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quickselect);
criterion_main!(benches);
