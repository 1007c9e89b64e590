use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use editdist::{distance, edit_path, levenshtein_distance, optimized_distance};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn generate_sequence(rng: &mut ChaCha8Rng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(b'a'..=b'h')).collect()
}

fn bench_edit_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for size in [16, 64, 256].iter() {
        let a = generate_sequence(&mut rng, *size);
        let b = generate_sequence(&mut rng, *size);
        let a_str: String = a.iter().map(|&c| c as char).collect();
        let b_str: String = b.iter().map(|&c| c as char).collect();

        group.bench_with_input(BenchmarkId::new("suffix_memo", size), size, |bencher, _| {
            bencher.iter(|| distance(black_box(&a), black_box(&b)))
        });

        group.bench_with_input(BenchmarkId::new("index_memo", size), size, |bencher, _| {
            bencher.iter(|| optimized_distance(black_box(&a), black_box(&b)))
        });

        group.bench_with_input(BenchmarkId::new("rolling_rows", size), size, |bencher, _| {
            bencher.iter(|| levenshtein_distance(black_box(&a_str), black_box(&b_str)))
        });

        group.bench_with_input(BenchmarkId::new("edit_path", size), size, |bencher, _| {
            bencher.iter(|| edit_path(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_edit_distance);
criterion_main!(benches);
