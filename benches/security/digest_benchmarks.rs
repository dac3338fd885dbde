use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use weak_crypto::security::HashAlgorithm;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_digests(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");

    for size in [64usize, 1024, 16 * 1024] {
        let data = random_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));

        for algorithm in [HashAlgorithm::Md5, HashAlgorithm::Sha1] {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &data, |b, data| {
                b.iter(|| algorithm.digest(black_box(data)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_digests);
criterion_main!(benches);
