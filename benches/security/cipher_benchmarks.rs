use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use weak_crypto::security::{Des, Rc4};

fn bench_des_ecb(c: &mut Criterion) {
    let des = Des::new(b"12345678").unwrap();
    let mut group = c.benchmark_group("des_ecb");

    for size in [8usize, 1024, 16 * 1024] {
        let data = vec![0x5au8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| des.encrypt(black_box(data)).unwrap())
        });
    }

    group.finish();
}

fn bench_rc4(c: &mut Criterion) {
    let mut group = c.benchmark_group("rc4");

    for size in [64usize, 1024, 16 * 1024] {
        let data = vec![0x5au8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| Rc4::new(b"secretkey").unwrap().process(black_box(data)))
        });
    }

    group.finish();
}

fn bench_key_schedules(c: &mut Criterion) {
    c.bench_function("des_key_schedule", |b| {
        b.iter(|| Des::new(black_box(b"12345678")))
    });
    c.bench_function("rc4_key_schedule", |b| {
        b.iter(|| Rc4::new(black_box(b"secretkey")))
    });
}

criterion_group!(benches, bench_des_ecb, bench_rc4, bench_key_schedules);
criterion_main!(benches);
