use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nar_tests::{Fragmented, sample_archive, token};
use nar_wire::{NAR_MAGIC, TokenReader, expect_str, read_bytes, read_int};

fn bench_read_int(c: &mut Criterion) {
    let bytes = 0x0102_0304_0506_0708u64.to_le_bytes();

    c.bench_function("read_int", |b| {
        b.iter(|| {
            let mut r = &bytes[..];
            read_int(&mut r).unwrap()
        });
    });
}

fn bench_expect_magic(c: &mut Criterion) {
    let bytes = token(NAR_MAGIC.as_bytes());

    c.bench_function("expect_magic", |b| {
        b.iter(|| {
            let mut r = &bytes[..];
            expect_str(&mut r, NAR_MAGIC).unwrap();
        });
    });
}

fn bench_read_bytes_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_bytes");

    for size in [16usize, 1024, 64 * 1024, 1024 * 1024] {
        let bytes = token(&vec![b'x'; size]);
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| {
                let mut r = &bytes[..];
                read_bytes(&mut r).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_token_stream(c: &mut Criterion) {
    let archive = sample_archive();
    let mut group = c.benchmark_group("token_stream");
    group.throughput(Throughput::Bytes(archive.len() as u64));

    group.bench_function("contiguous", |b| {
        b.iter(|| {
            let mut reader = TokenReader::new(archive.as_slice());
            while reader.next_token().unwrap().is_some() {}
        });
    });

    group.bench_function("fragmented_3", |b| {
        b.iter(|| {
            let mut reader = TokenReader::new(Fragmented::new(&archive, 3));
            while reader.next_token().unwrap().is_some() {}
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_read_int,
    bench_expect_magic,
    bench_read_bytes_sizes,
    bench_token_stream
);
criterion_main!(benches);
