//! Benchmarks for scanrs.
//!
//! Run with:
//!     cargo bench

use std::hint::black_box;
use std::io::{Cursor, Write};

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use scanrs::{BlockChecksum, ScanConfig, Source, WordMatcher, scan};

fn text(size: usize) -> Vec<u8> {
    let words: [&[u8]; 5] = [b"small ", b"ssmall ", b"fix\n", b"(small) ", b"smaller "];
    words.iter().cycle().flat_map(|w| w.iter().copied()).take(size).collect()
}

fn bench_consumers(c: &mut Criterion) {
    let mut group = c.benchmark_group("consumers");

    for size in [64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        let data = text(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(format!("checksum_{}k", size / 1024), &data, |b, data| {
            b.iter(|| {
                let mut sum = BlockChecksum::new();
                sum.update(black_box(data));
                black_box(sum.value())
            });
        });

        group.bench_with_input(format!("words_{}k", size / 1024), &data, |b, data| {
            b.iter(|| {
                let mut matcher = WordMatcher::new("small").unwrap();
                matcher.update(black_box(data));
                black_box(matcher.finish())
            });
        });
    }

    group.finish();
}

fn bench_long_word(c: &mut Criterion) {
    let mut group = c.benchmark_group("long_word");
    let size = 1024 * 1024;
    // Worst case for naive rescanning: long runs of a repeated prefix.
    let data: Vec<u8> = (0..size).map(|i| if i % 97 == 96 { b' ' } else { b'a' }).collect();

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("aaaa_b", |b| {
        b.iter(|| {
            let mut matcher = WordMatcher::new("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab").unwrap();
            matcher.update(black_box(&data));
            black_box(matcher.finish())
        });
    });

    group.finish();
}

fn bench_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("sources");
    let size = 8 * 1024 * 1024;
    let data = text(size);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    group.throughput(Throughput::Bytes(size as u64));

    for factor in [1, 10, 64] {
        let config = ScanConfig::default().with_block_factor(factor);
        group.bench_function(format!("mapped_x{}", factor), |b| {
            b.iter(|| {
                let mut source = Source::open(file.path(), &config).unwrap();
                black_box(scan(&mut source, BlockChecksum::new()).unwrap())
            });
        });
    }

    for capacity in [256, 8 * 1024, 64 * 1024] {
        let config = ScanConfig::default().with_stream_capacity(capacity);
        group.bench_function(format!("stream_{}", capacity), |b| {
            b.iter(|| {
                let mut source = Source::from_reader(Cursor::new(data.clone()), &config).unwrap();
                black_box(scan(&mut source, BlockChecksum::new()).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_consumers, bench_long_word, bench_sources);
criterion_main!(benches);
