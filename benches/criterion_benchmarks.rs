use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxbase58::divmod::{divmod_58_256, divmod_58_256_single, divmod_256_58, divmod_256_58_single};
use oxbase58::{decode, decode_u64, encode, encode_u64};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

fn gen_data(size: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = vec![0u8; size];
    rng.fill(&mut out[..]);
    out
}

fn gen_digits(size: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..58u8)).collect()
}

fn write_expansion_snapshot() {
    let mut csv = String::from("input_bytes,encoded_chars,ratio\n");
    for size in [1usize, 8, 16, 32, 64, 256, 1024, 4096] {
        let data = gen_data(size, size as u64);
        let text = encode(&data).unwrap();
        let ratio = text.len() as f64 / data.len() as f64;
        csv.push_str(&format!("{size},{},{ratio}\n", text.len()));
    }
    let out_dir = Path::new("target/criterion/custom_reports");
    let _ = fs::create_dir_all(out_dir);
    let _ = fs::write(out_dir.join("expansion_snapshot.csv"), csv);
}

fn bench_encoding_speed(c: &mut Criterion) {
    write_expansion_snapshot();
    let mut g = c.benchmark_group("encode_speed");
    for size in [32usize, 256, 1024, 8 * 1024] {
        let data = gen_data(size, 1);
        g.throughput(Throughput::Bytes(size as u64));
        g.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(encode(black_box(&data)).unwrap()));
        });
    }
    g.finish();
}

fn bench_decoding_speed(c: &mut Criterion) {
    let mut g = c.benchmark_group("decode_speed");
    for size in [32usize, 256, 1024, 8 * 1024] {
        let text = encode(&gen_data(size, 2)).unwrap();
        g.throughput(Throughput::Bytes(text.len() as u64));
        g.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(decode(black_box(&text)).unwrap()));
        });
    }
    g.finish();
}

fn bench_divmod_batching(c: &mut Criterion) {
    let mut g = c.benchmark_group("divmod_batched_vs_single");
    let bytes = gen_data(1024, 3);
    let digits = gen_digits(1400, 4);

    g.bench_function("256_58_batched", |b| {
        b.iter(|| {
            let mut n = bytes.clone();
            black_box(divmod_256_58(&mut n, 0));
        });
    });
    g.bench_function("256_58_single", |b| {
        b.iter(|| {
            let mut n = bytes.clone();
            black_box(divmod_256_58_single(&mut n, 0));
        });
    });
    g.bench_function("58_256_batched", |b| {
        b.iter(|| {
            let mut d = digits.clone();
            black_box(divmod_58_256(&mut d, 0));
        });
    });
    g.bench_function("58_256_single", |b| {
        b.iter(|| {
            let mut d = digits.clone();
            black_box(divmod_58_256_single(&mut d, 0));
        });
    });
    g.finish();
}

fn bench_fixed_width(c: &mut Criterion) {
    let mut g = c.benchmark_group("fixed_width");
    let value = 0x0123_4567_89AB_CDEFu64;
    let token = encode_u64(value);
    g.bench_function("encode_u64", |b| {
        b.iter(|| black_box(encode_u64(black_box(value))));
    });
    g.bench_function("decode_u64", |b| {
        b.iter(|| black_box(decode_u64(black_box(&token)).unwrap()));
    });
    g.finish();
}

fn bench_address_sized(c: &mut Criterion) {
    let mut g = c.benchmark_group("address_sized_roundtrip");
    // 1-byte version, 20-byte hash, 4-byte check: the common 25-byte payload.
    let mut payload = gen_data(25, 5);
    payload[0] = 0;
    g.throughput(Throughput::Bytes(payload.len() as u64));
    g.bench_function("p2pkh_25_bytes", |b| {
        b.iter(|| {
            let text = encode(black_box(&payload)).unwrap();
            black_box(decode(&text).unwrap());
        });
    });
    g.finish();
}

criterion_group!(
    benches,
    bench_encoding_speed,
    bench_decoding_speed,
    bench_divmod_batching,
    bench_fixed_width,
    bench_address_sized
);
criterion_main!(benches);
