use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_cbc::{decrypt_with_schedule, encrypt_with_schedule, KeySchedule};
use aes_core::{encrypt_block, expand_key, AesKey};

fn bench_key_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_expansion");
    for len in [16usize, 24, 32] {
        let key = AesKey::from_slice(&vec![7u8; len]).expect("valid key length");
        group.bench_function(BenchmarkId::from_parameter(key.size()), |b| {
            b.iter(|| expand_key(&key));
        });
    }
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut group = c.benchmark_group("block");
    for len in [16usize, 24, 32] {
        let mut key_bytes = vec![0u8; len];
        rng.fill_bytes(&mut key_bytes);
        let schedule = KeySchedule::new(&key_bytes).expect("valid key length");
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        group.bench_function(BenchmarkId::new("encrypt", schedule.key_size()), |b| {
            b.iter(|| encrypt_block(&block, &schedule));
        });
    }
    group.finish();
}

fn bench_cbc(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
    let schedule = KeySchedule::new(&[0u8; 16]).expect("valid key length");
    let iv = [0u8; 16];

    let mut group = c.benchmark_group("cbc_aes128");
    for size in [1024usize, 16 * 1024] {
        let mut data = vec![0u8; size];
        rng.fill_bytes(&mut data);
        let ciphertext = encrypt_with_schedule(&data, &schedule, &iv).expect("aligned");
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encrypt", size), &data, |b, data| {
            b.iter(|| encrypt_with_schedule(data, &schedule, &iv));
        });
        group.bench_with_input(BenchmarkId::new("decrypt", size), &ciphertext, |b, ct| {
            b.iter(|| decrypt_with_schedule(ct, &schedule, &iv));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_key_expansion, bench_block, bench_cbc);
criterion_main!(benches);
