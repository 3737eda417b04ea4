use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use blockflow_symmetric::Algorithm;

const MESSAGE_LEN: usize = 16 * 1024;

fn stream_encrypt(alg: Algorithm, key: &[u8], data: &[u8], chunk: usize, out: &mut Vec<u8>) {
    let mut ctx = alg.new_context().unwrap();
    ctx.encrypt_init(Some(key), None).unwrap();
    out.clear();
    for piece in data.chunks(chunk) {
        ctx.update(piece, out).unwrap();
    }
    ctx.finalize(out).unwrap();
}

fn bench_stream_encrypt(c: &mut Criterion) {
    let data = vec![0x5au8; MESSAGE_LEN];
    let mut group = c.benchmark_group("ECB stream encrypt");
    group.throughput(Throughput::Bytes(MESSAGE_LEN as u64));

    for alg in Algorithm::ALL {
        let key = vec![0x11u8; alg.key_len()];
        for chunk in [1usize, 15, 64, 4096] {
            let mut out = Vec::with_capacity(MESSAGE_LEN + 16);
            group.bench_with_input(BenchmarkId::new(alg.name(), chunk), &chunk, |b, &chunk| {
                b.iter(|| stream_encrypt(alg, &key, &data, chunk, &mut out));
            });
        }
    }
    group.finish();
}

fn bench_stream_decrypt(c: &mut Criterion) {
    let data = vec![0xa5u8; MESSAGE_LEN];
    let mut group = c.benchmark_group("ECB stream decrypt");
    group.throughput(Throughput::Bytes(MESSAGE_LEN as u64));

    for alg in Algorithm::ALL {
        let key = vec![0x22u8; alg.key_len()];
        let mut ciphertext = Vec::new();
        stream_encrypt(alg, &key, &data, MESSAGE_LEN, &mut ciphertext);

        for chunk in [16usize, 4096] {
            let mut out = Vec::with_capacity(ciphertext.len());
            group.bench_with_input(BenchmarkId::new(alg.name(), chunk), &chunk, |b, &chunk| {
                b.iter(|| {
                    let mut ctx = alg.new_context().unwrap();
                    ctx.decrypt_init(Some(&key), None).unwrap();
                    out.clear();
                    for piece in ciphertext.chunks(chunk) {
                        ctx.update(piece, &mut out).unwrap();
                    }
                    ctx.finalize(&mut out).unwrap();
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_stream_encrypt, bench_stream_decrypt);
criterion_main!(benches);
