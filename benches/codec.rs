use std::{hint::black_box, sync::Arc};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rscodec::prelude::*;

const MESSAGE_LENGTH: usize = 223;
const PARITY_LENGTHS: [usize; 3] = [8, 16, 32];

struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn fill_buffer(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

fn generate_message(length: usize) -> Vec<u8> {
    let mut lcg = Lcg::new(0x123456789ABCDEF0);
    let mut message = vec![0u8; length];
    lcg.fill_buffer(&mut message);
    message
}

fn codec(parity_length: usize) -> ReedSolomon {
    ReedSolomon::new(Arc::new(GaloisField::new()), parity_length).unwrap()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for parity_length in PARITY_LENGTHS {
        let rs = codec(parity_length);
        let message = generate_message(MESSAGE_LENGTH.min(255 - parity_length));

        group.throughput(Throughput::Bytes(message.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(parity_length),
            &message,
            |b, message| b.iter(|| rs.encode(black_box(message))),
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for parity_length in PARITY_LENGTHS {
        let rs = codec(parity_length);
        let message = generate_message(MESSAGE_LENGTH.min(255 - parity_length));
        let clean = rs.encode(&message);

        let mut corrupted = clean.clone();
        for i in 0..rs.max_correctable_errors() {
            corrupted[i * 11 % clean.len()] ^= 0xA5;
        }

        group.throughput(Throughput::Bytes(clean.len() as u64));
        group.bench_with_input(BenchmarkId::new("clean", parity_length), &clean, |b, data| {
            b.iter(|| {
                let mut codeword = data.clone();
                rs.decode_in_place(black_box(&mut codeword)).unwrap()
            })
        });
        group.bench_with_input(
            BenchmarkId::new("max_errors", parity_length),
            &corrupted,
            |b, data| {
                b.iter(|| {
                    let mut codeword = data.clone();
                    rs.decode_in_place(black_box(&mut codeword)).unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
