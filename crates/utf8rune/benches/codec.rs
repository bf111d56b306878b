//! Benchmark – encoding, validation and parsing throughput
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use utf8rune::{
    ParseResult, Parser, PushbackBuffer, SliceSource, encode, read_rune, validate,
};

/// Produce a deterministic text of exactly `target_len` bytes mixing one-,
/// two-, three- and four-byte runes so every branch of the decoder is hit.
fn make_payload(target_len: usize) -> Vec<u8> {
    const PATTERN: &str = "ascii \u{E9}\u{E8} \u{7684}\u{7680} \u{1F600} ";
    let mut text = String::with_capacity(target_len + PATTERN.len());
    while text.len() < target_len {
        text.push_str(PATTERN);
    }
    let mut end = target_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text.into_bytes()
}

fn run_parser(bytes: &[u8]) -> usize {
    let mut parser = Parser::new(bytes);
    let mut produced = 0;
    while let ParseResult::Codepoint(cp) = parser.next() {
        produced += cp as usize & 1;
    }
    produced
}

fn run_stream(bytes: &[u8]) -> usize {
    let mut source = PushbackBuffer::new(SliceSource::new(bytes));
    let mut produced = 0;
    while let Ok(ParseResult::Codepoint(cp)) = read_rune(&mut source) {
        produced += cp as usize & 1;
    }
    produced
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.measurement_time(Duration::from_secs(5));

    for &size in &[1_024usize, 64 * 1_024, 1_024 * 1_024] {
        let payload = make_payload(size);
        group.throughput(Throughput::Bytes(payload.len() as u64));

        group.bench_with_input(BenchmarkId::new("parser", size), &payload, |b, p| {
            b.iter(|| black_box(run_parser(black_box(p))));
        });
        group.bench_with_input(BenchmarkId::new("stream", size), &payload, |b, p| {
            b.iter(|| black_box(run_stream(black_box(p))));
        });
        group.bench_with_input(BenchmarkId::new("validate", size), &payload, |b, p| {
            b.iter(|| black_box(validate(black_box(p))));
        });
        group.bench_with_input(BenchmarkId::new("std_from_utf8", size), &payload, |b, p| {
            b.iter(|| black_box(std::str::from_utf8(black_box(p)).is_ok()));
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let codepoints: Vec<u32> = (0..=0x10_FFFF).step_by(97).collect();
    c.bench_function("encode_sampled_scalars", |b| {
        b.iter(|| {
            codepoints
                .iter()
                .filter_map(|&cp| encode(black_box(cp)).ok())
                .map(|rune| rune.len())
                .sum::<usize>()
        });
    });
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
