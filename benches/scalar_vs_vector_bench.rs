//! Compares [`Backend::Scalar`] against [`Backend::Vector`] for UTF-8
//! validation on the same corpora — the vector backend's entire reason to
//! exist is to beat the scalar one here, at least on mostly-ASCII text.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use textcodex::{validate, Backend, EncodingTag};

fn generate_ascii(size: usize) -> Vec<u8> {
    let pattern =
        b"The quick brown fox jumps over the lazy dog. 0123456789!@#$%^&*()_+-=[]{}|;':\",./<>?\n";
    let mut result = Vec::with_capacity(size);
    while result.len() < size {
        let remaining = size - result.len();
        result.extend_from_slice(&pattern[..remaining.min(pattern.len())]);
    }
    result
}

fn generate_mixed(size: usize) -> Vec<u8> {
    let pattern = "Hello, world! Café résumé naïve über. 日本語 中文 한국어. Emoji: 🎉🚀💻. More ASCII text here.\n";
    let bytes = pattern.as_bytes();
    let mut result = Vec::with_capacity(size);
    while result.len() < size {
        let remaining = size - result.len();
        if remaining >= bytes.len() {
            result.extend_from_slice(bytes);
        } else {
            result.extend(std::iter::repeat(b'A').take(remaining));
        }
    }
    result.truncate(size);
    result
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{}mb", bytes / (1024 * 1024))
    } else {
        format!("{}kb", bytes / 1024)
    }
}

fn bench_backend(c: &mut Criterion, group_name: &str, data_fn: fn(usize) -> Vec<u8>) {
    let mut group = c.benchmark_group(group_name);

    for size in [1024, 10 * 1024, 100 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        let data = data_fn(size);
        let size_name = format_size(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::new("scalar", &size_name),
            &data,
            |b, data| {
                b.iter(|| validate(EncodingTag::Utf8, black_box(data), Backend::Scalar));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("vector", &size_name),
            &data,
            |b, data| {
                b.iter(|| validate(EncodingTag::Utf8, black_box(data), Backend::Vector));
            },
        );
    }

    group.finish();
}

fn bench_ascii(c: &mut Criterion) {
    bench_backend(c, "backend_ascii", generate_ascii);
}

fn bench_mixed(c: &mut Criterion) {
    bench_backend(c, "backend_mixed", generate_mixed);
}

criterion_group!(benches, bench_ascii, bench_mixed);
criterion_main!(benches);
