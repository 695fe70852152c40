//! Benchmarks for chunk boundary computation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use textchunk_core::{ChunkerConfig, Segmentation, TextChunker};

/// Generate mixed ASCII and multi-byte text of roughly `size_kb` kilobytes
fn generate_test_text(size_kb: usize) -> String {
    let base_text = "This is a test sentence. これはテストです。Ünïcödé 🎉 ";
    let repetitions = size_kb * 1024 / base_text.len();

    base_text.repeat(repetitions.max(1))
}

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size_kb in [16, 256, 1024] {
        let text = generate_test_text(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));

        for segmentation in [Segmentation::CodePoint, Segmentation::Grapheme] {
            let config = ChunkerConfig::builder()
                .size(2000)
                .segmentation(segmentation)
                .build()
                .unwrap();

            group.bench_with_input(
                BenchmarkId::new(format!("{segmentation:?}"), size_kb),
                &text,
                |b, text| {
                    b.iter(|| {
                        let chunker =
                            TextChunker::with_config(black_box(text.as_str()), &config).unwrap();
                        black_box(chunker.spans().len())
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_construction);
criterion_main!(benches);
