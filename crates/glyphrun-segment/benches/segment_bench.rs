//! Benchmarks for the segmentation pipeline: decode, emoji, script, run.
//!
//! Run with: `cargo bench --package glyphrun-segment --bench segment_bench`
//!
//! | Group              | Hot Path                                        |
//! |--------------------|-------------------------------------------------|
//! | decode             | UTF-8 bytes to `Vec<char>` via `glyphrun-codec` |
//! | emoji_segmenter    | grammar tokenizer + run merging                 |
//! | script_segmenter   | script table lookup + run resolution            |
//! | run_segmenter      | both sub-segmenters plus range intersection     |

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use glyphrun_codec::decode_utf8_lossy;
use glyphrun_segment::{EmojiSegmenter, RunSegmenter, ScriptSegmenter};

// ============================================================================
// Test Data
// ============================================================================

/// ASCII Latin text, the common case in terminal output.
const LATIN: &str = "The quick brown fox jumps over the lazy dog. \
    Pack my box with five dozen liquor jugs. ";

/// CJK text.
const CJK: &str = "天地玄黄宇宙洪荒日月盈昃辰宿列张寒来暑往秋收冬藏";

/// Mixed scripts with emoji sequences of every kind.
const MIXED: &str = "Hello 世界! 🚀 Rust は最高 café ऋषियों нас \
    👩\u{200D}👩\u{200D}👧 1\u{FE0F}\u{20E3} 🇩🇪 ✌\u{FE0E} ⛹🏻 ";

fn generate_text(base: &str, target_size: usize) -> Vec<char> {
    let repeats = (target_size / base.len()).max(1);
    base.repeat(repeats).chars().collect()
}

const INPUTS: [(&str, &str); 3] = [("latin", LATIN), ("cjk", CJK), ("mixed", MIXED)];

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for (name, base) in INPUTS {
        let bytes = base.repeat((10_000 / base.len()).max(1)).into_bytes();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new(name, bytes.len()), &bytes, |b, bytes| {
            b.iter(|| decode_utf8_lossy(black_box(bytes)));
        });
    }
    group.finish();
}

fn bench_emoji_segmenter(c: &mut Criterion) {
    let mut group = c.benchmark_group("emoji_segmenter");
    for (name, base) in INPUTS {
        let text = generate_text(base, 10_000);
        group.throughput(Throughput::Elements(text.len() as u64));
        group.bench_with_input(BenchmarkId::new(name, text.len()), &text, |b, text| {
            b.iter(|| EmojiSegmenter::new(black_box(text)).count());
        });
    }
    group.finish();
}

fn bench_script_segmenter(c: &mut Criterion) {
    let mut group = c.benchmark_group("script_segmenter");
    for (name, base) in INPUTS {
        let text = generate_text(base, 10_000);
        group.throughput(Throughput::Elements(text.len() as u64));
        group.bench_with_input(BenchmarkId::new(name, text.len()), &text, |b, text| {
            b.iter(|| ScriptSegmenter::new(black_box(text)).count());
        });
    }
    group.finish();
}

fn bench_run_segmenter(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_segmenter");
    for size in [1_000, 10_000, 100_000] {
        let text = generate_text(MIXED, size);
        group.throughput(Throughput::Elements(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("mixed", size), &text, |b, text| {
            b.iter(|| RunSegmenter::new(black_box(text)).count());
        });
    }
    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_decode,
    bench_emoji_segmenter,
    bench_script_segmenter,
    bench_run_segmenter,
);

criterion_main!(benches);
