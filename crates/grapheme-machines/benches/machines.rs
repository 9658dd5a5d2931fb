//! Benchmark – segmentation machines over mixed text
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use grapheme_machines::boundary::{
    backspace_deletion_start, grapheme_cluster_ranges, previous_grapheme_boundary,
};

/// Repeats a sample mixing ASCII, combining marks, Hangul, ZWJ emoji, flags
/// and keycaps until the payload holds at least `target_units` code units.
fn make_payload(target_units: usize) -> Vec<u16> {
    const SAMPLE: &str = "hello e\u{301}\u{1100}\u{1161}\u{11A8} \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} \u{1F1FA}\u{1F1F8}\u{1F1EF}\u{1F1F5} 1\u{FE0F}\u{20E3}\r\n";
    let sample: Vec<u16> = SAMPLE.encode_utf16().collect();
    let mut payload = Vec::with_capacity(target_units + sample.len());
    while payload.len() < target_units {
        payload.extend_from_slice(&sample);
    }
    payload
}

fn walk_forward(text: &[u16]) -> usize {
    grapheme_cluster_ranges(text).count()
}

fn walk_backward(text: &[u16]) -> usize {
    let mut offset = text.len();
    let mut clusters = 0;
    while offset > 0 {
        offset = previous_grapheme_boundary(text, offset);
        clusters += 1;
    }
    clusters
}

fn backspace_all(text: &[u16]) -> usize {
    let mut caret = text.len();
    let mut keystrokes = 0;
    while caret > 0 {
        caret = backspace_deletion_start(text, caret);
        keystrokes += 1;
    }
    keystrokes
}

fn bench_machines(c: &mut Criterion) {
    let mut group = c.benchmark_group("machines");
    group.measurement_time(Duration::from_secs(5));

    for &size in &[1_000usize, 100_000] {
        let payload = make_payload(size);
        group.throughput(Throughput::Elements(payload.len() as u64));

        group.bench_with_input(BenchmarkId::new("forward", size), &payload, |b, text| {
            b.iter(|| black_box(walk_forward(black_box(text))));
        });
        group.bench_with_input(BenchmarkId::new("backward", size), &payload, |b, text| {
            b.iter(|| black_box(walk_backward(black_box(text))));
        });
        group.bench_with_input(BenchmarkId::new("backspace", size), &payload, |b, text| {
            b.iter(|| black_box(backspace_all(black_box(text))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_machines);
criterion_main!(benches);
