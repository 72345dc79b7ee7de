//! Framing Session Benchmarks
//!
//! Measures per-frame cost of the full select/transform/update path.
//!
//! # Running Benchmarks
//! ```bash
//! cargo bench --package vcam-framing --bench session_advance
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vcam_framing::{FramingConfig, FramingSession};
use vcam_models::{CandidateDetection, NormalizedRect};

/// Synthetic subject sweeping left-to-right while shrinking, with periodic
/// detection dropouts.
fn synthetic_frames(count: usize) -> Vec<Vec<CandidateDetection>> {
    (0..count)
        .map(|i| {
            if i % 17 == 0 {
                return Vec::new();
            }
            let t = i as f64 / count as f64;
            let cx = 0.2 + 0.6 * t;
            let size = 0.25 - 0.15 * t;
            vec![CandidateDetection::new(
                NormalizedRect::from_center_and_scale(cx, 0.5, size),
                Some(1),
                0.9,
            )]
        })
        .collect()
}

fn bench_session_advance(c: &mut Criterion) {
    let frames = synthetic_frames(1000);

    c.bench_function("session_advance_1000_frames", |b| {
        b.iter(|| {
            let mut session = FramingSession::new(FramingConfig::default()).unwrap();
            for detections in &frames {
                black_box(session.advance(detections, 1.0 / 30.0));
            }
        })
    });
}

criterion_group!(benches, bench_session_advance);
criterion_main!(benches);
