use criterion::{black_box, criterion_group, criterion_main, Criterion};

use xpcurve::{cumulative_threshold, level_from_experience, status, Level};

/// Walk thresholds upward until the next one is out of reach
fn linear_lookup(experience: u64) -> Level {
    let mut level = 0;
    while cumulative_threshold(level + 1) <= experience {
        level += 1;
    }
    level
}

fn bench_lookup(c: &mut Criterion) {
    let xp = cumulative_threshold(5_000) + 123;

    c.bench_function("level_from_experience", |b| {
        b.iter(|| level_from_experience(black_box(xp)))
    });
    c.bench_function("linear_lookup", |b| b.iter(|| linear_lookup(black_box(xp))));
    c.bench_function("status_snapshot", |b| b.iter(|| status(black_box(1500))));
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
