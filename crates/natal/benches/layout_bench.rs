use criterion::{black_box, criterion_group, criterion_main, Criterion};
use natal::layout::{ChartLayoutEngine, LayoutSettings};
use natal::zodiac::{PlanetPosition, Sign};

fn bench_layout(c: &mut Criterion) {
    let engine = ChartLayoutEngine::new(LayoutSettings::default());

    // clustered so the declutter path is exercised
    let planets: Vec<PlanetPosition> = (0..10)
        .map(|i| PlanetPosition::from_longitude(format!("planet_{}", i), 100.0 + (i % 4) as f64 * 1.5, false))
        .collect();

    c.bench_function("layout", |b| {
        b.iter(|| engine.layout(black_box(Sign::Scorpio), black_box(&planets), black_box(720.0)))
    });
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
