use criterion::{black_box, criterion_group, criterion_main, Criterion};
use natal::aspects::{classify_separation, AspectCalculator};
use natal::zodiac::PlanetPosition;

fn bench_classify_separation(c: &mut Criterion) {
    c.bench_function("classify_separation", |b| {
        b.iter(|| classify_separation(black_box(118.5)))
    });
}

fn bench_detect_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::new();

    let planets: Vec<PlanetPosition> = (0..10)
        .map(|i| PlanetPosition::from_longitude(format!("planet_{}", i), i as f64 * 37.5, false))
        .collect();

    c.bench_function("detect_aspects", |b| {
        b.iter(|| calculator.detect_aspects(black_box(&planets)))
    });
}

criterion_group!(benches, bench_classify_separation, bench_detect_aspects);
criterion_main!(benches);
