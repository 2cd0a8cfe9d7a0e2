use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ufo_sightings::analyzers;
use ufo_sightings::utils::MonthNames;
use ufo_sightings::{Coordinate, Sighting};

const STATES: [&str; 6] = ["ca", "tx", "wa", "fl", "nv", "az"];
const SHAPES: [&str; 5] = ["light", "circle", "disk", "fireball", "triangle"];

// Create test data for benchmarking
fn create_test_sightings(count: usize) -> Vec<Sighting> {
    let base = NaiveDate::from_ymd_opt(1990, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    (0..count)
        .map(|i| {
            Sighting::new(
                base + Duration::hours((i * 37) as i64),
                format!("City {}", i % 50),
                STATES[i % STATES.len()].to_string(),
                SHAPES[i % SHAPES.len()].to_string(),
                (i % 900) as u64,
                format!("Test sighting number {} with a moderately long comment", i),
                Coordinate::new(30.0 + (i % 20) as f64 * 0.5, -120.0 + (i % 30) as f64 * 0.7),
            )
        })
        .collect()
}

fn benchmark_radius_query(c: &mut Criterion) {
    let sightings = create_test_sightings(10_000);
    let centre = Coordinate::new(35.0, -110.0);

    c.bench_function("sightings_near", |b| {
        b.iter(|| black_box(analyzers::sightings_near(&sightings, &centre, 250.0).len()))
    });
}

fn benchmark_grouping_queries(c: &mut Criterion) {
    let sightings = create_test_sightings(10_000);

    c.bench_function("count_by_month", |b| {
        b.iter(|| black_box(analyzers::count_by_month(&sightings, MonthNames::English)))
    });

    c.bench_function("longest_by_state", |b| {
        b.iter(|| black_box(analyzers::longest_by_state(&sightings, 3).len()))
    });

    c.bench_function("busiest_location", |b| {
        b.iter(|| black_box(analyzers::busiest_location(&sightings)))
    });
}

fn benchmark_varying_data_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sightings_between_by_size");

    for &size in &[1_000, 10_000, 50_000] {
        group.bench_with_input(BenchmarkId::new("sightings", size), &size, |b, &count| {
            let sightings = create_test_sightings(count);
            b.iter(|| black_box(analyzers::sightings_between(&sightings, None, None).len()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_radius_query,
    benchmark_grouping_queries,
    benchmark_varying_data_sizes
);
criterion_main!(benches);
