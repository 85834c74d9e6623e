use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use itertools::Itertools;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rand::Rng;

use shoreline::entities::{Coastline, CoastlineBoundary};
use shoreline::geometry::primitives::GeoPoint;
use shoreline::index::{BoundaryDistance, BruteForce, CoastalDistanceIndex};
use shoreline::util::{DistanceModel, IndexConfig};

criterion_main!(benches);
criterion_group!(benches, query_bench, leaf_size_bench);

const N_COAST_POINTS: [usize; 4] = [100, 1_000, 10_000, 100_000];
const N_QUERIES: usize = 1_000;

/// Wiggly coastline of `n` points along roughly 20 degrees of latitude
fn create_coastline(n: usize, rng: &mut SmallRng) -> Coastline {
    let points = (0..n)
        .map(|i| {
            let lat = -40.0 + 20.0 * i as f64 / n as f64;
            let lng = 115.0 + rng.random_range(-0.3..0.3);
            GeoPoint::new(lat, lng)
        })
        .collect_vec();
    CoastlineBoundary::new(points).unwrap().into()
}

fn create_queries(rng: &mut SmallRng) -> Vec<GeoPoint> {
    (0..N_QUERIES)
        .map(|_| GeoPoint::new(rng.random_range(-42.0..-18.0), rng.random_range(113.0..125.0)))
        .collect_vec()
}

fn query_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let queries = create_queries(&mut rng);

    let mut group = c.benchmark_group("query_bench");
    for n in N_COAST_POINTS {
        let coastline = create_coastline(n, &mut rng);
        for model in [DistanceModel::Vertex, DistanceModel::Segment] {
            let config = IndexConfig {
                model,
                parallel: false,
                ..IndexConfig::default()
            };
            let index = CoastalDistanceIndex::from_coastline(coastline.clone(), config);
            group.bench_function(BenchmarkId::new(format!("index_{model:?}"), n), |b| {
                b.iter(|| index.nearest_distances(&queries))
            });

            //the quadratic scan quickly becomes too slow to be worth measuring
            if n <= 10_000 {
                let brute_force = BruteForce::new(&coastline, model);
                group.bench_function(BenchmarkId::new(format!("brute_force_{model:?}"), n), |b| {
                    b.iter(|| brute_force.nearest_distances(&queries))
                });
            }
        }
    }
    group.finish();
}

fn leaf_size_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let queries = create_queries(&mut rng);
    let coastline = create_coastline(10_000, &mut rng);

    let mut group = c.benchmark_group("leaf_size_bench");
    for leaf_size in [1, 4, 16, 64] {
        let config = IndexConfig {
            leaf_size,
            parallel: false,
            ..IndexConfig::default()
        };
        group.bench_function(BenchmarkId::new("build", leaf_size), |b| {
            b.iter(|| CoastalDistanceIndex::from_coastline(coastline.clone(), config))
        });
        let index = CoastalDistanceIndex::from_coastline(coastline.clone(), config);
        group.bench_function(BenchmarkId::new("query", leaf_size), |b| {
            b.iter(|| index.nearest_distances(&queries))
        });
    }
    group.finish();
}
