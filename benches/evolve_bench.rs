use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use route_ga::evaluation::fitness::find_fitness;
use route_ga::fixtures::data_generator::{generate_points, PointRegion};
use route_ga::utils::random_permutation;
use route_ga::{CostModel, Population};

fn fitness_benchmark(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let points = generate_points(200, &PointRegion::default(), &mut rng);
    let route = random_permutation(points.len(), &mut rng);
    let model = CostModel::default();

    c.bench_function("find_fitness (200 points)", |b| {
        b.iter(|| find_fitness(black_box(&route), black_box(&points), black_box(&model)))
    });
}

fn evolve_benchmark(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let points = generate_points(100, &PointRegion::default(), &mut rng);
    let mut population = Population::new(200, &points, &mut rng).unwrap();

    c.bench_function("evolve (100 points, population 200)", |b| {
        b.iter(|| population.evolve(black_box(0.05), &points, &mut rng).unwrap())
    });
}

criterion_group!(benches, fitness_benchmark, evolve_benchmark);
criterion_main!(benches);
