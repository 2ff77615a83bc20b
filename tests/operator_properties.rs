mod common;

use common::{scattered, seeded, MockRng};
use route_ga::solver::genetic::{crossover, mutate, order_crossover, pick_cut_points};
use route_ga::utils::{is_permutation, random_permutation};
use route_ga::Population;

#[test]
fn every_operator_yields_permutations() {
    let mut rng = seeded(200);
    for n in [2, 3, 5, 17, 64] {
        for _ in 0..100 {
            let p1 = random_permutation(n, &mut rng);
            let p2 = random_permutation(n, &mut rng);
            assert!(is_permutation(&p1, n));

            let child = crossover(&p1, &p2, &mut rng);
            assert!(is_permutation(&child, n));

            let mutated = mutate(child, 0.5, &mut rng);
            assert!(is_permutation(&mutated, n));
        }
    }
}

#[test]
fn ox1_preserves_parent1_segment() {
    let mut rng = seeded(201);
    for n in [1, 4, 9, 33] {
        for _ in 0..200 {
            let p1 = random_permutation(n, &mut rng);
            let p2 = random_permutation(n, &mut rng);
            let (start, end) = pick_cut_points(n, &mut rng);

            let child = order_crossover(&p1, &p2, (start, end));

            assert_eq!(&child[start..=end], &p1[start..=end]);
            assert!(is_permutation(&child, n));
        }
    }
}

#[test]
fn ox1_fills_in_parent2_order() {
    let p1 = vec![4, 2, 0, 3, 1, 5];
    let p2 = vec![5, 4, 3, 2, 1, 0];
    let child = order_crossover(&p1, &p2, (1, 2));

    let outside: Vec<usize> = child
        .iter()
        .enumerate()
        .filter(|(i, _)| !(1..=2).contains(i))
        .map(|(_, &g)| g)
        .collect();
    assert_eq!(outside, vec![5, 4, 3, 1]);
    assert_eq!(child, vec![5, 2, 0, 4, 3, 1]);
}

#[test]
fn mutation_fires_only_below_rate() {
    let route: Vec<usize> = (0..6).collect();

    // A zero word maps to 0.0, below any positive rate.
    let mut low = MockRng::new(vec![0, 1 << 40, 3 << 60]);
    let mutated = mutate(route.clone(), 0.01, &mut low);
    assert_ne!(mutated, route);
    assert!(is_permutation(&mutated, 6));

    // An all-ones word maps to just under 1.0.
    let mut high = MockRng::new(vec![u64::MAX]);
    assert_eq!(mutate(route.clone(), 0.99, &mut high), route);
}

#[test]
fn elitist_copy_and_children_stay_permutations() {
    let points = scattered(20);
    let mut rng = seeded(202);
    let mut population = Population::new(30, &points, &mut rng).unwrap();

    for _ in 0..25 {
        population.evolve(0.3, &points, &mut rng).unwrap();
        for individual in population.individuals() {
            assert!(is_permutation(individual.route(), 20));
        }
    }
}

#[test]
fn select_parent_never_removes_members() {
    let points = scattered(10);
    let mut rng = seeded(203);
    let population = Population::new(12, &points, &mut rng).unwrap();

    for _ in 0..50 {
        let parent = population.select_parent(5, &mut rng).unwrap();
        assert!(population
            .individuals()
            .iter()
            .any(|ind| std::ptr::eq(ind, parent)));
    }
    assert_eq!(population.len(), 12);
    assert!(population.select_parent(13, &mut rng).is_err());
}
