use itertools::Itertools;

use crate::domain::types::{CostBreakdown, Point};
use crate::evaluation::penalty::{capacity_penalty, priority_penalty, CostModel};

pub fn find_fitness(route: &[usize], points: &[Point], model: &CostModel) -> f64 {
    fitness_from_cost(find_cost(route, points, model).total())
}

pub fn find_cost(route: &[usize], points: &[Point], model: &CostModel) -> CostBreakdown {
    CostBreakdown {
        distance: find_distance(route, points),
        capacity_penalty: capacity_penalty(route, points, model),
        priority_penalty: priority_penalty(route, points, model),
    }
}

/// Length of the closed tour, including the leg from the last stop back to the first.
/// Routes with fewer than two stops have length 0.
pub fn find_distance(route: &[usize], points: &[Point]) -> f64 {
    if route.len() < 2 {
        return 0.0;
    }

    route
        .iter()
        .circular_tuple_windows::<(&usize, &usize)>()
        .map(|(&from, &to)| dist_between(from, to, points))
        .sum()
}

/// Strictly decreasing in `cost`, in (0, 1] for non-negative cost.
pub fn fitness_from_cost(cost: f64) -> f64 {
    1.0 / (cost + 1.0)
}

pub fn dist_between(from_loc: usize, to_loc: usize, points: &[Point]) -> f64 {
    points[from_loc].distance_to(&points[to_loc])
}
