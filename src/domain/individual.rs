use serde::Serialize;

use crate::domain::types::{CostBreakdown, Point, Route};
use crate::error::GaError;
use crate::evaluation::fitness::{find_cost, fitness_from_cost};
use crate::evaluation::penalty::CostModel;
use crate::utils::is_permutation;

/// A candidate route with its cached evaluation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Individual {
    route: Route,
    fitness: f64,
    cost: CostBreakdown,
}

impl Individual {
    /// Evaluate an externally supplied route. The route must be a permutation of
    /// `0..points.len()` and the cost model must pass [`CostModel::validate`].
    pub fn new(route: Route, points: &[Point], model: &CostModel) -> Result<Self, GaError> {
        model.validate()?;
        if route.len() != points.len() {
            return Err(GaError::DimensionMismatch {
                expected: route.len(),
                actual: points.len(),
            });
        }
        if !is_permutation(&route, points.len()) {
            return Err(GaError::InvalidRoute(format!(
                "{:?} is not a permutation of 0..{}",
                route,
                points.len()
            )));
        }

        Ok(Self::evaluate(route, points, model))
    }

    /// Operator output is a permutation by construction, so it skips validation.
    pub(crate) fn evaluate(route: Route, points: &[Point], model: &CostModel) -> Self {
        debug_assert!(is_permutation(&route, points.len()));

        let cost = find_cost(&route, points, model);
        Individual {
            fitness: fitness_from_cost(cost.total()),
            route,
            cost,
        }
    }

    pub fn route(&self) -> &[usize] {
        &self.route
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn cost(&self) -> &CostBreakdown {
        &self.cost
    }
}
