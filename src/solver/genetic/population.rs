use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::constant::TOURNAMENT_SIZE;
use crate::domain::individual::Individual;
use crate::domain::types::{Point, Route};
use crate::error::GaError;
use crate::evaluation::penalty::CostModel;
use crate::utils::random_permutation;

use super::crossover::crossover;
use super::mutation::{mutate, validate_mutation_rate};
use super::selection::tournament_select;

/// One generation of candidate routes. Never empty.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
    route_len: usize,
    cost_model: CostModel,
    tournament_size: usize,
}

impl Population {
    pub fn new<R: Rng + ?Sized>(size: usize, points: &[Point], rng: &mut R) -> Result<Self, GaError> {
        Self::with_cost_model(size, points, CostModel::default(), rng)
    }

    pub fn with_cost_model<R: Rng + ?Sized>(
        size: usize,
        points: &[Point],
        cost_model: CostModel,
        rng: &mut R,
    ) -> Result<Self, GaError> {
        if size == 0 {
            return Err(GaError::InvalidConfiguration(
                "population size must be at least 1".to_string(),
            ));
        }
        if points.is_empty() {
            return Err(GaError::InvalidConfiguration(
                "point set must not be empty".to_string(),
            ));
        }
        cost_model.validate()?;

        let routes: Vec<Route> = (0..size)
            .map(|_| random_permutation(points.len(), rng))
            .collect();

        debug!(
            "Initial population of {} routes over {} points",
            size,
            points.len()
        );

        Ok(Population {
            individuals: evaluate_all(routes, points, &cost_model),
            route_len: points.len(),
            cost_model,
            tournament_size: TOURNAMENT_SIZE,
        })
    }

    pub fn with_tournament_size(mut self, tournament_size: usize) -> Result<Self, GaError> {
        if tournament_size == 0 {
            return Err(GaError::InvalidConfiguration(
                "tournament pool size must be at least 1".to_string(),
            ));
        }
        self.tournament_size = tournament_size;
        Ok(self)
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn route_len(&self) -> usize {
        self.route_len
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Highest fitness; the first one wins ties.
    pub fn get_fittest(&self) -> &Individual {
        let first = &self.individuals[0];
        self.individuals.iter().fold(first, |best, candidate| {
            if candidate.fitness() > best.fitness() {
                candidate
            } else {
                best
            }
        })
    }

    /// Fittest individual other than the one `get_fittest` returns.
    pub fn get_second_best(&self) -> Option<&Individual> {
        let best = self.get_fittest();
        let others = self
            .individuals
            .iter()
            .filter(|ind| !std::ptr::eq(*ind, best));
        others.fold(None, |acc: Option<&Individual>, ind| match acc {
            Some(current) if ind.fitness() <= current.fitness() => Some(current),
            _ => Some(ind),
        })
    }

    pub fn get_average_fitness(&self) -> f64 {
        let total: f64 = self.individuals.iter().map(Individual::fitness).sum();
        total / self.individuals.len() as f64
    }

    pub fn select_parent<R: Rng + ?Sized>(
        &self,
        pool_size: usize,
        rng: &mut R,
    ) -> Result<&Individual, GaError> {
        tournament_select(&self.individuals, pool_size, rng)
    }

    /// Replace the current generation with the next one. The fittest route survives
    /// unchanged; the rest are tournament-selected OX1 children after swap mutation.
    /// On error the population is left as it was.
    pub fn evolve<R: Rng + ?Sized>(
        &mut self,
        mutation_rate: f64,
        points: &[Point],
        rng: &mut R,
    ) -> Result<(), GaError> {
        validate_mutation_rate(mutation_rate)?;
        if points.len() != self.route_len {
            return Err(GaError::DimensionMismatch {
                expected: self.route_len,
                actual: points.len(),
            });
        }

        let size = self.individuals.len();
        let pool_size = self.tournament_size.min(size);

        let mut routes: Vec<Route> = Vec::with_capacity(size);
        routes.push(self.get_fittest().route().to_vec());

        while routes.len() < size {
            let parent1 = self.select_parent(pool_size, rng)?;
            let parent2 = self.select_parent(pool_size, rng)?;
            let child = crossover(parent1.route(), parent2.route(), rng);
            routes.push(mutate(child, mutation_rate, rng));
        }

        self.individuals = evaluate_all(routes, points, &self.cost_model);

        trace!(
            "Generation replaced: best {:.6}, average {:.6}",
            self.get_fittest().fitness(),
            self.get_average_fitness()
        );
        Ok(())
    }
}

/// Fitness is a pure function of (route, points), so evaluation runs in parallel;
/// `collect` keeps the original order.
fn evaluate_all(routes: Vec<Route>, points: &[Point], model: &CostModel) -> Vec<Individual> {
    routes
        .into_par_iter()
        .map(|route| Individual::evaluate(route, points, model))
        .collect()
}
