use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, span, Level};

use crate::config::GaSettings;
use crate::domain::individual::Individual;
use crate::domain::types::Point;
use crate::error::GaError;
use crate::fixtures::data_generator::generate_points;

use super::mutation::validate_mutation_rate;
use super::population::Population;

/// Driver state for one GA run: the point set, the current population, the
/// generation counter and per-generation fitness history.
pub struct GaSession {
    settings: GaSettings,
    rng: ChaCha8Rng,
    points: Vec<Point>,
    population: Population,
    best_individual: Individual,
    generation: usize,
    best_fitness_history: Vec<f64>,
    avg_fitness_history: Vec<f64>,
}

impl GaSession {
    /// Start a session over freshly generated points.
    pub fn new(settings: GaSettings) -> Result<Self, GaError> {
        let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);
        let points = generate_points(settings.num_points, &settings.region, &mut rng);
        Self::build(settings, points, rng)
    }

    /// Start a session over caller-supplied points; `settings.num_points` is ignored.
    pub fn with_points(settings: GaSettings, points: Vec<Point>) -> Result<Self, GaError> {
        let rng = ChaCha8Rng::seed_from_u64(settings.seed);
        Self::build(settings, points, rng)
    }

    fn build(
        mut settings: GaSettings,
        points: Vec<Point>,
        mut rng: ChaCha8Rng,
    ) -> Result<Self, GaError> {
        validate_mutation_rate(settings.mutation_rate)?;
        settings.cost_model.validate()?;
        settings.num_points = points.len();

        let population = Population::with_cost_model(
            settings.population_size,
            &points,
            settings.cost_model,
            &mut rng,
        )?;
        let best_individual = population.get_fittest().clone();

        info!(
            "Session ready: {} points, population {}, {} generations",
            points.len(),
            settings.population_size,
            settings.num_generations
        );

        Ok(GaSession {
            settings,
            rng,
            points,
            population,
            best_individual,
            generation: 0,
            best_fitness_history: vec![],
            avg_fitness_history: vec![],
        })
    }

    /// New points and a new population.
    pub fn reset(&mut self) -> Result<(), GaError> {
        let points = generate_points(self.settings.num_points, &self.settings.region, &mut self.rng);
        self.replace_points(points)
    }

    /// Same points, new population.
    pub fn restart(&mut self) -> Result<(), GaError> {
        let population = Population::with_cost_model(
            self.settings.population_size,
            &self.points,
            self.settings.cost_model,
            &mut self.rng,
        )?;
        self.best_individual = population.get_fittest().clone();
        self.population = population;
        self.generation = 0;
        self.best_fitness_history.clear();
        self.avg_fitness_history.clear();

        debug!("Session restarted");
        Ok(())
    }

    pub fn replace_points(&mut self, points: Vec<Point>) -> Result<(), GaError> {
        if points.is_empty() {
            return Err(GaError::InvalidConfiguration(
                "point set must not be empty".to_string(),
            ));
        }
        self.settings.num_points = points.len();
        self.points = points;
        self.restart()
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) -> Result<(), GaError> {
        validate_mutation_rate(mutation_rate)?;
        self.settings.mutation_rate = mutation_rate;
        Ok(())
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.settings.num_generations = num_generations;
    }

    /// Evolve one generation unless the generation limit is reached.
    /// Returns whether a generation was run.
    pub fn evolve_one_step(&mut self) -> Result<bool, GaError> {
        if self.is_finished() {
            return Ok(false);
        }

        let generation_span = span!(Level::DEBUG, "generation", generation = self.generation + 1);
        let _guard = generation_span.enter();

        self.population
            .evolve(self.settings.mutation_rate, &self.points, &mut self.rng)?;

        let fittest = self.population.get_fittest();
        let average = self.population.get_average_fitness();

        if fittest.fitness() > self.best_individual.fitness() {
            info!(
                "New best at generation {}: fitness = {:.6}, cost = {:.2}",
                self.generation + 1,
                fittest.fitness(),
                fittest.cost().total()
            );
        }
        self.best_individual = fittest.clone();
        self.best_fitness_history.push(fittest.fitness());
        self.avg_fitness_history.push(average);
        self.generation += 1;

        debug!(
            "best {:.6}, average {:.6}",
            self.best_individual.fitness(),
            average
        );
        Ok(true)
    }

    pub fn run_to_completion(&mut self) -> Result<&Individual, GaError> {
        while self.evolve_one_step()? {}
        Ok(&self.best_individual)
    }

    pub fn is_finished(&self) -> bool {
        self.generation >= self.settings.num_generations
    }

    pub fn settings(&self) -> &GaSettings {
        &self.settings
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn best_individual(&self) -> &Individual {
        &self.best_individual
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn best_fitness_history(&self) -> &[f64] {
        &self.best_fitness_history
    }

    pub fn average_fitness_history(&self) -> &[f64] {
        &self.avg_fitness_history
    }
}
