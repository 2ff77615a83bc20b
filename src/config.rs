use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use dotenv::dotenv;
use tracing::{debug, warn};

use crate::error::GaError;
use crate::evaluation::penalty::CostModel;
use crate::fixtures::data_generator::PointRegion;

pub mod constant {
    pub const NUM_POINTS: usize = 20;
    pub const NUM_GENERATIONS: usize = 1000;
    pub const POPULATION_SIZE: usize = 50;
    pub const MUTATION_RATE: f64 = 0.05;
    pub const SEED: u64 = 64;
    pub const TOURNAMENT_SIZE: usize = 5;

    pub const MAX_CAPACITY: u32 = 50;
    pub const OVERFLOW_PENALTY: f64 = 100.0;
    pub const PRIORITY_PENALTY: f64 = 1000.0;
    pub const PRIORITY_CUTOFF: usize = 5;

    pub const REGION_X: (i32, i32) = (550, 950);
    pub const REGION_Y: (i32, i32) = (280, 880);
    pub const VOLUME_RANGE: (u32, u32) = (1, 10);

    pub const HISTORY_CSV_PATH: &str = "fitness_history.csv";
    pub const BEST_ROUTE_JSON_PATH: &str = "best_route.json";
}

/// Parameters of one GA session.
#[derive(Debug, Clone, PartialEq)]
pub struct GaSettings {
    pub num_points: usize,
    pub population_size: usize,
    pub mutation_rate: f64,
    pub num_generations: usize,
    pub seed: u64,
    pub cost_model: CostModel,
    pub region: PointRegion,
}

impl Default for GaSettings {
    fn default() -> Self {
        GaSettings {
            num_points: constant::NUM_POINTS,
            population_size: constant::POPULATION_SIZE,
            mutation_rate: constant::MUTATION_RATE,
            num_generations: constant::NUM_GENERATIONS,
            seed: constant::SEED,
            cost_model: CostModel::default(),
            region: PointRegion::default(),
        }
    }
}

/// Everything the CLI runner needs: session settings plus I/O locations.
#[derive(Debug, Clone)]
pub struct GaConfig {
    pub settings: GaSettings,
    pub points_file: Option<PathBuf>,
    pub history_csv: PathBuf,
    pub best_route_json: PathBuf,
}

impl Default for GaConfig {
    fn default() -> Self {
        GaConfig {
            settings: GaSettings::default(),
            points_file: None,
            history_csv: PathBuf::from(constant::HISTORY_CSV_PATH),
            best_route_json: PathBuf::from(constant::BEST_ROUTE_JSON_PATH),
        }
    }
}

impl GaConfig {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self, GaError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GaConfig::default();
        let mut settings = defaults.settings;

        settings.num_points = parse_or(&lookup, "GA_NUM_POINTS", settings.num_points)?;
        settings.population_size =
            parse_or(&lookup, "GA_POPULATION_SIZE", settings.population_size)?;
        settings.mutation_rate = parse_or(&lookup, "GA_MUTATION_RATE", settings.mutation_rate)?;
        settings.num_generations =
            parse_or(&lookup, "GA_NUM_GENERATIONS", settings.num_generations)?;
        settings.seed = parse_or(&lookup, "GA_SEED", settings.seed)?;
        settings.cost_model.max_capacity = parse_or(
            &lookup,
            "GA_MAX_CAPACITY",
            settings.cost_model.max_capacity,
        )?;

        let points_file = lookup("GA_POINTS_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let history_csv = lookup("GA_HISTORY_CSV")
            .map(PathBuf::from)
            .unwrap_or(defaults.history_csv);
        let best_route_json = lookup("GA_BEST_ROUTE_JSON")
            .map(PathBuf::from)
            .unwrap_or(defaults.best_route_json);

        debug!("Loaded settings: {:?}", settings);

        Ok(GaConfig {
            settings,
            points_file,
            history_csv,
            best_route_json,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, GaError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Debug,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| {
            GaError::InvalidConfiguration(format!("{key} has malformed value '{raw}'"))
        }),
        None => {
            warn!("{} not set, using default {:?}", key, default);
            Ok(default)
        }
    }
}
