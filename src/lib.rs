pub mod config;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod fixtures;
pub mod solver;
pub mod utils;

pub use domain::individual::Individual;
pub use domain::types::{CostBreakdown, Point, Route};
pub use error::GaError;
pub use evaluation::penalty::CostModel;
pub use solver::genetic::{GaSession, Population};
