use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Dimension mismatch: expected {expected} points, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Invalid route: {0}")]
    InvalidRoute(String),
}
