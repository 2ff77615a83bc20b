use serde::{Deserialize, Serialize};

use crate::config::constant::{MAX_CAPACITY, OVERFLOW_PENALTY, PRIORITY_CUTOFF, PRIORITY_PENALTY};
use crate::domain::types::Point;
use crate::error::GaError;

/// Soft-constraint weights for a single vehicle profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    pub max_capacity: u32,
    /// Cost per unit of volume above `max_capacity`.
    pub overflow_penalty: f64,
    /// Flat cost when the first urgent stop is visited too late.
    pub priority_penalty: f64,
    /// Last 0-based position at which the first urgent stop is still on time.
    pub priority_cutoff: usize,
}

impl Default for CostModel {
    fn default() -> Self {
        CostModel {
            max_capacity: MAX_CAPACITY,
            overflow_penalty: OVERFLOW_PENALTY,
            priority_penalty: PRIORITY_PENALTY,
            priority_cutoff: PRIORITY_CUTOFF,
        }
    }
}

impl CostModel {
    /// Penalty weights must be finite and non-negative so that cost never drops below 0.
    pub fn validate(&self) -> Result<(), GaError> {
        for (name, value) in [
            ("overflow penalty", self.overflow_penalty),
            ("priority penalty", self.priority_penalty),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GaError::InvalidConfiguration(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Linear penalty on the volume carried above the vehicle capacity.
pub fn capacity_penalty(route: &[usize], points: &[Point], model: &CostModel) -> f64 {
    let current_volume: u64 = route.iter().map(|&i| points[i].volume as u64).sum();
    let max_capacity = model.max_capacity as u64;

    if current_volume > max_capacity {
        ((current_volume - max_capacity) as f64) * model.overflow_penalty
    } else {
        0.0
    }
}

/// Only the first urgent stop in visiting order is checked.
pub fn priority_penalty(route: &[usize], points: &[Point], model: &CostModel) -> f64 {
    match first_priority_position(route, points) {
        Some(position) if position > model.priority_cutoff => model.priority_penalty,
        _ => 0.0,
    }
}

pub fn first_priority_position(route: &[usize], points: &[Point]) -> Option<usize> {
    route.iter().position(|&i| points[i].priority)
}
