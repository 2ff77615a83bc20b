use serde::{Deserialize, Serialize};

/// Visiting order over point indices. Always a permutation of `0..n`.
pub type Route = Vec<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub coordinates: (f64, f64),
    pub priority: bool,
    pub volume: u32,
}

impl Point {
    pub fn new(x: f64, y: f64, priority: bool, volume: u32) -> Self {
        Point {
            coordinates: (x, y),
            priority,
            volume,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.coordinates.0 - other.coordinates.0;
        let dy = self.coordinates.1 - other.coordinates.1;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Components of a route's cost. `total()` is what fitness is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CostBreakdown {
    pub distance: f64,
    pub capacity_penalty: f64,
    pub priority_penalty: f64,
}

impl CostBreakdown {
    pub fn penalty(&self) -> f64 {
        self.capacity_penalty + self.priority_penalty
    }

    pub fn total(&self) -> f64 {
        self.distance + self.penalty()
    }
}
