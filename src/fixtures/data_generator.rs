use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::constant::{REGION_X, REGION_Y, VOLUME_RANGE};
use crate::domain::types::Point;

/// Bounds for randomly generated points. All ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRegion {
    pub x: (i32, i32),
    pub y: (i32, i32),
    pub volume: (u32, u32),
}

impl Default for PointRegion {
    fn default() -> Self {
        PointRegion {
            x: REGION_X,
            y: REGION_Y,
            volume: VOLUME_RANGE,
        }
    }
}

/// Generates `n` delivery points with integer coordinates inside `region`,
/// a fair-coin priority flag and a volume drawn from `region.volume`.
pub fn generate_points<R: Rng + ?Sized>(n: usize, region: &PointRegion, rng: &mut R) -> Vec<Point> {
    let points: Vec<Point> = (0..n)
        .map(|_| {
            let x = rng.gen_range(region.x.0..=region.x.1);
            let y = rng.gen_range(region.y.0..=region.y.1);
            let priority = rng.gen_bool(0.5);
            let volume = rng.gen_range(region.volume.0..=region.volume.1);
            Point::new(x as f64, y as f64, priority, volume)
        })
        .collect();

    let total_volume: u64 = points.iter().map(|p| p.volume as u64).sum();
    let urgent = points.iter().filter(|p| p.priority).count();
    debug!("Generated {} points ({} urgent)", points.len(), urgent);
    debug!("Total volume: {}", total_volume);

    points
}

/// Reads a JSON array of points.
pub fn load_points(path: &Path) -> Result<Vec<Point>, Box<dyn std::error::Error>> {
    let file_content = fs::read_to_string(path)?;
    let points: Vec<Point> = serde_json::from_str(&file_content)?;
    info!("Loaded {} points from {}", points.len(), path.display());
    Ok(points)
}
