#![allow(dead_code)]

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use route_ga::Point;

/// Replays a fixed sequence of words, wrapping around at the end.
pub struct MockRng {
    data: Vec<u64>,
    index: usize,
}

impl MockRng {
    pub fn new(data: Vec<u64>) -> Self {
        MockRng { data, index: 0 }
    }
}

impl RngCore for MockRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.data[self.index % self.data.len()];
        self.index = (self.index + 1) % self.data.len();
        value
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst.iter_mut() {
            *byte = 0;
        }
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dst);
        Ok(())
    }
}

pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn unit_square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0, false, 5),
        Point::new(10.0, 0.0, false, 5),
        Point::new(10.0, 10.0, false, 5),
        Point::new(0.0, 10.0, false, 5),
    ]
}

/// Deterministic pseudo-scattered points with a mix of flags and volumes.
pub fn scattered(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let x = ((i * 73) % 211) as f64;
            let y = ((i * 41) % 157) as f64;
            Point::new(x, y, i % 5 == 3, 1 + (i as u32 * 7) % 10)
        })
        .collect()
}

/// Points stacked on one spot so that only penalties contribute to cost.
pub fn stacked(n: usize, priority_at: &[usize], volume: u32) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(3.0, 4.0, priority_at.contains(&i), volume))
        .collect()
}
