use rand::Rng;

use crate::domain::types::Route;

/// Order crossover (OX1) with randomly drawn cut points.
///
/// # Panics
///
/// Panics if the parents are not permutations of the same length.
pub fn crossover<R: Rng + ?Sized>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Route {
    if parent1.is_empty() {
        return Route::new();
    }
    let cuts = pick_cut_points(parent1.len(), rng);
    order_crossover(parent1, parent2, cuts)
}

/// Two cut points drawn independently from `[0, len)`, returned as `start <= end`.
///
/// # Panics
///
/// Panics if `len` is 0.
pub fn pick_cut_points<R: Rng + ?Sized>(len: usize, rng: &mut R) -> (usize, usize) {
    let mut start = rng.gen_range(0..len);
    let mut end = rng.gen_range(0..len);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }
    (start, end)
}

/// Copy `parent1[start..=end]` into the child, then fill the remaining slots left to right
/// with the genes of `parent2` that are not in that segment, in `parent2`'s order.
///
/// # Panics
///
/// Panics if the parents differ in length, hold genes outside `0..len`, or the cut points
/// are not `start <= end < len`.
pub fn order_crossover(parent1: &[usize], parent2: &[usize], (start, end): (usize, usize)) -> Route {
    let len = parent1.len();
    assert_eq!(len, parent2.len(), "parents must have the same length");
    assert!(
        start <= end && end < len,
        "cut points ({}, {}) out of range for length {}",
        start,
        end,
        len
    );

    let mut in_segment = vec![false; len];
    for &gene in &parent1[start..=end] {
        in_segment[gene] = true;
    }

    let mut fill = parent2.iter().copied().filter(|&gene| !in_segment[gene]);

    let mut child = Route::with_capacity(len);
    for position in 0..len {
        if (start..=end).contains(&position) {
            child.push(parent1[position]);
        } else if let Some(gene) = fill.next() {
            child.push(gene);
        }
    }
    child
}
