use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::types::Route;

/// True when `route` holds every index in `0..n` exactly once.
pub fn is_permutation(route: &[usize], n: usize) -> bool {
    if route.len() != n {
        return false;
    }

    let mut seen = vec![false; n];
    for &gene in route {
        if gene >= n || seen[gene] {
            return false;
        }
        seen[gene] = true;
    }
    true
}

pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Route {
    let mut route: Route = (0..n).collect();
    route.shuffle(rng);
    route
}

pub fn swap_indices(route: Route, indices: (usize, usize)) -> Route {
    let mut new_route = route;
    new_route.swap(indices.0, indices.1);
    new_route
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn detects_permutations() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(is_permutation(&[], 0));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 5], 3));
    }

    #[test]
    fn random_permutations_are_permutations() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for n in [0, 1, 2, 9, 64] {
            for _ in 0..20 {
                assert!(is_permutation(&random_permutation(n, &mut rng), n));
            }
        }
    }

    #[test]
    fn swap_indices_moves_two_genes() {
        assert_eq!(swap_indices(vec![0, 1, 2, 3], (0, 3)), vec![3, 1, 2, 0]);
    }
}
