use rand::seq::IteratorRandom;
use rand::Rng;

use crate::domain::types::Route;
use crate::error::GaError;
use crate::utils::swap_indices;

pub fn validate_mutation_rate(mutation_rate: f64) -> Result<(), GaError> {
    if (0.0..=1.0).contains(&mutation_rate) {
        Ok(())
    } else {
        Err(GaError::InvalidConfiguration(format!(
            "mutation rate {} is outside [0, 1]",
            mutation_rate
        )))
    }
}

/// Single-swap mutation. One Bernoulli trial per call; on success two distinct
/// positions trade places.
///
/// `mutation_rate` is expected in `[0, 1]` (see [`validate_mutation_rate`]).
/// A NaN rate never fires.
pub fn mutate<R: Rng + ?Sized>(route: Route, mutation_rate: f64, rng: &mut R) -> Route {
    let n = route.len();
    if n < 2 {
        return route;
    }
    let fires = rng.gen::<f64>() < mutation_rate;
    if !fires {
        return route;
    }

    let pair: Vec<usize> = (0..n).choose_multiple(rng, 2);
    swap_indices(route, (pair[0], pair[1]))
}
