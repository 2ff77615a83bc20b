use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::individual::Individual;
use crate::error::GaError;

/// Tournament selection: sample `pool_size` distinct individuals and return the fittest.
/// Ties go to the individual sampled first.
pub fn tournament_select<'a, R: Rng + ?Sized>(
    individuals: &'a [Individual],
    pool_size: usize,
    rng: &mut R,
) -> Result<&'a Individual, GaError> {
    if pool_size == 0 {
        return Err(GaError::InvalidConfiguration(
            "tournament pool size must be at least 1".to_string(),
        ));
    }
    if pool_size > individuals.len() {
        return Err(GaError::InvalidConfiguration(format!(
            "tournament pool size {} exceeds population size {}",
            pool_size,
            individuals.len()
        )));
    }

    individuals
        .choose_multiple(rng, pool_size)
        .reduce(|best, candidate| {
            if candidate.fitness() > best.fitness() {
                candidate
            } else {
                best
            }
        })
        .ok_or_else(|| GaError::InvalidConfiguration("empty tournament pool".to_string()))
}
