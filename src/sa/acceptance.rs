//! Metropolis acceptance criterion.

use crate::error::{PartitionError, Result};
use crate::ising::{energy, NumberSet, Partition};
use rand::Rng;

/// Decides whether to move from `current` to `candidate` at `temperature`.
///
/// Accepts with probability `min(1, exp(-ΔE / T))` by comparing one uniform
/// draw in `[0, 1)` against `exp(-ΔE / T)`.
///
/// # Errors
///
/// - [`PartitionError::NonPositiveTemperature`] if `temperature` is not a
///   positive number. The temperature is never clamped.
/// - [`PartitionError::LengthMismatch`] if either partition is misaligned.
pub fn accept<R: Rng + ?Sized>(
    numbers: &NumberSet,
    current: &Partition,
    candidate: &Partition,
    temperature: f64,
    scale: f64,
    rng: &mut R,
) -> Result<bool> {
    let current_energy = energy(numbers, current, scale)?;
    let candidate_energy = energy(numbers, candidate, scale)?;
    metropolis(candidate_energy - current_energy, temperature, rng)
}

/// Metropolis test on a precomputed energy difference.
pub fn metropolis<R: Rng + ?Sized>(delta: f64, temperature: f64, rng: &mut R) -> Result<bool> {
    if temperature.is_nan() || temperature <= 0.0 {
        return Err(PartitionError::NonPositiveTemperature(temperature));
    }
    let probability = (-delta / temperature).exp();
    Ok(rng.random::<f64>() < probability)
}
