//! Ising energy of a partition.

use super::types::{NumberSet, Partition};
use crate::error::Result;

/// Default energy scale `A`.
pub const DEFAULT_ENERGY_SCALE: f64 = 1.0;

/// Computes `A * (Σ numbers[i] * spin[i])²`.
///
/// Zero means the two subsets have equal sums, the global optimum.
///
/// # Errors
///
/// [`PartitionError::LengthMismatch`](crate::error::PartitionError::LengthMismatch)
/// if the partition is not aligned with the number set.
pub fn energy(numbers: &NumberSet, partition: &Partition, scale: f64) -> Result<f64> {
    let sum = partition.signed_sum(numbers)?;
    Ok(scale * sum * sum)
}

/// [`energy`] with `A = 1`.
pub fn unit_energy(numbers: &NumberSet, partition: &Partition) -> Result<f64> {
    energy(numbers, partition, DEFAULT_ENERGY_SCALE)
}
