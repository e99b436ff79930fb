//! Error type shared by the energy model and the annealing engine.

use thiserror::Error;

/// Errors reported by partition construction, scoring and annealing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PartitionError {
    #[error("partition has {spins} spins but the number set has {numbers} numbers")]
    LengthMismatch { numbers: usize, spins: usize },

    #[error("spin at index {index} must be +1 or -1, got {value}")]
    InvalidSpin { index: usize, value: i64 },

    #[error("number at index {index} is not finite: {value}")]
    NonFiniteNumber { index: usize, value: f64 },

    #[error("cannot pick a neighbor of an empty partition")]
    EmptyPartition,

    #[error("acceptance requires a positive temperature, got {0}")]
    NonPositiveTemperature(f64),

    #[error("invalid annealing configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results carrying [`PartitionError`].
pub type Result<T> = std::result::Result<T, PartitionError>;
