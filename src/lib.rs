//! Number partitioning by simulated annealing.
//!
//! Given real numbers `x_1..x_n`, find signs `s_i ∈ {-1, +1}` minimizing
//! `(Σ x_i s_i)²`. Energy zero means the numbers split into two subsets
//! with equal sums.
//!
//! - [`ising`]: spins, partitions, the energy model and neighbor moves.
//! - [`sa`]: cooling schedules, the Metropolis rule, the energy history
//!   and the annealing loop.
//!
//! # Examples
//!
//! ```
//! use u_partition::ising::NumberSet;
//! use u_partition::sa::{AnnealConfig, AnnealRunner, Termination};
//!
//! let numbers = NumberSet::new(vec![3.0, 1.0, 1.0, 2.0, 2.0, 1.0]).unwrap();
//! let config = AnnealConfig::default().with_max_iterations(1000).with_seed(42);
//! let result = AnnealRunner::run(&numbers, &config).unwrap();
//!
//! assert_eq!(result.termination, Termination::ConvergedZeroEnergy);
//! assert_eq!(result.energy, 0.0);
//! ```

pub mod error;
pub mod ising;
pub mod random;
pub mod sa;

pub use error::{PartitionError, Result};
