//! Ising formulation of number partitioning.
//!
//! Each number gets a spin `s_i ∈ {-1, +1}` naming its subset. The energy
//! `A * (Σ x_i s_i)²` is zero exactly when both subsets have equal sums.
//!
//! # References
//!
//! - Lucas (2014), "Ising formulations of many NP problems", §2.1

mod candidate;
mod energy;
mod types;

pub use candidate::{initial_partition, neighbor};
pub use energy::{energy, unit_energy, DEFAULT_ENERGY_SCALE};
pub use types::{NumberSet, Partition, Spin};
