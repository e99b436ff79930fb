//! Simulated Annealing over Ising partitions.
//!
//! Each iteration flips one spin, keeps the flip if it lowers the energy,
//! and otherwise keeps it with the Metropolis probability at the current
//! temperature. The run ends on a perfect partition, on the iteration cap,
//! or once the schedule has cooled to the threshold.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod acceptance;
mod config;
mod history;
mod runner;
mod schedule;

pub use acceptance::{accept, metropolis};
pub use config::{
    AnnealConfig, DEFAULT_INITIAL_TEMPERATURE, DEFAULT_TEMPERATURE_THRESHOLD, MAX_ITERATIONS,
};
pub use history::{record, EnergyHistory};
pub use runner::{AnnealResult, AnnealRunner, Termination};
pub use schedule::{temperature, CoolingScheme, DEFAULT_RATE};
