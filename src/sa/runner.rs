//! Annealing loop.

use super::acceptance::metropolis;
use super::config::AnnealConfig;
use super::history::EnergyHistory;
use crate::error::Result;
use crate::ising::{energy, initial_partition, neighbor, NumberSet, Partition};
use crate::random::rng_from_seed;
use rand::Rng;
use std::fmt;
use tracing::{debug, instrument, trace};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The current partition reached energy 0.
    ConvergedZeroEnergy,
    /// `max_iterations` iterations were executed.
    IterationCapReached,
    /// The temperature fell to or below the threshold.
    TemperatureBelowThreshold,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Termination::ConvergedZeroEnergy => "converged to zero energy",
            Termination::IterationCapReached => "iteration cap reached",
            Termination::TemperatureBelowThreshold => "temperature below threshold",
        };
        f.write_str(s)
    }
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The current partition when the run stopped.
    pub partition: Partition,

    /// Energy of `partition`.
    pub energy: f64,

    /// Why the run stopped.
    pub termination: Termination,

    /// Iterations executed in this run.
    pub iterations: usize,

    /// Temperature of the last iteration (the initial one if none ran).
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Lowest-energy partition seen, starting point included.
    pub best: Partition,

    /// Energy of `best`.
    pub best_energy: f64,

    /// The history passed in, extended by one entry per iteration.
    pub history: EnergyHistory,
}

impl AnnealResult {
    pub fn converged(&self) -> bool {
        self.termination == Termination::ConvergedZeroEnergy
    }
}

/// Runs simulated annealing on a number set.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Anneals from a random partition with a fresh history.
    ///
    /// The generator is seeded from `config.seed`, or from entropy when unset.
    pub fn run(numbers: &NumberSet, config: &AnnealConfig) -> Result<AnnealResult> {
        let mut rng = rng_from_seed(config.seed);
        let initial = initial_partition(numbers.len(), &mut rng);
        Self::run_from(numbers, config, initial, EnergyHistory::new(), &mut rng)
    }

    /// Anneals from `initial`, appending to `history` and drawing from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the generator.
    ///
    /// # Errors
    ///
    /// - [`PartitionError::InvalidConfig`](crate::error::PartitionError::InvalidConfig)
    ///   if `config` does not validate.
    /// - [`PartitionError::LengthMismatch`](crate::error::PartitionError::LengthMismatch)
    ///   if `initial` is not aligned with `numbers`.
    #[instrument(skip_all, fields(n = numbers.len()))]
    pub fn run_from<R: Rng + ?Sized>(
        numbers: &NumberSet,
        config: &AnnealConfig,
        initial: Partition,
        mut history: EnergyHistory,
        rng: &mut R,
    ) -> Result<AnnealResult> {
        config.validate()?;
        numbers.check_aligned(&initial)?;

        let scale = config.energy_scale;
        let cooling = config.loop_cooling();
        if cooling != config.cooling {
            debug!(requested = %config.cooling, "loop cools harmonically");
        }

        let mut current_energy = energy(numbers, &initial, scale)?;
        let mut current = initial;
        let mut best = current.clone();
        let mut best_energy = current_energy;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        debug!(
            energy = current_energy,
            t0 = temperature,
            max_iterations = config.max_iterations,
            "annealing started"
        );

        let termination = if current_energy == 0.0 {
            Termination::ConvergedZeroEnergy
        } else {
            loop {
                if iterations >= config.max_iterations {
                    break Termination::IterationCapReached;
                }
                if temperature <= config.temperature_threshold {
                    break Termination::TemperatureBelowThreshold;
                }

                temperature =
                    cooling.temperature(config.initial_temperature, iterations, config.rate);

                let candidate = neighbor(&current, rng)?;
                let candidate_energy = energy(numbers, &candidate, scale)?;

                let accept = if candidate_energy < current_energy {
                    improving_moves += 1;
                    true
                } else {
                    metropolis(candidate_energy - current_energy, temperature, rng)?
                };

                if accept {
                    trace!(iterations, from = current_energy, to = candidate_energy, "accepted");
                    current = candidate;
                    current_energy = candidate_energy;
                    accepted_moves += 1;

                    if current_energy < best_energy {
                        best = current.clone();
                        best_energy = current_energy;
                    }
                }

                history.record(current_energy);
                iterations += 1;

                if current_energy == 0.0 {
                    break Termination::ConvergedZeroEnergy;
                }
            }
        };

        debug!(
            %termination,
            iterations,
            energy = current_energy,
            temperature,
            "annealing finished"
        );

        Ok(AnnealResult {
            partition: current,
            energy: current_energy,
            termination,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            best,
            best_energy,
            history,
        })
    }
}
