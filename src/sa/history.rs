//! Append-only record of the energy after every iteration.

/// Energies in iteration order, one entry per iteration.
///
/// Only appends are possible; the history is threaded through a run and
/// handed back in its result.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyHistory {
    energies: Vec<f64>,
}

impl EnergyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, energy: f64) {
        self.energies.push(energy);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.energies
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    pub fn last(&self) -> Option<f64> {
        self.energies.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.energies.iter().copied()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.energies
    }
}

impl From<Vec<f64>> for EnergyHistory {
    fn from(energies: Vec<f64>) -> Self {
        Self { energies }
    }
}

/// Appends `energy`, starting a fresh history when `history` is `None`.
pub fn record(history: Option<EnergyHistory>, energy: f64) -> EnergyHistory {
    let mut history = history.unwrap_or_default();
    history.record(energy);
    history
}
