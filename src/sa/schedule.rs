//! Cooling schedules.
//!
//! Temperature is always derived from `(T0, t)`, never compounded from the
//! previous value, so the schedule cannot drift.

use std::fmt;
use tracing::debug;

/// Default time-scaling coefficient `K`.
pub const DEFAULT_RATE: f64 = 0.01;

/// Temperature as a function of the iteration counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingScheme {
    /// `T0 / (K t + 1)`, named `"T0/(1+t)"`.
    #[default]
    Harmonic,

    /// `T0 / sqrt(K t + 1)`, named `"T0/sqrt(1+t)"`.
    SquareRoot,

    /// `T0 exp(-t)`, named `"T0exp(-t)"`.
    ///
    /// Does not use the rate `K`.
    Exponential,
}

impl CoolingScheme {
    pub const HARMONIC_NAME: &'static str = "T0/(1+t)";
    pub const SQUARE_ROOT_NAME: &'static str = "T0/sqrt(1+t)";
    pub const EXPONENTIAL_NAME: &'static str = "T0exp(-t)";

    /// Parses a scheme name. Unknown names select [`CoolingScheme::Harmonic`].
    pub fn from_name(name: &str) -> Self {
        match name {
            Self::HARMONIC_NAME => CoolingScheme::Harmonic,
            Self::SQUARE_ROOT_NAME => CoolingScheme::SquareRoot,
            Self::EXPONENTIAL_NAME => CoolingScheme::Exponential,
            unknown => {
                debug!(scheme = unknown, "unknown cooling scheme, using harmonic");
                CoolingScheme::Harmonic
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CoolingScheme::Harmonic => Self::HARMONIC_NAME,
            CoolingScheme::SquareRoot => Self::SQUARE_ROOT_NAME,
            CoolingScheme::Exponential => Self::EXPONENTIAL_NAME,
        }
    }

    /// Temperature at `iteration` for initial temperature `t0` and rate `k`.
    pub fn temperature(self, t0: f64, iteration: usize, k: f64) -> f64 {
        let t = iteration as f64;
        match self {
            CoolingScheme::Harmonic => t0 / (k * t + 1.0),
            CoolingScheme::SquareRoot => t0 / (k * t + 1.0).sqrt(),
            CoolingScheme::Exponential => t0 * (-t).exp(),
        }
    }
}

impl From<&str> for CoolingScheme {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for CoolingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Free-function form of [`CoolingScheme::temperature`].
pub fn temperature(t0: f64, iteration: usize, scheme: CoolingScheme, rate: f64) -> f64 {
    scheme.temperature(t0, iteration, rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [CoolingScheme; 3] = [
        CoolingScheme::Harmonic,
        CoolingScheme::SquareRoot,
        CoolingScheme::Exponential,
    ];

    #[test]
    fn test_names_roundtrip() {
        for scheme in ALL {
            assert_eq!(CoolingScheme::from_name(scheme.name()), scheme);
            assert_eq!(CoolingScheme::from(scheme.to_string().as_str()), scheme);
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_harmonic() {
        assert_eq!(CoolingScheme::from_name("linear"), CoolingScheme::Harmonic);
        assert_eq!(CoolingScheme::from_name(""), CoolingScheme::Harmonic);
    }

    #[test]
    fn test_iteration_zero_is_initial() {
        for scheme in ALL {
            assert_eq!(temperature(10.0, 0, scheme, DEFAULT_RATE), 10.0);
        }
    }

    #[test]
    fn test_known_values() {
        assert!((temperature(10.0, 100, CoolingScheme::Harmonic, 0.01) - 5.0).abs() < 1e-12);
        assert!((temperature(10.0, 300, CoolingScheme::SquareRoot, 0.01) - 5.0).abs() < 1e-12);
        let e = temperature(10.0, 2, CoolingScheme::Exponential, 0.01);
        assert!((e - 10.0 * (-2.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_exponential_ignores_rate() {
        let a = temperature(10.0, 3, CoolingScheme::Exponential, 0.01);
        let b = temperature(10.0, 3, CoolingScheme::Exponential, 5.0);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn test_cooling_non_increasing(
            t0 in 0.01f64..1e4,
            k in 0.0f64..10.0,
            t in 0usize..10_000,
        ) {
            for scheme in ALL {
                let now = scheme.temperature(t0, t, k);
                let next = scheme.temperature(t0, t + 1, k);
                prop_assert!(next <= now, "{scheme}: {next} > {now}");
            }
        }
    }
}
