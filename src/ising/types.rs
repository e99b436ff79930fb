//! Spins, partitions and the number set being partitioned.

use crate::error::{PartitionError, Result};
use std::fmt;

/// An Ising spin: which of the two subsets a number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spin {
    /// `-1`
    Down,
    /// `+1`
    Up,
}

impl Spin {
    /// Numeric value of the spin, `-1.0` or `+1.0`.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Spin::Down => -1.0,
            Spin::Up => 1.0,
        }
    }

    /// The opposite spin.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Spin::Down => Spin::Up,
            Spin::Up => Spin::Down,
        }
    }

    /// Maps a binary draw to a spin: `false` is `-1`, `true` is `+1`.
    #[inline]
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Spin::Up
        } else {
            Spin::Down
        }
    }
}

impl TryFrom<i64> for Spin {
    type Error = i64;

    fn try_from(value: i64) -> std::result::Result<Self, i64> {
        match value {
            1 => Ok(Spin::Up),
            -1 => Ok(Spin::Down),
            other => Err(other),
        }
    }
}

impl From<Spin> for i8 {
    fn from(spin: Spin) -> i8 {
        match spin {
            Spin::Down => -1,
            Spin::Up => 1,
        }
    }
}

/// The immutable sequence of reals to split into two equal-sum subsets.
///
/// An empty set is allowed; it is trivially perfectly partitioned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberSet {
    values: Vec<f64>,
}

impl NumberSet {
    /// Builds a number set, rejecting NaN and infinite values.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PartitionError::NonFiniteNumber { index, value });
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all numbers.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Fails unless `partition` is positionally aligned with this set.
    pub fn check_aligned(&self, partition: &Partition) -> Result<()> {
        if self.len() != partition.len() {
            return Err(PartitionError::LengthMismatch {
                numbers: self.len(),
                spins: partition.len(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<f64>> for NumberSet {
    type Error = PartitionError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

/// A sign assignment, element `i` giving the subset of number `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    spins: Vec<Spin>,
}

impl Partition {
    pub fn new(spins: Vec<Spin>) -> Self {
        Self { spins }
    }

    /// Builds a partition from `±1` integers.
    ///
    /// # Errors
    ///
    /// [`PartitionError::InvalidSpin`] for the first value that is not `±1`.
    pub fn from_signs<I>(signs: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let spins = signs
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                Spin::try_from(value).map_err(|value| PartitionError::InvalidSpin { index, value })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { spins })
    }

    pub fn spins(&self) -> &[Spin] {
        &self.spins
    }

    pub fn len(&self) -> usize {
        self.spins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    /// Spins as `±1` integers.
    pub fn signs(&self) -> Vec<i8> {
        self.spins.iter().map(|&s| i8::from(s)).collect()
    }

    /// Returns a copy with the spin at `index` flipped.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn with_flipped(&self, index: usize) -> Self {
        let mut spins = self.spins.clone();
        spins[index] = spins[index].flipped();
        Self { spins }
    }

    /// Indices where `self` and `other` disagree.
    pub fn differing_indices(&self, other: &Partition) -> Vec<usize> {
        self.spins
            .iter()
            .zip(&other.spins)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect()
    }

    /// `Σ numbers[i] * spin[i]`.
    pub fn signed_sum(&self, numbers: &NumberSet) -> Result<f64> {
        numbers.check_aligned(self)?;
        Ok(numbers
            .values()
            .iter()
            .zip(&self.spins)
            .map(|(x, s)| x * s.value())
            .sum())
    }

    /// Splits the numbers into the `+1` subset and the `-1` subset.
    pub fn subsets(&self, numbers: &NumberSet) -> Result<(Vec<f64>, Vec<f64>)> {
        numbers.check_aligned(self)?;
        let mut up = Vec::new();
        let mut down = Vec::new();
        for (&x, spin) in numbers.values().iter().zip(&self.spins) {
            match spin {
                Spin::Up => up.push(x),
                Spin::Down => down.push(x),
            }
        }
        Ok((up, down))
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, spin) in self.spins.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:+}", i8::from(*spin))?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(v: &[f64]) -> NumberSet {
        NumberSet::new(v.to_vec()).unwrap()
    }

    #[test]
    fn test_spin_flip_and_value() {
        assert_eq!(Spin::Up.flipped(), Spin::Down);
        assert_eq!(Spin::Down.flipped().flipped(), Spin::Down);
        assert_eq!(Spin::Up.value(), 1.0);
        assert_eq!(Spin::Down.value(), -1.0);
        assert_eq!(Spin::from_bit(false), Spin::Down);
        assert_eq!(Spin::from_bit(true), Spin::Up);
    }

    #[test]
    fn test_number_set_rejects_nan() {
        let err = NumberSet::new(vec![1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, PartitionError::NonFiniteNumber { index: 1, .. }));
        assert!(NumberSet::new(vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn test_empty_number_set_allowed() {
        let set = numbers(&[]);
        assert!(set.is_empty());
        assert_eq!(set.total(), 0.0);
    }

    #[test]
    fn test_from_signs_validates() {
        let p = Partition::from_signs([1, -1, 1]).unwrap();
        assert_eq!(p.spins(), &[Spin::Up, Spin::Down, Spin::Up]);
        assert_eq!(p.signs(), vec![1, -1, 1]);

        let err = Partition::from_signs([1, 0, -1]).unwrap_err();
        assert_eq!(err, PartitionError::InvalidSpin { index: 1, value: 0 });
    }

    #[test]
    fn test_with_flipped_leaves_original() {
        let p = Partition::from_signs([1, 1, -1]).unwrap();
        let q = p.with_flipped(2);
        assert_eq!(p.signs(), vec![1, 1, -1]);
        assert_eq!(q.signs(), vec![1, 1, 1]);
        assert_eq!(p.differing_indices(&q), vec![2]);
    }

    #[test]
    fn test_signed_sum_and_subsets() {
        let set = numbers(&[3.0, 1.0, 1.0, 2.0, 2.0, 1.0]);
        let p = Partition::from_signs([1, 1, -1, 1, -1, -1]).unwrap();
        assert_eq!(p.signed_sum(&set).unwrap(), 0.0);

        let (up, down) = p.subsets(&set).unwrap();
        assert_eq!(up, vec![3.0, 1.0, 2.0]);
        assert_eq!(down, vec![1.0, 2.0, 1.0]);
        assert_eq!(up.iter().sum::<f64>(), down.iter().sum::<f64>());
    }

    #[test]
    fn test_length_mismatch() {
        let set = numbers(&[1.0, 2.0]);
        let p = Partition::from_signs([1]).unwrap();
        assert_eq!(
            p.signed_sum(&set).unwrap_err(),
            PartitionError::LengthMismatch { numbers: 2, spins: 1 }
        );
    }

    #[test]
    fn test_display() {
        let p = Partition::from_signs([1, -1]).unwrap();
        assert_eq!(p.to_string(), "[+1, -1]");
    }
}
