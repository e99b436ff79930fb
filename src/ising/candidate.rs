//! Candidate generation: random starting points and single-spin-flip moves.

use super::types::{Partition, Spin};
use crate::error::{PartitionError, Result};
use rand::Rng;

/// Draws `n` independent fair spins.
pub fn initial_partition<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Partition {
    Partition::new((0..n).map(|_| Spin::from_bit(rng.random::<bool>())).collect())
}

/// Returns a copy of `current` with exactly one uniformly chosen spin flipped.
///
/// # Errors
///
/// [`PartitionError::EmptyPartition`] when `current` has no spins to flip.
pub fn neighbor<R: Rng + ?Sized>(current: &Partition, rng: &mut R) -> Result<Partition> {
    if current.is_empty() {
        return Err(PartitionError::EmptyPartition);
    }
    let index = rng.random_range(0..current.len());
    Ok(current.with_flipped(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_initial_partition_length() {
        let mut rng = create_rng(42);
        assert_eq!(initial_partition(17, &mut rng).len(), 17);
        assert!(initial_partition(0, &mut rng).is_empty());
    }

    #[test]
    fn test_initial_partition_uses_both_signs() {
        let mut rng = create_rng(42);
        let p = initial_partition(256, &mut rng);
        let ups = p.spins().iter().filter(|&&s| s == Spin::Up).count();
        assert!(ups > 64 && ups < 192, "skewed draw: {ups} ups of 256");
    }

    #[test]
    fn test_initial_partition_is_seeded() {
        let a = initial_partition(32, &mut create_rng(9));
        let b = initial_partition(32, &mut create_rng(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_neighbor_of_empty_fails() {
        let mut rng = create_rng(1);
        assert_eq!(
            neighbor(&Partition::new(vec![]), &mut rng).unwrap_err(),
            PartitionError::EmptyPartition
        );
    }

    #[test]
    fn test_neighbor_of_singleton_flips_it() {
        let mut rng = create_rng(1);
        let p = Partition::from_signs([1]).unwrap();
        assert_eq!(neighbor(&p, &mut rng).unwrap().signs(), vec![-1]);
    }

    #[test]
    fn test_neighbor_reaches_every_index() {
        let mut rng = create_rng(3);
        let p = Partition::from_signs([1, 1, 1, 1]).unwrap();
        let mut seen = [false; 4];
        for _ in 0..200 {
            let q = neighbor(&p, &mut rng).unwrap();
            seen[q.differing_indices(&p)[0]] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    proptest! {
        #[test]
        fn test_neighbor_differs_in_exactly_one(n in 1usize..64, seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let p = initial_partition(n, &mut rng);
            let q = neighbor(&p, &mut rng).unwrap();
            prop_assert_eq!(q.len(), p.len());
            prop_assert_eq!(q.differing_indices(&p).len(), 1);
        }
    }
}
