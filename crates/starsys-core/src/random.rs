//! Random source abstraction threaded through every generator.
//!
//! Anything implementing [`rand::Rng`] is a [`RandomSource`], so callers can
//! pass `rand::thread_rng()` or a seeded [`ChaCha8Rng`]. Tests that need to
//! force a particular branch use [`ScriptedRandom`] instead.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the two kinds of draws generation needs.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[low, high]`, inclusive on both ends.
    fn next_in_range(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_in_range(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..=high)
    }
}

/// Reproducible generator for a given seed.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draw a unit value and check it really lies in `[0, 1)`.
///
/// A value outside that range means the source is broken; there is no
/// sensible way to continue, so this panics.
pub(crate) fn draw_unit<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    let r = rng.next_unit();
    assert!(
        (0.0..1.0).contains(&r),
        "random source produced {r}, outside [0, 1)"
    );
    r
}

/// Replays fixed sequences of draws.
///
/// Unit draws and integer draws are queued separately and consumed in order.
/// Running out of either queue, or scripting an integer outside the range the
/// caller asked for, panics.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    units: VecDeque<f64>,
    integers: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unit draws to the queue.
    pub fn with_units(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(values);
        self
    }

    /// Append integer draws to the queue.
    pub fn with_integers(mut self, values: impl IntoIterator<Item = usize>) -> Self {
        self.integers.extend(values);
        self
    }

    /// True once every scripted draw has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.units.is_empty() && self.integers.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        match self.units.pop_front() {
            Some(value) => value,
            None => panic!("scripted random source ran out of unit draws"),
        }
    }

    fn next_in_range(&mut self, low: usize, high: usize) -> usize {
        let value = match self.integers.pop_front() {
            Some(value) => value,
            None => panic!("scripted random source ran out of integer draws"),
        };
        assert!(
            (low..=high).contains(&value),
            "scripted integer {value} outside requested range {low}..={high}"
        );
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = seeded_rng(7);
        let mut b = seeded_rng(7);

        for _ in 0..20 {
            assert_eq!(a.next_unit(), b.next_unit());
            assert_eq!(a.next_in_range(0, 8), b.next_in_range(0, 8));
        }
    }

    #[test]
    fn test_inclusive_range_hits_both_ends() {
        let mut rng = seeded_rng(42);
        let draws: Vec<usize> = (0..500).map(|_| rng.next_in_range(1, 3)).collect();

        assert!(draws.iter().all(|d| (1..=3).contains(d)));
        assert!(draws.contains(&1));
        assert!(draws.contains(&3));
    }

    #[test]
    fn test_scripted_replays_in_order() {
        let mut rng = ScriptedRandom::new()
            .with_units([0.25, 0.75])
            .with_integers([2, 0]);

        assert_eq!(rng.next_unit(), 0.25);
        assert_eq!(rng.next_in_range(1, 3), 2);
        assert_eq!(rng.next_unit(), 0.75);
        assert_eq!(rng.next_in_range(0, 8), 0);
        assert!(rng.is_exhausted());
    }

    #[test]
    #[should_panic(expected = "ran out of unit draws")]
    fn test_scripted_panics_when_exhausted() {
        let mut rng = ScriptedRandom::new();
        rng.next_unit();
    }

    #[test]
    #[should_panic(expected = "outside [0, 1)")]
    fn test_draw_unit_rejects_out_of_range() {
        let mut rng = ScriptedRandom::new().with_units([1.0]);
        draw_unit(&mut rng);
    }
}
