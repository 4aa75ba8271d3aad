//! Seeded random source for workout generation
//!
//! Every random decision in the engine flows through one `SetRng` per
//! invocation, so a workout is fully reproducible from its seed. ChaCha8
//! gives the same stream on every platform, which is what makes stored
//! seeds meaningful across builds.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct SetRng {
  inner: ChaCha8Rng,
}

impl SetRng {
  pub fn seeded(seed: u64) -> Self {
    Self {
      inner: ChaCha8Rng::seed_from_u64(seed),
    }
  }

  /// Uniform float in [0, 1).
  pub fn next(&mut self) -> f64 {
    self.inner.gen::<f64>()
  }

  /// Uniformly selected element of a non-empty slice.
  pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
    let idx = self.inner.gen_range(0..items.len());
    &items[idx]
  }

  /// Index selected with probability proportional to its weight.
  ///
  /// Walks the cumulative sum; any floating-point remainder lands on the
  /// last entry.
  pub fn weighted_index(&mut self, weights: &[u32]) -> usize {
    let total: u32 = weights.iter().sum();
    let mut roll = self.next() * f64::from(total);
    for (idx, weight) in weights.iter().enumerate() {
      let weight = f64::from(*weight);
      if roll < weight {
        return idx;
      }
      roll -= weight;
    }
    weights.len() - 1
  }

  /// True with probability `p`.
  pub fn chance(&mut self, p: f64) -> bool {
    self.next() < p
  }

  /// Uniform integer in [min, max], inclusive on both ends.
  pub fn int_in_range(&mut self, min: u32, max: u32) -> u32 {
    self.inner.gen_range(min..=max)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
