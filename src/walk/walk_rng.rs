//! Randomness seam for the walk engines.

use rand::Rng;

/// The two draws a walk needs.
///
/// Every `rand::Rng` is a `WalkRng`; pass a seeded generator
/// (e.g. `StdRng::seed_from_u64`) for reproducible walks.
pub trait WalkRng {
  /// Uniform draw in `[0, 1)`, compared against the restart probability.
  fn next_unit(&mut self) -> f64;

  /// Uniform index in `0..len`. Callers never pass `len == 0`.
  fn next_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> WalkRng for R {
  fn next_unit(&mut self) -> f64 {
    self.gen_range(0.0..1.0)
  }

  fn next_index(&mut self, len: usize) -> usize {
    self.gen_range(0..len)
  }
}
