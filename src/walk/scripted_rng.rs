//! Scripted random source for tests that pin every draw of a walk.

use std::collections::VecDeque;
use super::WalkRng;

/// Replays fixed unit draws and index draws, panicking when a script runs dry.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRng {
  units: VecDeque<f64>,
  indices: VecDeque<usize>,
}

impl ScriptedRng {
  pub(crate) fn new(units: &[f64], indices: &[usize]) -> Self {
    Self {
      units: units.iter().copied().collect(),
      indices: indices.iter().copied().collect(),
    }
  }

  pub(crate) fn is_exhausted(&self) -> bool {
    self.units.is_empty() && self.indices.is_empty()
  }
}

impl WalkRng for ScriptedRng {
  fn next_unit(&mut self) -> f64 {
    self.units.pop_front().expect("scripted unit draws exhausted")
  }

  fn next_index(&mut self, len: usize) -> usize {
    let i = self.indices.pop_front().expect("scripted index draws exhausted");
    assert!(i < len, "scripted index {i} out of range for {len} candidates");
    i
  }
}
