//! Walk parameters: restart probability, budgets, revisit and restart policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use super::PropagationError;

/// How a multi-seed walk picks the seed it restarts to.
///
/// Parsing, from text or from config files, is case-insensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum SeedSelectionStrategy {
  /// Uniform draw over all seeds on every restart.
  #[default]
  Uniform,
}

impl fmt::Display for SeedSelectionStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SeedSelectionStrategy::Uniform => write!(f, "uniform"),
    }
  }
}

impl FromStr for SeedSelectionStrategy {
  type Err = PropagationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.trim().eq_ignore_ascii_case("uniform") {
      Ok(SeedSelectionStrategy::Uniform)
    } else {
      Err(PropagationError::UnknownSeedSelectionStrategy(s.to_string()))
    }
  }
}

impl TryFrom<String> for SeedSelectionStrategy {
  type Error = PropagationError;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    s.parse()
  }
}

/// Walk parameters shared by single- and multi-seed walks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkConfig {
  /// Probability of jumping back to a seed instead of moving to a neighbor.
  pub restart_prob: f64,
  /// Walk stops once the total charged score reaches this budget.
  pub max_cumulative_score: f64,
  /// Walk stops once this many transitions have been taken.
  pub max_steps: usize,
  /// When false, moves only go to nodes not visited yet.
  pub allow_revisits: bool,
  pub seed_selection: SeedSelectionStrategy,
}

impl Default for WalkConfig {
  fn default() -> Self {
    Self {
      restart_prob: 0.2,
      max_cumulative_score: 10.0,
      max_steps: 100,
      allow_revisits: true,
      seed_selection: SeedSelectionStrategy::Uniform,
    }
  }
}

impl WalkConfig {
  pub fn validate(&self) -> Result<(), PropagationError> {
    if !(0.0..=1.0).contains(&self.restart_prob) {
      return Err(PropagationError::InvalidRestartProb(self.restart_prob));
    }
    if !(self.max_cumulative_score.is_finite() && self.max_cumulative_score > 0.0) {
      return Err(PropagationError::InvalidMaxScore(self.max_cumulative_score));
    }
    if self.max_steps == 0 {
      return Err(PropagationError::NonPositiveMaxSteps);
    }
    Ok(())
  }
}
