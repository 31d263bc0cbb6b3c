//! Per-node score lookup keyed by node type.

use std::collections::HashMap;
use super::PropagationError;

/// Default score for types missing from the table.
pub const DEFAULT_SCORE: f64 = 1.0;

/// Immutable type → score table with a fallback score.
///
/// Passed by reference into every walk so concurrent walks can use
/// different tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreModel {
  type_scores: HashMap<String, f64>,
  default_score: f64,
}

impl ScoreModel {
  /// Builds a table; every score must be finite and nonnegative.
  pub fn new(
    type_scores: HashMap<String, f64>,
    default_score: f64,
  ) -> Result<Self, PropagationError> {
    check_score("default_score", default_score)?;
    for (node_type, &score) in &type_scores {
      check_score(&format!("type {node_type:?}"), score)?;
    }
    Ok(Self {
      type_scores,
      default_score,
    })
  }

  /// Score for `node_type`, or the default score when the type is not listed.
  pub fn score(&self, node_type: &str) -> f64 {
    self
      .type_scores
      .get(node_type)
      .copied()
      .unwrap_or(self.default_score)
  }

  pub fn default_score(&self) -> f64 {
    self.default_score
  }

  pub fn type_scores(&self) -> &HashMap<String, f64> {
    &self.type_scores
  }
}

impl Default for ScoreModel {
  fn default() -> Self {
    Self {
      type_scores: HashMap::new(),
      default_score: DEFAULT_SCORE,
    }
  }
}

fn check_score(label: &str, score: f64) -> Result<(), PropagationError> {
  if score.is_finite() && score >= 0.0 {
    Ok(())
  } else {
    Err(PropagationError::InvalidScore {
      label: label.to_string(),
      score,
    })
  }
}
