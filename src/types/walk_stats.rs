//! Walk diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
  MaxSteps,
  MaxScore,
  DeadEnd,
}

impl fmt::Display for TerminationReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TerminationReason::MaxSteps => write!(f, "max_steps"),
      TerminationReason::MaxScore => write!(f, "max_score"),
      TerminationReason::DeadEnd => write!(f, "dead_end"),
    }
  }
}

/// Aggregate counters for one walk (all seeds together in multi-seed mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkStats {
  pub steps: usize,
  /// Every restart, forced ones included.
  pub restarts: usize,
  pub forced_restarts: usize,
  pub termination_reason: TerminationReason,
}
