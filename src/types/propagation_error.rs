//! Errors raised at the propagation API boundary.

use thiserror::Error;

/// Invalid input to a walk or subnetwork call.
///
/// Walk outcomes (including being stuck at the seed) are never errors; these
/// variants only cover caller precondition violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropagationError {
  #[error("seed set must contain at least one node")]
  EmptySeedSet,
  #[error("seed node not found in graph: {0}")]
  UnknownSeed(String),
  #[error("max_steps must be a positive integer")]
  NonPositiveMaxSteps,
  #[error("max_cumulative_score must be positive and finite, got {0}")]
  InvalidMaxScore(f64),
  #[error("restart_prob must be within [0, 1], got {0}")]
  InvalidRestartProb(f64),
  #[error("score for {label} must be finite and nonnegative, got {score}")]
  InvalidScore { label: String, score: f64 },
  #[error("edge {from} -> {to} references missing node {missing}")]
  DanglingEdge {
    from: String,
    to: String,
    missing: String,
  },
  #[error("unknown seed selection strategy: {0}")]
  UnknownSeedSelectionStrategy(String),
  #[error("none of the requested seeds {0:?} were found")]
  NoMatchingSeeds(Vec<String>),
  #[error("walk task for seed {seed} failed: {reason}")]
  WalkTaskFailed { seed: String, reason: String },
}
