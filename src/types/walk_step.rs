//! Per-iteration walk trace entries, recorded by the `*_traced` walk entry points.

use serde::{Deserialize, Serialize};
use super::TerminationReason;

/// What the walk did after charging the current node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WalkAction {
  Move { to: String },
  Restart { to: String },
  /// No unvisited neighbor was left while revisits are disallowed.
  ForcedRestart { to: String },
  Terminate { reason: TerminationReason },
}

impl WalkAction {
  /// Landing node of a move or restart.
  pub fn target(&self) -> Option<&str> {
    match self {
      WalkAction::Move { to } | WalkAction::Restart { to } | WalkAction::ForcedRestart { to } => {
        Some(to.as_str())
      }
      WalkAction::Terminate { .. } => None,
    }
  }

  pub fn is_restart(&self) -> bool {
    matches!(
      self,
      WalkAction::Restart { .. } | WalkAction::ForcedRestart { .. }
    )
  }
}

/// One recorded walk iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkStepEntry {
  /// 1-based iteration index.
  pub iteration: usize,
  /// Node charged on this iteration.
  pub node_id: String,
  pub score: f64,
  /// Cumulative score after the charge.
  pub cumulative_score: f64,
  pub action: WalkAction,
}
