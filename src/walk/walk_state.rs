//! Mutable state of one walk. Created on walk entry, consumed into a `WalkResult` on exit.

use crate::types::{TerminationReason, WalkResult, WalkStats};
use std::collections::{BTreeMap, HashSet};

/// Where the walk goes after charging the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition<'g> {
  Move(&'g str),
  Restart(&'g str),
  ForcedRestart(&'g str),
}

impl<'g> Transition<'g> {
  pub(crate) fn target(self) -> &'g str {
    match self {
      Transition::Move(to) | Transition::Restart(to) | Transition::ForcedRestart(to) => to,
    }
  }
}

#[derive(Debug)]
pub(crate) struct WalkState<'g> {
  pub current: &'g str,
  pub cumulative_score: f64,
  pub steps: usize,
  pub restarts: usize,
  pub forced_restarts: usize,
  pub node_weights: BTreeMap<&'g str, f64>,
  /// Only filled when revisits are disallowed.
  pub visited: HashSet<&'g str>,
}

impl<'g> WalkState<'g> {
  /// Positions the walk on `seeds[0]`. Every seed starts with a zero weight
  /// entry, so seeds the walk never lands on still appear in the result.
  pub(crate) fn new(seeds: &[&'g str]) -> Self {
    Self {
      current: seeds[0],
      cumulative_score: 0.0,
      steps: 0,
      restarts: 0,
      forced_restarts: 0,
      node_weights: seeds.iter().map(|s| (*s, 0.0)).collect(),
      visited: HashSet::new(),
    }
  }

  /// Adds `score` to the current node's weight and to the cumulative score.
  pub(crate) fn charge(&mut self, score: f64, track_visits: bool) {
    *self.node_weights.entry(self.current).or_insert(0.0) += score;
    self.cumulative_score += score;
    if track_visits {
      self.visited.insert(self.current);
    }
  }

  /// Takes a transition: counts restarts and the step, then moves.
  pub(crate) fn advance(&mut self, transition: Transition<'g>) {
    match transition {
      Transition::Move(_) => {}
      Transition::Restart(_) => self.restarts += 1,
      Transition::ForcedRestart(_) => {
        self.restarts += 1;
        self.forced_restarts += 1;
      }
    }
    self.steps += 1;
    self.current = transition.target();
  }

  pub(crate) fn into_result(self, termination_reason: TerminationReason) -> WalkResult {
    WalkResult {
      node_weights: self
        .node_weights
        .into_iter()
        .map(|(id, w)| (id.to_string(), w))
        .collect(),
      walk_stats: WalkStats {
        steps: self.steps,
        restarts: self.restarts,
        forced_restarts: self.forced_restarts,
        termination_reason,
      },
    }
  }
}
