//! Output of one walk: accumulated node weights plus diagnostics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use super::WalkStats;

/// Output of one walk: accumulated node weights plus diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkResult {
  pub node_weights: BTreeMap<String, f64>,
  pub walk_stats: WalkStats,
}

impl WalkResult {
  pub fn weight(&self, id: &str) -> Option<f64> {
    self.node_weights.get(id).copied()
  }

  pub fn visited_count(&self) -> usize {
    self.node_weights.len()
  }

  /// The `n` heaviest nodes, weight descending then id ascending.
  pub fn top_nodes(&self, n: usize) -> Vec<(&str, f64)> {
    let mut ranked: Vec<(&str, f64)> = self
      .node_weights
      .iter()
      .map(|(id, w)| (id.as_str(), *w))
      .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(n);
    ranked
  }
}
