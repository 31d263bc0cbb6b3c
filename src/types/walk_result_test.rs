//! Tests for `WalkResult`.

use std::collections::BTreeMap;
use super::{TerminationReason, WalkResult, WalkStats};

fn result(weights: &[(&str, f64)]) -> WalkResult {
  WalkResult {
    node_weights: weights
      .iter()
      .map(|(id, w)| (id.to_string(), *w))
      .collect::<BTreeMap<_, _>>(),
    walk_stats: WalkStats {
      steps: 3,
      restarts: 0,
      forced_restarts: 0,
      termination_reason: TerminationReason::MaxSteps,
    },
  }
}

#[test]
fn top_nodes_sorts_by_weight_then_id() {
  let r = result(&[("c", 1.0), ("a", 3.0), ("b", 1.0), ("d", 0.5)]);
  assert_eq!(r.top_nodes(3), vec![("a", 3.0), ("b", 1.0), ("c", 1.0)]);
}

#[test]
fn top_nodes_handles_short_results() {
  let r = result(&[("only", 2.0)]);
  assert_eq!(r.top_nodes(5), vec![("only", 2.0)]);
  assert!(result(&[]).top_nodes(5).is_empty());
}

#[test]
fn weight_lookup_and_count() {
  let r = result(&[("a", 1.5), ("b", 2.0)]);
  assert_eq!(r.weight("a"), Some(1.5));
  assert_eq!(r.weight("z"), None);
  assert_eq!(r.visited_count(), 2);
}
