//! Tests for `TerminationReason` and `WalkStats`.

use super::{TerminationReason, WalkStats};

#[test]
fn display_reasons() {
  assert_eq!(TerminationReason::MaxSteps.to_string(), "max_steps");
  assert_eq!(TerminationReason::MaxScore.to_string(), "max_score");
  assert_eq!(TerminationReason::DeadEnd.to_string(), "dead_end");
}

#[test]
fn stats_serialize_with_snake_case_reason() {
  let stats = WalkStats {
    steps: 6,
    restarts: 1,
    forced_restarts: 0,
    termination_reason: TerminationReason::DeadEnd,
  };
  let v = serde_json::to_value(stats).unwrap();
  assert_eq!(v["steps"], 6);
  assert_eq!(v["restarts"], 1);
  assert_eq!(v["forced_restarts"], 0);
  assert_eq!(v["termination_reason"], "dead_end");
}
