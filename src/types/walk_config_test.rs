//! Tests for `WalkConfig` and `SeedSelectionStrategy`.

use super::{PropagationError, SeedSelectionStrategy, WalkConfig};

#[test]
fn default_config_is_valid() {
  let c = WalkConfig::default();
  assert!(c.validate().is_ok());
  assert_eq!(c.restart_prob, 0.2);
  assert_eq!(c.max_steps, 100);
  assert!(c.allow_revisits);
}

#[test]
fn restart_prob_bounds_are_inclusive() {
  for p in [0.0, 1.0] {
    let c = WalkConfig {
      restart_prob: p,
      ..WalkConfig::default()
    };
    assert!(c.validate().is_ok(), "restart_prob {p} should be valid");
  }
}

#[test]
fn restart_prob_out_of_range_is_rejected() {
  for p in [-0.1, 1.5] {
    let c = WalkConfig {
      restart_prob: p,
      ..WalkConfig::default()
    };
    assert_eq!(c.validate(), Err(PropagationError::InvalidRestartProb(p)));
  }
  let nan = WalkConfig {
    restart_prob: f64::NAN,
    ..WalkConfig::default()
  };
  assert!(matches!(
    nan.validate(),
    Err(PropagationError::InvalidRestartProb(_))
  ));
}

#[test]
fn non_positive_budgets_are_rejected() {
  let zero_steps = WalkConfig {
    max_steps: 0,
    ..WalkConfig::default()
  };
  assert_eq!(
    zero_steps.validate(),
    Err(PropagationError::NonPositiveMaxSteps)
  );
  for score in [0.0, -3.0, f64::INFINITY] {
    let c = WalkConfig {
      max_cumulative_score: score,
      ..WalkConfig::default()
    };
    assert_eq!(c.validate(), Err(PropagationError::InvalidMaxScore(score)));
  }
}

#[test]
fn strategy_parses_case_insensitively() {
  assert_eq!(
    "Uniform".parse::<SeedSelectionStrategy>(),
    Ok(SeedSelectionStrategy::Uniform)
  );
  assert_eq!(SeedSelectionStrategy::Uniform.to_string(), "uniform");
}

#[test]
fn unknown_strategy_is_rejected() {
  assert_eq!(
    "weighted".parse::<SeedSelectionStrategy>(),
    Err(PropagationError::UnknownSeedSelectionStrategy(
      "weighted".to_string()
    ))
  );
}

#[test]
fn strategy_deserializes_case_insensitively() {
  for text in [r#""uniform""#, r#""Uniform""#, r#""UNIFORM""#] {
    let s: SeedSelectionStrategy = serde_json::from_str(text).unwrap();
    assert_eq!(s, SeedSelectionStrategy::Uniform);
  }
  assert_eq!(
    serde_json::to_string(&SeedSelectionStrategy::Uniform).unwrap(),
    r#""uniform""#
  );
}

#[test]
fn unknown_strategy_in_json_reports_strategy_error() {
  let err = serde_json::from_str::<SeedSelectionStrategy>(r#""weighted""#).unwrap_err();
  assert!(
    err.to_string().contains("unknown seed selection strategy: weighted"),
    "{err}"
  );
}
