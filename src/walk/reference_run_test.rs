//! Regression test pinned to the reference dengue propagation run:
//! restart 0.15, score budget 15, step budget 150, revisits allowed.

use crate::test_fixtures::dengue_reference_network;
use crate::types::{ScoreModel, TerminationReason, WalkConfig};
use std::collections::BTreeSet;
use super::WalkEngine;
use super::scripted_rng::ScriptedRng;

fn reference_config() -> WalkConfig {
  WalkConfig {
    restart_prob: 0.15,
    max_cumulative_score: 15.0,
    max_steps: 150,
    allow_revisits: true,
    ..WalkConfig::default()
  }
}

fn visited(result: &crate::types::WalkResult) -> BTreeSet<&str> {
  result.node_weights.keys().map(String::as_str).collect()
}

#[test]
fn fixture_matches_reference_size() {
  let g = dengue_reference_network();
  assert_eq!(g.node_count(), 400);
  assert_eq!(g.edge_count(), 500);
  assert!(g.validate().is_ok());
}

#[test]
fn ns2a_restarts_once_then_dead_ends_after_six_steps() {
  let g = dengue_reference_network();
  let scores = ScoreModel::default();
  let engine = WalkEngine::new(&g, reference_config(), &scores).unwrap();
  // NS2A -> CANX -> (restart) NS2A -> CANX -> SSR1 -> SEC63 -> SRPRB
  let mut rng = ScriptedRng::new(&[0.9, 0.05, 0.5, 0.7, 0.3, 0.8], &[0, 0, 0, 0, 0]);
  let r = engine.walk("NS2A", &mut rng).unwrap();

  assert_eq!(r.walk_stats.steps, 6);
  assert_eq!(r.walk_stats.restarts, 1);
  assert_eq!(r.walk_stats.forced_restarts, 0);
  assert_eq!(r.walk_stats.termination_reason, TerminationReason::DeadEnd);
  assert_eq!(r.weight("NS2A"), Some(2.0));
  assert_eq!(r.weight("CANX"), Some(2.0));
  assert_eq!(
    visited(&r),
    BTreeSet::from(["CANX", "NS2A", "SEC63", "SRPRB", "SSR1"])
  );
  assert!(rng.is_exhausted());
}

#[test]
fn ns3_reaches_a_single_host_neighbor_in_two_steps() {
  let g = dengue_reference_network();
  let scores = ScoreModel::default();
  let engine = WalkEngine::new(&g, reference_config(), &scores).unwrap();
  let mut rng = ScriptedRng::new(&[0.4, 0.6], &[0, 0]);
  let r = engine.walk("NS3", &mut rng).unwrap();

  assert_eq!(r.walk_stats.steps, 2);
  assert_eq!(r.walk_stats.restarts, 0);
  assert_eq!(r.walk_stats.termination_reason, TerminationReason::DeadEnd);

  let adjacency = g.adjacency();
  let discovered_neighbors: Vec<&str> = adjacency
    .neighbors("NS3")
    .iter()
    .copied()
    .filter(|n| r.node_weights.contains_key(*n))
    .collect();
  assert_eq!(discovered_neighbors, vec!["RPLP2"]);
  assert_eq!(g.node("RPLP2").unwrap().name, "RPLP2");
  assert!(rng.is_exhausted());
}

#[test]
fn ns1_dead_ends_after_three_steps() {
  let g = dengue_reference_network();
  let scores = ScoreModel::default();
  let engine = WalkEngine::new(&g, reference_config(), &scores).unwrap();
  let mut rng = ScriptedRng::new(&[0.2, 0.95, 0.16], &[0, 0, 0]);
  let r = engine.walk("NS1", &mut rng).unwrap();

  assert_eq!(r.walk_stats.steps, 3);
  assert_eq!(r.walk_stats.restarts, 0);
  assert_eq!(r.walk_stats.termination_reason, TerminationReason::DeadEnd);
  assert_eq!(
    visited(&r),
    BTreeSet::from(["HNRNPC", "NS1", "RPL18", "SEC61B"])
  );
  assert!(rng.is_exhausted());
}

#[test]
fn seeded_walks_on_reference_network_stop_on_score_or_dead_end() {
  use rand::SeedableRng;
  use rand::rngs::StdRng;

  let g = dengue_reference_network();
  let scores = ScoreModel::default();
  let engine = WalkEngine::new(&g, reference_config(), &scores).unwrap();
  for seed in ["NS1", "NS3", "NS2A"] {
    for rng_seed in 0..20u64 {
      let mut rng = StdRng::seed_from_u64(rng_seed);
      let r = engine.walk(seed, &mut rng).unwrap();
      assert_ne!(
        r.walk_stats.termination_reason,
        TerminationReason::MaxSteps,
        "{seed} with rng seed {rng_seed}"
      );
      // 15 unit charges at most, so at most 14 transitions.
      assert!(r.walk_stats.steps <= 14);
      assert!(r.node_weights.keys().all(|k| !k.starts_with("host_")));
    }
  }
}
