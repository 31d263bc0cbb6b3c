//! Random walk with restart over a set of seeds.
//!
//! One shared walk rather than one walk per seed: the step and score budgets
//! bound the total work whatever the seed count, and neighborhoods reachable
//! from several seeds accumulate weight from each of them.

use crate::types::{
  PropagationError, PropagationGraph, ScoreModel, SeedSet, WalkConfig, WalkResult, WalkStepEntry,
};
use super::validate::resolve_seeds;
use super::{WalkEngine, WalkRng};
use tracing::{info, instrument};

/// Walk engine whose restarts land on a seed chosen by the configured
/// [`SeedSelectionStrategy`](crate::types::SeedSelectionStrategy).
///
/// The walk starts on the first seed of the set. Weights and counters are one
/// aggregate over all seeds.
#[derive(Debug, Clone)]
pub struct MultiSeedWalkEngine<'g> {
  engine: WalkEngine<'g>,
}

impl<'g> MultiSeedWalkEngine<'g> {
  /// Validates `config` and the graph's edges, then indexes neighbors.
  pub fn new(
    graph: &'g PropagationGraph,
    config: WalkConfig,
    scores: &'g ScoreModel,
  ) -> Result<Self, PropagationError> {
    Ok(Self {
      engine: WalkEngine::new(graph, config, scores)?,
    })
  }

  /// Reuses an engine's neighbor index and parameters.
  pub fn from_engine(engine: WalkEngine<'g>) -> Self {
    Self { engine }
  }

  /// Parameters every walk of this engine runs with.
  pub fn config(&self) -> &WalkConfig {
    self.engine.config()
  }

  #[instrument(level = "trace", skip(self, rng), fields(strategy = %self.config().seed_selection))]
  pub fn walk<R: WalkRng + ?Sized>(
    &self,
    seeds: &SeedSet,
    rng: &mut R,
  ) -> Result<WalkResult, PropagationError> {
    let resolved = resolve_seeds(self.engine.graph(), seeds)?;
    info!(seeds = ?seeds.as_slice(), "multi-seed walk starting");
    Ok(self.engine.run(&resolved, rng, None))
  }

  /// Like [`MultiSeedWalkEngine::walk`], also returning one entry per iteration.
  pub fn walk_traced<R: WalkRng + ?Sized>(
    &self,
    seeds: &SeedSet,
    rng: &mut R,
  ) -> Result<(WalkResult, Vec<WalkStepEntry>), PropagationError> {
    let resolved = resolve_seeds(self.engine.graph(), seeds)?;
    let mut trace = Vec::new();
    let result = self.engine.run(&resolved, rng, Some(&mut trace));
    Ok((result, trace))
  }
}

/// Multi-seed walk over `graph`; validates inputs first.
pub fn multi_seed_random_walk<R: WalkRng + ?Sized>(
  graph: &PropagationGraph,
  seeds: &SeedSet,
  config: &WalkConfig,
  scores: &ScoreModel,
  rng: &mut R,
) -> Result<WalkResult, PropagationError> {
  MultiSeedWalkEngine::new(graph, *config, scores)?.walk(seeds, rng)
}
