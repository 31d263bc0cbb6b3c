//! Bounded random walk with restart from a single seed.
//!
//! Each iteration charges the current node's score, checks the score budget,
//! the step budget and whether the node has any way forward, then either
//! restarts (probability `restart_prob`) or moves to a uniformly chosen
//! neighbor. With revisits disallowed and every neighbor already visited the
//! walk is forced back to a seed instead of blocking.

use crate::types::{
  Adjacency, PropagationError, PropagationGraph, ScoreModel, SeedSet, TerminationReason,
  WalkAction, WalkConfig, WalkResult, WalkStepEntry,
};
use super::WalkRng;
use super::select_neighbor::{select_neighbor, select_restart_seed};
use super::validate::resolve_seeds;
use super::walk_state::{Transition, WalkState};
use tracing::{debug, info, instrument, trace};

/// Runs walks over one graph with fixed parameters and score table.
///
/// Holds no per-walk state; every call to [`WalkEngine::walk`] starts fresh,
/// so one engine can serve any number of walks.
#[derive(Debug, Clone)]
pub struct WalkEngine<'g> {
  graph: &'g PropagationGraph,
  adjacency: Adjacency<'g>,
  config: WalkConfig,
  scores: &'g ScoreModel,
}

impl<'g> WalkEngine<'g> {
  /// Validates `config` and the graph's edges, then indexes neighbors.
  pub fn new(
    graph: &'g PropagationGraph,
    config: WalkConfig,
    scores: &'g ScoreModel,
  ) -> Result<Self, PropagationError> {
    config.validate()?;
    graph.validate()?;
    Ok(Self {
      graph,
      adjacency: graph.adjacency(),
      config,
      scores,
    })
  }

  /// Parameters every walk of this engine runs with.
  pub fn config(&self) -> &WalkConfig {
    &self.config
  }

  /// Graph the engine walks over.
  pub fn graph(&self) -> &'g PropagationGraph {
    self.graph
  }

  /// Walks from `seed` until a budget is spent or the walk is stuck.
  pub fn walk<R: WalkRng + ?Sized>(
    &self,
    seed: &str,
    rng: &mut R,
  ) -> Result<WalkResult, PropagationError> {
    let seeds = resolve_seeds(self.graph, &SeedSet::single(seed))?;
    Ok(self.run(&seeds, rng, None))
  }

  /// Like [`WalkEngine::walk`], also returning one entry per iteration.
  pub fn walk_traced<R: WalkRng + ?Sized>(
    &self,
    seed: &str,
    rng: &mut R,
  ) -> Result<(WalkResult, Vec<WalkStepEntry>), PropagationError> {
    let seeds = resolve_seeds(self.graph, &SeedSet::single(seed))?;
    let mut trace = Vec::new();
    let result = self.run(&seeds, rng, Some(&mut trace));
    Ok((result, trace))
  }

  /// Walk loop shared by single- and multi-seed walks; starts on `seeds[0]`.
  #[instrument(level = "trace", skip(self, seeds, rng, trace), fields(seeds = seeds.len()))]
  pub(crate) fn run<R: WalkRng + ?Sized>(
    &self,
    seeds: &[&'g str],
    rng: &mut R,
    mut trace: Option<&mut Vec<WalkStepEntry>>,
  ) -> WalkResult {
    let mut state = WalkState::new(seeds);
    loop {
      let score = self.node_score(state.current);
      state.charge(score, !self.config.allow_revisits);
      let iteration = state.steps + 1;
      trace!(
        iteration,
        node = state.current,
        score,
        cumulative = state.cumulative_score,
        "charged node"
      );

      let next = self.next_transition(&state, seeds, rng);
      if let Some(log) = trace.as_deref_mut() {
        let action = match next {
          Ok(Transition::Move(to)) => WalkAction::Move { to: to.to_string() },
          Ok(Transition::Restart(to)) => WalkAction::Restart { to: to.to_string() },
          Ok(Transition::ForcedRestart(to)) => WalkAction::ForcedRestart { to: to.to_string() },
          Err(reason) => WalkAction::Terminate { reason },
        };
        log.push(WalkStepEntry {
          iteration,
          node_id: state.current.to_string(),
          score,
          cumulative_score: state.cumulative_score,
          action,
        });
      }

      match next {
        Ok(transition) => {
          if !matches!(transition, Transition::Move(_)) {
            debug!(
              from = state.current,
              to = transition.target(),
              forced = matches!(transition, Transition::ForcedRestart(_)),
              "restart"
            );
          }
          state.advance(transition);
        }
        Err(reason) => {
          info!(
            steps = state.steps,
            restarts = state.restarts,
            forced_restarts = state.forced_restarts,
            visited = state.node_weights.len(),
            reason = %reason,
            "walk complete"
          );
          return state.into_result(reason);
        }
      }
    }
  }

  fn node_score(&self, id: &str) -> f64 {
    self
      .graph
      .node(id)
      .map(|n| self.scores.score(&n.node_type))
      .unwrap_or_else(|| self.scores.default_score())
  }

  /// Budget checks first, then the dead-end check, then the restart draw and
  /// neighbor pick.
  fn next_transition<R: WalkRng + ?Sized>(
    &self,
    state: &WalkState<'g>,
    seeds: &[&'g str],
    rng: &mut R,
  ) -> Result<Transition<'g>, TerminationReason> {
    if state.cumulative_score >= self.config.max_cumulative_score {
      return Err(TerminationReason::MaxScore);
    }
    if state.steps >= self.config.max_steps {
      return Err(TerminationReason::MaxSteps);
    }
    let neighbors = self.adjacency.neighbors(state.current);
    if neighbors.is_empty() {
      return Err(TerminationReason::DeadEnd);
    }
    if rng.next_unit() < self.config.restart_prob {
      let to = select_restart_seed(seeds, self.config.seed_selection, rng);
      return Ok(Transition::Restart(to));
    }
    match select_neighbor(neighbors, &state.visited, self.config.allow_revisits, rng) {
      Some(to) => Ok(Transition::Move(to)),
      None => Ok(Transition::ForcedRestart(select_restart_seed(
        seeds,
        self.config.seed_selection,
        rng,
      ))),
    }
  }
}

/// Single-seed walk over `graph`; validates inputs first.
pub fn random_walk_with_restart<R: WalkRng + ?Sized>(
  graph: &PropagationGraph,
  seed: &str,
  config: &WalkConfig,
  scores: &ScoreModel,
  rng: &mut R,
) -> Result<WalkResult, PropagationError> {
  WalkEngine::new(graph, *config, scores)?.walk(seed, rng)
}
