//! Boundary checks run before any walk starts.

use crate::types::{PropagationError, PropagationGraph, SeedSet, WalkConfig};
use tracing::instrument;

/// Checks parameters, graph consistency, and that every seed exists.
#[instrument(level = "trace", skip(graph, seeds))]
pub fn validate_walk_inputs(
  graph: &PropagationGraph,
  seeds: &SeedSet,
  config: &WalkConfig,
) -> Result<(), PropagationError> {
  config.validate()?;
  graph.validate()?;
  resolve_seeds(graph, seeds).map(|_| ())
}

/// Maps seed ids onto the graph's own keys so walk state can borrow from the graph.
pub(crate) fn resolve_seeds<'g>(
  graph: &'g PropagationGraph,
  seeds: &SeedSet,
) -> Result<Vec<&'g str>, PropagationError> {
  seeds
    .iter()
    .map(|id| {
      graph
        .nodes
        .get_key_value(id)
        .map(|(key, _)| key.as_str())
        .ok_or_else(|| PropagationError::UnknownSeed(id.to_string()))
    })
    .collect()
}
