//! End-to-end propagation: walk from seeds, then build the annotated subnetwork.

use crate::config::PropagationOptions;
use crate::subnetwork::{
  SEED_ID_ATTR, SEED_IDENTITIES_ATTR, SEED_NAME_ATTR, SubnetworkBuilder, propagation_network_name,
};
use crate::types::{PropagationError, PropagationGraph, SeedSet, WalkResult};
use crate::walk::{MultiSeedWalkEngine, WalkEngine, WalkRng};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

/// Output of one propagation run.
#[derive(Debug, Clone)]
pub struct PropagationRun {
  /// Seed ids, in walk order.
  pub seeds: Vec<String>,
  pub result: WalkResult,
  /// Annotated subnetwork, tagged with the seeds' ids and names.
  pub subnetwork: PropagationGraph,
  /// Wall time of walk plus subnetwork build.
  pub elapsed: Duration,
}

fn seed_name<'a>(graph: &'a PropagationGraph, id: &'a str) -> &'a str {
  graph.node(id).map(|n| n.display_name()).unwrap_or(id)
}

/// Single-seed walk plus a subnetwork named `"Propagation from <seed name>"`.
#[instrument(level = "trace", skip(graph, options, rng), fields(graph = %graph.name))]
pub fn propagate_from_seed<R: WalkRng + ?Sized>(
  graph: &PropagationGraph,
  seed: &str,
  options: &PropagationOptions,
  rng: &mut R,
) -> Result<PropagationRun, PropagationError> {
  let start = Instant::now();
  let engine = WalkEngine::new(graph, options.walk, &options.scores)?;
  let result = engine.walk(seed, rng)?;
  let name = seed_name(graph, seed);
  let mut subnetwork = SubnetworkBuilder::new(format!("Propagation from {name}"))
    .include_all_nodes(options.include_all_nodes)
    .build(graph, &result.node_weights, &[seed]);
  subnetwork
    .attributes
    .insert(SEED_ID_ATTR.to_string(), serde_json::json!(seed));
  subnetwork
    .attributes
    .insert(SEED_NAME_ATTR.to_string(), serde_json::json!(name));
  let elapsed = start.elapsed();
  info!(
    seed,
    visited = result.visited_count(),
    elapsed_ms = elapsed.as_millis() as u64,
    "propagation complete"
  );
  Ok(PropagationRun {
    seeds: vec![seed.to_string()],
    result,
    subnetwork,
    elapsed,
  })
}

/// One shared multi-seed walk plus a subnetwork named after its seeds.
#[instrument(level = "trace", skip(graph, seeds, options, rng), fields(graph = %graph.name, seeds = seeds.len()))]
pub fn propagate_from_seeds<R: WalkRng + ?Sized>(
  graph: &PropagationGraph,
  seeds: &SeedSet,
  options: &PropagationOptions,
  rng: &mut R,
) -> Result<PropagationRun, PropagationError> {
  let start = Instant::now();
  let engine = MultiSeedWalkEngine::new(graph, options.walk, &options.scores)?;
  let result = engine.walk(seeds, rng)?;
  let names: Vec<&str> = seeds.iter().map(|id| seed_name(graph, id)).collect();
  let mut subnetwork = SubnetworkBuilder::new(propagation_network_name(&names))
    .include_all_nodes(options.include_all_nodes)
    .build(graph, &result.node_weights, seeds.as_slice());
  let identities: Vec<serde_json::Value> = seeds
    .iter()
    .zip(&names)
    .map(|(id, name)| serde_json::json!({ "id": id, "name": name }))
    .collect();
  subnetwork.attributes.insert(
    SEED_IDENTITIES_ATTR.to_string(),
    serde_json::Value::Array(identities),
  );
  let elapsed = start.elapsed();
  info!(
    visited = result.visited_count(),
    elapsed_ms = elapsed.as_millis() as u64,
    "multi-seed propagation complete"
  );
  Ok(PropagationRun {
    seeds: seeds.as_slice().to_vec(),
    result,
    subnetwork,
    elapsed,
  })
}

/// Runs one independent walk per seed on the blocking pool.
///
/// Seed `i` gets `StdRng::seed_from_u64(rng_seed + i)` when `rng_seed` is set,
/// an entropy-seeded rng otherwise. Results come back in seed order; a failed
/// seed does not stop the others.
pub async fn propagate_each_seed(
  graph: Arc<PropagationGraph>,
  seeds: Vec<String>,
  options: Arc<PropagationOptions>,
  rng_seed: Option<u64>,
) -> Vec<(String, Result<PropagationRun, PropagationError>)> {
  let handles: Vec<_> = seeds
    .into_iter()
    .enumerate()
    .map(|(i, seed)| {
      let graph = Arc::clone(&graph);
      let options = Arc::clone(&options);
      let task_seed = seed.clone();
      let handle = tokio::task::spawn_blocking(move || {
        let mut rng = match rng_seed {
          Some(base) => StdRng::seed_from_u64(base.wrapping_add(i as u64)),
          None => StdRng::from_entropy(),
        };
        propagate_from_seed(&graph, &task_seed, &options, &mut rng)
      });
      (seed, handle)
    })
    .collect();

  let mut runs = Vec::with_capacity(handles.len());
  for (seed, handle) in handles {
    let outcome = match handle.await {
      Ok(r) => r,
      Err(e) => Err(PropagationError::WalkTaskFailed {
        seed: seed.clone(),
        reason: e.to_string(),
      }),
    };
    if let Err(e) = &outcome {
      warn!(seed = %seed, error = %e, "seed propagation failed");
    }
    runs.push((seed, outcome));
  }
  runs
}
