//! Annotated subnetwork built from walk weights.
//!
//! The output is a structural copy of the original graph (optionally only the
//! weighted part of it) where weighted nodes carry `propagation_weight`,
//! seeds carry `seed_node`, and the graph lists its seeds in `seed_nodes`.

use crate::types::{GraphNode, PropagationGraph};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{info, instrument};

/// Node attribute holding the accumulated walk weight.
pub const PROPAGATION_WEIGHT_ATTR: &str = "propagation_weight";
/// Node attribute marking seed nodes.
pub const SEED_NODE_ATTR: &str = "seed_node";
/// Graph attribute listing seed node ids.
pub const SEED_NODES_ATTR: &str = "seed_nodes";
/// Graph attribute holding the seed id of a single-seed run.
pub const SEED_ID_ATTR: &str = "seed_id";
/// Graph attribute holding the seed display name of a single-seed run.
pub const SEED_NAME_ATTR: &str = "seed_name";
/// Graph attribute listing `{ "id", "name" }` for every seed of a multi-seed run.
pub const SEED_IDENTITIES_ATTR: &str = "seeds";

/// How many names [`propagation_network_name`] spells out before summarizing.
const NAMED_SEED_LIMIT: usize = 3;

/// Filtering mode and name for [`build_subnetwork`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetworkOptions {
  /// Keep every node and edge instead of only seeds and weighted nodes.
  pub include_all_nodes: bool,
  /// Name of the output graph.
  pub network_name: String,
}

impl Default for SubnetworkOptions {
  fn default() -> Self {
    Self {
      include_all_nodes: false,
      network_name: "Propagation network".to_string(),
    }
  }
}

/// Builder-style front end to [`build_subnetwork`].
#[derive(Debug, Clone, Default)]
pub struct SubnetworkBuilder {
  options: SubnetworkOptions,
}

impl SubnetworkBuilder {
  pub fn new(network_name: impl Into<String>) -> Self {
    Self {
      options: SubnetworkOptions {
        network_name: network_name.into(),
        ..SubnetworkOptions::default()
      },
    }
  }

  pub fn include_all_nodes(mut self, include: bool) -> Self {
    self.options.include_all_nodes = include;
    self
  }

  pub fn build<S: AsRef<str>>(
    &self,
    original: &PropagationGraph,
    node_weights: &BTreeMap<String, f64>,
    seed_ids: &[S],
  ) -> PropagationGraph {
    build_subnetwork(original, node_weights, seed_ids, &self.options)
  }
}

/// Builds the annotated subnetwork. Never fails: ids missing from `original`
/// are skipped, and empty weights give a seeds-only graph.
#[instrument(level = "trace", skip_all, fields(network = %options.network_name, include_all = options.include_all_nodes))]
pub fn build_subnetwork<S: AsRef<str>>(
  original: &PropagationGraph,
  node_weights: &BTreeMap<String, f64>,
  seed_ids: &[S],
  options: &SubnetworkOptions,
) -> PropagationGraph {
  let seeds: BTreeSet<&str> = seed_ids.iter().map(|s| s.as_ref()).collect();
  let keep = |id: &str| {
    options.include_all_nodes || seeds.contains(id) || node_weights.contains_key(id)
  };

  let mut out = PropagationGraph {
    name: options.network_name.clone(),
    directed: original.directed,
    attributes: original.attributes.clone(),
    nodes: BTreeMap::new(),
    edges: Vec::new(),
  };

  for (id, node) in &original.nodes {
    if keep(id.as_str()) {
      let annotated = annotate(node, node_weights.get(id).copied(), seeds.contains(id.as_str()));
      out.nodes.insert(id.clone(), annotated);
    }
  }
  out.edges = original
    .edges
    .iter()
    .filter(|e| out.nodes.contains_key(&e.source) && out.nodes.contains_key(&e.target))
    .cloned()
    .collect();

  let seed_list: Vec<serde_json::Value> = seed_ids
    .iter()
    .map(|s| s.as_ref())
    .filter(|id| original.contains_node(id))
    .map(|id| serde_json::Value::String(id.to_string()))
    .collect();
  out
    .attributes
    .insert(SEED_NODES_ATTR.to_string(), serde_json::Value::Array(seed_list));

  info!(
    nodes = out.node_count(),
    edges = out.edge_count(),
    "built propagation subnetwork"
  );
  out
}

fn annotate(node: &GraphNode, weight: Option<f64>, is_seed: bool) -> GraphNode {
  let mut node = node.clone();
  node.metadata.remove(PROPAGATION_WEIGHT_ATTR);
  node.metadata.remove(SEED_NODE_ATTR);
  if let Some(w) = weight {
    node
      .metadata
      .insert(PROPAGATION_WEIGHT_ATTR.to_string(), serde_json::json!(w));
  }
  if is_seed {
    node
      .metadata
      .insert(SEED_NODE_ATTR.to_string(), serde_json::Value::Bool(true));
  }
  node
}

/// `"Propagation from A"`, or `"Propagation from A, B, C and 2 more"` past three names.
pub fn propagation_network_name<S: AsRef<str>>(seed_names: &[S]) -> String {
  let shown: Vec<&str> = seed_names
    .iter()
    .take(NAMED_SEED_LIMIT)
    .map(|s| s.as_ref())
    .collect();
  let mut name = format!("Propagation from {}", shown.join(", "));
  if seed_names.len() > NAMED_SEED_LIMIT {
    name.push_str(&format!(" and {} more", seed_names.len() - NAMED_SEED_LIMIT));
  }
  name
}
