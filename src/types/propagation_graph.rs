//! Attributed graph consumed by the walk engines and produced by the subnetwork builder.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use super::{GraphEdge, GraphNode, Metadata, PropagationError};
use tracing::instrument;

/// Attributed graph, undirected unless `directed` is set.
///
/// Callers own the graph; walks only read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropagationGraph {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub directed: bool,
  /// Graph-level attributes (e.g. `seed_nodes` on a built subnetwork).
  #[serde(default, skip_serializing_if = "Metadata::is_empty")]
  pub attributes: Metadata,
  #[serde(default, with = "node_list")]
  pub nodes: BTreeMap<String, GraphNode>,
  #[serde(default)]
  pub edges: Vec<GraphEdge>,
}

impl PropagationGraph {
  /// Empty undirected graph.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Self::default()
    }
  }

  /// Empty directed graph: walks only follow edges source to target.
  pub fn directed(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      directed: true,
      ..Self::default()
    }
  }

  /// Inserts a node, replacing any node with the same id.
  pub fn add_node(&mut self, node: GraphNode) {
    self.nodes.insert(node.id.clone(), node);
  }

  pub fn add_edge(&mut self, edge: GraphEdge) {
    self.edges.push(edge);
  }

  pub fn contains_node(&self, id: &str) -> bool {
    self.nodes.contains_key(id)
  }

  pub fn node(&self, id: &str) -> Option<&GraphNode> {
    self.nodes.get(id)
  }

  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn edge_count(&self) -> usize {
    self.edges.len()
  }

  /// Checks that every edge endpoint is a node of the graph.
  #[instrument(level = "trace", skip(self), fields(graph = %self.name))]
  pub fn validate(&self) -> Result<(), PropagationError> {
    for e in &self.edges {
      for endpoint in [&e.source, &e.target] {
        if !self.nodes.contains_key(endpoint) {
          return Err(PropagationError::DanglingEdge {
            from: e.source.clone(),
            to: e.target.clone(),
            missing: endpoint.clone(),
          });
        }
      }
    }
    Ok(())
  }

  /// Builds the neighbor index the walk moves over.
  pub fn adjacency(&self) -> Adjacency<'_> {
    Adjacency::build(self)
  }
}

/// Neighbor lists keyed by node id.
///
/// Lists keep first-appearance edge order and hold each neighbor once, so
/// parallel edges do not bias a uniform pick.
#[derive(Debug, Clone)]
pub struct Adjacency<'g> {
  neighbors: HashMap<&'g str, Vec<&'g str>>,
}

impl<'g> Adjacency<'g> {
  fn build(graph: &'g PropagationGraph) -> Self {
    let mut neighbors: HashMap<&'g str, Vec<&'g str>> = HashMap::new();
    let mut seen: HashSet<(&'g str, &'g str)> = HashSet::new();
    let mut link = |from: &'g str, to: &'g str| {
      if seen.insert((from, to)) {
        neighbors.entry(from).or_default().push(to);
      }
    };
    for e in &graph.edges {
      link(e.source.as_str(), e.target.as_str());
      if !graph.directed {
        link(e.target.as_str(), e.source.as_str());
      }
    }
    Self { neighbors }
  }

  /// Nodes reachable in one move from `id`; empty for unknown or isolated nodes.
  pub fn neighbors(&self, id: &str) -> &[&'g str] {
    self.neighbors.get(id).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn degree(&self, id: &str) -> usize {
    self.neighbors(id).len()
  }
}

/// Nodes travel as a JSON list and live in an id-keyed map.
mod node_list {
  use std::collections::BTreeMap;

  use serde::{Deserialize, Deserializer, Serializer};

  use super::GraphNode;

  pub fn serialize<S: Serializer>(
    nodes: &BTreeMap<String, GraphNode>,
    s: S,
  ) -> Result<S::Ok, S::Error> {
    s.collect_seq(nodes.values())
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    d: D,
  ) -> Result<BTreeMap<String, GraphNode>, D::Error> {
    let list = Vec::<GraphNode>::deserialize(d)?;
    Ok(list.into_iter().map(|n| (n.id.clone(), n)).collect())
  }
}
