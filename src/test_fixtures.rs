//! Graph fixtures shared by unit tests.

use crate::types::{GraphEdge, GraphNode, PropagationGraph};

/// Undirected graph with `protein` nodes named after their ids.
pub(crate) fn undirected(ids: &[&str], edges: &[(&str, &str)]) -> PropagationGraph {
  let mut g = PropagationGraph::new("fixture");
  fill(&mut g, ids, edges);
  g
}

fn fill(g: &mut PropagationGraph, ids: &[&str], edges: &[(&str, &str)]) {
  for id in ids {
    g.add_node(GraphNode::new(*id, "protein", *id));
  }
  for (a, b) in edges {
    g.add_edge(GraphEdge::new(*a, *b, "interacts-with"));
  }
}

/// Ring of `n` nodes `n0..n{n-1}` plus a chord from every third node across
/// the ring.
pub(crate) fn ring_with_chords(n: usize) -> PropagationGraph {
  let mut g = PropagationGraph::new("ring");
  for i in 0..n {
    g.add_node(GraphNode::new(format!("n{i}"), "protein", format!("P{i}")));
  }
  for i in 0..n {
    g.add_edge(GraphEdge::new(
      format!("n{i}"),
      format!("n{}", (i + 1) % n),
      "binds",
    ));
    if i % 3 == 0 {
      g.add_edge(GraphEdge::new(
        format!("n{i}"),
        format!("n{}", (i + n / 2) % n),
        "binds",
      ));
    }
  }
  g
}

const HOST_COUNT: usize = 387;
const HOST_CHORDS: usize = 102;

/// Directed dengue host-virus network: 400 nodes, 500 edges.
///
/// Three viral proteins lead into short host chains that all end in sink
/// nodes; the remaining host proteins form a ring with chords the viral
/// chains never reach.
pub(crate) fn dengue_reference_network() -> PropagationGraph {
  let mut g = PropagationGraph::directed("dengue reference network");
  for (id, name) in [("NS1", "NS1"), ("NS3", "NS3"), ("NS2A", "NS2A")] {
    g.add_node(
      GraphNode::new(id, "viral", name).with_metadata("viral_protein", serde_json::json!(true)),
    );
  }
  for id in [
    "HNRNPC", "RPL18", "SEC61B", "RPLP2", "CKAP4", "CANX", "SSR1", "DDOST", "SEC63", "SRPRB",
  ] {
    g.add_node(GraphNode::new(id, "protein", id));
  }
  for i in 0..HOST_COUNT {
    g.add_node(GraphNode::new(
      format!("host_{i}"),
      "protein",
      format!("HOST{i}"),
    ));
  }

  let viral_edges = [
    ("NS1", "HNRNPC"),
    ("HNRNPC", "RPL18"),
    ("RPL18", "SEC61B"),
    ("NS3", "RPLP2"),
    ("RPLP2", "CKAP4"),
    ("NS2A", "CANX"),
    ("CANX", "SSR1"),
    ("CANX", "DDOST"),
    ("SSR1", "SEC63"),
    ("SEC63", "SRPRB"),
    ("DDOST", "SEC63"),
  ];
  for (a, b) in viral_edges {
    g.add_edge(GraphEdge::new(a, b, "interacts-with"));
  }
  for i in 0..HOST_COUNT {
    g.add_edge(GraphEdge::new(
      format!("host_{i}"),
      format!("host_{}", (i + 1) % HOST_COUNT),
      "interacts-with",
    ));
  }
  for i in 0..HOST_CHORDS {
    g.add_edge(GraphEdge::new(
      format!("host_{i}"),
      format!("host_{}", (i + 193) % HOST_COUNT),
      "interacts-with",
    ));
  }
  g
}
