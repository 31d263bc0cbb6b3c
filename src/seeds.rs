//! Seed discovery: finds viral/source nodes by their attributes.

use crate::types::{GraphNode, PropagationError, PropagationGraph};
use serde::Serialize;
use tracing::{info, warn};

/// Metadata flag marking a viral protein.
pub const VIRAL_PROTEIN_ATTR: &str = "viral_protein";
/// Node type marking a viral protein.
pub const VIRAL_TYPE: &str = "viral";

/// A node selected as a walk seed, with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedNode {
  pub id: String,
  pub name: String,
}

impl From<&GraphNode> for SeedNode {
  fn from(node: &GraphNode) -> Self {
    Self {
      id: node.id.clone(),
      name: node.display_name().to_string(),
    }
  }
}

fn is_seed_marked(node: &GraphNode) -> bool {
  node.node_type == VIRAL_TYPE
    || node
      .metadata
      .get(VIRAL_PROTEIN_ATTR)
      .and_then(|v| v.as_bool())
      .unwrap_or(false)
}

/// Nodes typed `viral` or flagged `viral_protein: true`, ordered by id.
pub fn identify_seed_nodes(graph: &PropagationGraph) -> Vec<SeedNode> {
  let found: Vec<SeedNode> = graph
    .nodes
    .values()
    .filter(|n| is_seed_marked(n))
    .map(SeedNode::from)
    .collect();
  info!(count = found.len(), "identified seed nodes");
  found
}

/// Keeps the seeds whose id or name is in `requested`.
pub fn filter_seeds(
  found: Vec<SeedNode>,
  requested: &[String],
) -> Result<Vec<SeedNode>, PropagationError> {
  let kept: Vec<SeedNode> = found
    .into_iter()
    .filter(|s| requested.iter().any(|r| *r == s.id || *r == s.name))
    .collect();
  if kept.is_empty() {
    warn!(requested = ?requested, "no requested seed matched");
    return Err(PropagationError::NoMatchingSeeds(requested.to_vec()));
  }
  Ok(kept)
}

/// Any node of `graph` whose id or display name is in `requested`, ordered by id.
pub fn select_seed_nodes(
  graph: &PropagationGraph,
  requested: &[String],
) -> Result<Vec<SeedNode>, PropagationError> {
  filter_seeds(graph.nodes.values().map(SeedNode::from).collect(), requested)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_fixtures::dengue_reference_network;

  #[test]
  fn finds_viral_proteins_in_reference_network() {
    let g = dengue_reference_network();
    let seeds = identify_seed_nodes(&g);
    let ids: Vec<&str> = seeds.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["NS1", "NS2A", "NS3"]);
  }

  #[test]
  fn flag_or_type_marks_a_seed() {
    let mut g = PropagationGraph::new("g");
    g.add_node(GraphNode::new("1", "protein", "E").with_metadata(
      VIRAL_PROTEIN_ATTR,
      serde_json::json!(true),
    ));
    g.add_node(GraphNode::new("2", "viral", "prM"));
    g.add_node(
      GraphNode::new("3", "protein", "CD44")
        .with_metadata(VIRAL_PROTEIN_ATTR, serde_json::json!(false)),
    );
    g.add_node(
      GraphNode::new("4", "viral", "").with_metadata("GeneSymbol", serde_json::json!("NS4B")),
    );
    let seeds = identify_seed_nodes(&g);
    assert_eq!(
      seeds,
      vec![
        SeedNode {
          id: "1".to_string(),
          name: "E".to_string()
        },
        SeedNode {
          id: "2".to_string(),
          name: "prM".to_string()
        },
        SeedNode {
          id: "4".to_string(),
          name: "NS4B".to_string()
        },
      ]
    );
  }

  #[test]
  fn filter_matches_id_or_name() {
    let found = vec![
      SeedNode {
        id: "n1".to_string(),
        name: "NS1".to_string(),
      },
      SeedNode {
        id: "n3".to_string(),
        name: "NS3".to_string(),
      },
      SeedNode {
        id: "n5".to_string(),
        name: "NS5".to_string(),
      },
    ];
    let kept = filter_seeds(found, &["NS3".to_string(), "n5".to_string()]).unwrap();
    let ids: Vec<&str> = kept.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["n3", "n5"]);
  }

  #[test]
  fn filter_without_match_fails() {
    let found = vec![SeedNode {
      id: "n1".to_string(),
      name: "NS1".to_string(),
    }];
    let err = filter_seeds(found, &["NS2B".to_string()]).unwrap_err();
    assert_eq!(err, PropagationError::NoMatchingSeeds(vec!["NS2B".to_string()]));
  }

  #[test]
  fn select_reaches_any_node_by_id_or_name() {
    let g = dengue_reference_network();
    let picked =
      select_seed_nodes(&g, &["HOST5".to_string(), "CANX".to_string()]).unwrap();
    let ids: Vec<&str> = picked.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["CANX", "host_5"]);
    assert!(select_seed_nodes(&g, &["nothing".to_string()]).is_err());
  }
}
