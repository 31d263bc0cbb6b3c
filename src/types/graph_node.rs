//! A node of an attributed propagation graph.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form attributes the walk never interprets.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// A node of an attributed propagation graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
  pub id: String,
  /// Type label used for scoring (e.g. `protein`, `viral`).
  #[serde(rename = "type", default)]
  pub node_type: String,
  #[serde(default)]
  pub name: String,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub metadata: Metadata,
}

impl GraphNode {
  pub fn new(id: impl Into<String>, node_type: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      node_type: node_type.into(),
      name: name.into(),
      metadata: Metadata::new(),
    }
  }

  /// Adds one metadata entry, builder style.
  pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
    self.metadata.insert(key.into(), value);
    self
  }

  /// Name for display: `name`, else a `GeneSymbol` metadata string, else the id.
  pub fn display_name(&self) -> &str {
    if !self.name.is_empty() {
      return &self.name;
    }
    self
      .metadata
      .get("GeneSymbol")
      .and_then(|v| v.as_str())
      .filter(|s| !s.is_empty())
      .unwrap_or(&self.id)
  }
}
