//! An edge of an attributed propagation graph.

use serde::{Deserialize, Serialize};
use super::Metadata;

/// An edge of an attributed propagation graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
  pub source: String,
  pub target: String,
  #[serde(default)]
  pub interaction: String,
  #[serde(default, skip_serializing_if = "Metadata::is_empty")]
  pub metadata: Metadata,
}

impl GraphEdge {
  pub fn new(
    source: impl Into<String>,
    target: impl Into<String>,
    interaction: impl Into<String>,
  ) -> Self {
    Self {
      source: source.into(),
      target: target.into(),
      interaction: interaction.into(),
      metadata: Metadata::new(),
    }
  }
}
