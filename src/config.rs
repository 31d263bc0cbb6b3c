//! Propagation configuration: serde defaults, JSON file loading, conversion to
//! validated walk options.

use crate::types::{
  DEFAULT_SCORE, PropagationError, ScoreModel, SeedSelectionStrategy, WalkConfig,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::instrument;

/// Every recognized option, as read from a JSON config file.
///
/// Missing keys take the defaults of [`PropagationConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationConfig {
  pub restart_prob: f64,
  #[serde(alias = "max_score")]
  pub max_cumulative_score: f64,
  pub max_steps: usize,
  /// Score per node type; unlisted types score `default_score`.
  pub type_score_dict: HashMap<String, f64>,
  pub default_score: f64,
  pub allow_revisits: bool,
  pub seed_selection_strategy: SeedSelectionStrategy,
  pub include_all_nodes: bool,
}

impl Default for PropagationConfig {
  fn default() -> Self {
    let walk = WalkConfig::default();
    Self {
      restart_prob: walk.restart_prob,
      max_cumulative_score: walk.max_cumulative_score,
      max_steps: walk.max_steps,
      type_score_dict: HashMap::new(),
      default_score: DEFAULT_SCORE,
      allow_revisits: walk.allow_revisits,
      seed_selection_strategy: walk.seed_selection,
      include_all_nodes: false,
    }
  }
}

/// Validated options for one propagation run.
#[derive(Debug, Clone, PartialEq)]
pub struct PropagationOptions {
  pub walk: WalkConfig,
  pub scores: ScoreModel,
  /// Passed to the subnetwork builder.
  pub include_all_nodes: bool,
}

impl Default for PropagationOptions {
  fn default() -> Self {
    Self {
      walk: WalkConfig::default(),
      scores: ScoreModel::default(),
      include_all_nodes: false,
    }
  }
}

impl PropagationConfig {
  /// Reads a config file. Invalid JSON maps to `InvalidData`.
  #[instrument(level = "trace", skip(path))]
  pub fn load(path: &Path) -> Result<Self, std::io::Error> {
    let bytes = std::fs::read(path)?;
    serde_json::from_slice(&bytes)
      .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
  }

  pub fn walk_config(&self) -> WalkConfig {
    WalkConfig {
      restart_prob: self.restart_prob,
      max_cumulative_score: self.max_cumulative_score,
      max_steps: self.max_steps,
      allow_revisits: self.allow_revisits,
      seed_selection: self.seed_selection_strategy,
    }
  }

  pub fn score_model(&self) -> Result<ScoreModel, PropagationError> {
    ScoreModel::new(self.type_score_dict.clone(), self.default_score)
  }

  /// Validates every option and splits them into walk and scoring parts.
  pub fn into_options(self) -> Result<PropagationOptions, PropagationError> {
    let walk = self.walk_config();
    walk.validate()?;
    Ok(PropagationOptions {
      walk,
      scores: self.score_model()?,
      include_all_nodes: self.include_all_nodes,
    })
  }
}
